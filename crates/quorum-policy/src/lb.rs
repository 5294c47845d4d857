//! Load-balancing policy implementations and their construction table.

use std::any::Any;
use std::fmt;
use std::time::Duration;

use crate::error::ResolveError;
use crate::registry::{Constructor, PolicySpec, Registry};
use crate::resolver::qualified;
use crate::value::{millis, Kind, Value};

/// Strategy deciding which hosts a driver session talks to, and in what
/// order. Implementations here are configuration holders; query planning
/// belongs to the driver and is out of scope.
pub trait LoadBalancingPolicy: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

type LbValue = Value<dyn LoadBalancingPolicy>;

/// Cycles through all known hosts.
#[derive(Debug, Default)]
pub struct RoundRobinPolicy;

impl RoundRobinPolicy {
    pub fn new() -> Self {
        RoundRobinPolicy
    }
}

impl LoadBalancingPolicy for RoundRobinPolicy {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Round-robin restricted to the local datacenter, with a configurable
/// number of remote hosts kept as fallback.
#[derive(Debug, Default)]
pub struct DcAwareRoundRobinPolicy {
    local_dc: Option<String>,
    used_hosts_per_remote_dc: i32,
}

impl DcAwareRoundRobinPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_local_dc(local_dc: impl Into<String>) -> Self {
        Self {
            local_dc: Some(local_dc.into()),
            used_hosts_per_remote_dc: 0,
        }
    }

    pub fn with_used_hosts(local_dc: impl Into<String>, used_hosts_per_remote_dc: i32) -> Self {
        Self {
            local_dc: Some(local_dc.into()),
            used_hosts_per_remote_dc,
        }
    }

    pub fn local_dc(&self) -> Option<&str> {
        self.local_dc.as_deref()
    }

    pub fn used_hosts_per_remote_dc(&self) -> i32 {
        self.used_hosts_per_remote_dc
    }
}

impl LoadBalancingPolicy for DcAwareRoundRobinPolicy {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Wraps a child policy and moves replica hosts to the front of its plans.
#[derive(Debug)]
pub struct TokenAwarePolicy {
    child: Box<dyn LoadBalancingPolicy>,
}

impl TokenAwarePolicy {
    pub fn new(child: Box<dyn LoadBalancingPolicy>) -> Self {
        Self { child }
    }

    pub fn child(&self) -> &dyn LoadBalancingPolicy {
        self.child.as_ref()
    }
}

impl LoadBalancingPolicy for TokenAwarePolicy {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Wraps a child policy and demotes hosts whose recent latency exceeds a
/// multiple of the fastest host's.
#[derive(Debug)]
pub struct LatencyAwarePolicy {
    child: Box<dyn LoadBalancingPolicy>,
    exclusion_threshold: f64,
    scale: Duration,
    retry_period: Duration,
    update_rate: Duration,
    minimum_measurements: i32,
}

impl LatencyAwarePolicy {
    pub fn builder(child: Box<dyn LoadBalancingPolicy>) -> LatencyAwarePolicyBuilder {
        LatencyAwarePolicyBuilder {
            child,
            exclusion_threshold: 2.0,
            scale: Duration::from_millis(100),
            retry_period: Duration::from_secs(10),
            update_rate: Duration::from_millis(100),
            minimum_measurements: 50,
        }
    }

    pub fn child(&self) -> &dyn LoadBalancingPolicy {
        self.child.as_ref()
    }

    pub fn exclusion_threshold(&self) -> f64 {
        self.exclusion_threshold
    }

    pub fn scale(&self) -> Duration {
        self.scale
    }

    pub fn retry_period(&self) -> Duration {
        self.retry_period
    }

    pub fn update_rate(&self) -> Duration {
        self.update_rate
    }

    pub fn minimum_measurements(&self) -> i32 {
        self.minimum_measurements
    }
}

impl LoadBalancingPolicy for LatencyAwarePolicy {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Builder for [`LatencyAwarePolicy`]. Call order does not affect the
/// result; `build` consumes whatever was applied over the defaults.
pub struct LatencyAwarePolicyBuilder {
    child: Box<dyn LoadBalancingPolicy>,
    exclusion_threshold: f64,
    scale: Duration,
    retry_period: Duration,
    update_rate: Duration,
    minimum_measurements: i32,
}

impl LatencyAwarePolicyBuilder {
    pub fn with_exclusion_threshold(mut self, exclusion_threshold: f64) -> Self {
        self.exclusion_threshold = exclusion_threshold;
        self
    }

    pub fn with_scale(mut self, scale: Duration) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_retry_period(mut self, retry_period: Duration) -> Self {
        self.retry_period = retry_period;
        self
    }

    pub fn with_update_rate(mut self, update_rate: Duration) -> Self {
        self.update_rate = update_rate;
        self
    }

    pub fn with_minimum_measurements(mut self, minimum_measurements: i32) -> Self {
        self.minimum_measurements = minimum_measurements;
        self
    }

    pub fn build(self) -> LatencyAwarePolicy {
        LatencyAwarePolicy {
            child: self.child,
            exclusion_threshold: self.exclusion_threshold,
            scale: self.scale,
            retry_period: self.retry_period,
            update_rate: self.update_rate,
            minimum_measurements: self.minimum_measurements,
        }
    }
}

// ======= construction table =======

pub(crate) fn registry() -> Registry<dyn LoadBalancingPolicy> {
    let mut reg = Registry::new();
    reg.register(
        qualified("RoundRobinPolicy"),
        PolicySpec::Constructors(vec![Constructor {
            params: vec![],
            build: |_| Box::new(RoundRobinPolicy::new()) as Box<dyn LoadBalancingPolicy>,
        }]),
    );
    reg.register(
        qualified("DCAwareRoundRobinPolicy"),
        PolicySpec::Constructors(vec![
            Constructor {
                params: vec![],
                build: |_| Box::new(DcAwareRoundRobinPolicy::new()) as Box<dyn LoadBalancingPolicy>,
            },
            Constructor {
                params: vec![Kind::Str],
                build: |mut a| {
                    Box::new(DcAwareRoundRobinPolicy::with_local_dc(a.remove(0).into_str()))
                        as Box<dyn LoadBalancingPolicy>
                },
            },
            Constructor {
                params: vec![Kind::Str, Kind::Int],
                build: |mut a| {
                    let dc = a.remove(0).into_str();
                    let used_hosts = a.remove(0).into_int();
                    Box::new(DcAwareRoundRobinPolicy::with_used_hosts(dc, used_hosts))
                        as Box<dyn LoadBalancingPolicy>
                },
            },
        ]),
    );
    reg.register(
        qualified("TokenAwarePolicy"),
        PolicySpec::Constructors(vec![Constructor {
            params: vec![Kind::ChildPolicy],
            build: |mut a| {
                Box::new(TokenAwarePolicy::new(a.remove(0).into_child()))
                    as Box<dyn LoadBalancingPolicy>
            },
        }]),
    );
    reg.register(
        qualified("LatencyAwarePolicy"),
        PolicySpec::FixedPositional(build_latency_aware),
    );
    reg
}

const LATENCY_AWARE_PARAMS: [Kind; 6] = [
    Kind::ChildPolicy,
    Kind::Double,
    Kind::Long,
    Kind::Long,
    Kind::Long,
    Kind::Int,
];

/// Six mandatory positions: child, exclusion threshold, scale (ms), retry
/// period (ms), update rate (ms), minimum measurements.
fn build_latency_aware(
    name: &str,
    args: Vec<LbValue>,
) -> Result<Box<dyn LoadBalancingPolicy>, ResolveError> {
    let no_match = |args: &[LbValue]| ResolveError::NoMatchingConstructor {
        name: name.to_string(),
        signature: args.iter().map(Value::kind).collect(),
    };
    let args = match <[LbValue; 6]>::try_from(args) {
        Ok(a) => a,
        Err(args) => return Err(no_match(&args)),
    };
    if args.iter().map(Value::kind).ne(LATENCY_AWARE_PARAMS) {
        return Err(no_match(&args));
    }

    let [child, threshold, scale, retry_period, update_rate, minimum] = args;
    let policy = LatencyAwarePolicy::builder(child.into_child())
        .with_exclusion_threshold(threshold.into_double())
        .with_scale(millis(scale.into_long()))
        .with_retry_period(millis(retry_period.into_long()))
        .with_update_rate(millis(update_rate.into_long()))
        .with_minimum_measurements(minimum.into_int())
        .build();
    Ok(Box::new(policy))
}
