//! Reconnection policy implementations and their construction table.

use std::any::Any;
use std::fmt;
use std::time::Duration;

use crate::registry::{Constructor, PolicySpec, Registry};
use crate::resolver::qualified;
use crate::value::{millis, Kind};

/// Strategy scheduling reconnection attempts to a host that went down.
pub trait ReconnectionPolicy: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// Retries at a fixed interval.
#[derive(Debug)]
pub struct ConstantReconnectionPolicy {
    delay: Duration,
}

impl ConstantReconnectionPolicy {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl ReconnectionPolicy for ConstantReconnectionPolicy {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Doubles the delay after each failed attempt, capped at `max_delay`.
#[derive(Debug)]
pub struct ExponentialReconnectionPolicy {
    base_delay: Duration,
    max_delay: Duration,
}

impl ExponentialReconnectionPolicy {
    pub fn new(base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            base_delay,
            max_delay,
        }
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }
}

impl ReconnectionPolicy for ExponentialReconnectionPolicy {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ======= construction table =======

pub(crate) fn registry() -> Registry<dyn ReconnectionPolicy> {
    let mut reg = Registry::new();
    reg.register(
        qualified("ConstantReconnectionPolicy"),
        PolicySpec::Constructors(vec![Constructor {
            params: vec![Kind::Long],
            build: |mut a| {
                Box::new(ConstantReconnectionPolicy::new(millis(
                    a.remove(0).into_long(),
                ))) as Box<dyn ReconnectionPolicy>
            },
        }]),
    );
    reg.register(
        qualified("ExponentialReconnectionPolicy"),
        PolicySpec::Constructors(vec![Constructor {
            params: vec![Kind::Long, Kind::Long],
            build: |mut a| {
                let base_delay = millis(a.remove(0).into_long());
                let max_delay = millis(a.remove(0).into_long());
                Box::new(ExponentialReconnectionPolicy::new(base_delay, max_delay))
                    as Box<dyn ReconnectionPolicy>
            },
        }]),
    );
    reg
}
