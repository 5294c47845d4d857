use quorum_ast::ast::{Arg, CallExpr};
use quorum_parse::{parse_expr, ParseError};

use crate::error::{ResolveError, ResolveResult};
use crate::lb::{self, LoadBalancingPolicy};
use crate::reconnection::{self, ReconnectionPolicy};
use crate::registry::{Registry, SingletonRegistry};
use crate::retry::{self, RetryPolicy};
use crate::value::Value;

/// Package prefix applied to names that are not already qualified. Kept
/// from the driver configuration dialect so existing strings resolve
/// unchanged.
pub const DEFAULT_POLICY_NAMESPACE: &str = "com.datastax.driver.core.policies";

pub(crate) fn qualified(name: &str) -> String {
    format!("{}.{}", DEFAULT_POLICY_NAMESPACE, name)
}

fn qualify(namespace: &str, name: &str) -> String {
    if name.contains('.') {
        name.to_string()
    } else {
        format!("{}.{}", namespace, name)
    }
}

/// Resolves call-expression strings into constructed policy objects for one
/// family. Resolution is pure per input string and the registry is
/// read-only, so one resolver may serve concurrent callers without locking.
pub struct PolicyResolver<P: ?Sized> {
    namespace: &'static str,
    registry: Registry<P>,
}

pub type LoadBalancingPolicyResolver = PolicyResolver<dyn LoadBalancingPolicy>;
pub type ReconnectionPolicyResolver = PolicyResolver<dyn ReconnectionPolicy>;

impl PolicyResolver<dyn LoadBalancingPolicy> {
    pub fn new() -> Self {
        Self::with_registry(DEFAULT_POLICY_NAMESPACE, lb::registry())
    }
}

impl Default for PolicyResolver<dyn LoadBalancingPolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyResolver<dyn ReconnectionPolicy> {
    pub fn new() -> Self {
        Self::with_registry(DEFAULT_POLICY_NAMESPACE, reconnection::registry())
    }
}

impl Default for PolicyResolver<dyn ReconnectionPolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized> PolicyResolver<P> {
    /// Custom namespace and registry, for callers extending the catalog.
    pub fn with_registry(namespace: &'static str, registry: Registry<P>) -> Self {
        Self {
            namespace,
            registry,
        }
    }

    pub fn resolve(&self, input: &str) -> ResolveResult<Box<P>> {
        let expr = parse_expr(input)?;
        self.build(&expr)
    }

    /// Depth-first reduction: children first, then the node itself. Any
    /// failure aborts the whole resolution; partial graphs never escape.
    fn build(&self, expr: &CallExpr) -> ResolveResult<Box<P>> {
        let mut values = Vec::with_capacity(expr.args.len());
        for arg in &expr.args {
            values.push(self.lower(arg)?);
        }
        self.registry
            .construct(&qualify(self.namespace, &expr.name.text), values)
    }

    fn lower(&self, arg: &Arg) -> ResolveResult<Value<P>> {
        Ok(match arg {
            Arg::Call(child) => Value::Child(self.build(child)?),
            Arg::Str(s, _) => Value::Str(s.clone()),
            Arg::Float(v, _) => Value::Float(*v),
            Arg::Double(v, _) => Value::Double(*v),
            Arg::Long(v, _) => Value::Long(*v),
            Arg::Int(v, _) => Value::Int(*v),
        })
    }
}

/// Retry policies resolve by singleton lookup only: a bare name, optionally
/// dotted, optionally written `Name()`. Arguments are rejected; the
/// configuration dialect never grew constructor syntax for this family.
pub struct RetryPolicyResolver {
    namespace: &'static str,
    registry: SingletonRegistry<dyn RetryPolicy>,
}

impl RetryPolicyResolver {
    pub fn new() -> Self {
        Self {
            namespace: DEFAULT_POLICY_NAMESPACE,
            registry: retry::registry(),
        }
    }

    pub fn resolve(&self, input: &str) -> ResolveResult<&'static dyn RetryPolicy> {
        let expr = parse_expr(input)?;
        if !expr.args.is_empty() {
            return Err(ResolveError::Parse(ParseError::Malformed {
                msg: "retry policies take no arguments".to_string(),
                span: expr.span,
            }));
        }
        self.registry
            .lookup(&qualify(self.namespace, &expr.name.text))
    }
}

impl Default for RetryPolicyResolver {
    fn default() -> Self {
        Self::new()
    }
}
