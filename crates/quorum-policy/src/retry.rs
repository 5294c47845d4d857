//! Retry policy implementations and their singleton table.
//!
//! The stock retry policies are stateless, so the configuration dialect
//! resolves them to process-wide shared instances instead of constructing
//! new objects.

use std::any::Any;
use std::fmt;

use crate::registry::SingletonRegistry;
use crate::resolver::qualified;

/// Strategy deciding whether a failed request is retried, and at what
/// consistency level.
pub trait RetryPolicy: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// Retries on timeouts only when enough replicas had responded to make a
/// retry plausibly succeed.
#[derive(Debug)]
pub struct DefaultRetryPolicy;

impl DefaultRetryPolicy {
    pub fn instance() -> &'static Self {
        static INSTANCE: DefaultRetryPolicy = DefaultRetryPolicy;
        &INSTANCE
    }
}

impl RetryPolicy for DefaultRetryPolicy {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Retries at a lower consistency level when the requested one cannot be
/// met by the live replicas.
#[derive(Debug)]
pub struct DowngradingConsistencyRetryPolicy;

impl DowngradingConsistencyRetryPolicy {
    pub fn instance() -> &'static Self {
        static INSTANCE: DowngradingConsistencyRetryPolicy = DowngradingConsistencyRetryPolicy;
        &INSTANCE
    }
}

impl RetryPolicy for DowngradingConsistencyRetryPolicy {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Never retries; every failure surfaces to the caller.
#[derive(Debug)]
pub struct FallthroughRetryPolicy;

impl FallthroughRetryPolicy {
    pub fn instance() -> &'static Self {
        static INSTANCE: FallthroughRetryPolicy = FallthroughRetryPolicy;
        &INSTANCE
    }
}

impl RetryPolicy for FallthroughRetryPolicy {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Decorates another retry policy and logs its decisions. Built only
/// programmatically around a child; it has no shared instance and so cannot
/// be named in configuration.
#[derive(Debug)]
pub struct LoggingRetryPolicy {
    child: &'static dyn RetryPolicy,
}

impl LoggingRetryPolicy {
    pub fn new(child: &'static dyn RetryPolicy) -> Self {
        Self { child }
    }

    pub fn child(&self) -> &dyn RetryPolicy {
        self.child
    }
}

impl RetryPolicy for LoggingRetryPolicy {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ======= singleton table =======

pub(crate) fn registry() -> SingletonRegistry<dyn RetryPolicy> {
    let mut reg = SingletonRegistry::new();
    reg.register(
        qualified("DefaultRetryPolicy"),
        Some(DefaultRetryPolicy::instance() as &dyn RetryPolicy),
    );
    reg.register(
        qualified("DowngradingConsistencyRetryPolicy"),
        Some(DowngradingConsistencyRetryPolicy::instance() as &dyn RetryPolicy),
    );
    reg.register(
        qualified("FallthroughRetryPolicy"),
        Some(FallthroughRetryPolicy::instance() as &dyn RetryPolicy),
    );
    // known type, no shared instance
    reg.register(qualified("LoggingRetryPolicy"), None);
    reg
}
