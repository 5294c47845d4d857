#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![forbid(unsafe_code)]

mod error;
pub mod lb;
pub mod reconnection;
mod registry;
mod resolver;
pub mod retry;
mod value;

pub use error::{ResolveError, ResolveResult};
pub use registry::{Constructor, PolicySpec, Registry, SingletonRegistry};
pub use resolver::{
    LoadBalancingPolicyResolver, PolicyResolver, ReconnectionPolicyResolver, RetryPolicyResolver,
    DEFAULT_POLICY_NAMESPACE,
};
pub use value::{Kind, Value};
