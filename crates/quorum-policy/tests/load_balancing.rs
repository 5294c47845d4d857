use std::time::Duration;

use quorum_policy::lb::{
    DcAwareRoundRobinPolicy, LatencyAwarePolicy, RoundRobinPolicy, TokenAwarePolicy,
};
use quorum_policy::{LoadBalancingPolicyResolver, ResolveError};

fn resolver() -> LoadBalancingPolicyResolver {
    LoadBalancingPolicyResolver::new()
}

#[test]
fn bare_name_and_empty_call_build_the_same_type() {
    let a = resolver().resolve("RoundRobinPolicy").unwrap();
    let b = resolver().resolve("RoundRobinPolicy()").unwrap();
    assert!(a.as_any().is::<RoundRobinPolicy>());
    assert!(b.as_any().is::<RoundRobinPolicy>());
}

#[test]
fn token_aware_wraps_round_robin() {
    let p = resolver()
        .resolve("TokenAwarePolicy(RoundRobinPolicy())")
        .unwrap();
    let outer = p.as_any().downcast_ref::<TokenAwarePolicy>().unwrap();
    assert!(outer.child().as_any().is::<RoundRobinPolicy>());
}

#[test]
fn dc_aware_takes_a_string_with_quotes_stripped() {
    for expr in ["DCAwareRoundRobinPolicy(\"dc1\")", "DCAwareRoundRobinPolicy('dc1')"] {
        let p = resolver().resolve(expr).unwrap();
        let dc = p.as_any().downcast_ref::<DcAwareRoundRobinPolicy>().unwrap();
        assert_eq!(dc.local_dc(), Some("dc1"));
    }
}

#[test]
fn dc_aware_with_remote_host_count() {
    let p = resolver()
        .resolve("DCAwareRoundRobinPolicy('dc1', 2)")
        .unwrap();
    let dc = p.as_any().downcast_ref::<DcAwareRoundRobinPolicy>().unwrap();
    assert_eq!(dc.local_dc(), Some("dc1"));
    assert_eq!(dc.used_hosts_per_remote_dc(), 2);
}

#[test]
fn latency_aware_consumes_six_positions() {
    let p = resolver()
        .resolve(
            "LatencyAwarePolicy(TokenAwarePolicy(RoundRobinPolicy()), (double) 10.5, (long) 1, (long) 10, (long) 1, 10)",
        )
        .unwrap();
    let la = p.as_any().downcast_ref::<LatencyAwarePolicy>().unwrap();
    assert_eq!(la.exclusion_threshold(), 10.5);
    assert_eq!(la.scale(), Duration::from_millis(1));
    assert_eq!(la.retry_period(), Duration::from_millis(10));
    assert_eq!(la.update_rate(), Duration::from_millis(1));
    assert_eq!(la.minimum_measurements(), 10);

    let child = la.child().as_any().downcast_ref::<TokenAwarePolicy>().unwrap();
    assert!(child.child().as_any().is::<RoundRobinPolicy>());
}

#[test]
fn latency_aware_rejects_other_shapes() {
    let err = resolver()
        .resolve("LatencyAwarePolicy(RoundRobinPolicy())")
        .unwrap_err();
    assert!(matches!(err, ResolveError::NoMatchingConstructor { .. }));
}

#[test]
fn fully_qualified_names_skip_the_namespace() {
    let p = resolver()
        .resolve("com.datastax.driver.core.policies.RoundRobinPolicy")
        .unwrap();
    assert!(p.as_any().is::<RoundRobinPolicy>());
}

#[test]
fn unknown_policy_is_reported_with_its_qualified_name() {
    let err = resolver().resolve("fakeLbPolicy()").unwrap_err();
    let ResolveError::UnknownPolicy { name } = err else {
        panic!("expected UnknownPolicy");
    };
    assert_eq!(name, "com.datastax.driver.core.policies.fakeLbPolicy");
}

#[test]
fn arity_mismatch_is_no_matching_constructor() {
    let err = resolver().resolve("RoundRobinPolicy(1)").unwrap_err();
    assert!(matches!(err, ResolveError::NoMatchingConstructor { .. }));
}

#[test]
fn failed_child_fails_the_whole_resolution() {
    let err = resolver()
        .resolve("TokenAwarePolicy(fakeLbPolicy())")
        .unwrap_err();
    assert!(matches!(err, ResolveError::UnknownPolicy { .. }));
}

#[test]
fn parse_failures_surface_as_typed_errors() {
    let err = resolver()
        .resolve("TokenAwarePolicy(RoundRobinPolicy()) trailing")
        .unwrap_err();
    assert!(matches!(err, ResolveError::Parse(_)));
}

#[test]
fn repeated_resolution_yields_equal_independent_objects() {
    let r = resolver();
    let first = r.resolve("DCAwareRoundRobinPolicy('dc1', 2)").unwrap();
    let second = r.resolve("DCAwareRoundRobinPolicy('dc1', 2)").unwrap();
    let a = first.as_any().downcast_ref::<DcAwareRoundRobinPolicy>().unwrap();
    let b = second.as_any().downcast_ref::<DcAwareRoundRobinPolicy>().unwrap();
    assert_eq!(a.local_dc(), b.local_dc());
    assert_eq!(a.used_hosts_per_remote_dc(), b.used_hosts_per_remote_dc());
    assert!(!std::ptr::eq(a, b));
}
