use std::collections::HashMap;

use crate::error::ResolveError;
use crate::value::{Kind, Value};

/// One way to build a policy: an exact parameter-kind signature and the
/// factory invoked when the reduced arguments match it.
pub struct Constructor<P: ?Sized> {
    pub params: Vec<Kind>,
    pub build: fn(Vec<Value<P>>) -> Box<P>,
}

/// How a registered policy is produced.
pub enum PolicySpec<P: ?Sized> {
    /// Constructors selected by exact arity and kind sequence.
    Constructors(Vec<Constructor<P>>),
    /// Fixed positional contract that bypasses signature matching (the
    /// latency-aware builder). The qualified name is passed through for
    /// error reporting.
    FixedPositional(fn(&str, Vec<Value<P>>) -> Result<Box<P>, ResolveError>),
}

/// Immutable table from fully qualified policy name to how to build it.
/// Populated once at startup; resolution only ever reads it.
pub struct Registry<P: ?Sized> {
    entries: HashMap<String, PolicySpec<P>>,
}

impl<P: ?Sized> Registry<P> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, spec: PolicySpec<P>) {
        self.entries.insert(name.into(), spec);
    }

    pub fn construct(&self, name: &str, args: Vec<Value<P>>) -> Result<Box<P>, ResolveError> {
        let Some(spec) = self.entries.get(name) else {
            return Err(ResolveError::UnknownPolicy {
                name: name.to_string(),
            });
        };
        match spec {
            PolicySpec::Constructors(ctors) => {
                let kinds: Vec<Kind> = args.iter().map(Value::kind).collect();
                let Some(ctor) = ctors.iter().find(|c| c.params == kinds) else {
                    return Err(ResolveError::NoMatchingConstructor {
                        name: name.to_string(),
                        signature: kinds,
                    });
                };
                Ok((ctor.build)(args))
            }
            PolicySpec::FixedPositional(build) => build(name, args),
        }
    }
}

impl<P: ?Sized> Default for Registry<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Table for families resolved by shared instance instead of construction.
/// A `None` entry is a known type that exposes no shared instance.
pub struct SingletonRegistry<P: ?Sized + 'static> {
    entries: HashMap<String, Option<&'static P>>,
}

impl<P: ?Sized + 'static> SingletonRegistry<P> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, instance: Option<&'static P>) {
        self.entries.insert(name.into(), instance);
    }

    pub fn lookup(&self, name: &str) -> Result<&'static P, ResolveError> {
        match self.entries.get(name) {
            None => Err(ResolveError::UnknownPolicy {
                name: name.to_string(),
            }),
            Some(None) => Err(ResolveError::MissingSingleton {
                name: name.to_string(),
            }),
            Some(Some(p)) => Ok(p),
        }
    }
}

impl<P: ?Sized + 'static> Default for SingletonRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Debug;

    fn int_registry() -> Registry<dyn Debug> {
        let mut reg = Registry::new();
        reg.register(
            "t.Boxed",
            PolicySpec::Constructors(vec![Constructor {
                params: vec![Kind::Int],
                build: |mut a| Box::new(a.remove(0).into_int()) as Box<dyn Debug>,
            }]),
        );
        reg
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = int_registry().construct("t.Nope", Vec::new()).unwrap_err();
        assert!(matches!(err, ResolveError::UnknownPolicy { .. }));
    }

    #[test]
    fn signature_must_match_exactly() {
        let err = int_registry()
            .construct("t.Boxed", vec![Value::Long(1)])
            .unwrap_err();
        assert!(matches!(err, ResolveError::NoMatchingConstructor { .. }));
    }

    #[test]
    fn matching_signature_builds() {
        let v = int_registry()
            .construct("t.Boxed", vec![Value::Int(5)])
            .unwrap();
        assert_eq!(format!("{:?}", v), "5");
    }

    #[test]
    fn singleton_entries_distinguish_unknown_from_missing() {
        static FIVE: i32 = 5;
        let mut reg: SingletonRegistry<dyn Debug> = SingletonRegistry::new();
        reg.register("t.Five", Some(&FIVE as &dyn Debug));
        reg.register("t.NoInstance", None);

        assert!(reg.lookup("t.Five").is_ok());
        assert!(matches!(
            reg.lookup("t.Gone").unwrap_err(),
            ResolveError::UnknownPolicy { .. }
        ));
        assert!(matches!(
            reg.lookup("t.NoInstance").unwrap_err(),
            ResolveError::MissingSingleton { .. }
        ));
    }
}
