use std::fmt;
use std::time::Duration;

/// Parameter kind used for constructor-signature matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    ChildPolicy,
    Str,
    Float,
    Double,
    Long,
    Int,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Kind::ChildPolicy => "child policy",
            Kind::Str => "string",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::Long => "long",
            Kind::Int => "int",
        };
        f.write_str(s)
    }
}

/// A reduced argument handed to a constructor factory. Child calls have
/// already been resolved into objects of the family's policy trait.
pub enum Value<P: ?Sized> {
    Child(Box<P>),
    Str(String),
    Float(f32),
    Double(f64),
    Long(i64),
    Int(i32),
}

impl<P: ?Sized> Value<P> {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Child(_) => Kind::ChildPolicy,
            Value::Str(_) => Kind::Str,
            Value::Float(_) => Kind::Float,
            Value::Double(_) => Kind::Double,
            Value::Long(_) => Kind::Long,
            Value::Int(_) => Kind::Int,
        }
    }

    // The registry matches kind signatures before invoking a factory, so
    // the extractors below only ever see the kind they expect.

    pub fn into_child(self) -> Box<P> {
        match self {
            Value::Child(p) => p,
            other => panic!("expected child policy argument, got {}", other.kind()),
        }
    }

    pub fn into_str(self) -> String {
        match self {
            Value::Str(s) => s,
            other => panic!("expected string argument, got {}", other.kind()),
        }
    }

    pub fn into_float(self) -> f32 {
        match self {
            Value::Float(v) => v,
            other => panic!("expected float argument, got {}", other.kind()),
        }
    }

    pub fn into_double(self) -> f64 {
        match self {
            Value::Double(v) => v,
            other => panic!("expected double argument, got {}", other.kind()),
        }
    }

    pub fn into_long(self) -> i64 {
        match self {
            Value::Long(v) => v,
            other => panic!("expected long argument, got {}", other.kind()),
        }
    }

    pub fn into_int(self) -> i32 {
        match self {
            Value::Int(v) => v,
            other => panic!("expected int argument, got {}", other.kind()),
        }
    }
}

/// Millisecond positions come from the unsigned grammar, never negative.
pub(crate) fn millis(ms: i64) -> Duration {
    Duration::from_millis(ms as u64)
}
