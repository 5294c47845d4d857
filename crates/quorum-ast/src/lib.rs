pub mod span {
    use serde::Serialize;

    /// Byte range into the original expression string.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
    pub struct Span {
        pub start: u32,
        pub end: u32,
    }
}

pub mod ast {
    use super::span::Span;
    use serde::Serialize;

    /// One node of a policy call tree: `Name(arg, arg, ...)`.
    ///
    /// The root node is the whole input string; a bare identifier parses as
    /// a call with no arguments. Trees are transient: built and consumed
    /// within a single resolution.
    #[derive(Debug, Clone, Serialize)]
    pub struct CallExpr {
        pub name: Ident,
        pub args: Vec<Arg>,
        pub span: Span,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct Ident {
        pub text: String,
        pub span: Span,
    }

    /// A single argument of a call, classified at parse time.
    ///
    /// Numeric kinds follow the coercion rules of the configuration
    /// language: an explicit `(double)` / `(float)` / `(long)` / `(int)`
    /// marker wins; otherwise a literal containing `.` is a float and
    /// everything else defaults to a 32-bit int.
    #[derive(Debug, Clone, Serialize)]
    pub enum Arg {
        /// Nested call, resolved recursively before the outer call.
        Call(CallExpr),
        Str(String, Span),
        Float(f32, Span),
        Double(f64, Span),
        Long(i64, Span),
        Int(i32, Span),
    }
}
