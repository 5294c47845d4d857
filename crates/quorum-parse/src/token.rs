use quorum_ast::span::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum TokKind {
    Eof,
    /// Lexer error (e.g., unterminated string literal)
    Error(String),
    // punctuation
    LParen,
    RParen,
    Comma,
    /// Policy name or type marker: letters, then letters/digits/dots/underscores
    Ident(String),
    /// Quoted string with the quotes stripped
    Str(String),
    /// Raw numeric text; coercion to a typed literal happens in the parser
    Num(String),
}

#[derive(Debug, Clone)]
pub struct Tok {
    pub kind: TokKind,
    pub span: Span,
}
