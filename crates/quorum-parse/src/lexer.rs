use crate::token::{Tok, TokKind};
use quorum_ast::span::Span;

pub struct Lexer<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.as_bytes(),
            pos: 0,
        }
    }

    fn bump(&mut self) -> Option<u8> {
        if self.pos >= self.src.len() {
            None
        } else {
            let b = self.src[self.pos];
            self.pos += 1;
            Some(b)
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn span(&self, start: usize) -> Span {
        Span {
            start: start as u32,
            end: self.pos as u32,
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if (b as char).is_whitespace()) {
            self.bump();
        }
    }

    pub fn next_tok(&mut self) -> Tok {
        self.skip_ws();
        let start = self.pos;
        let Some(b) = self.bump() else {
            return Tok {
                kind: TokKind::Eof,
                span: Span {
                    start: self.pos as u32,
                    end: self.pos as u32,
                },
            };
        };
        let c = b as char;

        let single = match c {
            '(' => Some(TokKind::LParen),
            ')' => Some(TokKind::RParen),
            ',' => Some(TokKind::Comma),
            _ => None,
        };
        if let Some(k) = single {
            return Tok {
                kind: k,
                span: self.span(start),
            };
        }

        // string, single or double quoted; the grammar has no escapes
        if c == '\'' || c == '"' {
            let quote = b;
            let mut s = String::new();
            loop {
                match self.bump() {
                    Some(b) if b == quote => {
                        return Tok {
                            kind: TokKind::Str(s),
                            span: self.span(start),
                        };
                    }
                    Some(b) => s.push(b as char),
                    None => {
                        return Tok {
                            kind: TokKind::Error("unterminated string literal".to_string()),
                            span: self.span(start),
                        };
                    }
                }
            }
        }

        // number: digits with at most one dot
        if c.is_ascii_digit() {
            let mut s = String::from(c);
            let mut dot = false;
            while let Some(p) = self.peek() {
                let ch = p as char;
                if ch.is_ascii_digit() {
                    s.push(ch);
                    self.bump();
                } else if ch == '.' && !dot {
                    dot = true;
                    s.push('.');
                    self.bump();
                } else {
                    break;
                }
            }
            return Tok {
                kind: TokKind::Num(s),
                span: self.span(start),
            };
        }

        // name: letters first, dots allowed for qualified names
        if c.is_ascii_alphabetic() {
            let mut s = String::from(c);
            while let Some(p) = self.peek() {
                let ch = p as char;
                if ch.is_ascii_alphanumeric() || ch == '.' || ch == '_' {
                    s.push(ch);
                    self.bump();
                } else {
                    break;
                }
            }
            return Tok {
                kind: TokKind::Ident(s),
                span: self.span(start),
            };
        }

        Tok {
            kind: TokKind::Error(format!("unexpected character `{}`", c)),
            span: self.span(start),
        }
    }
}
