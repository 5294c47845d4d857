use crate::error::{ParseError, ParseResult};
use crate::lexer::Lexer;
use crate::token::{Tok, TokKind};
use quorum_ast::ast::{Arg, CallExpr, Ident};
use quorum_ast::span::Span;

/// Parse a whole configuration string as a single call expression.
///
/// The match is anchored: anything left over after the root expression is
/// rejected as [`ParseError::Malformed`]. A bare name with no parentheses
/// parses as a call with zero arguments.
pub fn parse_expr(src: &str) -> ParseResult<CallExpr> {
    let mut p = Parser::new(src);
    let expr = p.parse_call()?;
    p.expect_eof()?;
    Ok(expr)
}

struct Parser<'a> {
    lex: Lexer<'a>,
    cur: Tok,
    nxt: Tok,
}

/// Numeric target picked by the literal coercion rules.
#[derive(Clone, Copy)]
enum NumKind {
    Float,
    Double,
    Long,
    Int,
}

impl NumKind {
    fn name(self) -> &'static str {
        match self {
            NumKind::Float => "float",
            NumKind::Double => "double",
            NumKind::Long => "long",
            NumKind::Int => "int",
        }
    }
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        let mut lex = Lexer::new(src);
        let cur = lex.next_tok();
        let nxt = lex.next_tok();
        Self { lex, cur, nxt }
    }

    fn bump(&mut self) {
        self.cur = std::mem::replace(&mut self.nxt, self.lex.next_tok());
    }

    fn check_lex_error(&self) -> ParseResult<()> {
        if let TokKind::Error(msg) = &self.cur.kind {
            return Err(ParseError::Malformed {
                msg: msg.clone(),
                span: self.cur.span,
            });
        }
        Ok(())
    }

    fn malformed(&self, msg: String) -> ParseError {
        ParseError::Malformed {
            msg,
            span: self.cur.span,
        }
    }

    fn expect_rparen(&mut self, what: &str) -> ParseResult<Tok> {
        self.check_lex_error()?;
        if matches!(self.cur.kind, TokKind::RParen) {
            let t = self.cur.clone();
            self.bump();
            Ok(t)
        } else {
            Err(self.malformed(format!(
                "expected `)` {}, found {}",
                what,
                describe(&self.cur.kind)
            )))
        }
    }

    fn expect_eof(&mut self) -> ParseResult<()> {
        self.check_lex_error()?;
        if matches!(self.cur.kind, TokKind::Eof) {
            Ok(())
        } else {
            Err(self.malformed("trailing input after expression".to_string()))
        }
    }

    // ======= call expressions =======

    /// `Name ( args? )`, or a bare `Name` treated as `Name()`.
    fn parse_call(&mut self) -> ParseResult<CallExpr> {
        let name = self.parse_name()?;
        if !matches!(self.cur.kind, TokKind::LParen) {
            let span = name.span;
            return Ok(CallExpr {
                name,
                args: Vec::new(),
                span,
            });
        }
        self.bump(); // '('

        let mut args = Vec::new();
        if !matches!(self.cur.kind, TokKind::RParen) {
            loop {
                args.push(self.parse_arg()?);
                if matches!(self.cur.kind, TokKind::Comma) {
                    self.bump();
                    continue;
                }
                break;
            }
        }
        let close = self.expect_rparen("to close the argument list")?;
        Ok(CallExpr {
            span: Span {
                start: name.span.start,
                end: close.span.end,
            },
            name,
            args,
        })
    }

    fn parse_name(&mut self) -> ParseResult<Ident> {
        self.check_lex_error()?;
        match &self.cur.kind {
            TokKind::Ident(s) => {
                let id = Ident {
                    text: s.clone(),
                    span: self.cur.span,
                };
                self.bump();
                Ok(id)
            }
            other => Err(self.malformed(format!(
                "expected policy name, found {}",
                describe(other)
            ))),
        }
    }

    // ======= arguments =======

    fn parse_arg(&mut self) -> ParseResult<Arg> {
        self.check_lex_error()?;
        match &self.cur.kind {
            // `Name(...)` in argument position is a child call
            TokKind::Ident(_) if matches!(self.nxt.kind, TokKind::LParen) => {
                Ok(Arg::Call(self.parse_call()?))
            }
            // a bare identifier is an unmarked fragment and defaults to int,
            // which cannot parse
            TokKind::Ident(s) => Err(ParseError::BadNumber {
                literal: s.clone(),
                target: NumKind::Int.name(),
                span: self.cur.span,
            }),
            TokKind::Str(s) => {
                let arg = Arg::Str(s.clone(), self.cur.span);
                self.bump();
                Ok(arg)
            }
            TokKind::Num(text) => {
                let (text, span) = (text.clone(), self.cur.span);
                self.bump();
                let kind = if text.contains('.') {
                    NumKind::Float
                } else {
                    NumKind::Int
                };
                coerce_number(&text, kind, span)
            }
            TokKind::LParen => self.parse_marked_number(),
            other => Err(self.malformed(format!("expected argument, found {}", describe(other)))),
        }
    }

    /// Explicitly typed numeric literal, e.g. `(double) 10.5` or `(long)1`.
    /// Markers match case-insensitively.
    fn parse_marked_number(&mut self) -> ParseResult<Arg> {
        self.bump(); // '('
        self.check_lex_error()?;
        let marker = match &self.cur.kind {
            TokKind::Ident(s) => {
                let m = s.clone();
                let span = self.cur.span;
                self.bump();
                (m, span)
            }
            other => {
                return Err(self.malformed(format!(
                    "expected type marker, found {}",
                    describe(other)
                )));
            }
        };
        self.expect_rparen("after type marker")?;

        let kind = if marker.0.eq_ignore_ascii_case("double") {
            NumKind::Double
        } else if marker.0.eq_ignore_ascii_case("float") {
            NumKind::Float
        } else if marker.0.eq_ignore_ascii_case("long") {
            NumKind::Long
        } else if marker.0.eq_ignore_ascii_case("int") {
            NumKind::Int
        } else {
            return Err(ParseError::Malformed {
                msg: format!("unknown type marker `({})`", marker.0),
                span: marker.1,
            });
        };

        self.check_lex_error()?;
        match &self.cur.kind {
            TokKind::Num(text) => {
                let (text, span) = (text.clone(), self.cur.span);
                self.bump();
                coerce_number(&text, kind, span)
            }
            // the marker already classified the fragment; non-numeric text
            // fails the numeric parse exactly like the unmarked case
            TokKind::Ident(s) => Err(ParseError::BadNumber {
                literal: s.clone(),
                target: kind.name(),
                span: self.cur.span,
            }),
            other => Err(self.malformed(format!(
                "expected number after type marker, found {}",
                describe(other)
            ))),
        }
    }
}

fn coerce_number(text: &str, kind: NumKind, span: Span) -> ParseResult<Arg> {
    let bad = || ParseError::BadNumber {
        literal: text.to_string(),
        target: kind.name(),
        span,
    };
    Ok(match kind {
        NumKind::Float => Arg::Float(text.parse().map_err(|_| bad())?, span),
        NumKind::Double => Arg::Double(text.parse().map_err(|_| bad())?, span),
        NumKind::Long => Arg::Long(text.parse().map_err(|_| bad())?, span),
        NumKind::Int => Arg::Int(text.parse().map_err(|_| bad())?, span),
    })
}

fn describe(kind: &TokKind) -> String {
    match kind {
        TokKind::Eof => "end of input".to_string(),
        TokKind::Error(msg) => msg.clone(),
        TokKind::LParen => "`(`".to_string(),
        TokKind::RParen => "`)`".to_string(),
        TokKind::Comma => "`,`".to_string(),
        TokKind::Ident(s) | TokKind::Num(s) => format!("`{}`", s),
        TokKind::Str(_) => "string literal".to_string(),
    }
}
