//! Recovering S-expression parser.
//!
//! Converts source text into [`Node`]s. Malformed input never aborts the
//! parse; each recovery is recorded as a [`Diagnostic`].

use pest::error::LineColLocation;
use pest::iterators::Pair;
use pest::{Parser, Position};
use pest_derive::Parser;

use crate::pipeline::{Diagnostic, Parsed};

#[derive(Parser)]
#[grammar = "syntax/grammar.pest"]
struct SexprParser;

/// One parsed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Atom(String),
    /// String literal body exactly as written, escapes included.
    Str(String),
    List(Vec<Node>),
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parse `source` into top-level forms, collecting diagnostics tagged with
/// `filename`.
pub fn parse(source: &str, filename: &str) -> Parsed<Vec<Node>> {
    let mut builder = Builder {
        filename,
        diagnostics: Vec::new(),
    };
    let forms = match SexprParser::parse(Rule::program, source) {
        Ok(mut pairs) => match pairs.next() {
            Some(program) => builder.program(program),
            None => Vec::new(),
        },
        // The grammar is total; keep the report instead of panicking if it
        // ever stops being so.
        Err(err) => {
            let position = match err.line_col {
                LineColLocation::Pos(pos) => pos,
                LineColLocation::Span(start, _) => start,
            };
            builder.error(err.variant.message().into_owned(), position);
            Vec::new()
        }
    };
    Parsed {
        program: forms,
        diagnostics: builder.diagnostics,
    }
}

// ============================================================================
// AST BUILDERS
// ============================================================================

struct Builder<'a> {
    filename: &'a str,
    diagnostics: Vec<Diagnostic>,
}

impl Builder<'_> {
    fn program(&mut self, program: Pair<Rule>) -> Vec<Node> {
        let mut forms = Vec::new();
        for pair in program.into_inner() {
            match pair.as_rule() {
                Rule::EOI => {}
                Rule::stray_close => {
                    self.error("Unexpected ')'", pair.as_span().start_pos().line_col())
                }
                _ => forms.push(self.node(pair)),
            }
        }
        forms
    }

    fn node(&mut self, pair: Pair<Rule>) -> Node {
        let position = pair.as_span().start_pos().line_col();
        match pair.as_rule() {
            Rule::list => {
                let mut items = Vec::new();
                for inner in pair.into_inner() {
                    match inner.as_rule() {
                        Rule::close => {}
                        Rule::unclosed => self.error("')' expected", position),
                        _ => items.push(self.node(inner)),
                    }
                }
                Node::List(items)
            }
            Rule::string => Node::Str(self.string_body(pair).to_string()),
            Rule::unterminated_string => {
                self.error("Unterminated string literal", position);
                Node::Str(trim_dangling_escape(self.string_body(pair)).to_string())
            }
            _ => Node::Atom(pair.as_str().to_string()),
        }
    }

    /// Raw body of a string literal. Escapes outside [`KNOWN_ESCAPES`] are
    /// kept as written and reported as warnings.
    fn string_body<'i>(&mut self, pair: Pair<'i, Rule>) -> &'i str {
        let Some(body) = pair.into_inner().find(|p| p.as_rule() == Rule::string_body) else {
            return "";
        };
        let span = body.as_span();
        let text = body.as_str();
        let mut chars = text.char_indices();
        while let Some((offset, c)) = chars.next() {
            if c != '\\' {
                continue;
            }
            let Some((_, escaped)) = chars.next() else {
                break;
            };
            if KNOWN_ESCAPES.contains(&escaped) {
                continue;
            }
            let position = Position::new(span.get_input(), span.start() + offset)
                .map(|p| p.line_col())
                .unwrap_or_else(|| span.start_pos().line_col());
            self.diagnostics.push(Diagnostic::warning(
                format!("Unknown escape sequence '\\{escaped}'"),
                self.filename,
                position,
            ));
        }
        text
    }

    fn error(&mut self, message: impl Into<String>, position: (usize, usize)) {
        self.diagnostics
            .push(Diagnostic::error(message, self.filename, position));
    }
}

/// Characters that may follow `\` inside a string literal.
const KNOWN_ESCAPES: [char; 5] = ['"', '\\', 'n', 't', 'r'];

/// Drops a trailing unpaired `\` so that closing the string does not escape
/// the closing quote.
fn trim_dangling_escape(body: &str) -> &str {
    let trailing = body.chars().rev().take_while(|c| *c == '\\').count();
    if trailing % 2 == 1 {
        &body[..body.len() - 1]
    } else {
        body
    }
}
