//! S-expression parser/printer used as the default pipeline.
//!
//! Source goes in, canonical text comes out: trivia is dropped, atoms are
//! separated by single spaces and lists wider than the configured width are
//! broken after their head.

pub mod parser;
pub mod printer;

pub use parser::{parse, Node};
pub use printer::{print_program, DEFAULT_MAX_WIDTH};

use crate::pipeline::{Parsed, Pipeline};

/// Parser/printer pair for `.sexp` sources.
#[derive(Debug, Clone)]
pub struct SexprPipeline {
    pub max_width: usize,
}

impl Default for SexprPipeline {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl Pipeline for SexprPipeline {
    type Program = Vec<Node>;

    fn parse(&mut self, source: &str, filename: &str) -> Parsed<Vec<Node>> {
        parse(source, filename)
    }

    fn serialize(&self, program: &Vec<Node>) -> String {
        print_program(program, self.max_width)
    }

    fn line_comment(&self) -> &str {
        ";"
    }
}
