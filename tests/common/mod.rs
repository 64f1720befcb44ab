//! Shared helpers for integration tests: temp test roots and scripted
//! pipelines.

#![allow(dead_code)]

use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use parser_fixtures::{Diagnostic, Parsed, Pipeline, Reporter};
use termcolor::Buffer;

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

pub fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

pub fn reporter() -> Reporter<Buffer> {
    Reporter::new(Buffer::no_color(), "parser")
}

pub fn output(reporter: Reporter<Buffer>) -> String {
    String::from_utf8(reporter.into_inner().into_inner()).unwrap()
}

/// Trims trailing whitespace from every line and reports an error for every
/// line containing `TODO`. Counts how many times it parsed.
pub struct Scripted {
    pub parses: Rc<Cell<usize>>,
    seen: usize,
}

impl Scripted {
    pub fn new(parses: Rc<Cell<usize>>) -> Self {
        Self { parses, seen: 0 }
    }
}

impl Pipeline for Scripted {
    type Program = Vec<String>;

    fn parse(&mut self, source: &str, filename: &str) -> Parsed<Vec<String>> {
        self.parses.set(self.parses.get() + 1);
        self.seen += 1;
        let mut diagnostics = Vec::new();
        if self.seen > 1 {
            diagnostics.push(Diagnostic::error("pipeline reused", filename, (1, 1)));
        }
        let program: Vec<String> = source.lines().map(|l| l.trim_end().to_string()).collect();
        for (index, line) in program.iter().enumerate() {
            if let Some(column) = line.find("TODO") {
                diagnostics.push(Diagnostic::error(
                    "unfinished line",
                    filename,
                    (index + 1, column + 1),
                ));
            }
        }
        Parsed {
            program,
            diagnostics,
        }
    }

    fn serialize(&self, program: &Vec<String>) -> String {
        program.iter().map(|line| format!("{line}\n")).collect()
    }
}
