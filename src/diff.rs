//! Line diff used to compare fixtures with fresh output.

use difference::{Changeset, Difference};

use crate::pipeline::Differ;

/// Line-oriented differ built on [`difference::Changeset`].
#[derive(Debug, Clone, Copy)]
pub struct LineDiffer {
    /// Unchanged lines kept around each change.
    pub context: usize,
}

impl Default for LineDiffer {
    fn default() -> Self {
        Self { context: 3 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Same,
    Add,
    Rem,
}

impl Tag {
    fn prefix(self) -> char {
        match self {
            Tag::Same => ' ',
            Tag::Add => '+',
            Tag::Rem => '-',
        }
    }
}

impl Differ for LineDiffer {
    fn diff(&self, label: &str, expected: &str, actual: &str) -> Option<String> {
        if expected == actual {
            return None;
        }
        let changeset = Changeset::new(expected, actual, "\n");
        if changeset.distance == 0 {
            return None;
        }
        let mut lines = flatten(&changeset.diffs);
        // Both texts usually end in a newline, which splits into one empty
        // trailing line that carries no information.
        if lines.last() == Some(&(Tag::Same, "")) {
            lines.pop();
        }

        let mut out = vec![format!("--- expected {label}"), format!("+++ actual {label}")];
        self.render(&lines, &mut out);
        Some(out.join("\n"))
    }
}

impl LineDiffer {
    fn render(&self, lines: &[(Tag, &str)], out: &mut Vec<String>) {
        let mut start = 0;
        while start < lines.len() {
            let tag = lines[start].0;
            let end = lines[start..]
                .iter()
                .position(|(t, _)| (*t == Tag::Same) != (tag == Tag::Same))
                .map_or(lines.len(), |offset| start + offset);
            let run = &lines[start..end];
            if tag == Tag::Same {
                self.render_unchanged(run, start == 0, end == lines.len(), out);
            } else {
                out.extend(run.iter().map(|(t, line)| format!("{}{line}", t.prefix())));
            }
            start = end;
        }
    }

    fn render_unchanged(
        &self,
        run: &[(Tag, &str)],
        leading: bool,
        trailing: bool,
        out: &mut Vec<String>,
    ) {
        let keep_head = if leading { 0 } else { self.context };
        let keep_tail = if trailing { 0 } else { self.context };
        if run.len() <= keep_head + keep_tail {
            out.extend(run.iter().map(|(_, line)| format!(" {line}")));
            return;
        }
        out.extend(run[..keep_head].iter().map(|(_, line)| format!(" {line}")));
        let hidden = run.len() - keep_head - keep_tail;
        out.push(format!("@@ {hidden} unchanged lines @@"));
        out.extend(
            run[run.len() - keep_tail..]
                .iter()
                .map(|(_, line)| format!(" {line}")),
        );
    }
}

fn flatten(diffs: &[Difference]) -> Vec<(Tag, &str)> {
    let mut lines = Vec::new();
    for diff in diffs {
        let (tag, chunk) = match diff {
            Difference::Same(chunk) => (Tag::Same, chunk),
            Difference::Add(chunk) => (Tag::Add, chunk),
            Difference::Rem(chunk) => (Tag::Rem, chunk),
        };
        lines.extend(chunk.split('\n').map(|line| (tag, line)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_have_no_rendering() {
        let differ = LineDiffer::default();
        assert_eq!(differ.diff("x", "(a)\n(b)\n", "(a)\n(b)\n"), None);
        assert_eq!(differ.diff("x", "", ""), None);
    }

    #[test]
    fn changed_line_is_marked_both_ways() {
        let differ = LineDiffer::default();
        let rendering = differ.diff("parser/a.fixture.sexp", "(a)\n(b)\n", "(a)\n(c)\n").unwrap();
        assert!(rendering.starts_with("--- expected parser/a.fixture.sexp\n+++ actual parser/a.fixture.sexp\n"));
        assert!(rendering.contains("\n-(b)"));
        assert!(rendering.contains("\n+(c)"));
        assert!(rendering.contains("\n (a)"));
    }

    #[test]
    fn long_unchanged_runs_are_elided() {
        let differ = LineDiffer { context: 1 };
        let expected = "1\n2\n3\n4\n5\nold\n6\n7\n8\n";
        let actual = "1\n2\n3\n4\n5\nnew\n6\n7\n8\n";
        let rendering = differ.diff("f", expected, actual).unwrap();
        assert!(rendering.contains("@@ 4 unchanged lines @@"));
        assert!(rendering.contains("\n 5\n"));
        assert!(rendering.contains("\n 6"));
        assert!(!rendering.contains(" 7"));
    }

    #[test]
    fn added_trailing_line_is_reported() {
        let differ = LineDiffer::default();
        let rendering = differ.diff("f", "(a)\n", "(a)\n; ERROR: boom\n").unwrap();
        assert!(rendering.contains("+; ERROR: boom"));
    }
}
