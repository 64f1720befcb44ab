//! Canonical printer for parsed forms.

use unicode_width::UnicodeWidthStr;

use super::parser::Node;

/// Display columns a list may occupy before it is broken over lines.
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// Prints each top-level form on its own line.
pub fn print_program(forms: &[Node], max_width: usize) -> String {
    let mut out = String::new();
    for form in forms {
        out.push_str(&print_node(form, 0, max_width));
        out.push('\n');
    }
    out
}

/// Single-line rendering of `node`.
pub fn flat(node: &Node) -> String {
    match node {
        Node::Atom(atom) => atom.clone(),
        Node::Str(body) => format!("\"{body}\""),
        Node::List(items) => {
            let inner: Vec<_> = items.iter().map(flat).collect();
            format!("({})", inner.join(" "))
        }
    }
}

/// Renders `node` starting at column `indent`. Lists that do not fit keep
/// their head on the opening line and put every other element on its own
/// line, two columns deeper.
fn print_node(node: &Node, indent: usize, max_width: usize) -> String {
    let single = flat(node);
    let Node::List(items) = node else {
        return single;
    };
    let Some((head, rest)) = items.split_first() else {
        return single;
    };
    if indent + single.width() <= max_width {
        return single;
    }
    let child_indent = indent + 2;
    let mut out = String::from("(");
    out.push_str(&print_node(head, indent + 1, max_width));
    for item in rest {
        out.push('\n');
        out.push_str(&" ".repeat(child_indent));
        out.push_str(&print_node(item, child_indent, max_width));
    }
    out.push(')');
    out
}
