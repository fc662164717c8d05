//! Help text: one line per node, children indented two spaces deeper.

use std::fmt::Write;

use crate::node::{CommandNode, NodeKind};

const INDENT_STEP: &str = "  ";

/// Render `node` and its subtree, pre-order, starting at `indent`.
///
/// A root node contributes no line of its own; its children render at
/// `indent`.
pub fn help_string(node: &CommandNode, indent: &str) -> String {
    let mut out = String::new();
    write_node(&mut out, node, indent);
    out
}

fn write_node(out: &mut String, node: &CommandNode, indent: &str) {
    let child_indent = match node.kind() {
        NodeKind::Root => indent.to_string(),
        NodeKind::Literal(token) => {
            let _ = write!(out, "{indent}{token}");
            finish_line(out, node);
            format!("{indent}{INDENT_STEP}")
        },
        NodeKind::Argument { name, .. } => {
            let _ = write!(out, "{indent}<{name}>");
            if node.is_optional() {
                out.push_str(" [optional]");
            }
            finish_line(out, node);
            format!("{indent}{INDENT_STEP}")
        },
    };
    for child in node.children() {
        write_node(out, child, &child_indent);
    }
}

fn finish_line(out: &mut String, node: &CommandNode) {
    if !node.description().is_empty() {
        let _ = write!(out, " - {}", node.description());
    }
    out.push('\n');
}
