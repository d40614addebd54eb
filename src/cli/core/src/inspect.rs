/* src/cli/core/src/inspect.rs */

// Structural summary of a template document, for checking what the
// parser handed over before compiling it.

use gotpl_compiler::{Child, Mode, Node, TemplateDocument};

use crate::ui;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
  pub markup: usize,
  pub control: usize,
  pub expression: usize,
  pub tokens: usize,
  pub depth: usize,
  /// Mode of the first child of the root, which decides whether a
  /// declaration block is present.
  pub first: Option<Mode>,
}

impl Summary {
  pub fn has_declarations(&self) -> bool {
    self.first == Some(Mode::Control)
  }
}

pub fn summarize(root: &Node) -> Summary {
  let mut summary = Summary::default();
  if let Node::Program { children } = root {
    summary.first = children.first().map(Node::mode);
  }
  walk(root, 0, &mut summary);
  summary
}

fn walk(node: &Node, depth: usize, summary: &mut Summary) {
  summary.depth = summary.depth.max(depth);
  match node {
    Node::Program { children } => {
      for child in children {
        walk(child, depth + 1, summary);
      }
    }
    Node::Markup { children } => {
      summary.markup += 1;
      walk_children(children, depth, summary);
    }
    Node::Control { children, .. } => {
      summary.control += 1;
      walk_children(children, depth, summary);
    }
    Node::Expression { children, .. } => {
      summary.expression += 1;
      walk_children(children, depth, summary);
    }
  }
}

fn walk_children(children: &[Child], depth: usize, summary: &mut Summary) {
  for child in children {
    match child {
      Child::Node(node) => walk(node, depth + 1, summary),
      Child::Token(_) => summary.tokens += 1,
    }
  }
}

pub fn run_inspect(doc: &TemplateDocument) {
  let summary = summarize(&doc.root);
  ui::banner("inspect");
  ui::arrow(&doc.path);
  ui::label("markup", &summary.markup.to_string());
  ui::label("control", &summary.control.to_string());
  ui::label("expression", &summary.expression.to_string());
  ui::label("tokens", &summary.tokens.to_string());
  ui::label("depth", &summary.depth.to_string());
  match summary.first {
    Some(mode) if summary.has_declarations() => ui::ok(&format!("first node is {mode}: declaration block")),
    Some(mode) => ui::detail(&format!("first node is {mode}: no declarations")),
    None => ui::warn("empty template"),
  }
  println!();
}
