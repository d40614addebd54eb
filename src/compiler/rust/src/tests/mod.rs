/* src/compiler/rust/src/tests/mod.rs */

use super::*;

mod layout;

// -- Tree builders shared by unit and pipeline tests --

pub(crate) fn tok(text: &str) -> Child {
  let kind = match text {
    "{" => "BRACE_OPEN",
    "}" => "BRACE_CLOSE",
    _ => "CONTENT",
  };
  Child::Token(Token::new(kind, text))
}

pub(crate) fn markup(children: Vec<Child>) -> Child {
  Child::Node(Node::Markup { children })
}

pub(crate) fn control(children: Vec<Child>) -> Child {
  Child::Node(Node::Control { tag_name: String::new(), children })
}

pub(crate) fn exp(children: Vec<Child>) -> Child {
  Child::Node(Node::Expression { tag_name: String::new(), children })
}

pub(crate) fn program(children: Vec<Child>) -> Node {
  let nodes = children
    .into_iter()
    .map(|child| match child {
      Child::Node(node) => node,
      Child::Token(token) => panic!("program children must be nodes, got token {token:?}"),
    })
    .collect();
  Node::Program { children: nodes }
}

pub(crate) fn compile_at(path: &str, root: &Node) -> Result<CompileOutput, CompileError> {
  compile_node(root, path, &CompileOptions::default())
}
