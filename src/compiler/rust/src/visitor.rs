/* src/compiler/rust/src/visitor.rs */

use crate::ast::{Child, Mode, Node};
use crate::compiler::Compiler;
use crate::error::CompileError;
use crate::escape::ExpressionSlot;
use crate::fragment::FragmentKind;

impl Compiler<'_> {
  /// Walk `node` in document order, appending to the fragment buffer.
  /// `enclosing` is the mode of the node that contains it.
  pub(crate) fn visit(&mut self, node: &Node, enclosing: Option<Mode>) -> Result<(), CompileError> {
    match node {
      Node::Program { children } => {
        for child in children {
          self.visit(child, Some(Mode::Program))?;
        }
      }

      Node::Markup { children } => {
        self.first_node_seen = true;
        for child in children {
          match child {
            Child::Token(token) => self.parts.push(FragmentKind::Literal, token.value()),
            Child::Node(nested) => self.visit(nested, Some(Mode::Markup))?,
          }
        }
      }

      Node::Control { children, .. } => {
        if !self.first_node_seen {
          self.first_node_seen = true;
          return self.extract_first_node(children);
        }
        self.emit_control(children)?;
      }

      Node::Expression { children, .. } => {
        self.first_node_seen = true;
        let homogeneous = !node.has_non_expression();
        let nested = enclosing == Some(Mode::Expression);
        let count = children.len();
        for (index, child) in children.iter().enumerate() {
          match child {
            Child::Token(token) => {
              let slot = ExpressionSlot { index, count, homogeneous, nested };
              self.emit_expression_token(token, slot);
            }
            Child::Node(inner) => self.visit(inner, Some(Mode::Expression))?,
          }
        }
      }
    }
    Ok(())
  }

  /// Ordinary control-node emission. A `{ ... }` pair wrapping the whole
  /// node is structural and not emitted.
  pub(crate) fn emit_control(&mut self, children: &[Child]) -> Result<(), CompileError> {
    let inner = strip_brace_pair(children);
    for child in inner {
      match child {
        Child::Token(token) => self.parts.push(FragmentKind::ControlStatement, token.value()),
        Child::Node(nested) => self.visit(nested, Some(Mode::Control))?,
      }
    }
    Ok(())
  }
}

fn strip_brace_pair(children: &[Child]) -> &[Child] {
  match children {
    [Child::Token(first), inner @ .., Child::Token(last)] if first.text == "{" && last.text == "}" => {
      inner
    }
    _ => children,
  }
}
