/* src/compiler/rust/src/ast.rs */

// Parsed template tree as handed over by the template parser.
// Children keep document order, which is also output order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  Program,
  Markup,
  Control,
  Expression,
}

impl std::fmt::Display for Mode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Program => write!(f, "program"),
      Self::Markup => write!(f, "markup"),
      Self::Control => write!(f, "control"),
      Self::Expression => write!(f, "expression"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Node {
  Program {
    #[serde(default)]
    children: Vec<Node>,
  },
  Markup {
    #[serde(default)]
    children: Vec<Child>,
  },
  Control {
    #[serde(default)]
    tag_name: String,
    #[serde(default)]
    children: Vec<Child>,
  },
  Expression {
    #[serde(default)]
    tag_name: String,
    #[serde(default)]
    children: Vec<Child>,
  },
}

impl Node {
  pub fn mode(&self) -> Mode {
    match self {
      Self::Program { .. } => Mode::Program,
      Self::Markup { .. } => Mode::Markup,
      Self::Control { .. } => Mode::Control,
      Self::Expression { .. } => Mode::Expression,
    }
  }

  /// True unless this node and every node below it are expressions.
  pub fn has_non_expression(&self) -> bool {
    let Self::Expression { children, .. } = self else {
      return true;
    };
    children.iter().any(|child| match child {
      Child::Node(node) => node.has_non_expression(),
      Child::Token(_) => false,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
  Node(Node),
  Token(Token),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
  #[serde(rename = "type")]
  pub kind: TokenKind,
  #[serde(default)]
  pub text: String,
}

impl Token {
  pub fn new(kind: impl Into<TokenKind>, text: impl Into<String>) -> Self {
    Self { kind: kind.into(), text: text.into() }
  }

  /// Text this token contributes to generated code; structural markers
  /// contribute nothing.
  pub fn value(&self) -> &str {
    if self.kind.is_marker() { "" } else { &self.text }
  }
}

/// Lexical token type tag. `AT` and `AT_COLON` are the only kinds the
/// generator treats specially; every other tag is carried through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TokenKind {
  At,
  AtColon,
  Other(String),
}

impl TokenKind {
  pub fn is_marker(&self) -> bool {
    matches!(self, Self::At | Self::AtColon)
  }

  pub fn as_str(&self) -> &str {
    match self {
      Self::At => "AT",
      Self::AtColon => "AT_COLON",
      Self::Other(tag) => tag,
    }
  }
}

impl From<String> for TokenKind {
  fn from(tag: String) -> Self {
    match tag.as_str() {
      "AT" => Self::At,
      "AT_COLON" => Self::AtColon,
      _ => Self::Other(tag),
    }
  }
}

impl From<&str> for TokenKind {
  fn from(tag: &str) -> Self {
    Self::from(tag.to_string())
  }
}

impl From<TokenKind> for String {
  fn from(kind: TokenKind) -> Self {
    kind.as_str().to_string()
  }
}

/// A parsed template together with the path it was read from. The path is
/// the template's identity: it names the generated function and appears
/// in every error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDocument {
  pub path: String,
  pub root: Node,
}

impl TemplateDocument {
  pub fn from_json(input: &str) -> serde_json::Result<Self> {
    serde_json::from_str(input)
  }
}
