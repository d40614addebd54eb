/* src/compiler/rust/src/error.rs */

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
  Block,
  Section,
}

impl RegionKind {
  pub fn keyword(self) -> &'static str {
    match self {
      Self::Block => "block",
      Self::Section => "section",
    }
  }
}

/// Fatal compile failure. Every variant names the template it came from;
/// no output is produced when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
  /// The first control node holds something other than imports and
  /// parameter declarations. `line` is 1-based within that node's text.
  Declaration { template: String, line: usize, text: String },
  DuplicateLayout { template: String, first: String, second: String },
  /// A block or section whose braces never close. `line` is 1-based within
  /// the generated body.
  UnbalancedRegion { template: String, kind: RegionKind, name: String, line: usize },
  EmptySectionName { template: String, line: usize },
  DuplicateSection { template: String, name: String },
}

impl CompileError {
  pub fn template(&self) -> &str {
    match self {
      Self::Declaration { template, .. }
      | Self::DuplicateLayout { template, .. }
      | Self::UnbalancedRegion { template, .. }
      | Self::EmptySectionName { template, .. }
      | Self::DuplicateSection { template, .. } => template,
    }
  }
}

impl fmt::Display for CompileError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Declaration { template, line, text } => {
        write!(f, "{template}: invalid declaration at line {line} of first node: {text:?}")
      }
      Self::DuplicateLayout { template, first, second } => {
        write!(f, "{template}: layout already set to {first}, cannot also use {second}")
      }
      Self::UnbalancedRegion { template, kind, name, line } => {
        let keyword = kind.keyword();
        if name.is_empty() {
          write!(f, "{template}: {keyword} opened at body line {line} is never closed")
        } else {
          write!(f, "{template}: {keyword} \"{name}\" opened at body line {line} is never closed")
        }
      }
      Self::EmptySectionName { template, line } => {
        write!(f, "{template}: section at body line {line} has no name")
      }
      Self::DuplicateSection { template, name } => {
        write!(f, "{template}: section \"{name}\" is defined more than once")
      }
    }
  }
}

impl std::error::Error for CompileError {}
