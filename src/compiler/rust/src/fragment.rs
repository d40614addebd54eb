/* src/compiler/rust/src/fragment.rs */

use crate::helpers::quote_go_string;

pub(crate) const WRITE_CALL: &str = "_buffer.WriteString(";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FragmentKind {
  Literal,
  ControlStatement,
  ExpressionStatement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fragment {
  pub(crate) kind: FragmentKind,
  pub(crate) value: String,
}

impl Fragment {
  pub(crate) fn new(kind: FragmentKind, value: impl Into<String>) -> Self {
    Self { kind, value: value.into() }
  }
}

/// Run-length encoded output. Adjacent fragments of the same kind are
/// merged on insertion, so two neighbours never share a kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct FragmentBuffer {
  parts: Vec<Fragment>,
}

impl FragmentBuffer {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn append(&mut self, fragment: Fragment) {
    match self.parts.last_mut() {
      Some(last) if last.kind == fragment.kind => last.value.push_str(&fragment.value),
      _ => self.parts.push(fragment),
    }
  }

  pub(crate) fn push(&mut self, kind: FragmentKind, value: &str) {
    self.append(Fragment::new(kind, value));
  }

  #[cfg(test)]
  pub(crate) fn parts(&self) -> &[Fragment] {
    &self.parts
  }

  #[cfg(test)]
  pub(crate) fn len(&self) -> usize {
    self.parts.len()
  }

  #[cfg(test)]
  pub(crate) fn is_empty(&self) -> bool {
    self.parts.is_empty()
  }

  /// Render the buffered fragments as Go statements.
  pub(crate) fn flatten(&self) -> String {
    let mut out = String::new();
    for part in &self.parts {
      match part.kind {
        FragmentKind::Literal => {
          let text = part.value.trim_end_matches('\n');
          if !text.is_empty() {
            out.push_str(WRITE_CALL);
            out.push_str(&quote_go_string(text));
            out.push_str(")\n");
          }
        }
        FragmentKind::ControlStatement => {
          out.push_str(&part.value);
          out.push('\n');
        }
        FragmentKind::ExpressionStatement => out.push_str(&part.value),
      }
    }
    out
  }
}
