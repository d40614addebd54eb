/* src/compiler/rust/src/imports.rs */

use std::collections::BTreeMap;

/// Import specs keyed by their text. An entry is either merely known
/// (declared) or required; only required entries reach the preamble.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ImportSet {
  entries: BTreeMap<String, bool>,
}

impl ImportSet {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Record `spec` without requiring it. Keeps an existing requirement.
  pub(crate) fn declare(&mut self, spec: &str) {
    self.entries.entry(spec.to_string()).or_insert(false);
  }

  /// Mark `spec` as emitted. Idempotent.
  pub(crate) fn require(&mut self, spec: &str) {
    self.entries.insert(spec.to_string(), true);
  }

  #[cfg(test)]
  pub(crate) fn is_required(&self, spec: &str) -> bool {
    self.entries.get(spec).copied().unwrap_or(false)
  }

  #[cfg(test)]
  pub(crate) fn contains(&self, spec: &str) -> bool {
    self.entries.contains_key(spec)
  }

  /// Required specs in sorted order.
  pub(crate) fn required(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().filter(|(_, required)| **required).map(|(spec, _)| spec.as_str())
  }
}
