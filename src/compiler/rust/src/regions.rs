/* src/compiler/rust/src/regions.rs */

// Line scans over the flattened body. Literal markup is always written as
// a single-line quoted statement, so only generated control lines can open
// a block or section region.

use std::collections::BTreeSet;

use crate::error::{CompileError, RegionKind};
use crate::helpers::{capitalize, keyword_header};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section {
  /// Capitalized function name.
  pub(crate) name: String,
  /// Lines between the header and the closing brace, verbatim.
  pub(crate) body: String,
}

struct OpenRegion {
  name: String,
  line: usize,
  depth: usize,
}

impl OpenRegion {
  fn new(name: &str, line: usize) -> Self {
    Self { name: name.to_string(), line, depth: 1 }
  }

  /// Apply one trimmed line to the brace depth. Returns true when the line
  /// closes the region. A line starting with `}` closes a level before a
  /// trailing `{` opens one, so `} else {` leaves the depth unchanged.
  fn closes_on(&mut self, trimmed: &str) -> bool {
    if trimmed.starts_with('}') {
      self.depth -= 1;
      if self.depth == 0 {
        return true;
      }
    }
    if trimmed.ends_with('{') {
      self.depth += 1;
    }
    false
  }

  fn unbalanced(self, template: &str, kind: RegionKind) -> CompileError {
    CompileError::UnbalancedRegion { template: template.to_string(), kind, name: self.name, line: self.line }
  }
}

/// Remove every `block name {` ... `}` region, boundary lines included.
pub(crate) fn strip_blocks(body: &str, template: &str) -> Result<String, CompileError> {
  let mut out = String::with_capacity(body.len());
  let mut open: Option<OpenRegion> = None;

  for (idx, line) in body.split_inclusive('\n').enumerate() {
    let trimmed = line.trim();
    match open.as_mut().map(|region| region.closes_on(trimmed)) {
      Some(true) => open = None,
      Some(false) => {}
      None => match keyword_header(trimmed, RegionKind::Block.keyword()) {
        Some(name) => open = Some(OpenRegion::new(name, idx + 1)),
        None => out.push_str(line),
      },
    }
  }

  match open {
    Some(region) => Err(region.unbalanced(template, RegionKind::Block)),
    None => Ok(out),
  }
}

/// Lift every top-level `section name {` ... `}` region out of `body`.
/// Returns the remaining body and the sections in source order.
pub(crate) fn extract_sections(body: &str, template: &str) -> Result<(String, Vec<Section>), CompileError> {
  let mut out = String::with_capacity(body.len());
  let mut sections: Vec<Section> = Vec::new();
  let mut seen = BTreeSet::new();
  let mut open: Option<(OpenRegion, String)> = None;

  for (idx, line) in body.split_inclusive('\n').enumerate() {
    let trimmed = line.trim();
    if let Some((region, content)) = open.as_mut() {
      if !region.closes_on(trimmed) {
        content.push_str(line);
        continue;
      }
      if let Some((region, content)) = open.take() {
        if !seen.insert(region.name.clone()) {
          return Err(CompileError::DuplicateSection {
            template: template.to_string(),
            name: region.name,
          });
        }
        sections.push(Section { name: region.name, body: content });
      }
      continue;
    }

    match keyword_header(trimmed, RegionKind::Section.keyword()) {
      Some("") => {
        return Err(CompileError::EmptySectionName { template: template.to_string(), line: idx + 1 });
      }
      Some(name) => open = Some((OpenRegion::new(&capitalize(name), idx + 1), String::new())),
      None => out.push_str(line),
    }
  }

  match open {
    Some((region, _)) => Err(region.unbalanced(template, RegionKind::Section)),
    None => Ok((out, sections)),
  }
}
