/* src/compiler/rust/src/compiler.rs */

use std::path::Path;

use crate::declarations::Param;
use crate::fragment::FragmentBuffer;
use crate::helpers::capitalize;
use crate::imports::ImportSet;
use crate::options::{CompileOptions, TEMPLATE_EXT};

/// Mutable state of one compilation run. Created per template, filled by
/// the tree walk, consumed by the assembler.
pub(crate) struct Compiler<'a> {
  pub(crate) options: &'a CompileOptions,
  /// Template identity used in errors.
  pub(crate) template: String,
  /// Base name of the template's directory.
  pub(crate) dir: String,
  /// Generated function name.
  pub(crate) name: String,
  pub(crate) parts: FragmentBuffer,
  pub(crate) params: Vec<Param>,
  pub(crate) imports: ImportSet,
  pub(crate) layout: Option<String>,
  pub(crate) first_node_seen: bool,
}

impl<'a> Compiler<'a> {
  pub(crate) fn new(template: &str, options: &'a CompileOptions) -> Self {
    let path = Path::new(template);
    let dir = path
      .parent()
      .and_then(Path::file_name)
      .map(|d| d.to_string_lossy().into_owned())
      .unwrap_or_default();
    let stem = function_stem(path);
    let name = if options.keep_name { stem } else { capitalize(&stem) };

    let mut imports = ImportSet::new();
    imports.declare(&options.namespace);

    Self {
      options,
      template: template.to_string(),
      dir,
      name,
      parts: FragmentBuffer::new(),
      params: Vec::new(),
      imports,
      layout: None,
      first_node_seen: false,
    }
  }
}

/// File name minus the template extension; other extensions fall back to
/// the plain file stem.
fn function_stem(path: &Path) -> String {
  let file = path.file_name().map(|f| f.to_string_lossy().into_owned()).unwrap_or_default();
  if let Some(stem) = file.strip_suffix(TEMPLATE_EXT) {
    return stem.to_string();
  }
  path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or(file)
}
