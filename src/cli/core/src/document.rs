/* src/cli/core/src/document.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gotpl_compiler::{TEMPLATE_EXT, TemplateDocument};

pub fn read_document(path: &Path) -> Result<TemplateDocument> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  TemplateDocument::from_json(&content)
    .with_context(|| format!("failed to parse template document {}", path.display()))
}

/// `views/home/page.gohtml` -> `page.go`
pub fn output_file_name(template: &str) -> String {
  let file = Path::new(template).file_name().and_then(|n| n.to_str()).unwrap_or(template);
  let stem = match file.strip_suffix(TEMPLATE_EXT) {
    Some(stem) => stem,
    None => Path::new(file).file_stem().and_then(|s| s.to_str()).unwrap_or(file),
  };
  format!("{stem}.go")
}

/// Where the generated source goes: the explicit `--out`, else the
/// configured output dir (relative to the config file), else stdout.
pub fn resolve_output(
  out: Option<PathBuf>,
  output_dir: Option<&str>,
  base_dir: &Path,
  template: &str,
) -> Option<PathBuf> {
  if out.is_some() {
    return out;
  }
  output_dir.map(|dir| base_dir.join(dir).join(output_file_name(template)))
}
