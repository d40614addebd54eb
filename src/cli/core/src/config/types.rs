/* src/cli/core/src/config/types.rs */

use gotpl_compiler::CompileOptions;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GotplConfig {
  #[serde(default)]
  pub compile: CompileSection,
  #[serde(default)]
  pub output: OutputSection,
}

/// `[compile]`. `htmlEscape` and `NameNotChange` act by presence: any
/// value, `false` included, switches the behavior.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompileSection {
  #[serde(rename = "htmlEscape")]
  pub html_escape: Option<toml::Value>,
  #[serde(rename = "NameNotChange")]
  pub name_not_change: Option<toml::Value>,
  pub namespace: Option<String>,
  pub package: Option<String>,
}

impl CompileSection {
  pub fn to_options(&self) -> CompileOptions {
    let mut flags: Vec<(&str, Option<&str>)> = Vec::new();
    if self.html_escape.is_some() {
      flags.push(("htmlEscape", None));
    }
    if self.name_not_change.is_some() {
      flags.push(("NameNotChange", None));
    }
    if let Some(ns) = &self.namespace {
      flags.push(("namespace", Some(ns.as_str())));
    }
    if let Some(pkg) = &self.package {
      flags.push(("package", Some(pkg.as_str())));
    }
    CompileOptions::from_flags(flags)
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSection {
  /// Directory for generated files when `--out` is not given.
  pub dir: Option<String>,
}
