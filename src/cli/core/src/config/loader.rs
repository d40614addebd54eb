/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::GotplConfig;

pub const CONFIG_FILE: &str = "gotpl.toml";

/// Walk upward from `start` to find `gotpl.toml`, like Cargo.toml discovery
pub fn find_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_config(path: &Path) -> Result<GotplConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  parse_config(&content).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<GotplConfig> {
  let config: GotplConfig = toml::from_str(content)?;
  if let Some(pkg) = &config.compile.package {
    if !is_go_identifier(pkg) {
      bail!("compile.package \"{pkg}\" is not a valid Go package name");
    }
  }
  Ok(config)
}

fn is_go_identifier(s: &str) -> bool {
  let mut chars = s.chars();
  chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
    && chars.all(|c| c.is_alphanumeric() || c == '_')
}
