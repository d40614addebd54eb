/* src/cli/core/src/main.rs */

mod compile;
mod config;
mod document;
mod inspect;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gotpl_compiler::{CompileOptions, quote_import};

use config::{GotplConfig, find_config, load_config};

#[derive(Parser)]
#[command(name = "gotpl", about = "Compile templates into Go source")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Compile a parsed template document into a Go file
  Compile {
    /// Path to the template document JSON
    document: PathBuf,
    /// Output file path (stdout when omitted and no output dir is configured)
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Path to gotpl.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print expressions without HTML escaping
    #[arg(long)]
    no_escape: bool,
    /// Use the file stem verbatim as the function name
    #[arg(long)]
    keep_name: bool,
    /// Go package name of the generated file
    #[arg(long)]
    package: Option<String>,
    /// Import path of the package providing HTMLEscape
    #[arg(long)]
    namespace: Option<String>,
  },
  /// Print a structural summary of a template document
  Inspect {
    /// Path to the template document JSON
    document: PathBuf,
  },
}

/// Resolve config (explicit or auto-detected). A missing auto-detected
/// file falls back to defaults; an explicit one must exist.
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, GotplConfig)> {
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let path = match explicit {
    Some(path) => path,
    None => match find_config(&cwd) {
      Ok(path) => path,
      Err(_) => return Ok((cwd, GotplConfig::default())),
    },
  };
  let config = load_config(&path)?;
  let base_dir = path.parent().map_or(cwd, Path::to_path_buf);
  Ok((base_dir, config))
}

/// Command-line flags override gotpl.toml.
fn apply_flags(
  mut opts: CompileOptions,
  no_escape: bool,
  keep_name: bool,
  package: Option<String>,
  namespace: Option<String>,
) -> CompileOptions {
  if no_escape {
    opts.escape = false;
  }
  if keep_name {
    opts.keep_name = true;
  }
  if let Some(pkg) = package {
    opts.package = pkg;
  }
  if let Some(ns) = namespace {
    opts.namespace = quote_import(&ns);
  }
  opts
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Compile { document, out, config, no_escape, keep_name, package, namespace } => {
      let (base_dir, gotpl_config) = resolve_config(config)?;
      let options =
        apply_flags(gotpl_config.compile.to_options(), no_escape, keep_name, package, namespace);
      let doc = document::read_document(&document)?;
      let out =
        document::resolve_output(out, gotpl_config.output.dir.as_deref(), &base_dir, &doc.path);
      compile::run_compile(&doc, &options, out.as_deref())?;
    }
    Command::Inspect { document } => {
      let doc = document::read_document(&document)?;
      inspect::run_inspect(&doc);
    }
  }

  Ok(())
}
