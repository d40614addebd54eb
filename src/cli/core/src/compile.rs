/* src/cli/core/src/compile.rs */

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use gotpl_compiler::{CompileOptions, CompileOutput, TemplateDocument, compile};

use crate::ui;

/// Compile `doc` and write the Go source to `out`, or to stdout when no
/// output file is resolved. Stdout mode prints nothing but the source.
pub fn run_compile(doc: &TemplateDocument, options: &CompileOptions, out: Option<&Path>) -> Result<()> {
  let output = compile(doc, options).with_context(|| format!("failed to compile {}", doc.path))?;

  let Some(out) = out else {
    std::io::stdout()
      .lock()
      .write_all(output.source.as_bytes())
      .context("failed to write to stdout")?;
    return Ok(());
  };

  ui::banner("compile");
  ui::arrow(&format!("compiling {}", doc.path));

  if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(out, &output.source)
    .with_context(|| format!("failed to write {}", out.display()))?;

  report(&output, options);
  ui::ok(&format!(
    "{}  {}",
    out.display(),
    ui::format_size(output.source.len() as u64)
  ));
  println!();
  Ok(())
}

fn report(output: &CompileOutput, options: &CompileOptions) {
  let signature: Vec<String> = output.params.iter().map(ToString::to_string).collect();
  ui::label("func", &format!("{}({})", output.function, signature.join(", ")));
  ui::label("package", &options.package);
  if let Some(layout) = &output.layout {
    ui::label("layout", layout);
  }
  if !output.sections.is_empty() {
    ui::label("sections", &output.sections.join(", "));
  }
  if !options.escape {
    ui::warn("html escaping disabled");
  }
}
