/* src/compiler/rust/src/lib.rs */

mod assemble;
mod ast;
mod compiler;
mod declarations;
mod error;
mod escape;
mod first_node;
mod fragment;
mod helpers;
mod imports;
mod options;
mod regions;
mod visitor;

pub use ast::{Child, Mode, Node, TemplateDocument, Token, TokenKind};
pub use declarations::Param;
pub use error::{CompileError, RegionKind};
pub use options::{CompileOptions, DEFAULT_NAMESPACE, TEMPLATE_EXT, quote_import};

use assemble::assemble;
use compiler::Compiler;
use regions::{extract_sections, strip_blocks};

/// Result of one successful compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutput {
  /// Complete Go source file.
  pub source: String,
  /// Name of the generated primary function.
  pub function: String,
  pub params: Vec<Param>,
  /// Unquoted import path of the layout this template renders into.
  pub layout: Option<String>,
  /// Names of the extracted section functions, in source order.
  pub sections: Vec<String>,
  /// Import specs emitted in the preamble.
  pub imports: Vec<String>,
}

/// Compile a parsed template into Go source.
pub fn compile(doc: &TemplateDocument, options: &CompileOptions) -> Result<CompileOutput, CompileError> {
  compile_node(&doc.root, &doc.path, options)
}

/// Compile `root`, using `template` (the template's path) for the function
/// name, the layout-directory check and error messages.
pub fn compile_node(
  root: &Node,
  template: &str,
  options: &CompileOptions,
) -> Result<CompileOutput, CompileError> {
  let mut cp = Compiler::new(template, options);

  // Phase A: tree walk into fragments
  cp.visit(root, None)?;
  let flat = cp.parts.flatten();

  // Phase B: layout placeholders out, sections lifted into functions
  let stripped = strip_blocks(&flat, template)?;
  let (body, sections) = extract_sections(&stripped, template)?;

  let source = assemble(&mut cp, &body, &sections);

  Ok(CompileOutput {
    source,
    function: cp.name,
    params: cp.params,
    layout: cp.layout,
    sections: sections.into_iter().map(|s| s.name).collect(),
    imports: cp.imports.required().map(str::to_string).collect(),
  })
}

#[cfg(test)]
mod tests;
