/* src/compiler/rust/src/assemble.rs */

use crate::compiler::Compiler;
use crate::helpers::go_raw_string;
use crate::regions::Section;

pub(crate) const BYTES_IMPORT: &str = "\"bytes\"";

/// Wrap the processed body into a complete Go file.
pub(crate) fn assemble(cp: &mut Compiler<'_>, body: &str, sections: &[Section]) -> String {
  cp.imports.require(BYTES_IMPORT);

  let mut out = format!("package {}\n\n", cp.options.package);

  out.push_str("import (\n");
  for spec in cp.imports.required() {
    out.push('\t');
    out.push_str(spec);
    out.push('\n');
  }
  out.push_str(")\n\n");

  let params: Vec<String> = cp.params.iter().map(ToString::to_string).collect();
  out.push_str(&format!("func {}({}) string {{\n", cp.name, params.join(", ")));
  out.push_str("\tvar _buffer bytes.Buffer\n");
  out.push_str(&indent_body(body));
  out.push_str("\treturn _buffer.String()\n}\n");

  for section in sections {
    out.push_str(&render_section(section));
  }

  out
}

/// Tab-indent every body line except those continuing a multi-line raw
/// string, whose content would change.
fn indent_body(body: &str) -> String {
  let mut out = String::with_capacity(body.len() + body.len() / 16);
  let mut in_raw = false;
  for line in body.lines() {
    if !in_raw && !line.is_empty() {
      out.push('\t');
    }
    out.push_str(line);
    out.push('\n');
    in_raw = ends_inside_raw_string(line, in_raw);
  }
  out
}

fn ends_inside_raw_string(line: &str, mut in_raw: bool) -> bool {
  let mut quote: Option<char> = None;
  let mut chars = line.chars();
  while let Some(c) = chars.next() {
    if in_raw {
      in_raw = c != '`';
      continue;
    }
    match (quote, c) {
      (Some(_), '\\') => {
        chars.next();
      }
      (Some(q), _) if c == q => quote = None,
      (Some(_), _) => {}
      (None, '"' | '\'') => quote = Some(c),
      (None, '`') => in_raw = true,
      (None, '/') if chars.as_str().starts_with('/') => break,
      (None, _) => {}
    }
  }
  in_raw
}

fn render_section(section: &Section) -> String {
  format!("\nfunc {}() string {{\n\treturn {}\n}}\n", section.name, go_raw_string(&section.body))
}
