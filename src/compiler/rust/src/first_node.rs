/* src/compiler/rust/src/first_node.rs */

// The first control node of a template is never body code: it holds the
// template's imports and parameter declarations.

use crate::ast::Child;
use crate::compiler::Compiler;
use crate::declarations::{Declaration, ImportEffect, classify_import, parse_declarations};
use crate::error::CompileError;

impl Compiler<'_> {
  /// Emit the node into a scratch buffer, then read its text back as
  /// declarations. The scratch output never reaches the body.
  pub(crate) fn extract_first_node(&mut self, children: &[Child]) -> Result<(), CompileError> {
    let body = std::mem::take(&mut self.parts);
    let emitted = self.emit_control(children);
    let scratch = std::mem::replace(&mut self.parts, body);
    emitted?;

    let text = scratch.flatten();
    let decls = parse_declarations(&text).map_err(|err| CompileError::Declaration {
      template: self.template.clone(),
      line: err.line,
      text: err.text,
    })?;

    for decl in decls {
      match decl {
        Declaration::Import { alias, path } => self.register_import(alias.as_deref(), &path)?,
        Declaration::Param(param) => self.params.push(param),
      }
    }
    Ok(())
  }

  fn register_import(&mut self, alias: Option<&str>, path: &str) -> Result<(), CompileError> {
    match classify_import(alias, path) {
      ImportEffect::Plain(spec) => self.imports.require(&spec),
      ImportEffect::Layout { layout, side_import } => {
        if let Some(first) = &self.layout {
          return Err(CompileError::DuplicateLayout {
            template: self.template.clone(),
            first: first.clone(),
            second: layout,
          });
        }
        self.layout = Some(layout);
        self.imports.require(&side_import);
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::declarations::Param;
  use crate::options::CompileOptions;
  use crate::tests::{control, markup, program, tok};

  fn first_node(text: &str) -> Result<Compiler<'static>, CompileError> {
    static OPTS: std::sync::OnceLock<CompileOptions> = std::sync::OnceLock::new();
    let opts = OPTS.get_or_init(CompileOptions::default);
    let mut cp = Compiler::new("views/home/index.gohtml", opts);
    let root = program(vec![
      control(vec![tok("{"), tok(text), tok("}")]),
      markup(vec![tok("<p>body</p>")]),
    ]);
    cp.visit(&root, None)?;
    Ok(cp)
  }

  #[test]
  fn declarations_are_recorded_not_emitted() {
    let cp = first_node("\nimport (\n\"fmt\"\n)\nvar user *User\nvar count int\n").unwrap();
    assert_eq!(
      cp.params,
      vec![
        Param { name: "user".into(), ty: "*User".into() },
        Param { name: "count".into(), ty: "int".into() },
      ]
    );
    assert!(cp.imports.is_required("\"fmt\""));
    assert_eq!(cp.parts.flatten(), "_buffer.WriteString(\"<p>body</p>\")\n");
  }

  #[test]
  fn layout_import_sets_layout_and_side_import() {
    let cp = first_node("import \"pkg/layout/base\"\nimport \"pkg/util\"").unwrap();
    assert_eq!(cp.layout.as_deref(), Some("pkg/layout/base"));
    assert!(cp.imports.is_required("\"pkg/layout\""));
    assert!(!cp.imports.contains("\"pkg/layout/base\""));
    assert!(cp.imports.is_required("\"pkg/util\""));
  }

  #[test]
  fn plain_import_has_no_layout_effect() {
    let cp = first_node("import \"pkg/util\"").unwrap();
    assert_eq!(cp.layout, None);
    assert_eq!(cp.imports.required().collect::<Vec<_>>(), vec!["\"pkg/util\""]);
  }

  #[test]
  fn second_layout_is_rejected() {
    let err = first_node("import \"a/layout/one\"\nimport \"b/layout/two\"").err().unwrap();
    assert_eq!(
      err,
      CompileError::DuplicateLayout {
        template: "views/home/index.gohtml".into(),
        first: "a/layout/one".into(),
        second: "b/layout/two".into(),
      }
    );
  }

  #[test]
  fn malformed_first_node_is_fatal() {
    let err = first_node("import \"fmt\"\nfmt.Println(1)").err().unwrap();
    assert_eq!(
      err,
      CompileError::Declaration {
        template: "views/home/index.gohtml".into(),
        line: 2,
        text: "fmt.Println(1)".into(),
      }
    );
  }

  #[test]
  fn only_the_first_control_node_is_diverted() {
    let opts = CompileOptions::default();
    let mut cp = Compiler::new("views/home/index.gohtml", &opts);
    let root = program(vec![
      control(vec![tok("{"), tok("var n int"), tok("}")]),
      control(vec![tok("{"), tok("n++"), tok("}")]),
    ]);
    cp.visit(&root, None).unwrap();
    assert_eq!(cp.params.len(), 1);
    assert_eq!(cp.parts.flatten(), "n++\n");
  }

  #[test]
  fn markup_first_means_no_declarations() {
    let opts = CompileOptions::default();
    let mut cp = Compiler::new("views/home/index.gohtml", &opts);
    let root = program(vec![
      markup(vec![tok("<p>")]),
      control(vec![tok("{"), tok("var n int"), tok("}")]),
    ]);
    cp.visit(&root, None).unwrap();
    assert!(cp.params.is_empty());
    assert_eq!(cp.parts.flatten(), "_buffer.WriteString(\"<p>\")\nvar n int\n");
  }
}
