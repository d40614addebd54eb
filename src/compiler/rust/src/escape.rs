/* src/compiler/rust/src/escape.rs */

use crate::ast::Token;
use crate::compiler::Compiler;
use crate::declarations::{LAYOUT_SEGMENT, Param};
use crate::fragment::{FragmentKind, WRITE_CALL};

/// Expression heads that are written without the escape wrapper.
pub(crate) const BYPASS_KEYWORDS: &[&str] = &["helper", "html", "raw"];

/// Marker keyword: opts out of escaping and is not printed itself.
const RAW: &str = "raw";

/// Where a token sits inside its expression node.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExpressionSlot {
  pub(crate) index: usize,
  pub(crate) count: usize,
  /// The expression holds nothing but expressions and tokens.
  pub(crate) homogeneous: bool,
  /// The expression node is itself inside another expression.
  pub(crate) nested: bool,
}

impl ExpressionSlot {
  fn is_first(self) -> bool {
    self.index == 0
  }

  fn is_last(self) -> bool {
    self.index + 1 == self.count
  }
}

/// Whether an expression headed by `value` gets the escape wrapper.
/// Layout templates may print their own parameters unescaped.
pub(crate) fn needs_escape(value: &str, dir: &str, params: &[Param]) -> bool {
  if BYPASS_KEYWORDS.contains(&value) {
    return false;
  }
  if dir == LAYOUT_SEGMENT {
    return !params.iter().any(|p| p.name == value);
  }
  true
}

impl Compiler<'_> {
  pub(crate) fn emit_expression_token(&mut self, token: &Token, slot: ExpressionSlot) {
    let value = token.value();
    let top = !slot.nested;
    let mut start = String::new();
    let mut end = String::new();

    if self.options.escape && top && slot.homogeneous {
      if slot.is_first() {
        if needs_escape(value, &self.dir, &self.params) {
          start.push_str(&self.options.escape_call());
          self.imports.require(&self.options.namespace);
        } else {
          start.push('(');
        }
      }
      if slot.is_last() {
        end.push(')');
      }
    }

    if top && slot.is_first() {
      start.insert_str(0, WRITE_CALL);
    }
    if top && slot.is_last() {
      end.push_str(")\n");
    }

    let body = if value == RAW { "" } else { value };
    self.parts.push(FragmentKind::ExpressionStatement, &format!("{start}{body}{end}"));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::options::CompileOptions;
  use crate::tests::{exp, markup, program, tok};

  fn emit(path: &str, opts: &CompileOptions, params: Vec<Param>, tokens: &[&str]) -> String {
    let mut cp = Compiler::new(path, opts);
    cp.params = params;
    let root = program(vec![markup(vec![exp(tokens.iter().map(|t| tok(t)).collect())])]);
    cp.visit(&root, None).unwrap();
    cp.parts.flatten()
  }

  fn param(name: &str, ty: &str) -> Param {
    Param { name: name.into(), ty: ty.into() }
  }

  #[test]
  fn identifier_is_escaped_and_namespace_required() {
    let opts = CompileOptions::default();
    let mut cp = Compiler::new("home/index.gohtml", &opts);
    let root = program(vec![markup(vec![exp(vec![tok("user.Name")])])]);
    cp.visit(&root, None).unwrap();
    assert_eq!(cp.parts.flatten(), "_buffer.WriteString(gotpl.HTMLEscape(user.Name))\n");
    assert!(cp.imports.is_required(&opts.namespace));
  }

  #[test]
  fn bypass_keywords_open_plain_group() {
    let opts = CompileOptions::default();
    assert_eq!(
      emit("home/index.gohtml", &opts, vec![], &["raw", "(", "body", ")"]),
      "_buffer.WriteString(((body)))\n"
    );
    assert_eq!(
      emit("home/index.gohtml", &opts, vec![], &["html", "(", "body", ")"]),
      "_buffer.WriteString((html(body)))\n"
    );
    assert_eq!(
      emit("home/index.gohtml", &opts, vec![], &["helper", ".", "Nav", "()"]),
      "_buffer.WriteString((helper.Nav()))\n"
    );
  }

  #[test]
  fn sole_bypass_keyword_has_no_wrapper() {
    let opts = CompileOptions::default();
    for keyword in BYPASS_KEYWORDS {
      let out = emit("home/index.gohtml", &opts, vec![], &[*keyword]);
      assert!(!out.contains("HTMLEscape"), "{keyword} must not be escaped: {out}");
    }
    assert_eq!(emit("home/index.gohtml", &opts, vec![], &["raw"]), "_buffer.WriteString(())\n");
  }

  #[test]
  fn layout_params_bypass_escape() {
    let opts = CompileOptions::default();
    let params = vec![param("body", "string"), param("title", "string")];
    assert_eq!(
      emit("views/layout/base.gohtml", &opts, params.clone(), &["body"]),
      "_buffer.WriteString((body))\n"
    );
    assert_eq!(
      emit("views/layout/base.gohtml", &opts, params.clone(), &["other"]),
      "_buffer.WriteString(gotpl.HTMLEscape(other))\n"
    );
    // outside a layout directory parameters are escaped like anything else
    assert_eq!(
      emit("views/home/index.gohtml", &opts, params, &["body"]),
      "_buffer.WriteString(gotpl.HTMLEscape(body))\n"
    );
  }

  #[test]
  fn param_prefix_is_not_a_match() {
    let params = vec![param("bodyText", "string")];
    assert!(needs_escape("body", "layout", &params));
    assert!(!needs_escape("bodyText", "layout", &params));
  }

  #[test]
  fn escaping_disabled_keeps_framing_only() {
    let opts = CompileOptions { escape: false, ..CompileOptions::default() };
    let mut cp = Compiler::new("home/index.gohtml", &opts);
    let root = program(vec![markup(vec![exp(vec![tok("a"), tok("."), tok("B")])])]);
    cp.visit(&root, None).unwrap();
    assert_eq!(cp.parts.flatten(), "_buffer.WriteString(a.B)\n");
    assert!(!cp.imports.is_required(&opts.namespace));
  }

  #[test]
  fn heterogeneous_expression_is_not_wrapped() {
    let opts = CompileOptions::default();
    let mut cp = Compiler::new("home/index.gohtml", &opts);
    let root =
      program(vec![markup(vec![exp(vec![tok("f("), markup(vec![tok("<b>")]), tok(")")])])]);
    cp.visit(&root, None).unwrap();
    assert_eq!(
      cp.parts.flatten(),
      "_buffer.WriteString(f(_buffer.WriteString(\"<b>\")\n))\n"
    );
  }
}
