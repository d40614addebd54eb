/* src/compiler/rust/src/tests/layout.rs */

use super::*;

// -- Layout composition: child pages, sections, block placeholders --

fn child_page() -> Node {
  program(vec![
    control(vec![tok("{"), tok("\n  import \"app/layout/base\"\n  var title string\n"), tok("}")]),
    markup(vec![tok("\n")]),
    control(vec![tok("section head {"), markup(vec![tok("\n<meta>\n")]), tok("}")]),
    markup(vec![tok("\n<p>"), exp(vec![tok("title")]), tok("</p>\n")]),
  ])
}

#[test]
fn child_page_records_layout_and_sections() {
  let out = compile_at("views/home/page.gohtml", &child_page()).unwrap();
  assert_eq!(out.layout.as_deref(), Some("app/layout/base"));
  assert_eq!(out.sections, vec!["Head"]);
  assert_eq!(out.imports, vec!["\"app/layout\"", "\"bytes\"", "\"github.com/codinl/gotpl/gotpl\""]);
}

#[test]
fn section_body_leaves_main_function() {
  let out = compile_at("views/home/page.gohtml", &child_page()).unwrap();
  let (main_fn, rest) = out.source.split_once("\treturn _buffer.String()\n}\n").unwrap();

  assert!(!main_fn.contains("section head"));
  assert!(!main_fn.contains("<meta>"));
  assert!(main_fn.contains("_buffer.WriteString(gotpl.HTMLEscape(title))\n"));
  assert_eq!(rest, "\nfunc Head() string {\n\treturn `_buffer.WriteString(\"\\n<meta>\")\n`\n}\n");
}

fn layout_template() -> Node {
  program(vec![
    control(vec![tok("{"), tok("var body string\nvar title string"), tok("}")]),
    markup(vec![tok("<title>"), exp(vec![tok("title")]), tok("</title>\n")]),
    control(vec![
      tok("block sidebar {"),
      markup(vec![tok("\n<aside>"), exp(vec![tok("title")]), tok("</aside>\n")]),
      tok("}"),
    ]),
    markup(vec![tok("\n<main>"), exp(vec![tok("body")]), tok("</main>"), exp(vec![tok("footer")])]),
  ])
}

#[test]
fn layout_params_print_unescaped() {
  let out = compile_at("views/layout/base.gohtml", &layout_template()).unwrap();
  assert!(out.source.contains("func Base(body string, title string) string {\n"));
  assert!(out.source.contains("_buffer.WriteString((title))\n"));
  assert!(out.source.contains("_buffer.WriteString((body))\n"));
  assert!(out.source.contains("_buffer.WriteString(gotpl.HTMLEscape(footer))\n"));
}

#[test]
fn block_placeholder_is_stripped() {
  let out = compile_at("views/layout/base.gohtml", &layout_template()).unwrap();
  assert!(!out.source.contains("block sidebar"));
  assert!(!out.source.contains("<aside>"));
  assert!(out.source.contains(concat!(
    "\t_buffer.WriteString(\"</title>\")\n",
    "\t_buffer.WriteString(\"\\n<main>\")\n",
  )));
}

#[test]
fn unclosed_block_fails_compile() {
  let root = program(vec![
    markup(vec![tok("<p>")]),
    control(vec![tok("block sidebar {"), markup(vec![tok("<aside>")])]),
  ]);
  let err = compile_at("views/layout/base.gohtml", &root).unwrap_err();
  assert_eq!(
    err,
    CompileError::UnbalancedRegion {
      template: "views/layout/base.gohtml".into(),
      kind: RegionKind::Block,
      name: "sidebar".into(),
      line: 2,
    }
  );
}

#[test]
fn two_layout_imports_fail_compile() {
  let root = program(vec![control(vec![
    tok("{"),
    tok("import (\n\"a/layout/one\"\n\"b/layout/two\"\n)"),
    tok("}"),
  ])]);
  let err = compile_at("views/home/page.gohtml", &root).unwrap_err();
  assert!(matches!(err, CompileError::DuplicateLayout { .. }));
}
