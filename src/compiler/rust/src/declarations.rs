/* src/compiler/rust/src/declarations.rs */

// Parser for the text captured from a template's first control node.
// Only imports and `var` parameter declarations are accepted; the
// generator never needs to understand any other Go syntax there.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Path segment that marks an import as the template's layout.
pub(crate) const LAYOUT_SEGMENT: &str = "layout";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
  pub name: String,
  pub ty: String,
}

impl fmt::Display for Param {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.name, self.ty)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Declaration {
  /// `path` is double-quoted, whatever quoting the source used.
  Import { alias: Option<String>, path: String },
  Param(Param),
}

impl Declaration {
  fn import(alias: Option<&str>, path: &str) -> Self {
    Self::Import { alias: alias.map(str::to_string), path: path.to_string() }
  }
}

/// Import spec as written in an import block: `name "path"` or `"path"`.
pub(crate) fn import_spec(alias: Option<&str>, path: &str) -> String {
  match alias {
    Some(alias) => format!("{alias} {path}"),
    None => path.to_string(),
  }
}

/// What an import contributes once layout detection has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ImportEffect {
  Plain(String),
  /// `layout` is the unquoted path, `side_import` the spec of its parent
  /// directory so layout-relative symbols resolve.
  Layout { layout: String, side_import: String },
}

/// Layout detection looks at the unquoted path: `pkg/layout/base` names a
/// layout and side-imports `pkg/layout`.
pub(crate) fn classify_import(alias: Option<&str>, path: &str) -> ImportEffect {
  let bare = path.trim_matches('"');
  match bare.rsplit_once('/') {
    Some((parent, _)) if parent.rsplit('/').next() == Some(LAYOUT_SEGMENT) => ImportEffect::Layout {
      layout: bare.to_string(),
      side_import: import_spec(alias, &format!("\"{parent}\"")),
    },
    _ => ImportEffect::Plain(import_spec(alias, path)),
  }
}

/// A line the declaration parser could not accept. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SyntaxError {
  pub(crate) line: usize,
  pub(crate) text: String,
}

fn import_spec_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| {
    Regex::new(r#"^(?:([A-Za-z_][A-Za-z0-9_]*|\.)\s*)?(?:"([^"\s\\]+)"|`([^`\s]+)`)$"#).unwrap()
  })
}

fn var_spec_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*(?:\s*,\s*[A-Za-z_][A-Za-z0-9_]*)*)\s+([^=\s][^=]*)$")
      .unwrap()
  })
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Group {
  None,
  Import,
  Var,
}

/// Parse the captured declaration text. Statements may be split across
/// lines, joined with `;`, and grouped with parentheses on one line or many.
pub(crate) fn parse_declarations(text: &str) -> Result<Vec<Declaration>, SyntaxError> {
  let mut parser = DeclParser { decls: Vec::new(), group: Group::None };

  for (idx, raw) in text.lines().enumerate() {
    let error = || SyntaxError { line: idx + 1, text: raw.trim().to_string() };
    for stmt in split_statements(strip_line_comment(raw)) {
      parser.feed(stmt).ok_or_else(error)?;
    }
  }

  if parser.group != Group::None {
    let line = text.lines().count().max(1);
    return Err(SyntaxError { line, text: "unterminated declaration group".to_string() });
  }
  Ok(parser.decls)
}

struct DeclParser {
  decls: Vec<Declaration>,
  group: Group,
}

impl DeclParser {
  /// Consume one `;`-free statement. `None` means it is not a declaration.
  fn feed(&mut self, stmt: &str) -> Option<()> {
    let mut rest = stmt.trim();
    while !rest.is_empty() {
      rest = match self.group {
        Group::None => self.feed_top_level(rest)?,
        Group::Import | Group::Var => {
          let (spec, after) = match find_group_close(rest) {
            Some(i) => (&rest[..i], Some(&rest[i + 1..])),
            None => (rest, None),
          };
          let spec = spec.trim();
          if !spec.is_empty() {
            if self.group == Group::Import {
              self.decls.push(parse_import(spec)?);
            } else {
              self.decls.extend(parse_var(spec)?);
            }
          }
          match after {
            Some(after) => {
              self.group = Group::None;
              after.trim()
            }
            None => "",
          }
        }
      };
    }
    Some(())
  }

  /// Returns what is left of `stmt` once a group has been opened.
  fn feed_top_level<'a>(&mut self, stmt: &'a str) -> Option<&'a str> {
    if let Some(rest) = keyword_rest(stmt, "import") {
      if let Some(inner) = rest.strip_prefix('(') {
        self.group = Group::Import;
        return Some(inner.trim());
      }
      self.decls.push(parse_import(rest)?);
    } else if let Some(rest) = keyword_rest(stmt, "var") {
      if let Some(inner) = rest.strip_prefix('(') {
        self.group = Group::Var;
        return Some(inner.trim());
      }
      self.decls.extend(parse_var(rest)?);
    } else if keyword_rest(stmt, "package").is_some_and(is_identifier) {
      // package clause carries nothing for the generator
    } else {
      self.decls.push(parse_import(stmt)?);
    }
    Some("")
  }
}

/// Text after `keyword` when `stmt` starts with it as a whole word.
fn keyword_rest<'a>(stmt: &'a str, keyword: &str) -> Option<&'a str> {
  let rest = stmt.strip_prefix(keyword)?;
  match rest.chars().next() {
    Some('(' | '"' | '`') => Some(rest),
    Some(c) if c.is_whitespace() => Some(rest.trim_start()),
    _ => None,
  }
}

fn is_identifier(s: &str) -> bool {
  let mut chars = s.chars();
  chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Import paths are normalised to double quotes.
fn parse_import(spec: &str) -> Option<Declaration> {
  let caps = import_spec_re().captures(spec.trim())?;
  let alias = caps.get(1).map(|m| m.as_str());
  let path = caps.get(2).or_else(|| caps.get(3))?.as_str();
  Some(Declaration::import(alias, &format!("\"{path}\"")))
}

fn parse_var(spec: &str) -> Option<Vec<Declaration>> {
  let caps = var_spec_re().captures(spec.trim())?;
  let ty = caps.get(2)?.as_str().trim();
  let names = caps.get(1)?.as_str();
  Some(
    names
      .split(',')
      .map(|name| Declaration::Param(Param { name: name.trim().to_string(), ty: ty.to_string() }))
      .collect(),
  )
}

/// Byte offsets in `line` that sit outside string, rune and raw-string
/// literals, paired with their byte.
fn code_bytes(line: &str) -> impl Iterator<Item = (usize, u8)> + '_ {
  let mut quote: Option<u8> = None;
  let mut escaped = false;
  line.bytes().enumerate().filter(move |&(_, b)| {
    if let Some(q) = quote {
      if escaped {
        escaped = false;
      } else if b == b'\\' && q != b'`' {
        escaped = true;
      } else if b == q {
        quote = None;
      }
      return false;
    }
    if matches!(b, b'"' | b'\'' | b'`') {
      quote = Some(b);
      return false;
    }
    true
  })
}

/// Drop a trailing `//` comment that is not inside a literal.
fn strip_line_comment(line: &str) -> &str {
  let mut prev = None;
  for (i, b) in code_bytes(line) {
    if b == b'/' && prev == Some((i.wrapping_sub(1), b'/')) {
      return &line[..i - 1];
    }
    prev = Some((i, b));
  }
  line
}

fn split_statements(line: &str) -> Vec<&str> {
  let mut stmts = Vec::new();
  let mut start = 0;
  for (i, b) in code_bytes(line) {
    if b == b';' {
      stmts.push(&line[start..i]);
      start = i + 1;
    }
  }
  stmts.push(&line[start..]);
  stmts
}

/// Offset of the `)` closing the current group, skipping parentheses
/// that belong to types such as `func(int) string`.
fn find_group_close(text: &str) -> Option<usize> {
  let mut depth = 0usize;
  for (i, b) in code_bytes(text) {
    match b {
      b'(' | b'[' | b'{' => depth += 1,
      b')' if depth == 0 => return Some(i),
      b')' | b']' | b'}' => depth = depth.saturating_sub(1),
      _ => {}
    }
  }
  None
}
