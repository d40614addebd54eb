/* src/compiler/rust/src/helpers.rs */

use std::fmt::Write;

pub(crate) fn capitalize(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    None => String::new(),
  }
}

/// Quote `s` as a Go interpreted string literal, matching `strconv.Quote`
/// for the characters templates contain in practice.
pub(crate) fn quote_go_string(s: &str) -> String {
  let mut out = String::with_capacity(s.len() + 2);
  out.push('"');
  for c in s.chars() {
    match c {
      '"' => out.push_str("\\\""),
      '\\' => out.push_str("\\\\"),
      '\n' => out.push_str("\\n"),
      '\t' => out.push_str("\\t"),
      '\r' => out.push_str("\\r"),
      '\u{07}' => out.push_str("\\a"),
      '\u{08}' => out.push_str("\\b"),
      '\u{0c}' => out.push_str("\\f"),
      '\u{0b}' => out.push_str("\\v"),
      c if c.is_control() => {
        let code = c as u32;
        // write! into a String cannot fail
        let _ = if code < 0x80 {
          write!(out, "\\x{code:02x}")
        } else if code <= 0xffff {
          write!(out, "\\u{code:04x}")
        } else {
          write!(out, "\\U{code:08x}")
        };
      }
      c => out.push(c),
    }
  }
  out.push('"');
  out
}

/// Wrap `s` in a Go raw string literal. Backticks cannot appear inside a
/// raw literal, so they are spliced in as interpreted strings.
pub(crate) fn go_raw_string(s: &str) -> String {
  format!("`{}`", s.replace('`', "` + \"`\" + `"))
}

/// Text between `keyword` and a trailing `{` when `line` (already trimmed)
/// has that shape and the keyword stands as a whole word.
pub(crate) fn keyword_header<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
  let rest = line.strip_prefix(keyword)?;
  let inner = rest.strip_suffix('{')?;
  if !inner.is_empty() && !inner.starts_with(char::is_whitespace) {
    return None;
  }
  Some(inner.trim())
}
