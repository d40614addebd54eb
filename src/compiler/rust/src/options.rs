/* src/compiler/rust/src/options.rs */

/// Import path (quoted, as it appears in an import block) of the runtime
/// package providing `HTMLEscape`.
pub const DEFAULT_NAMESPACE: &str = "\"github.com/codinl/gotpl/gotpl\"";

pub(crate) const DEFAULT_PACKAGE: &str = "tpl";

/// Extension stripped from the template file name to form the function name.
pub const TEMPLATE_EXT: &str = ".gohtml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
  /// Wrap interpolated expressions in the namespace's `HTMLEscape` call.
  pub escape: bool,
  /// Use the file stem verbatim as the function name instead of capitalizing it.
  pub keep_name: bool,
  pub namespace: String,
  pub package: String,
}

impl Default for CompileOptions {
  fn default() -> Self {
    Self {
      escape: true,
      keep_name: false,
      namespace: DEFAULT_NAMESPACE.to_string(),
      package: DEFAULT_PACKAGE.to_string(),
    }
  }
}

impl CompileOptions {
  /// Build options from a loose key/value map. A present `htmlEscape` key
  /// turns auto-escaping off and a present `NameNotChange` key keeps the
  /// function name as written, whatever their values. Unknown keys are ignored.
  pub fn from_flags<'a, I>(flags: I) -> Self
  where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
  {
    let mut opts = Self::default();
    for (key, value) in flags {
      match (key, value) {
        ("htmlEscape", _) => opts.escape = false,
        ("NameNotChange", _) => opts.keep_name = true,
        ("namespace", Some(ns)) => opts.namespace = quote_import(ns),
        ("package", Some(pkg)) => opts.package = pkg.to_string(),
        _ => {}
      }
    }
    opts
  }

  /// Package identifier the escape call is qualified with: the last
  /// segment of the namespace import path.
  pub fn namespace_ident(&self) -> &str {
    let path = self.namespace.trim_matches('"');
    path.rsplit('/').next().unwrap_or(path)
  }

  pub fn escape_call(&self) -> String {
    format!("{}.HTMLEscape(", self.namespace_ident())
  }
}

/// Namespaces may be configured with or without surrounding quotes.
pub fn quote_import(path: &str) -> String {
  let bare = path.trim().trim_matches('"');
  format!("\"{bare}\"")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_escape_and_capitalize() {
    let opts = CompileOptions::default();
    assert!(opts.escape);
    assert!(!opts.keep_name);
    assert_eq!(opts.escape_call(), "gotpl.HTMLEscape(");
    assert_eq!(opts.package, "tpl");
  }

  #[test]
  fn presence_of_flag_disables_regardless_of_value() {
    let opts = CompileOptions::from_flags([("htmlEscape", Some("false")), ("NameNotChange", None)]);
    assert!(!opts.escape);
    assert!(opts.keep_name);
  }

  #[test]
  fn unknown_flags_are_ignored() {
    let opts = CompileOptions::from_flags([("verbose", Some("1")), ("watch", None)]);
    assert_eq!(opts, CompileOptions::default());
  }

  #[test]
  fn namespace_override_is_quoted() {
    let opts = CompileOptions::from_flags([("namespace", Some("example.com/web/escaper"))]);
    assert_eq!(opts.namespace, "\"example.com/web/escaper\"");
    assert_eq!(opts.escape_call(), "escaper.HTMLEscape(");
  }
}
