use std::{collections::HashSet, sync::LazyLock};

use proc_macro2::{Ident, Span};
use regex::Regex;

pub(crate) static FORBIDDEN_IDENTIFIERS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "async", "await", "dyn", "try", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "gen", "self", "Self",
  ]
  .into_iter()
  .collect()
});

/// Keywords that cannot be written as raw identifiers either.
static NON_RAW_KEYWORDS: LazyLock<HashSet<&str>> =
  LazyLock::new(|| ["self", "Self", "super", "crate", "_"].into_iter().collect());

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());
static PATH_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(::)?[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$").unwrap());

/// Whether `name` can name a generated field, function or type, possibly
/// as a raw identifier.
pub(crate) fn is_valid_identifier(name: &str) -> bool {
  IDENTIFIER_RE.is_match(name) && !NON_RAW_KEYWORDS.contains(name)
}

/// Whether `path` is a `::`-separated Rust path such as `crate::model::Person`.
/// Path segments may be `crate`, `self` or `super`.
pub(crate) fn is_valid_path(path: &str) -> bool {
  PATH_RE.is_match(path)
}

/// Builds an identifier token, escaping keywords as raw identifiers.
pub(crate) fn to_ident(name: &str) -> Ident {
  if FORBIDDEN_IDENTIFIERS.contains(name) && !NON_RAW_KEYWORDS.contains(name) {
    Ident::new_raw(name, Span::call_site())
  } else {
    Ident::new(name, Span::call_site())
  }
}

/// Lowercases the first character only: `HTTPServer` becomes `hTTPServer`.
pub(crate) fn decapitalize(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().chain(chars).collect(),
    None => String::new(),
  }
}
