use std::fmt::{Display, Formatter};

use proc_macro2::TokenStream;
use quote::ToTokens;
use string_cache::DefaultAtom;

use crate::generator::naming::identifiers::to_ident;

/// Name of a generated item: a field, method, function or type.
///
/// Keywords are printed as raw identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameToken(pub DefaultAtom);

impl NameToken {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for NameToken {
  fn from(s: &str) -> Self {
    NameToken(DefaultAtom::from(s))
  }
}

impl From<String> for NameToken {
  fn from(s: String) -> Self {
    NameToken(DefaultAtom::from(s))
  }
}

impl PartialEq<&str> for NameToken {
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}

impl Display for NameToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

impl ToTokens for NameToken {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    to_ident(&self.0).to_tokens(tokens);
  }
}
