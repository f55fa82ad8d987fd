use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintAllow {
  ClippyMustUseCandidate,
  ClippyNewWithoutDefault,
  ClippyReturnSelfNotMustUse,
  DeadCode,
  NonSnakeCase,
  UnusedImports,
}

impl ToTokens for LintAllow {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let attr = match self {
      Self::ClippyMustUseCandidate => quote! { #![allow(clippy::must_use_candidate)] },
      Self::ClippyNewWithoutDefault => quote! { #![allow(clippy::new_without_default)] },
      Self::ClippyReturnSelfNotMustUse => quote! { #![allow(clippy::return_self_not_must_use)] },
      Self::DeadCode => quote! { #![allow(dead_code)] },
      Self::NonSnakeCase => quote! { #![allow(non_snake_case)] },
      Self::UnusedImports => quote! { #![allow(unused_imports)] },
    };
    tokens.extend(attr);
  }
}

#[derive(Debug, Clone)]
pub struct LintConfig {
  pub allows: Vec<LintAllow>,
}

impl Default for LintConfig {
  fn default() -> Self {
    Self {
      allows: vec![
        LintAllow::ClippyMustUseCandidate,
        LintAllow::ClippyNewWithoutDefault,
        LintAllow::ClippyReturnSelfNotMustUse,
        LintAllow::DeadCode,
        LintAllow::NonSnakeCase,
        LintAllow::UnusedImports,
      ],
    }
  }
}

impl ToTokens for LintConfig {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    for allow in &self.allows {
      allow.to_tokens(tokens);
    }
  }
}
