//! Prints a [`GeneratedBuilderSpec`] as a Rust module.

use std::fmt;

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::Path;

use crate::generator::ast::{GeneratedBuilderSpec, lints::LintConfig};

pub mod builder;
pub mod entry;
pub mod mod_file;
pub mod scopes;
pub mod types;

#[cfg(test)]
mod tests;

pub(crate) fn visibility_tokens(internal: bool) -> TokenStream {
  if internal {
    quote! { pub(crate) }
  } else {
    quote! { pub }
  }
}

/// Leading `//!` block of every generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
  pub title: String,
  pub source_path: String,
  pub gen_version: String,
}

impl FileHeader {
  pub fn new(title: impl Into<String>, source_path: impl Into<String>, gen_version: impl Into<String>) -> Self {
    Self {
      title: title.into(),
      source_path: source_path.into(),
      gen_version: gen_version.into(),
    }
  }
}

impl fmt::Display for FileHeader {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "//! AUTO-GENERATED CODE - DO NOT EDIT!")?;
    writeln!(f, "//!")?;
    writeln!(f, "//! {}", self.title)?;
    writeln!(f, "//! Source: {}", self.source_path)?;
    writeln!(f, "//! Generated by `autodsl-gen` v{}", self.gen_version)?;
    writeln!(f)
  }
}

/// Generates the module holding one builder, its collection scopes and its
/// entry function.
pub fn generate_builder_module(spec: &GeneratedBuilderSpec, support: &Path, header: &FileHeader) -> anyhow::Result<String> {
  let imports = spec.imports.iter().map(|import| {
    let tree = types::path_tokens(import);
    quote! { use #tree; }
  });
  let builder = builder::BuilderGenerator::new(spec, support).generate();
  let scopes = spec
    .nested_types
    .iter()
    .map(|scope| scopes::generate_scope(scope, support, spec.internal));
  let entry = entry::generate_entry(spec, support);

  let code = quote! {
    #(#imports)*

    #builder
    #(#scopes)*
    #entry
  };

  let lint_config = LintConfig::default();
  generate_source(&code, header, Some(&lint_config))
}

pub(crate) fn generate_source(code: &TokenStream, header: &FileHeader, lints: Option<&LintConfig>) -> anyhow::Result<String> {
  let lint_tokens = lints.map(ToTokens::to_token_stream).unwrap_or_default();
  let syntax_tree: syn::File = syn::parse2(quote! {
    #lint_tokens
    #code
  })?;
  let formatted = prettyplease::unparse(&syntax_tree);
  Ok(format!("{header}{formatted}"))
}
