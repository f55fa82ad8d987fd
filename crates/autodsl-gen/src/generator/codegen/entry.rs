use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

use super::{
  types::{generic_params, turbofish},
  visibility_tokens,
};
use crate::generator::ast::GeneratedBuilderSpec;

/// Emits the module-level entry function: create the builder, apply the
/// caller's block, build.
pub(crate) fn generate_entry(spec: &GeneratedBuilderSpec, support: &Path) -> TokenStream {
  let entry = &spec.entry_function;
  let vis = visibility_tokens(entry.internal);
  let name = &entry.name;
  let generics = generic_params(&spec.type_parameters);
  let builder_type = spec.self_type();
  let builder_expr = turbofish(&builder_type);
  let class_type = &spec.build_function.class_type;

  quote! {
    #vis fn #name #generics(
      block: impl ::core::ops::FnOnce(&mut #builder_type),
    ) -> ::core::result::Result<#class_type, #support::BuildError> {
      let mut builder = #builder_expr::new();
      block(&mut builder);
      builder.build()
    }
  }
}
