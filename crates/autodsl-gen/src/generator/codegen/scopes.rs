use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

use super::{types::generic_params, visibility_tokens};
use crate::generator::{ast::CollectionScopeSpec, model::TypeRef};

/// Emits one collection scope type: a private container and an `add` method.
pub(crate) fn generate_scope(scope: &CollectionScopeSpec, support: &Path, internal: bool) -> TokenStream {
  let vis = visibility_tokens(internal);
  let name = &scope.name;
  let generics = generic_params(&scope.type_parameters);
  let self_type = TypeRef::new(name.as_str()).with_arguments(
    scope
      .type_parameters
      .iter()
      .map(|param| TypeRef::new(param.name.clone()))
      .collect(),
  );
  let container = &scope.container;
  let element = &scope.element;

  quote! {
    #vis struct #name #generics {
      collection: #support::Collector<#container>,
    }

    impl #generics #self_type {
      fn new() -> Self {
        Self {
          collection: ::core::default::Default::default(),
        }
      }

      pub fn add(&mut self, item: #element) -> &mut Self {
        self.collection.push(item);
        self
      }
    }
  }
}
