use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use crate::generator::{
  model::{TypeParameter, TypeRef},
  naming::identifiers::to_ident,
};

/// Tokens for a `::`-separated path. A trailing `*` segment is kept as a glob.
pub(crate) fn path_tokens(path: &str) -> TokenStream {
  let (leading, rest) = match path.strip_prefix("::") {
    Some(rest) => (quote! { :: }, rest),
    None => (TokenStream::new(), path),
  };
  let segments = rest.split("::").map(|segment| {
    if segment == "*" {
      quote! { * }
    } else {
      to_ident(segment).to_token_stream()
    }
  });
  quote! { #leading #(#segments)::* }
}

impl ToTokens for TypeRef {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let path = path_tokens(&self.name);
    let arguments = &self.arguments;
    let base = if arguments.is_empty() {
      path
    } else {
      quote! { #path<#(#arguments),*> }
    };
    let ty = if self.nullable {
      quote! { ::core::option::Option<#base> }
    } else {
      base
    };
    tokens.extend(ty);
  }
}

/// The type in expression position, e.g. `PairBuilder::<A, B>`.
pub(crate) fn turbofish(type_ref: &TypeRef) -> TokenStream {
  let path = path_tokens(&type_ref.name);
  let arguments = &type_ref.arguments;
  if arguments.is_empty() {
    path
  } else {
    quote! { #path::<#(#arguments),*> }
  }
}

/// Declaration-site generics with bounds, e.g. `<T: Clone, U>`.
pub(crate) fn generic_params(params: &[TypeParameter]) -> TokenStream {
  if params.is_empty() {
    return TokenStream::new();
  }
  let params = params.iter().map(|param| {
    let name = to_ident(&param.name);
    let bounds = &param.bounds;
    if bounds.is_empty() {
      quote! { #name }
    } else {
      quote! { #name: #(#bounds)+* }
    }
  });
  quote! { <#(#params),*> }
}

/// Phantom marker type tying unused type parameters to the builder.
pub(crate) fn phantom_type(params: &[TypeParameter]) -> TokenStream {
  let names = params.iter().map(|param| to_ident(&param.name));
  quote! { ::core::marker::PhantomData<fn() -> (#(#names,)*)> }
}
