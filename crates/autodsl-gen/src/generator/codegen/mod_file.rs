use quote::quote;

use super::{FileHeader, visibility_tokens};
use crate::generator::{ast::GeneratedBuilderSpec, naming::identifiers::to_ident};

/// Emits the `mod.rs` declaring every builder module and re-exporting each
/// builder and entry function.
pub struct ModFileGenerator<'a> {
  builders: &'a [GeneratedBuilderSpec],
}

impl<'a> ModFileGenerator<'a> {
  pub fn new(builders: &'a [GeneratedBuilderSpec]) -> Self {
    Self { builders }
  }

  pub fn generate(&self, header: &FileHeader) -> anyhow::Result<String> {
    let modules = self.builders.iter().map(|spec| {
      let vis = visibility_tokens(spec.internal);
      let module = to_ident(&spec.module_name);
      let builder = &spec.builder_name;
      let entry = &spec.entry_function.name;
      quote! {
        #vis mod #module;
        #vis use #module::{#builder, #entry};
      }
    });

    let code = quote! { #(#modules)* };
    super::generate_source(&code, header, None)
  }
}
