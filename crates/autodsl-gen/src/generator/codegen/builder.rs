use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use syn::Path;

use super::{
  types::{generic_params, phantom_type, turbofish},
  visibility_tokens,
};
use crate::generator::{
  ast::{
    CollectionScopeFunSpec, FunctionSpec, GeneratedBuilderSpec, InlineInsertFunSpec, NestedDslFunSpec, PropertyInit,
    PropertySpec, SetterSpec,
  },
  synthesizer::PHANTOM_FIELD,
};

/// Emits the builder struct, its `Default` impl and its inherent impl.
pub(crate) struct BuilderGenerator<'a> {
  spec: &'a GeneratedBuilderSpec,
  support: &'a Path,
}

impl<'a> BuilderGenerator<'a> {
  pub(crate) fn new(spec: &'a GeneratedBuilderSpec, support: &'a Path) -> Self {
    Self { spec, support }
  }

  pub(crate) fn generate(&self) -> TokenStream {
    let definition = self.generate_struct_definition();
    let default_impl = self.generate_default_impl();
    let impl_block = self.generate_impl_block();

    quote! {
      #definition
      #default_impl
      #impl_block
    }
  }

  fn generate_struct_definition(&self) -> TokenStream {
    let support = self.support;
    let vis = visibility_tokens(self.spec.internal);
    let name = &self.spec.builder_name;
    let generics = generic_params(&self.spec.type_parameters);

    let properties = self.spec.properties.iter().map(|property| {
      let field = &property.name;
      let ty = &property.type_ref;
      quote! { #field: #support::Slot<#ty> }
    });
    let storages = self.spec.inline_storages.iter().map(|storage| {
      let field = &storage.name;
      let container = &storage.container;
      quote! { #field: ::core::option::Option<#support::Collector<#container>> }
    });
    let phantom = self.phantom_field(|marker| quote! { #marker });

    quote! {
      #vis struct #name #generics {
        #(#properties,)*
        #(#storages,)*
        #phantom
      }
    }
  }

  fn generate_default_impl(&self) -> TokenStream {
    let support = self.support;
    let generics = generic_params(&self.spec.type_parameters);
    let self_type = self.spec.self_type();

    let properties = self.spec.properties.iter().map(|property| {
      let field = &property.name;
      match property.initial {
        PropertyInit::Unset => quote! { #field: #support::Slot::Unset },
        PropertyInit::Absent => quote! { #field: #support::Slot::absent() },
      }
    });
    let storages = self.spec.inline_storages.iter().map(|storage| {
      let field = &storage.name;
      quote! { #field: ::core::option::Option::None }
    });
    let phantom = self.phantom_field(|_| quote! { ::core::marker::PhantomData });

    quote! {
      impl #generics ::core::default::Default for #self_type {
        fn default() -> Self {
          Self {
            #(#properties,)*
            #(#storages,)*
            #phantom
          }
        }
      }
    }
  }

  /// The marker field, present only on generic builders.
  fn phantom_field(&self, value: impl FnOnce(TokenStream) -> TokenStream) -> TokenStream {
    if !self.spec.is_generic() {
      return TokenStream::new();
    }
    let field = format_ident!("{}", PHANTOM_FIELD);
    let value = value(phantom_type(&self.spec.type_parameters));
    quote! { #field: #value, }
  }

  fn generate_impl_block(&self) -> TokenStream {
    let generics = generic_params(&self.spec.type_parameters);
    let self_type = self.spec.self_type();

    let members = self
      .spec
      .properties
      .iter()
      .zip(&self.spec.setters)
      .map(|(property, setter)| self.generate_property_members(property, setter));
    let functions = self.spec.functions.iter().map(Self::generate_function);
    let build = self.generate_build();

    quote! {
      impl #generics #self_type {
        pub fn new() -> Self {
          <Self as ::core::default::Default>::default()
        }

        #(#members)*
        #(#functions)*
        #build
      }
    }
  }

  /// An explicit assignment discards pending inline insertions, so the last
  /// call wins.
  fn generate_property_members(&self, property: &PropertySpec, setter: &SetterSpec) -> TokenStream {
    let field = &property.name;
    let mutator = &property.mutator;
    let ty = &property.type_ref;
    let setter_name = &setter.name;
    let clear_storage = self
      .spec
      .inline_storages
      .iter()
      .filter(|storage| storage.property == property.name)
      .map(|storage| {
        let storage = &storage.name;
        quote! { self.#storage = ::core::option::Option::None; }
      });

    quote! {
      pub fn #mutator(&mut self, value: impl ::core::convert::Into<#ty>) -> &mut Self {
        #(#clear_storage)*
        self.#field.set(value.into());
        self
      }

      pub fn #setter_name(mut self, value: impl ::core::convert::Into<#ty>) -> Self {
        self.#mutator(value);
        self
      }
    }
  }

  fn generate_function(function: &FunctionSpec) -> TokenStream {
    match function {
      FunctionSpec::NestedDsl(spec) => Self::generate_nested_dsl(spec),
      FunctionSpec::CollectionScope(spec) => Self::generate_collection_scope(spec),
      FunctionSpec::InlineInsert(spec) => Self::generate_inline_insert(spec),
    }
  }

  fn generate_nested_dsl(spec: &NestedDslFunSpec) -> TokenStream {
    let name = &spec.name;
    let field = &spec.property;
    let builder_type = &spec.builder;
    let builder_expr = turbofish(&spec.builder);
    let result = if spec.nullable {
      quote! { builder.build().map(::core::option::Option::Some) }
    } else {
      quote! { builder.build() }
    };

    quote! {
      pub fn #name(&mut self, block: impl ::core::ops::FnOnce(&mut #builder_type)) -> &mut Self {
        let mut builder = #builder_expr::new();
        block(&mut builder);
        self.#field.assign(#result);
        self
      }
    }
  }

  fn generate_collection_scope(spec: &CollectionScopeFunSpec) -> TokenStream {
    let name = &spec.name;
    let field = &spec.property;
    let scope_type = &spec.scope;
    let scope_expr = turbofish(&spec.scope);
    let value = wrap_nullable(quote! { scope.collection.into_collection() }, spec.nullable);

    quote! {
      pub fn #name(&mut self, block: impl ::core::ops::FnOnce(&mut #scope_type)) -> &mut Self {
        let mut scope = #scope_expr::new();
        block(&mut scope);
        self.#field.set(#value);
        self
      }
    }
  }

  fn generate_inline_insert(spec: &InlineInsertFunSpec) -> TokenStream {
    let name = &spec.name;
    let storage = &spec.storage;
    let element = &spec.element;

    quote! {
      pub fn #name(&mut self, item: #element) -> &mut Self {
        self
          .#storage
          .get_or_insert_with(::core::default::Default::default)
          .push(item);
        self
      }
    }
  }

  fn generate_build(&self) -> TokenStream {
    let support = self.support;
    let build = &self.spec.build_function;
    let class_type = &build.class_type;
    let class_expr = turbofish(class_type);
    let constructor = &build.constructor;
    let builder_name = Literal::string(self.spec.builder_name.as_str());

    let receiver = if self.spec.inline_storages.is_empty() {
      quote! { self }
    } else {
      quote! { mut self }
    };
    let flushes = self.spec.inline_storages.iter().map(|storage| {
      let field = &storage.property;
      let items = &storage.name;
      let value = wrap_nullable(quote! { items.into_collection() }, storage.nullable);
      quote! {
        if let ::core::option::Option::Some(items) = self.#items.take() {
          self.#field.set(#value);
        }
      }
    });
    let arguments = build.arguments.iter().map(|argument| {
      let property = Literal::string(argument.as_str());
      quote! { self.#argument.into_value(#builder_name, #property)? }
    });

    quote! {
      pub fn build(#receiver) -> ::core::result::Result<#class_type, #support::BuildError> {
        #(#flushes)*
        ::core::result::Result::Ok(#class_expr::#constructor(#(#arguments),*))
      }
    }
  }
}

fn wrap_nullable(value: TokenStream, nullable: bool) -> TokenStream {
  if nullable {
    quote! { ::core::option::Option::Some(#value) }
  } else {
    value
  }
}
