use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

use super::{pair_spec, person_spec};
use crate::generator::{
  ast::lints::LintConfig,
  codegen::{FileHeader, generate_builder_module, generate_source, mod_file::ModFileGenerator},
};

fn support() -> Path {
  syn::parse_str("::autodsl_support").unwrap()
}

fn header() -> FileHeader {
  FileHeader::new("Builder for `Person`", "model.json", "0.1.0")
}

#[test]
fn test_file_header() {
  assert_eq!(
    header().to_string(),
    "//! AUTO-GENERATED CODE - DO NOT EDIT!\n//!\n//! Builder for `Person`\n//! Source: model.json\n//! Generated by `autodsl-gen` v0.1.0\n\n"
  );
}

#[test]
fn test_builder_module_layout() {
  let code = generate_builder_module(&person_spec(false), &support(), &header()).unwrap();

  assert!(code.starts_with(&header().to_string()));
  assert!(code.contains("#![allow(clippy::new_without_default)]"));
  assert!(code.contains("use crate::model::*;"));
  assert!(code.contains("use super::address_builder::AddressBuilder;"));
  assert!(code.contains("pub struct PersonBuilder {"));
  assert!(code.contains("name: ::autodsl_support::Slot<String>,"));
  assert!(code.contains("nickname: ::autodsl_support::Slot<::core::option::Option<String>>,"));
  assert!(code.contains("nickname: ::autodsl_support::Slot::absent(),"));
  assert!(code.contains("name: ::autodsl_support::Slot::Unset,"));
  assert!(code.contains("tags_items: ::core::option::Option::None,"));
  assert!(code.contains("pub fn new() -> Self {"));
  assert!(code.contains("pub fn set_name("));
  assert!(code.contains("pub fn with_name("));
  assert!(code.contains("self.set_name(value);"));
  assert!(code.contains("self.tags_items = ::core::option::Option::None;"));
  assert!(code.contains("pub fn add_tags(&mut self, item: String) -> &mut Self {"));
  assert!(code.contains("let mut scope = PhonesCollection::new();"));
  assert!(code.contains("self.phones.set(scope.collection.into_collection());"));
  assert!(code.contains("let mut builder = AddressBuilder::new();"));
  assert!(code.contains("self.home.assign(builder.build().map(::core::option::Option::Some));"));
  assert!(code.contains("if let ::core::option::Option::Some(items) = self.tags_items.take() {"));
  assert!(code.contains("self.tags.set(items.into_collection());"));
  assert!(code.contains("self.name.into_value(\"PersonBuilder\", \"name\")?"));
  assert!(code.contains("pub struct PhonesCollection {"));
  assert!(code.contains("collection: ::autodsl_support::Collector<::std::vec::Vec<String>>,"));
  assert!(code.contains("pub fn add(&mut self, item: String) -> &mut Self {"));
  assert!(code.contains("pub fn person("));
}

#[test]
fn test_builder_members_keep_declaration_order() {
  let code = generate_builder_module(&person_spec(false), &support(), &header()).unwrap();
  let position = |needle: &str| code.find(needle).unwrap_or_else(|| panic!("missing {needle}"));

  assert!(position("pub struct PersonBuilder") < position("impl ::core::default::Default for PersonBuilder"));
  assert!(position("pub fn set_name") < position("pub fn set_nickname"));
  assert!(position("pub fn set_home") < position("pub fn phones"));
  assert!(position("pub fn location") < position("pub fn build"));
  assert!(position("pub fn build") < position("pub struct PhonesCollection"));
  assert!(position("pub struct PhonesCollection") < position("pub fn person"));
}

#[test]
fn test_internal_builder_visibility() {
  let code = generate_builder_module(&person_spec(true), &support(), &header()).unwrap();
  assert!(code.contains("pub(crate) struct PersonBuilder {"));
  assert!(code.contains("pub(crate) struct PhonesCollection {"));
  assert!(code.contains("pub(crate) fn person("));
  // Members stay `pub`; the type bounds their reach.
  assert!(code.contains("pub fn set_name("));
}

#[test]
fn test_generic_builder() {
  let code = generate_builder_module(&pair_spec(), &support(), &header()).unwrap();

  assert!(code.contains("pub struct PairBuilder<A, B: Clone> {"));
  assert!(code.contains("_phantom: ::core::marker::PhantomData<"));
  assert!(code.contains("_phantom: ::core::marker::PhantomData,"));
  assert!(code.contains("impl<A, B: Clone> ::core::default::Default for PairBuilder<A, B> {"));
  assert!(code.contains("impl<A, B: Clone> PairBuilder<A, B> {"));
  assert!(code.contains("pub fn pair<A, B: Clone>("));
  assert!(code.contains("let mut builder = PairBuilder::<A, B>::new();"));
}

#[test]
fn test_keyword_property_is_raw() {
  let code = generate_builder_module(&pair_spec(), &support(), &header()).unwrap();
  assert!(code.contains("r#type: ::autodsl_support::Slot<B>,"));
  assert!(code.contains("pub fn set_type("));
  assert!(code.contains("self.r#type.into_value(\"PairBuilder\", \"type\")?"));
}

/// Whether the emitted `build` method takes `mut self`.
fn build_takes_mut_self(code: &str) -> bool {
  let file = syn::parse_file(code).unwrap();
  file
    .items
    .iter()
    .filter_map(|item| match item {
      syn::Item::Impl(block) => Some(block),
      _ => None,
    })
    .flat_map(|block| &block.items)
    .find_map(|item| match item {
      syn::ImplItem::Fn(function) if function.sig.ident == "build" => function.sig.receiver(),
      _ => None,
    })
    .map(|receiver| receiver.mutability.is_some())
    .unwrap()
}

#[test]
fn test_build_receiver_follows_inline_storages() {
  let pair = generate_builder_module(&pair_spec(), &support(), &header()).unwrap();
  assert!(!build_takes_mut_self(&pair));
  assert!(!pair.contains("take()"));
  assert!(!pair.contains("::core::option::Option::None;"));

  let person = generate_builder_module(&person_spec(false), &support(), &header()).unwrap();
  assert!(build_takes_mut_self(&person));
}

#[test]
fn test_mod_file() {
  let specs = [person_spec(true), pair_spec()];
  let header = FileHeader::new("Generated builders", "model.json", "0.1.0");
  let code = ModFileGenerator::new(&specs).generate(&header).unwrap();

  assert!(code.starts_with("//! AUTO-GENERATED CODE - DO NOT EDIT!\n"));
  assert!(code.contains("pub(crate) mod person_builder;"));
  assert!(code.contains("pub(crate) use person_builder::{PersonBuilder, person};"));
  assert!(code.contains("pub mod pair_builder;"));
  assert!(code.contains("pub use pair_builder::{PairBuilder, pair};"));
  assert!(!code.contains("#![allow"));
}

#[test]
fn test_generate_source_rejects_invalid_code() {
  let code: TokenStream = quote! { fn };
  assert!(generate_source(&code, &header(), Some(&LintConfig::default())).is_err());
}
