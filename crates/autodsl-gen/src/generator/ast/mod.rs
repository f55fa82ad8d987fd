//! Output of the builder synthesizer: a complete, language-neutral
//! description of one generated builder, consumed once by the emitter.

pub mod lints;
pub mod tokens;

pub use tokens::NameToken;

use crate::generator::model::{TypeParameter, TypeRef};

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct GeneratedBuilderSpec {
  #[builder(into)]
  pub builder_name: NameToken,
  #[builder(into)]
  pub class_name: String,
  #[builder(into)]
  pub package: String,
  #[builder(into)]
  pub module_name: String,
  #[builder(default)]
  pub internal: bool,
  #[builder(default)]
  pub type_parameters: Vec<TypeParameter>,
  /// `use` trees, e.g. `crate::model::*`.
  #[builder(default)]
  pub imports: Vec<String>,
  /// One per constructor parameter, in declaration order.
  #[builder(default)]
  pub properties: Vec<PropertySpec>,
  /// One per constructor parameter, in declaration order.
  #[builder(default)]
  pub setters: Vec<SetterSpec>,
  #[builder(default)]
  pub functions: Vec<FunctionSpec>,
  #[builder(default)]
  pub inline_storages: Vec<InlineStorageSpec>,
  #[builder(default)]
  pub nested_types: Vec<CollectionScopeSpec>,
  pub build_function: BuildFunSpec,
  pub entry_function: EntryFunSpec,
}

impl GeneratedBuilderSpec {
  pub fn is_generic(&self) -> bool {
    !self.type_parameters.is_empty()
  }

  /// The builder applied to the class type parameters, e.g. `PairBuilder<A, B>`.
  pub fn self_type(&self) -> TypeRef {
    TypeRef::new(self.builder_name.as_str()).with_arguments(
      self
        .type_parameters
        .iter()
        .map(|param| TypeRef::new(param.name.clone()))
        .collect(),
    )
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyInit {
  /// Required: must be assigned before `build`.
  #[default]
  Unset,
  /// Nullable: starts as `None`.
  Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct PropertySpec {
  #[builder(into)]
  pub name: NameToken,
  #[builder(into)]
  pub mutator: NameToken,
  /// Full property type, `Option` included for nullable parameters.
  pub type_ref: TypeRef,
  #[builder(default)]
  pub initial: PropertyInit,
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct SetterSpec {
  #[builder(into)]
  pub name: NameToken,
  #[builder(into)]
  pub mutator: NameToken,
  pub type_ref: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionSpec {
  NestedDsl(NestedDslFunSpec),
  CollectionScope(CollectionScopeFunSpec),
  InlineInsert(InlineInsertFunSpec),
}

impl FunctionSpec {
  pub fn name(&self) -> &NameToken {
    match self {
      Self::NestedDsl(spec) => &spec.name,
      Self::CollectionScope(spec) => &spec.name,
      Self::InlineInsert(spec) => &spec.name,
    }
  }
}

/// Configures a nested builder and assigns its result to `property`.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct NestedDslFunSpec {
  #[builder(into)]
  pub name: NameToken,
  #[builder(into)]
  pub property: NameToken,
  /// The nested builder applied to the parameter's type arguments.
  pub builder: TypeRef,
  #[builder(default)]
  pub nullable: bool,
}

/// Fills a collection scope and assigns its contents to `property`.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct CollectionScopeFunSpec {
  #[builder(into)]
  pub name: NameToken,
  #[builder(into)]
  pub property: NameToken,
  /// The scope type applied to its type arguments.
  pub scope: TypeRef,
  #[builder(default)]
  pub nullable: bool,
}

/// Appends one element to the builder-held storage of `property`.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct InlineInsertFunSpec {
  #[builder(into)]
  pub name: NameToken,
  #[builder(into)]
  pub storage: NameToken,
  pub element: TypeRef,
}

/// Builder field accumulating inline insertions until `build`.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct InlineStorageSpec {
  #[builder(into)]
  pub name: NameToken,
  #[builder(into)]
  pub property: NameToken,
  /// Concrete container applied to the element type.
  pub container: TypeRef,
  #[builder(default)]
  pub nullable: bool,
}

/// Separate type exposing only the insertion operation of one collection.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct CollectionScopeSpec {
  #[builder(into)]
  pub name: NameToken,
  /// Class type parameters the element type mentions.
  #[builder(default)]
  pub type_parameters: Vec<TypeParameter>,
  pub element: TypeRef,
  /// Concrete container applied to the element type.
  pub container: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct BuildFunSpec {
  /// The class applied to its type parameters.
  pub class_type: TypeRef,
  #[builder(into)]
  pub constructor: NameToken,
  /// Properties passed to the constructor, in declaration order.
  #[builder(default)]
  pub arguments: Vec<NameToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct EntryFunSpec {
  #[builder(into)]
  pub name: NameToken,
  #[builder(default)]
  pub internal: bool,
}
