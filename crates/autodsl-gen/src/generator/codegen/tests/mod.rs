mod builder;

use crate::generator::{
  ast::{
    BuildFunSpec, CollectionScopeFunSpec, CollectionScopeSpec, EntryFunSpec, FunctionSpec, GeneratedBuilderSpec,
    InlineInsertFunSpec, InlineStorageSpec, NameToken, NestedDslFunSpec, PropertyInit, PropertySpec, SetterSpec,
  },
  model::{TypeParameter, TypeRef, Variance},
};

fn property(name: &str, type_ref: TypeRef) -> (PropertySpec, SetterSpec) {
  let initial = if type_ref.nullable {
    PropertyInit::Absent
  } else {
    PropertyInit::Unset
  };
  let mutator = format!("set_{name}");
  (
    PropertySpec::builder()
      .name(name)
      .mutator(mutator.as_str())
      .type_ref(type_ref.clone())
      .initial(initial)
      .build(),
    SetterSpec::builder()
      .name(format!("with_{name}"))
      .mutator(mutator)
      .type_ref(type_ref)
      .build(),
  )
}

/// `Person(name: String, nickname: String?, phones: Vec<String>,
/// tags: Vec<String> inline, home: Address?)`.
pub(super) fn person_spec(internal: bool) -> GeneratedBuilderSpec {
  let string = || TypeRef::new("String");
  let strings = || TypeRef::new("Vec").with_arguments(vec![string()]);
  let (properties, setters): (Vec<_>, Vec<_>) = [
    property("name", string()),
    property("nickname", string().with_nullable(true)),
    property("phones", strings()),
    property("tags", strings()),
    property("home", TypeRef::new("Address").with_nullable(true)),
  ]
  .into_iter()
  .unzip();

  let container = TypeRef::new("::std::vec::Vec").with_arguments(vec![string()]);
  GeneratedBuilderSpec::builder()
    .builder_name("PersonBuilder")
    .class_name("Person")
    .package("crate::model")
    .module_name("person_builder")
    .internal(internal)
    .imports(vec![
      "crate::model::*".to_string(),
      "super::address_builder::AddressBuilder".to_string(),
    ])
    .properties(properties)
    .setters(setters)
    .functions(vec![
      FunctionSpec::CollectionScope(
        CollectionScopeFunSpec::builder()
          .name("phones")
          .property("phones")
          .scope(TypeRef::new("PhonesCollection"))
          .build(),
      ),
      FunctionSpec::InlineInsert(
        InlineInsertFunSpec::builder()
          .name("add_tags")
          .storage("tags_items")
          .element(string())
          .build(),
      ),
      FunctionSpec::NestedDsl(
        NestedDslFunSpec::builder()
          .name("location")
          .property("home")
          .builder(TypeRef::new("AddressBuilder"))
          .nullable(true)
          .build(),
      ),
    ])
    .inline_storages(vec![
      InlineStorageSpec::builder()
        .name("tags_items")
        .property("tags")
        .container(container.clone())
        .build(),
    ])
    .nested_types(vec![
      CollectionScopeSpec::builder()
        .name("PhonesCollection")
        .element(string())
        .container(container)
        .build(),
    ])
    .build_function(
      BuildFunSpec::builder()
        .class_type(TypeRef::new("Person"))
        .constructor("new")
        .arguments(
          ["name", "nickname", "phones", "tags", "home"]
            .into_iter()
            .map(NameToken::from)
            .collect::<Vec<_>>(),
        )
        .build(),
    )
    .entry_function(EntryFunSpec::builder().name("person").internal(internal).build())
    .build()
}

/// `Pair<A, B: Clone>(first: A, second: B)` with a raw-identifier property.
pub(super) fn pair_spec() -> GeneratedBuilderSpec {
  let type_parameters = vec![
    TypeParameter {
      name: "A".to_string(),
      variance: Variance::Invariant,
      bounds: vec![],
    },
    TypeParameter {
      name: "B".to_string(),
      variance: Variance::Out,
      bounds: vec![TypeRef::new("Clone")],
    },
  ];
  let (properties, setters): (Vec<_>, Vec<_>) = [property("first", TypeRef::new("A")), property("type", TypeRef::new("B"))]
    .into_iter()
    .unzip();

  GeneratedBuilderSpec::builder()
    .builder_name("PairBuilder")
    .class_name("Pair")
    .package("crate::model")
    .module_name("pair_builder")
    .type_parameters(type_parameters)
    .imports(vec!["crate::model::*".to_string()])
    .properties(properties)
    .setters(setters)
    .build_function(
      BuildFunSpec::builder()
        .class_type(TypeRef::new("Pair").with_arguments(vec![TypeRef::new("A"), TypeRef::new("B")]))
        .constructor("new")
        .arguments(vec![NameToken::from("first"), NameToken::from("type")])
        .build(),
    )
    .entry_function(EntryFunSpec::builder().name("pair").build())
    .build()
}
