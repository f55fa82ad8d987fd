use serde_json::json;

use super::support::{class, descriptor, generic, param, registry, ty, with_override};
use crate::{
  descriptor::DescriptorFile,
  generator::{
    ast::{FunctionSpec, GeneratedBuilderSpec, PropertyInit},
    context::ProcessingContext,
    errors::ProcessingError,
    model::TypeRef,
    orchestrator::process_class,
  },
};

fn synthesize_first(descriptor: &DescriptorFile) -> Result<GeneratedBuilderSpec, ProcessingError> {
  let registry = registry(descriptor);
  let mut context = ProcessingContext::new(&registry);
  process_class(&descriptor.classes[0], &mut context)
}

fn single(parameters: Vec<serde_json::Value>, nullable: &[&str]) -> GeneratedBuilderSpec {
  synthesize_first(&descriptor(vec![class("Person", parameters, nullable)])).unwrap()
}

fn collision(parameters: Vec<serde_json::Value>) -> ProcessingError {
  synthesize_first(&descriptor(vec![class("Person", parameters, &[])])).unwrap_err()
}

fn function_names(spec: &GeneratedBuilderSpec) -> Vec<&str> {
  spec.functions.iter().map(|function| function.name().as_str()).collect()
}

#[test]
fn test_one_property_and_setter_per_parameter_in_order() {
  let spec = single(
    vec![param("name", ty("String")), param("age", ty("i32")), param("nickname", ty("String"))],
    &["nickname"],
  );

  assert_eq!(spec.builder_name, "PersonBuilder");
  assert_eq!(spec.module_name, "person_builder");
  assert_eq!(spec.imports, vec!["crate::model::*".to_string()]);

  let properties: Vec<_> = spec
    .properties
    .iter()
    .map(|property| (property.name.as_str(), property.mutator.as_str(), property.initial))
    .collect();
  assert_eq!(
    properties,
    vec![
      ("name", "set_name", PropertyInit::Unset),
      ("age", "set_age", PropertyInit::Unset),
      ("nickname", "set_nickname", PropertyInit::Absent),
    ]
  );
  let setters: Vec<_> = spec.setters.iter().map(|setter| setter.name.as_str()).collect();
  assert_eq!(setters, vec!["with_name", "with_age", "with_nickname"]);
  assert_eq!(spec.properties[2].type_ref, TypeRef::new("String").with_nullable(true));
  assert!(spec.functions.is_empty());
}

#[test]
fn test_build_function_passes_properties_to_constructor() {
  let mut value = class("Person", vec![param("name", ty("String")), param("age", ty("i32"))], &[]);
  value["constructors"][0]["function"] = json!("create");
  let spec = synthesize_first(&descriptor(vec![value])).unwrap();

  assert_eq!(spec.build_function.constructor, "create");
  assert_eq!(spec.build_function.class_type, TypeRef::new("Person"));
  let arguments: Vec<_> = spec.build_function.arguments.iter().map(|arg| arg.as_str()).collect();
  assert_eq!(arguments, vec!["name", "age"]);
}

#[test]
fn test_entry_function_name_and_visibility() {
  let mut value = class("HTTPServer", vec![], &[]);
  value["metadata"]["visibility"] = json!("internal");
  let spec = synthesize_first(&descriptor(vec![value])).unwrap();
  assert_eq!(spec.entry_function.name, "hTTPServer");
  assert!(spec.entry_function.internal);
  assert!(spec.internal);

  let mut value = class("Person", vec![], &[]);
  value["directives"]["generate"]["name"] = json!("human");
  let spec = synthesize_first(&descriptor(vec![value])).unwrap();
  assert_eq!(spec.entry_function.name, "human");
}

#[test]
fn test_shared_display_name_collides() {
  let mut address = class("Address", vec![param("city", ty("String"))], &[]);
  address["directives"]["generate"]["name"] = json!("location");
  let descriptor = descriptor(vec![
    class(
      "Person",
      vec![param("home", ty("Address")), param("work", ty("Address"))],
      &["work"],
    ),
    address,
  ]);
  let err = synthesize_first(&descriptor).unwrap_err();
  // Both parameters produce a `location` function.
  assert_eq!(
    err,
    ProcessingError::NameCollision {
      builder: "PersonBuilder".to_string(),
      member: "location".to_string(),
    }
  );
}

#[test]
fn test_nested_dsl_function_named_after_parameter() {
  let descriptor = descriptor(vec![
    class("Person", vec![param("home", ty("Address"))], &["home"]),
    class("Address", vec![param("city", ty("String"))], &[]),
  ]);
  let spec = synthesize_first(&descriptor).unwrap();

  assert_eq!(function_names(&spec), vec!["home"]);
  let FunctionSpec::NestedDsl(nested) = &spec.functions[0] else {
    panic!("expected nested DSL function");
  };
  assert_eq!(nested.property, "home");
  assert_eq!(nested.builder, TypeRef::new("AddressBuilder"));
  assert!(nested.nullable);
  assert_eq!(
    spec.imports,
    vec![
      "crate::model::*".to_string(),
      "super::address_builder::AddressBuilder".to_string()
    ]
  );
}

#[test]
fn test_self_referencing_nested_builder_needs_no_import() {
  let descriptor = descriptor(vec![class("Node", vec![param("next", ty("Node"))], &["next"])]);
  let spec = synthesize_first(&descriptor).unwrap();
  assert_eq!(function_names(&spec), vec!["next"]);
  assert_eq!(spec.imports, vec!["crate::model::*".to_string()]);
}

#[test]
fn test_nested_builder_carries_type_arguments() {
  let mut pair = class("Pair", vec![param("first", ty("A")), param("second", ty("B"))], &[]);
  pair["metadata"]["type_parameters"] = json!([{ "name": "A" }, { "name": "B" }]);
  let descriptor = descriptor(vec![
    class("Holder", vec![param("pair", generic("Pair", &[ty("String"), ty("i32")]))], &[]),
    pair,
  ]);
  let spec = synthesize_first(&descriptor).unwrap();
  let FunctionSpec::NestedDsl(nested) = &spec.functions[0] else {
    panic!("expected nested DSL function");
  };
  assert_eq!(
    nested.builder,
    TypeRef::new("PairBuilder").with_arguments(vec![TypeRef::new("String"), TypeRef::new("i32")])
  );
}

#[test]
fn test_collection_scope() {
  let spec = single(vec![param("phones", generic("Vec", &[ty("String")]))], &[]);

  assert_eq!(function_names(&spec), vec!["phones"]);
  assert_eq!(spec.nested_types.len(), 1);
  let scope = &spec.nested_types[0];
  assert_eq!(scope.name, "PhonesCollection");
  assert_eq!(scope.element, TypeRef::new("String"));
  assert_eq!(scope.container.to_rust_type(), "::std::vec::Vec<String>");
  assert!(scope.type_parameters.is_empty());
  assert!(spec.inline_storages.is_empty());
}

#[test]
fn test_collection_scope_keeps_only_mentioned_type_parameters() {
  let mut value = class(
    "Table",
    vec![param("rows", generic("Vec", &[generic("Row", &[ty("V")])]))],
    &[],
  );
  value["metadata"]["type_parameters"] = json!([{ "name": "K" }, { "name": "V", "bounds": [{ "name": "Clone" }] }]);
  let spec = synthesize_first(&descriptor(vec![value])).unwrap();

  let scope = &spec.nested_types[0];
  let names: Vec<_> = scope.type_parameters.iter().map(|param| param.name.as_str()).collect();
  assert_eq!(names, vec!["V"]);
  let FunctionSpec::CollectionScope(function) = &spec.functions[0] else {
    panic!("expected collection scope function");
  };
  assert_eq!(
    function.scope,
    TypeRef::new("RowsCollection").with_arguments(vec![TypeRef::new("V")])
  );
  assert_eq!(
    spec.self_type(),
    TypeRef::new("TableBuilder").with_arguments(vec![TypeRef::new("K"), TypeRef::new("V")])
  );
}

#[test]
fn test_inline_insertion() {
  let spec = single(
    vec![with_override(
      param("tags", generic("HashSet", &[ty("String")])),
      Some("BTreeSet"),
      true,
    )],
    &["tags"],
  );

  assert_eq!(function_names(&spec), vec!["add_tags"]);
  assert!(spec.nested_types.is_empty());
  let storage = &spec.inline_storages[0];
  assert_eq!(storage.name, "tags_items");
  assert_eq!(storage.property, "tags");
  assert!(storage.nullable);
  assert_eq!(storage.container.to_rust_type(), "::std::collections::BTreeSet<String>");
}

#[test]
fn test_collection_function_colliding_with_build() {
  assert_eq!(
    collision(vec![param("build", generic("Vec", &[ty("String")]))]),
    ProcessingError::NameCollision {
      builder: "PersonBuilder".to_string(),
      member: "build".to_string(),
    }
  );
}

#[test]
fn test_inline_storage_colliding_with_property() {
  let err = collision(vec![
    with_override(param("tags", generic("Vec", &[ty("String")])), None, true),
    param("tags_items", ty("u32")),
  ]);
  assert_eq!(
    err,
    ProcessingError::NameCollision {
      builder: "PersonBuilder".to_string(),
      member: "tags_items".to_string(),
    }
  );
}

#[test]
fn test_scope_types_colliding() {
  let err = collision(vec![
    param("phones", generic("Vec", &[ty("String")])),
    param("Phones", generic("Vec", &[ty("String")])),
  ]);
  assert_eq!(
    err,
    ProcessingError::NameCollision {
      builder: "PersonBuilder".to_string(),
      member: "PhonesCollection".to_string(),
    }
  );
}

#[test]
fn test_phantom_field_collision_on_generic_class() {
  let mut value = class("Wrapper", vec![param("_phantom", ty("T"))], &[]);
  value["metadata"]["type_parameters"] = json!([{ "name": "T" }]);
  let err = synthesize_first(&descriptor(vec![value])).unwrap_err();
  assert!(matches!(err, ProcessingError::NameCollision { member, .. } if member == "_phantom"));
}

#[test]
fn test_phantom_named_parameter_on_plain_class_is_fine() {
  let spec = single(vec![param("_phantom", ty("u8"))], &[]);
  assert_eq!(spec.properties.len(), 1);
}
