use serde_json::json;

use super::*;

fn parse(value: &serde_json::Value) -> Result<DescriptorFile, DescriptorError> {
  DescriptorFile::from_json(&value.to_string())
}

#[test]
fn test_minimal_descriptor() {
  let file = parse(&json!({ "format_version": 1 })).unwrap();
  assert_eq!(file.format_version, FORMAT_VERSION);
  assert!(file.generated_sources_root.is_none());
  assert!(file.classes.is_empty());
  assert!(file.types.is_empty());
}

#[test]
fn test_unsupported_format_version() {
  let err = parse(&json!({ "format_version": 2 })).unwrap_err();
  assert!(matches!(
    err,
    DescriptorError::UnsupportedFormatVersion { found: 2, supported: 1 }
  ));
  assert_eq!(
    err.to_string(),
    "unsupported descriptor format version 2 (supported: 1)"
  );
}

#[test]
fn test_parse_error_names_the_failing_path() {
  let err = parse(&json!({
    "format_version": 1,
    "classes": [{
      "name": "Person",
      "package": "crate::model",
      "constructors": [{ "parameters": [{ "name": "name", "type": { "arguments": [] } }] }]
    }]
  }))
  .unwrap_err();

  let DescriptorError::Parse { path, .. } = &err else {
    panic!("expected a parse error, got {err:?}");
  };
  assert!(path.starts_with("classes[0].constructors[0].parameters[0]"), "{path}");
  assert!(err.to_string().contains("missing field `name`"));
}

#[test]
fn test_unknown_enum_value_is_rejected() {
  let err = parse(&json!({
    "format_version": 1,
    "classes": [{
      "name": "Person",
      "package": "crate::model",
      "metadata": { "kind": "record", "visibility": "public", "modality": "final" }
    }]
  }))
  .unwrap_err();
  assert!(matches!(err, DescriptorError::Parse { ref path, .. } if path == "classes[0].metadata.kind"));
}

#[test]
fn test_defaults() {
  let file = parse(&json!({
    "format_version": 1,
    "classes": [{
      "name": "Person",
      "package": "crate::model",
      "constructors": [{ "parameters": [{ "name": "name", "type": { "name": "String" } }] }],
      "metadata": {
        "kind": "class",
        "visibility": "public",
        "modality": "final",
        "type_parameters": [{ "name": "T" }]
      }
    }],
    "types": [{ "name": "Address" }]
  }))
  .unwrap();

  let class = &file.classes[0];
  assert!(class.directives.generate.is_none());

  let constructor = &class.constructors[0];
  assert_eq!(constructor.function, "new");
  assert!(!constructor.directives.canonical_constructor);
  let parameter = &constructor.parameters[0];
  assert_eq!(parameter.type_ref, RawType {
    name: "String".to_string(),
    arguments: vec![],
    nullable: false,
  });
  assert!(parameter.directives.collection_override.is_none());

  let metadata = class.metadata.as_ref().unwrap();
  assert_eq!(metadata.nesting, RawNesting::TopLevel);
  assert_eq!(metadata.type_parameters[0].variance, RawVariance::Invariant);
  assert!(metadata.type_parameters[0].bounds.is_empty());

  let known = &file.types[0];
  assert_eq!(known.kind, RawClassKind::Class);
  assert_eq!(known.modality, RawModality::Final);
  assert!(known.path.is_none());
  assert!(known.generate.is_none());
}

#[test]
fn test_display_name() {
  let directive = |name: &str| GenerateDirective { name: name.to_string() };
  assert_eq!(directive("").display_name(), None);
  assert_eq!(directive("   ").display_name(), None);
  assert_eq!(directive(" location ").display_name(), Some("location"));
}

#[test]
fn test_generation_targets_keep_declaration_order() {
  let class = |name: &str, generate: bool| {
    let directives = if generate { json!({ "generate": {} }) } else { json!({}) };
    json!({ "name": name, "package": "crate::model", "directives": directives })
  };
  let file = parse(&json!({
    "format_version": 1,
    "classes": [class("Team", true), class("Secret", false), class("Address", true)]
  }))
  .unwrap();

  let targets: Vec<&str> = file.generation_targets().map(|class| class.name.as_str()).collect();
  assert_eq!(targets, ["Team", "Address"]);
}

#[test]
fn test_people_fixture() {
  let file = DescriptorFile::from_slice(include_bytes!("../../fixtures/people.json")).unwrap();
  assert_eq!(
    file.generated_sources_root.as_deref(),
    Some(std::path::Path::new("src/generated"))
  );

  let address = file.classes.iter().find(|class| class.name == "Address").unwrap();
  let directive = address.directives.generate.as_ref().unwrap();
  assert_eq!(directive.display_name(), Some("location"));
  assert_eq!(address.constructors[0].function, "of");

  let person = &file.classes[0];
  let tags = &person.constructors[0].parameters[4];
  assert_eq!(tags.name, "tags");
  assert_eq!(
    tags.directives.collection_override,
    Some(CollectionOverride {
      concrete_type: None,
      inline: true,
    })
  );
}

#[test]
fn test_serialization_skips_empty_fields() {
  let file = parse(&json!({
    "format_version": 1,
    "classes": [{ "name": "Person", "package": "crate::model" }]
  }))
  .unwrap();
  let value = serde_json::to_value(&file).unwrap();

  assert!(value.get("generated_sources_root").is_none());
  assert!(value["classes"][0].get("metadata").is_none());
  assert_eq!(value["classes"][0]["directives"], json!({}));
  assert_eq!(DescriptorFile::from_json(&value.to_string()).unwrap(), file);
}
