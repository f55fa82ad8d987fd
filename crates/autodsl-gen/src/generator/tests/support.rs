use serde_json::{Value, json};

use crate::{
  descriptor::DescriptorFile,
  generator::{
    context::ProcessingContext,
    metadata::{ClassFacts, read_class},
    orchestrator::{GenerationOutput, Orchestrator},
    registry::{DEFAULT_SUPPORT_PATH, TypeRegistry},
  },
};

pub(super) const PACKAGE: &str = "crate::model";

pub(super) fn ty(name: &str) -> Value {
  json!({ "name": name })
}

pub(super) fn generic(name: &str, arguments: &[Value]) -> Value {
  json!({ "name": name, "arguments": arguments })
}

pub(super) fn param(name: &str, type_ref: Value) -> Value {
  json!({ "name": name, "type": type_ref })
}

pub(super) fn with_override(mut parameter: Value, concrete_type: Option<&str>, inline: bool) -> Value {
  parameter["directives"] = json!({
    "collection_override": { "concrete_type": concrete_type, "inline": inline }
  });
  parameter
}

/// A public final class with one public `new` constructor. Parameters named
/// in `nullable` are nullable in the metadata view.
pub(super) fn class(name: &str, parameters: Vec<Value>, nullable: &[&str]) -> Value {
  let metadata_parameters: Vec<Value> = parameters
    .iter()
    .map(|parameter| {
      let name = parameter["name"].as_str().unwrap_or_default();
      json!({ "name": name, "nullable": nullable.contains(&name) })
    })
    .collect();
  json!({
    "name": name,
    "package": PACKAGE,
    "directives": { "generate": {} },
    "constructors": [{ "function": "new", "parameters": parameters }],
    "metadata": {
      "kind": "class",
      "visibility": "public",
      "modality": "final",
      "constructors": [{ "visibility": "public", "parameters": metadata_parameters }]
    }
  })
}

pub(super) fn descriptor(classes: Vec<Value>) -> DescriptorFile {
  descriptor_with_types(classes, vec![])
}

pub(super) fn descriptor_with_types(classes: Vec<Value>, types: Vec<Value>) -> DescriptorFile {
  let value = json!({ "format_version": 1, "classes": classes, "types": types });
  DescriptorFile::from_json(&value.to_string()).expect("test descriptor should parse")
}

pub(super) fn registry(descriptor: &DescriptorFile) -> TypeRegistry {
  TypeRegistry::new(descriptor, DEFAULT_SUPPORT_PATH)
}

/// Reads the first class of `descriptor` with a fresh context.
pub(super) fn read_first(descriptor: &DescriptorFile) -> (ClassFacts, usize) {
  let registry = registry(descriptor);
  let mut context = ProcessingContext::new(&registry);
  let facts = read_class(&descriptor.classes[0], &mut context).expect("class should be readable");
  (facts, context.diagnostics().len())
}

pub(super) fn run(descriptor: DescriptorFile) -> GenerationOutput {
  Orchestrator::new(descriptor, None, None, DEFAULT_SUPPORT_PATH)
    .expect("default support path is valid")
    .synthesize()
}
