//! Turns a descriptor class entry into a [`ClassDescriptor`] plus the raw
//! constructor facts the later stages need.
//!
//! The binary-level view (`constructors`) provides names, types and
//! directives; the language-level view (`metadata`) provides structural flags
//! and per-parameter nullability. Both are paired by declaration order.

use std::collections::HashSet;

use crate::{
  descriptor::{ClassEntry, ClassMetadata, ConstructorEntry, ConstructorMetadata, RawType},
  generator::{
    context::{Diagnostic, ProcessingContext},
    errors::ProcessingError,
    model::{
      ClassDescriptor, CollectionOverrideFacts, ConstructorFacts, ParameterFacts, TypeParameter, TypeRef, Variance,
    },
    naming::identifiers::{is_valid_identifier, is_valid_path},
  },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFacts {
  pub class: ClassDescriptor,
  pub constructors: Vec<ConstructorFacts>,
}

pub(crate) fn read_class(entry: &ClassEntry, context: &mut ProcessingContext<'_>) -> Result<ClassFacts, ProcessingError> {
  let metadata = entry.metadata.as_ref().ok_or_else(|| ProcessingError::NotIntrospectable {
    class: entry.name.clone(),
  })?;

  check_name(&entry.name, &entry.name, "class name", is_valid_identifier)?;
  check_name(&entry.name, &entry.package, "package path", is_valid_path)?;

  let display_name = entry
    .directives
    .generate
    .as_ref()
    .and_then(|directive| directive.display_name())
    .map(str::to_string);
  if let Some(name) = &display_name {
    check_name(&entry.name, name, "display name", is_valid_identifier)?;
  }

  let type_parameters = read_type_parameters(&entry.name, metadata, context)?;

  if entry.constructors.len() != metadata.constructors.len() {
    return Err(ProcessingError::DescriptorMismatch {
      class: entry.name.clone(),
      detail: format!(
        "{} constructors declared but metadata describes {}",
        entry.constructors.len(),
        metadata.constructors.len()
      ),
    });
  }

  let constructors = entry
    .constructors
    .iter()
    .zip(&metadata.constructors)
    .map(|(constructor, constructor_metadata)| read_constructor(&entry.name, constructor, constructor_metadata))
    .collect::<Result<Vec<_>, _>>()?;

  Ok(ClassFacts {
    class: ClassDescriptor {
      name: entry.name.clone(),
      package: entry.package.clone(),
      visibility: metadata.visibility.into(),
      modality: metadata.modality.into(),
      kind: metadata.kind.into(),
      nesting: metadata.nesting.into(),
      display_name,
      type_parameters,
    },
    constructors,
  })
}

fn check_name(class: &str, name: &str, role: &str, is_valid: fn(&str) -> bool) -> Result<(), ProcessingError> {
  if is_valid(name) {
    Ok(())
  } else {
    Err(ProcessingError::InvalidName {
      class: class.to_string(),
      name: name.to_string(),
      role: role.to_string(),
    })
  }
}

fn read_type_parameters(
  class: &str,
  metadata: &ClassMetadata,
  context: &mut ProcessingContext<'_>,
) -> Result<Vec<TypeParameter>, ProcessingError> {
  metadata
    .type_parameters
    .iter()
    .map(|raw| {
      check_name(class, &raw.name, "type parameter", is_valid_identifier)?;
      for bound in &raw.bounds {
        check_type_paths(bound).map_err(|name| ProcessingError::InvalidName {
          class: class.to_string(),
          name,
          role: "type parameter bound".to_string(),
        })?;
      }
      let variance = Variance::from(raw.variance);
      // `out` is dropped silently.
      if variance == Variance::In {
        context.report(Diagnostic::VarianceDropped {
          class: class.to_string(),
          parameter: raw.name.clone(),
          variance,
        });
      }
      Ok(TypeParameter {
        name: raw.name.clone(),
        variance,
        bounds: raw.bounds.iter().map(TypeRef::from).collect(),
      })
    })
    .collect()
}

fn read_constructor(
  class: &str,
  constructor: &ConstructorEntry,
  metadata: &ConstructorMetadata,
) -> Result<ConstructorFacts, ProcessingError> {
  check_name(class, &constructor.function, "constructor function", is_valid_identifier)?;

  if constructor.parameters.len() != metadata.parameters.len() {
    return Err(ProcessingError::DescriptorMismatch {
      class: class.to_string(),
      detail: format!(
        "constructor `{}` declares {} parameters but metadata describes {}",
        constructor.function,
        constructor.parameters.len(),
        metadata.parameters.len()
      ),
    });
  }

  let mut seen = HashSet::new();
  let mut parameters = Vec::with_capacity(constructor.parameters.len());
  for (parameter, parameter_metadata) in constructor.parameters.iter().zip(&metadata.parameters) {
    if parameter.name != parameter_metadata.name {
      return Err(ProcessingError::DescriptorMismatch {
        class: class.to_string(),
        detail: format!(
          "constructor `{}` parameter `{}` is named `{}` in metadata",
          constructor.function, parameter.name, parameter_metadata.name
        ),
      });
    }
    let invalid = |reason: String| ProcessingError::InvalidParameter {
      class: class.to_string(),
      parameter: parameter.name.clone(),
      reason,
    };
    if !is_valid_identifier(&parameter.name) {
      return Err(invalid("not a valid identifier".to_string()));
    }
    if !seen.insert(parameter.name.as_str()) {
      return Err(invalid("declared more than once".to_string()));
    }
    check_type_paths(&parameter.type_ref).map_err(|name| invalid(format!("type `{name}` is not a valid path")))?;

    parameters.push(ParameterFacts {
      name: parameter.name.clone(),
      type_ref: TypeRef::from(&parameter.type_ref).with_nullable(parameter_metadata.nullable),
      collection_override: parameter
        .directives
        .collection_override
        .as_ref()
        .map(|directive| CollectionOverrideFacts {
          concrete_type: directive.concrete_type.clone(),
          inline: directive.inline,
        }),
    });
  }

  Ok(ConstructorFacts {
    function: constructor.function.clone(),
    visibility: metadata.visibility.into(),
    canonical_marker: constructor.directives.canonical_constructor,
    parameters,
  })
}

/// Returns the first type name in `raw` that is not a valid path.
fn check_type_paths(raw: &RawType) -> Result<(), String> {
  if !is_valid_path(&raw.name) {
    return Err(raw.name.clone());
  }
  raw.arguments.iter().try_for_each(check_type_paths)
}
