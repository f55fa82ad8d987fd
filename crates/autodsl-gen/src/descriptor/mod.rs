//! Versioned JSON descriptor format consumed by the generator.
//!
//! A descriptor carries two independent views of every class: the
//! binary-level view (`constructors`, with parameter names, types and
//! directives) and the language-level view (`metadata`, with structural
//! flags and per-parameter nullability). The metadata reader reconciles them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

pub(crate) const FORMAT_VERSION: u32 = 1;
const DEFAULT_CONSTRUCTOR_FUNCTION: &str = "new";

#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
  #[error("invalid descriptor at `{path}`: {source}")]
  Parse {
    path: String,
    #[source]
    source: serde_json::Error,
  },
  #[error("unsupported descriptor format version {found} (supported: {supported})")]
  UnsupportedFormatVersion { found: u32, supported: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorFile {
  pub format_version: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub generated_sources_root: Option<PathBuf>,
  #[serde(default)]
  pub classes: Vec<ClassEntry>,
  #[serde(default)]
  pub types: Vec<TypeEntry>,
}

impl DescriptorFile {
  pub fn from_slice(bytes: &[u8]) -> Result<Self, DescriptorError> {
    let deserializer = &mut serde_json::Deserializer::from_slice(bytes);
    let file: Self = serde_path_to_error::deserialize(deserializer).map_err(|err| DescriptorError::Parse {
      path: err.path().to_string(),
      source: err.into_inner(),
    })?;
    file.check_version()?;
    Ok(file)
  }

  pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
    Self::from_slice(json.as_bytes())
  }

  fn check_version(&self) -> Result<(), DescriptorError> {
    if self.format_version == FORMAT_VERSION {
      Ok(())
    } else {
      Err(DescriptorError::UnsupportedFormatVersion {
        found: self.format_version,
        supported: FORMAT_VERSION,
      })
    }
  }

  /// Classes carrying the `generate` directive, in declaration order.
  pub fn generation_targets(&self) -> impl Iterator<Item = &ClassEntry> {
    self.classes.iter().filter(|class| class.directives.generate.is_some())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
  pub name: String,
  pub package: String,
  #[serde(default)]
  pub directives: ClassDirectives,
  #[serde(default)]
  pub constructors: Vec<ConstructorEntry>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub metadata: Option<ClassMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDirectives {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub generate: Option<GenerateDirective>,
}

/// Marks a class for builder generation. A non-empty `name` replaces the
/// default entry-function name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateDirective {
  #[serde(default)]
  pub name: String,
}

impl GenerateDirective {
  pub fn display_name(&self) -> Option<&str> {
    let name = self.name.trim();
    (!name.is_empty()).then_some(name)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorEntry {
  #[serde(default = "default_constructor_function")]
  pub function: String,
  #[serde(default)]
  pub directives: ConstructorDirectives,
  #[serde(default)]
  pub parameters: Vec<ParameterEntry>,
}

fn default_constructor_function() -> String {
  DEFAULT_CONSTRUCTOR_FUNCTION.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDirectives {
  #[serde(default)]
  pub canonical_constructor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterEntry {
  pub name: String,
  #[serde(rename = "type")]
  pub type_ref: RawType,
  #[serde(default)]
  pub directives: ParameterDirectives,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDirectives {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub collection_override: Option<CollectionOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionOverride {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub concrete_type: Option<String>,
  #[serde(default)]
  pub inline: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawType {
  pub name: String,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub arguments: Vec<RawType>,
  #[serde(default)]
  pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMetadata {
  pub kind: RawClassKind,
  pub visibility: RawVisibility,
  pub modality: RawModality,
  #[serde(default)]
  pub nesting: RawNesting,
  #[serde(default)]
  pub type_parameters: Vec<RawTypeParameter>,
  #[serde(default)]
  pub constructors: Vec<ConstructorMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorMetadata {
  pub visibility: RawVisibility,
  #[serde(default)]
  pub parameters: Vec<ParameterMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMetadata {
  pub name: String,
  #[serde(default)]
  pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTypeParameter {
  pub name: String,
  #[serde(default)]
  pub variance: RawVariance,
  #[serde(default)]
  pub bounds: Vec<RawType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawClassKind {
  Class,
  EnumClass,
  Interface,
  Object,
  AnnotationClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawVisibility {
  Public,
  Internal,
  Protected,
  Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawModality {
  Final,
  Open,
  Abstract,
  Sealed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawNesting {
  #[default]
  TopLevel,
  Nested,
  Inner,
  Local,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawVariance {
  #[default]
  Invariant,
  In,
  Out,
}

/// A type known to the generator without being a generation target of this
/// batch: collection containers named by overrides, or classes whose builders
/// are generated elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub path: Option<String>,
  #[serde(default = "default_type_kind")]
  pub kind: RawClassKind,
  #[serde(default = "default_type_modality")]
  pub modality: RawModality,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub generate: Option<GenerateDirective>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub builder_module: Option<String>,
}

const fn default_type_kind() -> RawClassKind {
  RawClassKind::Class
}

const fn default_type_modality() -> RawModality {
  RawModality::Final
}
