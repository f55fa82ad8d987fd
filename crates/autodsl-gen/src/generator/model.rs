//! Neutral descriptors produced by the metadata reader and refined by the
//! constructor selector and parameter classifier.

use std::fmt::{self, Formatter};

use strum::Display;

use crate::descriptor::{RawClassKind, RawModality, RawNesting, RawType, RawVariance, RawVisibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
  Public,
  Internal,
  Other,
}

impl Visibility {
  pub const fn is_public_or_internal(self) -> bool {
    matches!(self, Self::Public | Self::Internal)
  }
}

impl From<RawVisibility> for Visibility {
  fn from(raw: RawVisibility) -> Self {
    match raw {
      RawVisibility::Public => Self::Public,
      RawVisibility::Internal => Self::Internal,
      RawVisibility::Protected | RawVisibility::Private => Self::Other,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Modality {
  Concrete,
  Abstract,
}

impl From<RawModality> for Modality {
  fn from(raw: RawModality) -> Self {
    match raw {
      RawModality::Final | RawModality::Open => Self::Concrete,
      RawModality::Abstract | RawModality::Sealed => Self::Abstract,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ClassKind {
  Class,
  Enum,
  Other,
}

impl From<RawClassKind> for ClassKind {
  fn from(raw: RawClassKind) -> Self {
    match raw {
      RawClassKind::Class => Self::Class,
      RawClassKind::EnumClass => Self::Enum,
      RawClassKind::Interface | RawClassKind::Object | RawClassKind::AnnotationClass => Self::Other,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Nesting {
  TopLevel,
  Inner,
  Local,
}

impl From<RawNesting> for Nesting {
  fn from(raw: RawNesting) -> Self {
    match raw {
      // Nested declarations without an enclosing instance behave like top-level ones.
      RawNesting::TopLevel | RawNesting::Nested => Self::TopLevel,
      RawNesting::Inner => Self::Inner,
      RawNesting::Local => Self::Local,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Variance {
  Invariant,
  In,
  Out,
}

impl From<RawVariance> for Variance {
  fn from(raw: RawVariance) -> Self {
    match raw {
      RawVariance::Invariant => Self::Invariant,
      RawVariance::In => Self::In,
      RawVariance::Out => Self::Out,
    }
  }
}

/// Resolved type: a path, its generic arguments and a nullability flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TypeRef {
  pub name: String,
  pub arguments: Vec<TypeRef>,
  pub nullable: bool,
}

impl TypeRef {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      arguments: vec![],
      nullable: false,
    }
  }

  #[must_use]
  pub fn with_arguments(mut self, arguments: Vec<TypeRef>) -> Self {
    self.arguments = arguments;
    self
  }

  #[must_use]
  pub fn with_nullable(mut self, nullable: bool) -> Self {
    self.nullable = nullable;
    self
  }

  /// Last path segment, used to match declared types regardless of how the
  /// path is spelled.
  pub fn simple_name(&self) -> &str {
    simple_name(&self.name)
  }

  pub fn without_nullability(&self) -> Self {
    Self {
      nullable: false,
      ..self.clone()
    }
  }

  /// Whether `name` occurs anywhere in this type, arguments included.
  pub fn mentions(&self, name: &str) -> bool {
    self.name == name || self.arguments.iter().any(|arg| arg.mentions(name))
  }

  /// The full Rust spelling, wrapping nullable types in `Option`.
  pub fn to_rust_type(&self) -> String {
    let mut result = self.name.clone();
    if !self.arguments.is_empty() {
      let args = self
        .arguments
        .iter()
        .map(TypeRef::to_rust_type)
        .collect::<Vec<_>>()
        .join(", ");
      result = format!("{result}<{args}>");
    }
    if self.nullable {
      result = format!("Option<{result}>");
    }
    result
  }
}

impl fmt::Display for TypeRef {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_rust_type())
  }
}

impl From<&RawType> for TypeRef {
  fn from(raw: &RawType) -> Self {
    Self {
      name: raw.name.clone(),
      arguments: raw.arguments.iter().map(TypeRef::from).collect(),
      nullable: raw.nullable,
    }
  }
}

pub fn simple_name(path: &str) -> &str {
  path.rsplit("::").next().unwrap_or(path)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
  pub name: String,
  pub variance: Variance,
  pub bounds: Vec<TypeRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
  pub name: String,
  pub package: String,
  pub visibility: Visibility,
  pub modality: Modality,
  pub kind: ClassKind,
  pub nesting: Nesting,
  pub display_name: Option<String>,
  pub type_parameters: Vec<TypeParameter>,
}

impl ClassDescriptor {
  pub fn is_internal(&self) -> bool {
    self.visibility == Visibility::Internal
  }

  /// The class applied to its own type parameters, e.g. `Pair<A, B>`.
  pub fn self_type(&self) -> TypeRef {
    TypeRef::new(self.name.clone()).with_arguments(
      self
        .type_parameters
        .iter()
        .map(|param| TypeRef::new(param.name.clone()))
        .collect(),
    )
  }
}

/// Raw per-parameter facts after reconciling the two descriptor views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterFacts {
  pub name: String,
  pub type_ref: TypeRef,
  pub collection_override: Option<CollectionOverrideFacts>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionOverrideFacts {
  pub concrete_type: Option<String>,
  pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorFacts {
  pub function: String,
  pub visibility: Visibility,
  pub canonical_marker: bool,
  pub parameters: Vec<ParameterFacts>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CollectionShape {
  List,
  Set,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDirective {
  /// Concrete container to instantiate, without type arguments.
  pub container: TypeRef,
  pub inline: bool,
  pub element: TypeRef,
  pub shape: CollectionShape,
  pub overridden: bool,
}

impl CollectionDirective {
  /// The container applied to the element type, e.g. `Vec<String>`.
  pub fn container_type(&self) -> TypeRef {
    self.container.clone().with_arguments(vec![self.element.clone()])
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedBuilderRef {
  pub builder: String,
  pub module: String,
  pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterCategory {
  Plain,
  NestedAnnotated(NestedBuilderRef),
  Collection(CollectionDirective),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
  pub name: String,
  pub type_ref: TypeRef,
  pub category: ParameterCategory,
}

impl ParameterDescriptor {
  pub fn is_nullable(&self) -> bool {
    self.type_ref.nullable
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDescriptor {
  pub class_name: String,
  pub function: String,
  pub visibility: Visibility,
  pub parameters: Vec<ParameterDescriptor>,
}
