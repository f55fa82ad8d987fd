use strum::Display;

/// Why a class was rejected by the eligibility validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IneligibleReason {
  #[strum(to_string = "code generation for enums is not supported")]
  Enum,
  #[strum(to_string = "must be a class")]
  NotAClass,
  #[strum(to_string = "must not be abstract")]
  Abstract,
  #[strum(to_string = "must not be local")]
  Local,
  #[strum(to_string = "must not be an inner class")]
  Inner,
  #[strum(to_string = "must be public or internal")]
  Visibility,
}

/// Generation-time failure for one class. Every variant names the class it
/// belongs to; parameter-level failures also name the parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessingError {
  #[error("`{class}` carries no structural metadata and cannot be introspected")]
  NotIntrospectable { class: String },
  #[error("there is no public or internal constructor on `{class}`")]
  NoEligibleConstructor { class: String },
  #[error("`{class}` has {count} constructors marked as canonical")]
  AmbiguousConstructor { class: String, count: usize },
  #[error("a builder can't be generated for `{class}`: {reason}")]
  IneligibleClass { class: String, reason: IneligibleReason },
  #[error("a builder can't be generated for `{class}`: constructor `{function}` is not internal or public")]
  IneligibleConstructorVisibility { class: String, function: String },
  #[error("`{class}.{parameter}`: collection type `{concrete_type}` does not resolve to a concrete class")]
  UnresolvableCollectionType {
    class: String,
    parameter: String,
    concrete_type: String,
  },
  #[error("`{class}.{parameter}`: collection has no parameterized element type")]
  MissingElementType { class: String, parameter: String },
  #[error("descriptor of `{class}` is inconsistent: {detail}")]
  DescriptorMismatch { class: String, detail: String },
  #[error("`{class}.{parameter}` is invalid: {reason}")]
  InvalidParameter {
    class: String,
    parameter: String,
    reason: String,
  },
  #[error("`{class}`: `{name}` is not a valid {role}")]
  InvalidName { class: String, name: String, role: String },
  #[error("`{builder}` would declare `{member}` more than once")]
  NameCollision { builder: String, member: String },
}

impl ProcessingError {
  /// Name of the class the error is reported against.
  pub fn class(&self) -> &str {
    match self {
      Self::NotIntrospectable { class }
      | Self::NoEligibleConstructor { class }
      | Self::AmbiguousConstructor { class, .. }
      | Self::IneligibleClass { class, .. }
      | Self::IneligibleConstructorVisibility { class, .. }
      | Self::UnresolvableCollectionType { class, .. }
      | Self::MissingElementType { class, .. }
      | Self::DescriptorMismatch { class, .. }
      | Self::InvalidParameter { class, .. }
      | Self::InvalidName { class, .. } => class,
      Self::NameCollision { builder, .. } => builder,
    }
  }

  pub fn parameter(&self) -> Option<&str> {
    match self {
      Self::UnresolvableCollectionType { parameter, .. }
      | Self::MissingElementType { parameter, .. }
      | Self::InvalidParameter { parameter, .. } => Some(parameter),
      _ => None,
    }
  }
}
