/// Failure raised by a generated `build` function.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
  #[error("required property `{property}` of `{builder}` was never set")]
  RequiredPropertyUnset {
    builder: &'static str,
    property: &'static str,
  },
}

impl BuildError {
  #[must_use]
  pub const fn builder(&self) -> &'static str {
    match self {
      Self::RequiredPropertyUnset { builder, .. } => builder,
    }
  }

  #[must_use]
  pub const fn property(&self) -> &'static str {
    match self {
      Self::RequiredPropertyUnset { property, .. } => property,
    }
  }
}
