use crate::BuildError;

/// Storage for a single builder property.
///
/// Required properties start as [`Slot::Unset`]; nullable ones start as
/// [`Slot::absent`]. A nested builder that failed to build leaves its error
/// behind in [`Slot::Failed`] so it surfaces from the outer `build`.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
  Unset,
  Set(T),
  Failed(BuildError),
}

impl<T> Default for Slot<T> {
  fn default() -> Self {
    Self::Unset
  }
}

impl<T> Slot<T> {
  pub fn set(&mut self, value: T) {
    *self = Self::Set(value);
  }

  pub fn assign(&mut self, result: Result<T, BuildError>) {
    *self = match result {
      Ok(value) => Self::Set(value),
      Err(error) => Self::Failed(error),
    };
  }

  #[must_use]
  pub const fn is_set(&self) -> bool {
    matches!(self, Self::Set(_))
  }

  #[must_use]
  pub const fn get(&self) -> Option<&T> {
    match self {
      Self::Set(value) => Some(value),
      Self::Unset | Self::Failed(_) => None,
    }
  }

  /// Consumes the slot, failing when the property was never assigned.
  pub fn into_value(self, builder: &'static str, property: &'static str) -> Result<T, BuildError> {
    match self {
      Self::Set(value) => Ok(value),
      Self::Unset => Err(BuildError::RequiredPropertyUnset { builder, property }),
      Self::Failed(error) => Err(error),
    }
  }
}

impl<T> Slot<Option<T>> {
  #[must_use]
  pub const fn absent() -> Self {
    Self::Set(None)
  }
}
