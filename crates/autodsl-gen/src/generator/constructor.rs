use crate::generator::{errors::ProcessingError, model::ConstructorFacts};

/// Picks the canonical constructor of `class`.
///
/// A single constructor carrying the canonical marker wins even when it is
/// not visible, so the validator can report it. Without a marker the first
/// constructor in declaration order is used, provided some constructor is
/// public or internal; its own visibility is left to the validator.
pub(crate) fn select_constructor(
  class: &str,
  constructors: Vec<ConstructorFacts>,
) -> Result<ConstructorFacts, ProcessingError> {
  let marked = constructors
    .iter()
    .filter(|constructor| constructor.canonical_marker)
    .count();
  if marked > 1 {
    return Err(ProcessingError::AmbiguousConstructor {
      class: class.to_string(),
      count: marked,
    });
  }

  let any_visible = constructors
    .iter()
    .any(|constructor| constructor.visibility.is_public_or_internal());
  let mut constructors = constructors.into_iter();
  let selected = if marked == 1 {
    constructors.find(|constructor| constructor.canonical_marker)
  } else if any_visible {
    constructors.next()
  } else {
    None
  };

  selected.ok_or_else(|| ProcessingError::NoEligibleConstructor {
    class: class.to_string(),
  })
}
