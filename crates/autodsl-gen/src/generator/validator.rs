use crate::generator::{
  errors::{IneligibleReason, ProcessingError},
  model::{ClassDescriptor, ClassKind, ConstructorFacts, Modality, Nesting},
};

/// Structural checks on the class itself. The first failing check is the
/// one reported.
pub(crate) fn validate_class(class: &ClassDescriptor) -> Result<(), ProcessingError> {
  let reason = match (class.kind, class.modality, class.nesting) {
    (ClassKind::Enum, _, _) => Some(IneligibleReason::Enum),
    (ClassKind::Other, _, _) => Some(IneligibleReason::NotAClass),
    (_, Modality::Abstract, _) => Some(IneligibleReason::Abstract),
    (_, _, Nesting::Local) => Some(IneligibleReason::Local),
    (_, _, Nesting::Inner) => Some(IneligibleReason::Inner),
    _ if !class.visibility.is_public_or_internal() => Some(IneligibleReason::Visibility),
    _ => None,
  };

  match reason {
    Some(reason) => Err(ProcessingError::IneligibleClass {
      class: class.name.clone(),
      reason,
    }),
    None => Ok(()),
  }
}

pub(crate) fn validate_constructor(class: &ClassDescriptor, constructor: &ConstructorFacts) -> Result<(), ProcessingError> {
  if constructor.visibility.is_public_or_internal() {
    Ok(())
  } else {
    Err(ProcessingError::IneligibleConstructorVisibility {
      class: class.name.clone(),
      function: constructor.function.clone(),
    })
  }
}
