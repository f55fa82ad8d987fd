use strum::Display;

use crate::generator::{errors::ProcessingError, model::Variance, registry::TypeRegistry};

/// Something worth reporting about a class that did not stop its processing,
/// or the error that did.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Diagnostic {
  #[strum(to_string = "{error}")]
  Rejected { error: ProcessingError },
  #[strum(to_string = "`{class}`: variance `{variance}` of type parameter `{parameter}` is not expressible and was dropped")]
  VarianceDropped {
    class: String,
    parameter: String,
    variance: Variance,
  },
}

impl Diagnostic {
  pub fn class(&self) -> &str {
    match self {
      Self::Rejected { error } => error.class(),
      Self::VarianceDropped { class, .. } => class,
    }
  }

  pub fn is_rejection(&self) -> bool {
    matches!(self, Self::Rejected { .. })
  }
}

/// Request-scoped state shared by every stage while one descriptor is processed.
///
/// Holds the known types and collects diagnostics; nothing in here outlives
/// the run that created it.
#[derive(Debug)]
pub struct ProcessingContext<'a> {
  registry: &'a TypeRegistry,
  diagnostics: Vec<Diagnostic>,
}

impl<'a> ProcessingContext<'a> {
  pub fn new(registry: &'a TypeRegistry) -> Self {
    Self {
      registry,
      diagnostics: vec![],
    }
  }

  pub fn registry(&self) -> &'a TypeRegistry {
    self.registry
  }

  pub fn report(&mut self, diagnostic: Diagnostic) {
    self.diagnostics.push(diagnostic);
  }

  pub fn reject(&mut self, error: ProcessingError) {
    self.report(Diagnostic::Rejected { error });
  }

  pub fn diagnostics(&self) -> &[Diagnostic] {
    &self.diagnostics
  }

  pub fn rejection_count(&self) -> usize {
    self.diagnostics.iter().filter(|diagnostic| diagnostic.is_rejection()).count()
  }

  pub fn into_diagnostics(self) -> Vec<Diagnostic> {
    self.diagnostics
  }
}
