use strum::Display;

use crate::generator::{
  ast::{FunctionSpec, GeneratedBuilderSpec},
  context::Diagnostic,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub classes_found: usize,
  pub builders_generated: usize,
  pub properties_generated: usize,
  pub nested_functions_generated: usize,
  pub collection_scopes_generated: usize,
  pub inline_insertions_generated: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_class(&mut self) {
    self.classes_found += 1;
  }

  pub fn record_builder(&mut self, spec: &GeneratedBuilderSpec) {
    self.builders_generated += 1;
    self.properties_generated += spec.properties.len();
    for function in &spec.functions {
      match function {
        FunctionSpec::NestedDsl(_) => self.nested_functions_generated += 1,
        FunctionSpec::CollectionScope(_) => self.collection_scopes_generated += 1,
        FunctionSpec::InlineInsert(_) => self.inline_insertions_generated += 1,
      }
    }
  }

  pub fn record_builders(&mut self, specs: &[GeneratedBuilderSpec]) {
    for spec in specs {
      self.record_builder(spec);
    }
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }

  pub fn skipped_count(&self) -> usize {
    self.warnings.iter().filter(|warning| warning.is_skipped_item()).count()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "{error}")]
  ClassRejected { class: String, error: String },
  #[strum(to_string = "'{class}' refers to builder '{builder}', which was not generated")]
  MissingNestedBuilder { class: String, builder: String },
  #[strum(to_string = "{message}")]
  ClassSpecific { class: String, message: String },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::ClassRejected { .. })
  }
}

impl From<Diagnostic> for GenerationWarning {
  fn from(diagnostic: Diagnostic) -> Self {
    let class = diagnostic.class().to_string();
    match diagnostic {
      Diagnostic::Rejected { error } => Self::ClassRejected {
        class,
        error: error.to_string(),
      },
      Diagnostic::VarianceDropped { .. } => Self::ClassSpecific {
        class,
        message: diagnostic.to_string(),
      },
    }
  }
}
