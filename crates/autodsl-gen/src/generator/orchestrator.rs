//! Drives every generation target of a descriptor through the pipeline:
//! metadata reader, eligibility checks, constructor selection, parameter
//! classification and builder synthesis.
//!
//! Classes are processed independently. A class that fails any stage is
//! reported once and the remaining classes still produce builders.

use std::{collections::HashSet, path::Path};

use anyhow::Context;
use itertools::Itertools;

use crate::{
  descriptor::{ClassEntry, DescriptorFile},
  generator::{
    ast::{FunctionSpec, GeneratedBuilderSpec},
    classifier::classify_constructor,
    codegen::{FileHeader, generate_builder_module, mod_file::ModFileGenerator},
    constructor::select_constructor,
    context::{Diagnostic, ProcessingContext},
    errors::ProcessingError,
    metadata::read_class,
    metrics::{GenerationStats, GenerationWarning},
    naming::builders::{builder_name, entry_name},
    registry::TypeRegistry,
    synthesizer::synthesize,
    validator::{validate_class, validate_constructor},
  },
};

const MOD_FILE_NAME: &str = "mod.rs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub file_name: String,
  pub code: String,
}

#[derive(Debug)]
pub struct GenerationOutput {
  pub builders: Vec<GeneratedBuilderSpec>,
  pub stats: GenerationStats,
}

#[derive(Debug)]
pub struct GeneratedFinalOutput {
  pub files: Vec<GeneratedFile>,
  pub stats: GenerationStats,
}

/// One row of the `list` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSummary {
  pub class: String,
  pub package: String,
  pub builder: String,
  pub entry: String,
  pub outcome: Result<usize, ProcessingError>,
}

pub struct Orchestrator {
  descriptor: DescriptorFile,
  support_path: syn::Path,
  only: Option<HashSet<String>>,
  exclude: Option<HashSet<String>>,
}

impl Orchestrator {
  /// # Errors
  ///
  /// Fails when `support_path` is not a Rust path.
  pub fn new(
    descriptor: DescriptorFile,
    only: Option<&HashSet<String>>,
    exclude: Option<&HashSet<String>>,
    support_path: &str,
  ) -> anyhow::Result<Self> {
    let support_path =
      syn::parse_str::<syn::Path>(support_path).with_context(|| format!("invalid support path `{support_path}`"))?;
    Ok(Self {
      descriptor,
      support_path,
      only: only.cloned(),
      exclude: exclude.cloned(),
    })
  }

  pub fn generated_sources_root(&self) -> Option<&Path> {
    self
      .descriptor
      .generated_sources_root
      .as_deref()
      .filter(|root| !root.as_os_str().is_empty())
  }

  fn is_selected(&self, class: &ClassEntry) -> bool {
    let included = self.only.as_ref().is_none_or(|only| only.contains(&class.name));
    let excluded = self.exclude.as_ref().is_some_and(|exclude| exclude.contains(&class.name));
    included && !excluded
  }

  /// The descriptor with the generate directive removed from classes that
  /// were filtered out, so no builder refers to them.
  fn selected_descriptor(&self) -> DescriptorFile {
    let mut descriptor = self.descriptor.clone();
    for class in &mut descriptor.classes {
      if !self.is_selected(class) {
        class.directives.generate = None;
      }
    }
    descriptor
  }

  fn support_path_string(&self) -> String {
    quote::ToTokens::to_token_stream(&self.support_path)
      .to_string()
      .replace(' ', "")
  }

  /// Runs the pipeline for every selected class and collects the builders
  /// that could be synthesized.
  pub fn synthesize(&self) -> GenerationOutput {
    let targets = self.selected_descriptor();
    let PipelineRun { outcomes, diagnostics } = self.process_targets(&targets);
    let mut stats = GenerationStats::default();
    let mut builders = vec![];

    for outcome in outcomes {
      stats.record_class();
      if let Ok(spec) = outcome {
        builders.push(spec);
      }
    }

    stats.record_builders(&builders);
    stats.record_warnings(diagnostics.into_iter().map(GenerationWarning::from));
    stats.record_warnings(missing_nested_builders(&builders));

    GenerationOutput { builders, stats }
  }

  /// Processes every target until no builder refers to a sibling that was
  /// rejected. A rejected class loses its generate directive in the registry,
  /// which turns parameters of its type into plain properties on the next run.
  fn process_targets(&self, targets: &DescriptorFile) -> PipelineRun {
    let support_path = self.support_path_string();
    let mut known = targets.clone();
    loop {
      let run = PipelineRun::execute(targets, &known, &support_path);
      let rejected: HashSet<(&str, &str)> = targets
        .generation_targets()
        .zip(&run.outcomes)
        .filter(|(_, outcome)| outcome.is_err())
        .map(|(class, _)| (class.package.as_str(), class.name.as_str()))
        .collect();

      let mut withdrawn = false;
      for class in &mut known.classes {
        if class.directives.generate.is_some() && rejected.contains(&(class.package.as_str(), class.name.as_str())) {
          class.directives.generate = None;
          withdrawn = true;
        }
      }
      if !withdrawn {
        return run;
      }
    }
  }

  /// Synthesizes and prints every builder plus the `mod.rs` tying them together.
  ///
  /// # Errors
  ///
  /// Fails when emitted code does not parse as Rust.
  pub fn generate(&self, source_path: &str) -> anyhow::Result<GeneratedFinalOutput> {
    let GenerationOutput { builders, stats } = self.synthesize();
    let gen_version = env!("CARGO_PKG_VERSION");

    let mut files = builders
      .iter()
      .map(|spec| {
        let header = FileHeader::new(format!("Builder for `{}`", spec.class_name), source_path, gen_version);
        let code = generate_builder_module(spec, &self.support_path, &header)
          .with_context(|| format!("failed to emit `{}`", spec.builder_name))?;
        Ok(GeneratedFile {
          file_name: format!("{}.rs", spec.module_name),
          code,
        })
      })
      .collect::<anyhow::Result<Vec<_>>>()?;

    let header = FileHeader::new("Generated builders", source_path, gen_version);
    files.push(GeneratedFile {
      file_name: MOD_FILE_NAME.to_string(),
      code: ModFileGenerator::new(&builders).generate(&header)?,
    });

    Ok(GeneratedFinalOutput { files, stats })
  }

  /// Every generation target with its builder names and the outcome of the
  /// pipeline: the number of generated properties, or the rejection.
  pub fn class_summaries(&self) -> Vec<ClassSummary> {
    let targets = self.selected_descriptor();
    let PipelineRun { outcomes, .. } = self.process_targets(&targets);

    targets
      .generation_targets()
      .zip(outcomes)
      .map(|(class, outcome)| {
        let display_name = class.directives.generate.as_ref().and_then(|directive| directive.display_name());
        ClassSummary {
          class: class.name.clone(),
          package: class.package.clone(),
          builder: builder_name(&class.name),
          entry: entry_name(display_name, &class.name),
          outcome: outcome.map(|spec| spec.properties.len()),
        }
      })
      .collect()
  }
}

/// One pass of the pipeline over every target, in declaration order.
struct PipelineRun {
  outcomes: Vec<Result<GeneratedBuilderSpec, ProcessingError>>,
  diagnostics: Vec<Diagnostic>,
}

impl PipelineRun {
  /// Processes the generation targets of `targets`, resolving nested builders
  /// against the classes of `known`.
  fn execute(targets: &DescriptorFile, known: &DescriptorFile, support_path: &str) -> Self {
    let registry = TypeRegistry::new(known, support_path);
    let mut context = ProcessingContext::new(&registry);
    let mut module_names = HashSet::new();
    let mut entry_names = HashSet::new();
    let mut outcomes = vec![];

    for class in targets.generation_targets() {
      let outcome = process_class(class, &mut context).and_then(|spec| {
        claim_unique(&spec, &spec.module_name, &mut module_names)?;
        claim_unique(&spec, spec.entry_function.name.as_str(), &mut entry_names)?;
        Ok(spec)
      });
      if let Err(error) = &outcome {
        context.reject(error.clone());
      }
      outcomes.push(outcome);
    }

    Self {
      outcomes,
      diagnostics: context.into_diagnostics(),
    }
  }
}

pub(crate) fn process_class(
  class: &ClassEntry,
  context: &mut ProcessingContext<'_>,
) -> Result<GeneratedBuilderSpec, ProcessingError> {
  let facts = read_class(class, context)?;
  validate_class(&facts.class)?;
  let constructor = select_constructor(&facts.class.name, facts.constructors)?;
  validate_constructor(&facts.class, &constructor)?;
  let constructor = classify_constructor(&facts.class.name, constructor, context)?;
  synthesize(&facts.class, &constructor)
}

fn claim_unique(spec: &GeneratedBuilderSpec, name: &str, claimed: &mut HashSet<String>) -> Result<(), ProcessingError> {
  if claimed.insert(name.to_string()) {
    Ok(())
  } else {
    Err(ProcessingError::NameCollision {
      builder: spec.builder_name.to_string(),
      member: name.to_string(),
    })
  }
}

/// Nested DSL functions whose builder is a sibling module that was not generated.
fn missing_nested_builders(builders: &[GeneratedBuilderSpec]) -> Vec<GenerationWarning> {
  let generated: HashSet<&str> = builders.iter().map(|spec| spec.builder_name.as_str()).collect();
  builders
    .iter()
    .flat_map(|spec| {
      spec.functions.iter().filter_map(move |function| match function {
        FunctionSpec::NestedDsl(nested) => Some((spec, &nested.builder.name)),
        _ => None,
      })
    })
    .filter(|(spec, builder)| {
      !generated.contains(builder.as_str())
        && spec
          .imports
          .iter()
          .any(|import| import.starts_with("super::") && import.ends_with(builder.as_str()))
    })
    .map(|(spec, builder)| (spec.class_name.clone(), builder.clone()))
    .unique()
    .map(|(class, builder)| GenerationWarning::MissingNestedBuilder { class, builder })
    .collect()
}
