//! Validated class model to [`GeneratedBuilderSpec`].
//!
//! Every constructor parameter maps to exactly one property and one setter,
//! in declaration order; the collection and nested-DSL rules add functions
//! and scope types on top.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::generator::{
  ast::{
    BuildFunSpec, CollectionScopeFunSpec, CollectionScopeSpec, EntryFunSpec, FunctionSpec, GeneratedBuilderSpec,
    InlineInsertFunSpec, InlineStorageSpec, NameToken, NestedDslFunSpec, PropertyInit, PropertySpec, SetterSpec,
  },
  errors::ProcessingError,
  model::{
    ClassDescriptor, CollectionDirective, ConstructorDescriptor, NestedBuilderRef, ParameterCategory,
    ParameterDescriptor, TypeParameter, TypeRef,
  },
  naming::{
    builders::{
      builder_name, collection_scope_name, entry_name, inline_insert_name, inline_storage_name, module_name,
      mutator_name, setter_name,
    },
    identifiers::is_valid_identifier,
  },
};

const RESERVED_METHODS: [&str; 2] = ["new", "build"];
pub(crate) const PHANTOM_FIELD: &str = "_phantom";

pub(crate) fn synthesize(
  class: &ClassDescriptor,
  constructor: &ConstructorDescriptor,
) -> Result<GeneratedBuilderSpec, ProcessingError> {
  let mut synthesizer = Synthesizer::new(class);
  for parameter in &constructor.parameters {
    synthesizer.add_parameter(parameter)?;
  }
  synthesizer.finish(constructor)
}

struct Synthesizer<'a> {
  class: &'a ClassDescriptor,
  builder: String,
  imports: IndexSet<String>,
  properties: Vec<PropertySpec>,
  setters: Vec<SetterSpec>,
  functions: Vec<FunctionSpec>,
  inline_storages: Vec<InlineStorageSpec>,
  nested_types: Vec<CollectionScopeSpec>,
  names: MemberNames,
}

impl<'a> Synthesizer<'a> {
  fn new(class: &'a ClassDescriptor) -> Self {
    let builder = builder_name(&class.name);
    let mut imports = IndexSet::new();
    imports.insert(format!("{}::*", class.package));
    Self {
      class,
      builder,
      imports,
      properties: vec![],
      setters: vec![],
      functions: vec![],
      inline_storages: vec![],
      nested_types: vec![],
      names: MemberNames::default(),
    }
  }

  fn add_parameter(&mut self, parameter: &ParameterDescriptor) -> Result<(), ProcessingError> {
    let name = parameter.name.as_str();
    let type_ref = parameter.type_ref.clone();
    let mutator = mutator_name(name);
    let setter = setter_name(name);

    self.names.field(&self.builder, name)?;
    self.names.method(&self.builder, &mutator)?;
    self.names.method(&self.builder, &setter)?;

    let initial = if parameter.is_nullable() {
      PropertyInit::Absent
    } else {
      PropertyInit::Unset
    };
    self.properties.push(
      PropertySpec::builder()
        .name(name)
        .mutator(mutator.as_str())
        .type_ref(type_ref.clone())
        .initial(initial)
        .build(),
    );
    self.setters.push(
      SetterSpec::builder()
        .name(setter)
        .mutator(mutator)
        .type_ref(type_ref)
        .build(),
    );

    match &parameter.category {
      ParameterCategory::Plain => Ok(()),
      ParameterCategory::NestedAnnotated(nested) => self.add_nested_dsl(parameter, nested),
      ParameterCategory::Collection(directive) if directive.inline => self.add_inline_insert(parameter, directive),
      ParameterCategory::Collection(directive) => self.add_collection_scope(parameter, directive),
    }
  }

  fn add_nested_dsl(&mut self, parameter: &ParameterDescriptor, nested: &NestedBuilderRef) -> Result<(), ProcessingError> {
    let function = nested.display_name.clone().unwrap_or_else(|| parameter.name.clone());
    if !is_valid_identifier(&function) {
      return Err(ProcessingError::InvalidName {
        class: self.class.name.clone(),
        name: function,
        role: "display name".to_string(),
      });
    }
    self.names.method(&self.builder, &function)?;

    if nested.builder != self.builder {
      self.imports.insert(format!("{}::{}", nested.module, nested.builder));
    }

    let builder = TypeRef::new(nested.builder.clone()).with_arguments(parameter.type_ref.arguments.clone());
    self.functions.push(FunctionSpec::NestedDsl(
      NestedDslFunSpec::builder()
        .name(function)
        .property(parameter.name.as_str())
        .builder(builder)
        .nullable(parameter.is_nullable())
        .build(),
    ));
    Ok(())
  }

  fn add_inline_insert(
    &mut self,
    parameter: &ParameterDescriptor,
    directive: &CollectionDirective,
  ) -> Result<(), ProcessingError> {
    let function = inline_insert_name(&parameter.name);
    let storage = inline_storage_name(&parameter.name);
    self.names.method(&self.builder, &function)?;
    self.names.field(&self.builder, &storage)?;

    self.inline_storages.push(
      InlineStorageSpec::builder()
        .name(storage.as_str())
        .property(parameter.name.as_str())
        .container(directive.container_type())
        .nullable(parameter.is_nullable())
        .build(),
    );
    self.functions.push(FunctionSpec::InlineInsert(
      InlineInsertFunSpec::builder()
        .name(function)
        .storage(storage)
        .element(directive.element.clone())
        .build(),
    ));
    Ok(())
  }

  fn add_collection_scope(
    &mut self,
    parameter: &ParameterDescriptor,
    directive: &CollectionDirective,
  ) -> Result<(), ProcessingError> {
    let scope_name = collection_scope_name(&parameter.name);
    self.names.method(&self.builder, &parameter.name)?;
    self.names.type_name(&self.builder, &scope_name)?;

    let type_parameters: Vec<TypeParameter> = self
      .class
      .type_parameters
      .iter()
      .filter(|param| directive.element.mentions(&param.name))
      .cloned()
      .collect();
    let scope = TypeRef::new(scope_name.clone()).with_arguments(
      type_parameters
        .iter()
        .map(|param| TypeRef::new(param.name.clone()))
        .collect(),
    );

    self.nested_types.push(
      CollectionScopeSpec::builder()
        .name(scope_name)
        .type_parameters(type_parameters)
        .element(directive.element.clone())
        .container(directive.container_type())
        .build(),
    );
    self.functions.push(FunctionSpec::CollectionScope(
      CollectionScopeFunSpec::builder()
        .name(parameter.name.as_str())
        .property(parameter.name.as_str())
        .scope(scope)
        .nullable(parameter.is_nullable())
        .build(),
    ));
    Ok(())
  }

  fn finish(mut self, constructor: &ConstructorDescriptor) -> Result<GeneratedBuilderSpec, ProcessingError> {
    for reserved in RESERVED_METHODS {
      self.names.method(&self.builder, reserved)?;
    }
    if !self.class.type_parameters.is_empty() {
      self.names.field(&self.builder, PHANTOM_FIELD)?;
    }
    self.names.type_name(&self.builder, &self.builder)?;

    let build_function = BuildFunSpec::builder()
      .class_type(self.class.self_type())
      .constructor(constructor.function.as_str())
      .arguments(
        self
          .properties
          .iter()
          .map(|property| property.name.clone())
          .collect::<Vec<NameToken>>(),
      )
      .build();
    let entry_function = EntryFunSpec::builder()
      .name(entry_name(self.class.display_name.as_deref(), &self.class.name))
      .internal(self.class.is_internal())
      .build();

    Ok(
      GeneratedBuilderSpec::builder()
        .module_name(module_name(&self.builder))
        .builder_name(self.builder)
        .class_name(self.class.name.as_str())
        .package(self.class.package.as_str())
        .internal(self.class.is_internal())
        .type_parameters(self.class.type_parameters.clone())
        .imports(self.imports.into_iter().collect())
        .properties(self.properties)
        .setters(self.setters)
        .functions(self.functions)
        .inline_storages(self.inline_storages)
        .nested_types(self.nested_types)
        .build_function(build_function)
        .entry_function(entry_function)
        .build(),
    )
  }
}

/// Names declared so far, one namespace each for fields, methods and types.
#[derive(Debug, Default)]
struct MemberNames {
  fields: HashSet<String>,
  methods: HashSet<String>,
  types: HashSet<String>,
}

impl MemberNames {
  fn field(&mut self, builder: &str, name: &str) -> Result<(), ProcessingError> {
    claim(&mut self.fields, builder, name)
  }

  fn method(&mut self, builder: &str, name: &str) -> Result<(), ProcessingError> {
    claim(&mut self.methods, builder, name)
  }

  fn type_name(&mut self, builder: &str, name: &str) -> Result<(), ProcessingError> {
    claim(&mut self.types, builder, name)
  }
}

fn claim(names: &mut HashSet<String>, builder: &str, name: &str) -> Result<(), ProcessingError> {
  if names.insert(name.to_string()) {
    Ok(())
  } else {
    Err(ProcessingError::NameCollision {
      builder: builder.to_string(),
      member: name.to_string(),
    })
  }
}
