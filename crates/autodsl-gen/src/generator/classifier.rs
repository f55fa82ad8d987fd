use crate::generator::{
  context::ProcessingContext,
  errors::ProcessingError,
  model::{
    CollectionDirective, CollectionOverrideFacts, CollectionShape, ConstructorDescriptor, ConstructorFacts,
    ParameterCategory, ParameterDescriptor, ParameterFacts, TypeRef,
  },
  registry::TypeRegistry,
};

/// Assigns a category to every parameter of the selected constructor, in
/// declaration order.
pub(crate) fn classify_constructor(
  class: &str,
  constructor: ConstructorFacts,
  context: &ProcessingContext<'_>,
) -> Result<ConstructorDescriptor, ProcessingError> {
  let registry = context.registry();
  let parameters = constructor
    .parameters
    .into_iter()
    .map(|parameter| classify_parameter(class, parameter, registry))
    .collect::<Result<Vec<_>, _>>()?;

  Ok(ConstructorDescriptor {
    class_name: class.to_string(),
    function: constructor.function,
    visibility: constructor.visibility,
    parameters,
  })
}

fn classify_parameter(
  class: &str,
  parameter: ParameterFacts,
  registry: &TypeRegistry,
) -> Result<ParameterDescriptor, ProcessingError> {
  let category = if let Some(builder) = registry.nested_builder(&parameter.type_ref.name) {
    ParameterCategory::NestedAnnotated(builder.clone())
  } else {
    let shape = registry.shape_of(&parameter.type_ref.name);
    match (shape, &parameter.collection_override) {
      (None, None) => ParameterCategory::Plain,
      (shape, directive) => ParameterCategory::Collection(collection_directive(
        class,
        &parameter,
        shape,
        directive.as_ref(),
        registry,
      )?),
    }
  };

  Ok(ParameterDescriptor {
    name: parameter.name,
    type_ref: parameter.type_ref,
    category,
  })
}

fn collection_directive(
  class: &str,
  parameter: &ParameterFacts,
  shape: Option<CollectionShape>,
  directive: Option<&CollectionOverrideFacts>,
  registry: &TypeRegistry,
) -> Result<CollectionDirective, ProcessingError> {
  let element = parameter
    .type_ref
    .arguments
    .first()
    .cloned()
    .ok_or_else(|| ProcessingError::MissingElementType {
      class: class.to_string(),
      parameter: parameter.name.clone(),
    })?;

  let unresolvable = |concrete_type: &str| ProcessingError::UnresolvableCollectionType {
    class: class.to_string(),
    parameter: parameter.name.clone(),
    concrete_type: concrete_type.to_string(),
  };

  let inline = directive.is_some_and(|directive| directive.inline);
  let concrete_type = directive.and_then(|directive| directive.concrete_type.as_deref());

  let (container, shape, overridden) = if let Some(concrete_type) = concrete_type {
    let known = registry
      .resolve(concrete_type)
      .filter(|known| known.is_instantiable())
      .ok_or_else(|| unresolvable(concrete_type))?;
    let shape = known.shape.or(shape).unwrap_or(CollectionShape::List);
    (known.path.clone(), shape, true)
  } else {
    let shape = shape.ok_or_else(|| unresolvable(&parameter.type_ref.name))?;
    let known = registry
      .default_container(shape)
      .ok_or_else(|| unresolvable(&parameter.type_ref.name))?;
    (known.path.clone(), shape, false)
  };

  Ok(CollectionDirective {
    container: TypeRef::new(container),
    inline,
    element,
    shape,
    overridden,
  })
}
