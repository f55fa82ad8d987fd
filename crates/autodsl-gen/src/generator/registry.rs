//! Types the generator knows about while processing one descriptor.
//!
//! Lookups fall back from an exact path match to a match on the last path
//! segment, so `Address`, `crate::model::Address` and `model::Address` all
//! resolve to the same entry.

use indexmap::IndexMap;

use crate::{
  descriptor::{DescriptorFile, GenerateDirective},
  generator::{
    model::{ClassKind, CollectionShape, Modality, NestedBuilderRef, simple_name},
    naming::builders::{builder_name, module_name},
  },
};

pub(crate) const DEFAULT_SUPPORT_PATH: &str = "::autodsl_support";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownType {
  pub name: String,
  pub path: String,
  pub kind: ClassKind,
  pub modality: Modality,
  pub shape: Option<CollectionShape>,
  pub builder: Option<NestedBuilderRef>,
}

impl KnownType {
  fn container(name: &str, path: String, shape: Option<CollectionShape>) -> Self {
    Self {
      name: name.to_string(),
      path,
      kind: ClassKind::Class,
      modality: Modality::Concrete,
      shape,
      builder: None,
    }
  }

  /// A type a collection container can be instantiated from.
  pub fn is_instantiable(&self) -> bool {
    self.kind == ClassKind::Class && self.modality == Modality::Concrete
  }
}

#[derive(Debug, Clone)]
pub struct TypeRegistry {
  types: IndexMap<String, KnownType>,
  support_path: String,
}

impl TypeRegistry {
  pub fn new(descriptor: &DescriptorFile, support_path: &str) -> Self {
    let mut registry = Self {
      types: IndexMap::new(),
      support_path: support_path.to_string(),
    };
    registry.register_builtins();

    for class in &descriptor.classes {
      let (kind, modality) = class
        .metadata
        .as_ref()
        .map_or((ClassKind::Class, Modality::Concrete), |metadata| {
          (metadata.kind.into(), metadata.modality.into())
        });
      registry.insert(KnownType {
        name: class.name.clone(),
        path: format!("{}::{}", class.package, class.name),
        kind,
        modality,
        shape: None,
        builder: class
          .directives
          .generate
          .as_ref()
          .map(|directive| sibling_builder(&class.name, directive, None)),
      });
    }

    for entry in &descriptor.types {
      let path = entry.path.clone().unwrap_or_else(|| entry.name.clone());
      registry.insert(KnownType {
        name: entry.name.clone(),
        path,
        kind: ClassKind::from(entry.kind),
        modality: Modality::from(entry.modality),
        shape: None,
        builder: entry
          .generate
          .as_ref()
          .map(|directive| sibling_builder(&entry.name, directive, entry.builder_module.as_deref())),
      });
    }

    registry
  }

  fn register_builtins(&mut self) {
    let list = Some(CollectionShape::List);
    let set = Some(CollectionShape::Set);
    for (name, path, shape) in [
      ("Vec", "::std::vec::Vec", list),
      ("VecDeque", "::std::collections::VecDeque", list),
      ("LinkedList", "::std::collections::LinkedList", list),
      ("HashSet", "::std::collections::HashSet", set),
      ("BTreeSet", "::std::collections::BTreeSet", set),
      ("BinaryHeap", "::std::collections::BinaryHeap", None),
    ] {
      self.insert(KnownType::container(name, path.to_string(), shape));
    }
    let index_set = format!("{}::IndexSet", self.support_path);
    self.insert(KnownType::container("IndexSet", index_set, set));
  }

  fn insert(&mut self, known: KnownType) {
    self.types.insert(known.path.clone(), known);
  }

  pub fn support_path(&self) -> &str {
    &self.support_path
  }

  /// Resolves a type name by exact path, then by its last path segment.
  /// Declarations from the descriptor shadow built-ins of the same name.
  pub fn resolve(&self, name: &str) -> Option<&KnownType> {
    if let Some(known) = self.types.get(name) {
      return Some(known);
    }
    let simple = simple_name(name);
    self.types.values().rev().find(|known| known.name == simple)
  }

  /// Collection shape of a raw type name, when it names a known container.
  pub fn shape_of(&self, name: &str) -> Option<CollectionShape> {
    self.resolve(name).and_then(|known| known.shape)
  }

  /// Builder generated for `name`, when the type carries the generate directive.
  pub fn nested_builder(&self, name: &str) -> Option<&NestedBuilderRef> {
    self.resolve(name).and_then(|known| known.builder.as_ref())
  }

  pub fn default_container(&self, shape: CollectionShape) -> Option<&KnownType> {
    match shape {
      CollectionShape::List => self.resolve("::std::vec::Vec"),
      CollectionShape::Set => self.resolve(&format!("{}::IndexSet", self.support_path)),
    }
  }
}

fn sibling_builder(class_name: &str, directive: &GenerateDirective, module: Option<&str>) -> NestedBuilderRef {
  let builder = builder_name(class_name);
  let module = module.map_or_else(|| format!("super::{}", module_name(&builder)), str::to_string);
  NestedBuilderRef {
    builder,
    module,
    display_name: directive.display_name().map(str::to_string),
  }
}
