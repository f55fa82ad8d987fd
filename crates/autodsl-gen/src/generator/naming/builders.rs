//! Names of the declarations generated for one class.
//!
//! Builder and scope names follow a fixed convention that callers rely on:
//! `<Class>Builder`, `<Param>Collection`, and an entry function named by the
//! display-name override or the decapitalized class name.

use inflections::Inflect;

use super::identifiers::decapitalize;

pub(crate) fn builder_name(class_name: &str) -> String {
  format!("{class_name}Builder")
}

pub(crate) fn collection_scope_name(param_name: &str) -> String {
  format!("{}Collection", param_name.to_pascal_case())
}

pub(crate) fn entry_name(display_name: Option<&str>, class_name: &str) -> String {
  match display_name.map(str::trim) {
    Some(name) if !name.is_empty() => name.to_string(),
    _ => decapitalize(class_name),
  }
}

pub(crate) fn setter_name(param_name: &str) -> String {
  format!("with_{param_name}")
}

pub(crate) fn mutator_name(param_name: &str) -> String {
  format!("set_{param_name}")
}

pub(crate) fn inline_insert_name(param_name: &str) -> String {
  format!("add_{param_name}")
}

pub(crate) fn inline_storage_name(param_name: &str) -> String {
  format!("{param_name}_items")
}

/// File-level module holding one builder, e.g. `person_builder`.
pub(crate) fn module_name(builder_name: &str) -> String {
  builder_name.to_snake_case()
}
