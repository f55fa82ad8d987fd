use std::collections::HashSet;

use crate::{
  descriptor::DescriptorFile,
  fixtures::generated::PersonBuilder,
  generator::{orchestrator::Orchestrator, registry::DEFAULT_SUPPORT_PATH},
};

pub(crate) const PEOPLE_DESCRIPTOR: &str = include_str!("../../fixtures/people.json");

pub(crate) fn people_descriptor() -> DescriptorFile {
  DescriptorFile::from_json(PEOPLE_DESCRIPTOR).expect("people fixture should parse")
}

pub(crate) fn people_orchestrator() -> Orchestrator {
  Orchestrator::new(people_descriptor(), None, None, DEFAULT_SUPPORT_PATH).expect("default support path is valid")
}

pub(crate) fn string_set(values: &[&str]) -> HashSet<String> {
  values.iter().map(|value| (*value).to_string()).collect()
}

/// Sets every required property of a person.
pub(crate) fn required_person(builder: &mut PersonBuilder) {
  builder
    .set_name("Ada")
    .set_age(36)
    .set_phones(Vec::<String>::new())
    .set_tags(HashSet::<String>::new());
}
