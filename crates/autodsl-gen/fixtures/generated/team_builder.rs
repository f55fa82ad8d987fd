//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Builder for `Team`
//! Source: fixtures/people.json
//! Generated by `autodsl-gen` v0.1.0

#![allow(clippy::must_use_candidate)]
#![allow(clippy::new_without_default)]
#![allow(clippy::return_self_not_must_use)]
#![allow(dead_code)]
#![allow(non_snake_case)]
#![allow(unused_imports)]
use crate::fixtures::model::*;
use super::person_builder::PersonBuilder;
pub struct TeamBuilder {
    name: ::autodsl_support::Slot<String>,
    leader: ::autodsl_support::Slot<Person>,
    members: ::autodsl_support::Slot<Vec<Person>>,
    keywords: ::autodsl_support::Slot<
        ::core::option::Option<indexmap::IndexSet<String>>,
    >,
    members_items: ::core::option::Option<
        ::autodsl_support::Collector<::std::collections::VecDeque<Person>>,
    >,
}
impl ::core::default::Default for TeamBuilder {
    fn default() -> Self {
        Self {
            name: ::autodsl_support::Slot::Unset,
            leader: ::autodsl_support::Slot::Unset,
            members: ::autodsl_support::Slot::Unset,
            keywords: ::autodsl_support::Slot::absent(),
            members_items: ::core::option::Option::None,
        }
    }
}
impl TeamBuilder {
    pub fn new() -> Self {
        <Self as ::core::default::Default>::default()
    }
    pub fn set_name(&mut self, value: impl ::core::convert::Into<String>) -> &mut Self {
        self.name.set(value.into());
        self
    }
    pub fn with_name(mut self, value: impl ::core::convert::Into<String>) -> Self {
        self.set_name(value);
        self
    }
    pub fn set_leader(&mut self, value: impl ::core::convert::Into<Person>) -> &mut Self {
        self.leader.set(value.into());
        self
    }
    pub fn with_leader(mut self, value: impl ::core::convert::Into<Person>) -> Self {
        self.set_leader(value);
        self
    }
    pub fn set_members(
        &mut self,
        value: impl ::core::convert::Into<Vec<Person>>,
    ) -> &mut Self {
        self.members_items = ::core::option::Option::None;
        self.members.set(value.into());
        self
    }
    pub fn with_members(mut self, value: impl ::core::convert::Into<Vec<Person>>) -> Self {
        self.set_members(value);
        self
    }
    pub fn set_keywords(
        &mut self,
        value: impl ::core::convert::Into<
            ::core::option::Option<indexmap::IndexSet<String>>,
        >,
    ) -> &mut Self {
        self.keywords.set(value.into());
        self
    }
    pub fn with_keywords(
        mut self,
        value: impl ::core::convert::Into<
            ::core::option::Option<indexmap::IndexSet<String>>,
        >,
    ) -> Self {
        self.set_keywords(value);
        self
    }
    pub fn leader(
        &mut self,
        block: impl ::core::ops::FnOnce(&mut PersonBuilder),
    ) -> &mut Self {
        let mut builder = PersonBuilder::new();
        block(&mut builder);
        self.leader.assign(builder.build());
        self
    }
    pub fn add_members(&mut self, item: Person) -> &mut Self {
        self.members_items.get_or_insert_with(::core::default::Default::default).push(item);
        self
    }
    pub fn keywords(
        &mut self,
        block: impl ::core::ops::FnOnce(&mut KeywordsCollection),
    ) -> &mut Self {
        let mut scope = KeywordsCollection::new();
        block(&mut scope);
        self.keywords
            .set(::core::option::Option::Some(scope.collection.into_collection()));
        self
    }
    pub fn build(mut self) -> ::core::result::Result<Team, ::autodsl_support::BuildError> {
        if let ::core::option::Option::Some(items) = self.members_items.take() {
            self.members.set(items.into_collection());
        }
        ::core::result::Result::Ok(
            Team::new(
                self.name.into_value("TeamBuilder", "name")?,
                self.leader.into_value("TeamBuilder", "leader")?,
                self.members.into_value("TeamBuilder", "members")?,
                self.keywords.into_value("TeamBuilder", "keywords")?,
            ),
        )
    }
}
pub struct KeywordsCollection {
    collection: ::autodsl_support::Collector<::autodsl_support::IndexSet<String>>,
}
impl KeywordsCollection {
    fn new() -> Self {
        Self {
            collection: ::core::default::Default::default(),
        }
    }
    pub fn add(&mut self, item: String) -> &mut Self {
        self.collection.push(item);
        self
    }
}
pub fn team(
    block: impl ::core::ops::FnOnce(&mut TeamBuilder),
) -> ::core::result::Result<Team, ::autodsl_support::BuildError> {
    let mut builder = TeamBuilder::new();
    block(&mut builder);
    builder.build()
}
