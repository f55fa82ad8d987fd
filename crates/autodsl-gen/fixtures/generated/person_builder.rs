//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Builder for `Person`
//! Source: fixtures/people.json
//! Generated by `autodsl-gen` v0.1.0

#![allow(clippy::must_use_candidate)]
#![allow(clippy::new_without_default)]
#![allow(clippy::return_self_not_must_use)]
#![allow(dead_code)]
#![allow(non_snake_case)]
#![allow(unused_imports)]
use crate::fixtures::model::*;
use super::address_builder::AddressBuilder;
pub struct PersonBuilder {
    name: ::autodsl_support::Slot<String>,
    age: ::autodsl_support::Slot<i32>,
    address: ::autodsl_support::Slot<::core::option::Option<Address>>,
    phones: ::autodsl_support::Slot<Vec<String>>,
    tags: ::autodsl_support::Slot<std::collections::HashSet<String>>,
    nickname: ::autodsl_support::Slot<::core::option::Option<String>>,
    tags_items: ::core::option::Option<
        ::autodsl_support::Collector<::autodsl_support::IndexSet<String>>,
    >,
}
impl ::core::default::Default for PersonBuilder {
    fn default() -> Self {
        Self {
            name: ::autodsl_support::Slot::Unset,
            age: ::autodsl_support::Slot::Unset,
            address: ::autodsl_support::Slot::absent(),
            phones: ::autodsl_support::Slot::Unset,
            tags: ::autodsl_support::Slot::Unset,
            nickname: ::autodsl_support::Slot::absent(),
            tags_items: ::core::option::Option::None,
        }
    }
}
impl PersonBuilder {
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
    pub fn set_age(&mut self, value: impl ::core::convert::Into<i32>) -> &mut Self {
        self.age.set(value.into());
        self
    }
    pub fn with_age(mut self, value: impl ::core::convert::Into<i32>) -> Self {
        self.set_age(value);
        self
    }
    pub fn set_address(
        &mut self,
        value: impl ::core::convert::Into<::core::option::Option<Address>>,
    ) -> &mut Self {
        self.address.set(value.into());
        self
    }
    pub fn with_address(
        mut self,
        value: impl ::core::convert::Into<::core::option::Option<Address>>,
    ) -> Self {
        self.set_address(value);
        self
    }
    pub fn set_phones(
        &mut self,
        value: impl ::core::convert::Into<Vec<String>>,
    ) -> &mut Self {
        self.phones.set(value.into());
        self
    }
    pub fn with_phones(mut self, value: impl ::core::convert::Into<Vec<String>>) -> Self {
        self.set_phones(value);
        self
    }
    pub fn set_tags(
        &mut self,
        value: impl ::core::convert::Into<std::collections::HashSet<String>>,
    ) -> &mut Self {
        self.tags_items = ::core::option::Option::None;
        self.tags.set(value.into());
        self
    }
    pub fn with_tags(
        mut self,
        value: impl ::core::convert::Into<std::collections::HashSet<String>>,
    ) -> Self {
        self.set_tags(value);
        self
    }
    pub fn set_nickname(
        &mut self,
        value: impl ::core::convert::Into<::core::option::Option<String>>,
    ) -> &mut Self {
        self.nickname.set(value.into());
        self
    }
    pub fn with_nickname(
        mut self,
        value: impl ::core::convert::Into<::core::option::Option<String>>,
    ) -> Self {
        self.set_nickname(value);
        self
    }
    pub fn location(
        &mut self,
        block: impl ::core::ops::FnOnce(&mut AddressBuilder),
    ) -> &mut Self {
        let mut builder = AddressBuilder::new();
        block(&mut builder);
        self.address.assign(builder.build().map(::core::option::Option::Some));
        self
    }
    pub fn phones(
        &mut self,
        block: impl ::core::ops::FnOnce(&mut PhonesCollection),
    ) -> &mut Self {
        let mut scope = PhonesCollection::new();
        block(&mut scope);
        self.phones.set(scope.collection.into_collection());
        self
    }
    pub fn add_tags(&mut self, item: String) -> &mut Self {
        self.tags_items.get_or_insert_with(::core::default::Default::default).push(item);
        self
    }
    pub fn build(
        mut self,
    ) -> ::core::result::Result<Person, ::autodsl_support::BuildError> {
        if let ::core::option::Option::Some(items) = self.tags_items.take() {
            self.tags.set(items.into_collection());
        }
        ::core::result::Result::Ok(
            Person::new(
                self.name.into_value("PersonBuilder", "name")?,
                self.age.into_value("PersonBuilder", "age")?,
                self.address.into_value("PersonBuilder", "address")?,
                self.phones.into_value("PersonBuilder", "phones")?,
                self.tags.into_value("PersonBuilder", "tags")?,
                self.nickname.into_value("PersonBuilder", "nickname")?,
            ),
        )
    }
}
pub struct PhonesCollection {
    collection: ::autodsl_support::Collector<::std::vec::Vec<String>>,
}
impl PhonesCollection {
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
pub fn person(
    block: impl ::core::ops::FnOnce(&mut PersonBuilder),
) -> ::core::result::Result<Person, ::autodsl_support::BuildError> {
    let mut builder = PersonBuilder::new();
    block(&mut builder);
    builder.build()
}
