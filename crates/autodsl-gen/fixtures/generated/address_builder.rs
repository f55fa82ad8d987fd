//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Builder for `Address`
//! Source: fixtures/people.json
//! Generated by `autodsl-gen` v0.1.0

#![allow(clippy::must_use_candidate)]
#![allow(clippy::new_without_default)]
#![allow(clippy::return_self_not_must_use)]
#![allow(dead_code)]
#![allow(non_snake_case)]
#![allow(unused_imports)]
use crate::fixtures::model::*;
pub struct AddressBuilder {
    street: ::autodsl_support::Slot<String>,
    city: ::autodsl_support::Slot<String>,
    zip: ::autodsl_support::Slot<::core::option::Option<String>>,
}
impl ::core::default::Default for AddressBuilder {
    fn default() -> Self {
        Self {
            street: ::autodsl_support::Slot::Unset,
            city: ::autodsl_support::Slot::Unset,
            zip: ::autodsl_support::Slot::absent(),
        }
    }
}
impl AddressBuilder {
    pub fn new() -> Self {
        <Self as ::core::default::Default>::default()
    }
    pub fn set_street(&mut self, value: impl ::core::convert::Into<String>) -> &mut Self {
        self.street.set(value.into());
        self
    }
    pub fn with_street(mut self, value: impl ::core::convert::Into<String>) -> Self {
        self.set_street(value);
        self
    }
    pub fn set_city(&mut self, value: impl ::core::convert::Into<String>) -> &mut Self {
        self.city.set(value.into());
        self
    }
    pub fn with_city(mut self, value: impl ::core::convert::Into<String>) -> Self {
        self.set_city(value);
        self
    }
    pub fn set_zip(
        &mut self,
        value: impl ::core::convert::Into<::core::option::Option<String>>,
    ) -> &mut Self {
        self.zip.set(value.into());
        self
    }
    pub fn with_zip(
        mut self,
        value: impl ::core::convert::Into<::core::option::Option<String>>,
    ) -> Self {
        self.set_zip(value);
        self
    }
    pub fn build(self) -> ::core::result::Result<Address, ::autodsl_support::BuildError> {
        ::core::result::Result::Ok(
            Address::of(
                self.street.into_value("AddressBuilder", "street")?,
                self.city.into_value("AddressBuilder", "city")?,
                self.zip.into_value("AddressBuilder", "zip")?,
            ),
        )
    }
}
pub fn location(
    block: impl ::core::ops::FnOnce(&mut AddressBuilder),
) -> ::core::result::Result<Address, ::autodsl_support::BuildError> {
    let mut builder = AddressBuilder::new();
    block(&mut builder);
    builder.build()
}
