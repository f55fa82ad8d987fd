//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Builder for `Labeled`
//! Source: fixtures/people.json
//! Generated by `autodsl-gen` v0.1.0

#![allow(clippy::must_use_candidate)]
#![allow(clippy::new_without_default)]
#![allow(clippy::return_self_not_must_use)]
#![allow(dead_code)]
#![allow(non_snake_case)]
#![allow(unused_imports)]
use crate::fixtures::model::*;
pub struct LabeledBuilder<T: Clone> {
    label: ::autodsl_support::Slot<String>,
    values: ::autodsl_support::Slot<Vec<T>>,
    _phantom: ::core::marker::PhantomData<fn() -> (T,)>,
}
impl<T: Clone> ::core::default::Default for LabeledBuilder<T> {
    fn default() -> Self {
        Self {
            label: ::autodsl_support::Slot::Unset,
            values: ::autodsl_support::Slot::Unset,
            _phantom: ::core::marker::PhantomData,
        }
    }
}
impl<T: Clone> LabeledBuilder<T> {
    pub fn new() -> Self {
        <Self as ::core::default::Default>::default()
    }
    pub fn set_label(&mut self, value: impl ::core::convert::Into<String>) -> &mut Self {
        self.label.set(value.into());
        self
    }
    pub fn with_label(mut self, value: impl ::core::convert::Into<String>) -> Self {
        self.set_label(value);
        self
    }
    pub fn set_values(&mut self, value: impl ::core::convert::Into<Vec<T>>) -> &mut Self {
        self.values.set(value.into());
        self
    }
    pub fn with_values(mut self, value: impl ::core::convert::Into<Vec<T>>) -> Self {
        self.set_values(value);
        self
    }
    pub fn values(
        &mut self,
        block: impl ::core::ops::FnOnce(&mut ValuesCollection<T>),
    ) -> &mut Self {
        let mut scope = ValuesCollection::<T>::new();
        block(&mut scope);
        self.values.set(scope.collection.into_collection());
        self
    }
    pub fn build(
        self,
    ) -> ::core::result::Result<Labeled<T>, ::autodsl_support::BuildError> {
        ::core::result::Result::Ok(
            Labeled::<
                T,
            >::new(
                self.label.into_value("LabeledBuilder", "label")?,
                self.values.into_value("LabeledBuilder", "values")?,
            ),
        )
    }
}
pub struct ValuesCollection<T: Clone> {
    collection: ::autodsl_support::Collector<::std::vec::Vec<T>>,
}
impl<T: Clone> ValuesCollection<T> {
    fn new() -> Self {
        Self {
            collection: ::core::default::Default::default(),
        }
    }
    pub fn add(&mut self, item: T) -> &mut Self {
        self.collection.push(item);
        self
    }
}
pub fn labeled<T: Clone>(
    block: impl ::core::ops::FnOnce(&mut LabeledBuilder<T>),
) -> ::core::result::Result<Labeled<T>, ::autodsl_support::BuildError> {
    let mut builder = LabeledBuilder::<T>::new();
    block(&mut builder);
    builder.build()
}
