//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Generated builders
//! Source: fixtures/people.json
//! Generated by `autodsl-gen` v0.1.0

pub mod person_builder;
pub use person_builder::{PersonBuilder, person};
pub mod address_builder;
pub use address_builder::{AddressBuilder, location};
pub mod team_builder;
pub use team_builder::{TeamBuilder, team};
pub mod labeled_builder;
pub use labeled_builder::{LabeledBuilder, labeled};
