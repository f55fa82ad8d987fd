//! Runtime pieces referenced by builders emitted by `autodsl-gen`.
//!
//! Generated builders store every constructor parameter in a [`Slot`], gather
//! collection elements in a [`Collector`] and report missing required values
//! through [`BuildError`] when `build` is called.

mod collector;
mod error;
mod slot;

pub use collector::Collector;
pub use error::BuildError;
pub use indexmap::IndexSet;
pub use slot::Slot;
