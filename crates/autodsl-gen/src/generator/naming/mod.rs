pub mod builders;
pub mod identifiers;
