pub mod ast;
pub mod classifier;
pub mod codegen;
pub mod constructor;
pub mod context;
pub mod errors;
pub mod metadata;
pub mod metrics;
pub mod model;
pub mod naming;
pub mod orchestrator;
pub mod registry;
pub mod synthesizer;
pub mod validator;

#[cfg(test)]
mod tests;
