pub mod engine_iterative;
pub mod engine_trait;
