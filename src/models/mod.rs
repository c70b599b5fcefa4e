pub mod envelope;
pub mod generation;
