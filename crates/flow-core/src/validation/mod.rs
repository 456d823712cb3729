//! Capa de aserciones tipada sobre resultados de steps.

mod builder;

pub use builder::{TypedResult, ValidationBuilder};
