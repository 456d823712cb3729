//! Escenario: máquina de estados de la cadena fluida.

mod core;

pub use self::core::Scenario;
