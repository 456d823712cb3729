//! Constantes del motor de escenarios.
//!
//! Valores estáticos compartidos entre el core y los crates de tecnología.
//! Cambios aquí afectan el contrato observable de los resultados (por diseño,
//! `ENGINE_VERSION` viaja en diagnósticos), así que mantener estables.

/// Versión lógica del motor de escenarios. Incrementar sólo ante cambios
/// incompatibles del contrato Step/Result.
pub const ENGINE_VERSION: &str = "1.0";

/// Discriminador de tecnología por defecto para steps que no declaran uno
/// (steps inline, fakes de prueba).
pub const DEFAULT_STEP_TYPE: &str = "inline";
