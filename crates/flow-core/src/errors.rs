//! Errores del motor de escenarios.
//!
//! Taxonomía (ver diseño del core):
//! - Faltas de uso: secuenciación inválida del DSL (sin step actual, step no
//!   ejecutado, mismatch de tipo del resultado, nombres en blanco). Señalan un
//!   error de programación en el propio test; el core nunca las captura ni
//!   reintenta.
//! - Faltas de ejecución: surgen dentro del trabajo asíncrono de un step y se
//!   propagan sin modificación hasta el llamador.
//! - Faltas de aserción: levantadas por el validation builder o por los
//!   predicados del caller.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// No hay step actual configurado en el escenario (falta de uso).
    #[error("no step configured in scenario")]
    NoCurrentStep,
    /// El step existe pero aún no se ejecutó; el mensaje identifica el step.
    #[error("step '{0}' has not been executed")]
    StepNotExecuted(String),
    /// El resultado no pudo estrecharse al tipo solicitado. Nombra ambos
    /// lados para que el diagnóstico no requiera re-inspección manual.
    #[error("result type mismatch: expected '{expected}', found '{actual}'")]
    ResultTypeMismatch { expected: String, actual: String },
    /// Nombre vacío o en blanco donde se requiere uno (falta de argumento).
    #[error("step name must not be blank")]
    BlankStepName,
    /// Lookup por nombre desconocido en el step storage.
    #[error("no step registered under '{0}'")]
    StepNotFound(String),
    /// El registro de capacidades no contiene el colaborador solicitado.
    #[error("missing capability: {0}")]
    MissingCapability(String),
    /// Falla de ejecución surgida dentro del `run` de un step.
    #[error("step execution failed: {0}")]
    Execution(String),
    /// Aserción fallida del validation builder.
    #[error("assertion failed: {0}")]
    AssertionFailed(String),
    #[error("internal: {0}")]
    Internal(String),
}
