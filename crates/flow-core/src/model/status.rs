//! Estado de un Step en tiempo de ejecución.
//!
//! Las transiciones válidas son:
//! - `NotStarted` -> `Running`
//! - `Running` -> `Succeeded` | `Failed` | `Skipped` | `Cancelled`
//!
//! Los cuatro estados finales son terminales: una vez alcanzados, la metadata
//! fija `completed_at` y no se permiten reversiones.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    /// El paso aún no inició su ejecución.
    NotStarted,
    /// El paso está en ejecución.
    Running,
    /// El paso finalizó correctamente.
    Succeeded,
    /// El paso falló.
    Failed,
    /// El paso fue omitido por decisión del caller o de la tecnología.
    Skipped,
    /// El paso fue cancelado antes de completar.
    Cancelled,
}

impl StepStatus {
    /// Indica si el estado pertenece al conjunto terminal
    /// {Succeeded, Failed, Skipped, Cancelled}.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self,
                 StepStatus::Succeeded | StepStatus::Failed | StepStatus::Skipped | StepStatus::Cancelled)
    }
}
