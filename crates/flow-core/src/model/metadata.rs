//! Metadata de ejecución de un Step.
//!
//! Todas las actualizaciones son copy-on-write: cada `with_*` produce un
//! nuevo valor y nunca muta el existente. Esto evita que un caller que ya
//! leyó tiempos vea datos alterados retroactivamente.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::StepStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepMetadata {
    /// Marca de tiempo de inicio de la ejecución.
    pub started_at: DateTime<Utc>,
    /// Marca de finalización; sólo se fija bajo un estado terminal.
    pub completed_at: Option<DateTime<Utc>>,
    /// Estado actual del step.
    pub status: StepStatus,
    /// Número de intento (>= 1). El core no reintenta; el contador existe
    /// para tecnologías que implementan su propia política de reintento.
    pub attempt_count: u32,
    /// Etiquetas ordenadas para clasificación/reporte.
    pub tags: Vec<String>,
}

impl StepMetadata {
    /// Metadata inicial: `NotStarted`, intento 1, sin finalización.
    pub fn new() -> Self {
        Self { started_at: Utc::now(),
               completed_at: None,
               status: StepStatus::NotStarted,
               attempt_count: 1,
               tags: Vec::new() }
    }

    /// Metadata estampada directamente en un estado terminal, con ambos
    /// tiempos iguales al instante de construcción. Usada por los
    /// constructores de `StepResult`.
    pub fn stamped(status: StepStatus) -> Self {
        let now = Utc::now();
        Self { started_at: now,
               completed_at: status.is_terminal().then_some(now),
               status,
               attempt_count: 1,
               tags: Vec::new() }
    }

    /// Produce una nueva metadata con el estado dado. Fija `completed_at` al
    /// instante actual sólo si el nuevo estado es terminal; en caso contrario
    /// preserva el valor existente sin tocarlo.
    pub fn with_status(&self, status: StepStatus) -> Self {
        Self { status,
               completed_at: if status.is_terminal() { Some(Utc::now()) } else { self.completed_at },
               ..self.clone() }
    }

    /// Produce una nueva metadata con `attempt_count + 1`; el resto de los
    /// campos se conservan sin cambio.
    pub fn with_incremented_attempt(&self) -> Self {
        Self { attempt_count: self.attempt_count + 1,
               ..self.clone() }
    }

    /// Produce una nueva metadata con la etiqueta añadida al final.
    pub fn with_tag(&self, tag: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.tags.push(tag.into());
        next
    }

    /// Duración derivada: `completed_at - started_at` si hay finalización,
    /// cero en caso contrario.
    pub fn duration(&self) -> Duration {
        self.completed_at.map_or_else(Duration::zero, |done| done - self.started_at)
    }
}

impl Default for StepMetadata {
    fn default() -> Self {
        Self::new()
    }
}
