//! Steps: contrato por tecnología y wrapper con estado de ejecución.
//!
//! La separación sigue al motor: `StepDefinition` es la interfaz neutra que
//! implementan las tecnologías (trabajo puro), mientras que `Step` es el
//! wrapper del core que lleva el estado observable — resultado cacheado,
//! bandera de ejecutado, bandera de validado — y garantiza la guarda de
//! ejecución única.

pub mod definition;

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::FlowError;
use crate::model::{ScenarioContext, StepResult};

pub use definition::StepDefinition;

/// Handle compartido a un step: el escenario, el storage y los lectores ven
/// la misma instancia. `Rc<RefCell<_>>` es deliberado: un escenario nunca se
/// conduce desde más de un hilo (contrato de concurrencia del motor).
pub type StepHandle = Rc<RefCell<Step>>;

/// Step con estado: definición de tecnología + resultado cacheado.
///
/// Invariante: `result` pasa de ausente a presente exactamente una vez; con
/// resultado presente, nuevas ejecuciones son no-ops que devuelven el
/// resultado cacheado.
pub struct Step {
    name: Option<String>,
    step_type: String,
    result: Option<StepResult>,
    valid: bool,
    work: Option<Box<dyn StepDefinition>>,
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
         .field("name", &self.name)
         .field("step_type", &self.step_type)
         .field("result", &self.result)
         .field("valid", &self.valid)
         .finish_non_exhaustive()
    }
}

impl Step {
    /// Envuelve una definición de tecnología; captura nombre y discriminador
    /// en el momento de construcción.
    pub fn new(work: Box<dyn StepDefinition>) -> Self {
        Self { name: work.name().map(str::to_string),
               step_type: work.step_type().to_string(),
               result: None,
               valid: false,
               work: Some(work) }
    }

    /// Construye directamente el handle compartido.
    pub fn handle(work: Box<dyn StepDefinition>) -> StepHandle {
        Rc::new(RefCell::new(Self::new(work)))
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Discriminador de tecnología declarado por la definición.
    pub fn step_type(&self) -> &str {
        &self.step_type
    }

    /// Nombre para diagnósticos: nombre amigable o, en su defecto, el
    /// discriminador de tecnología.
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(&self.step_type)
    }

    pub fn is_executed(&self) -> bool {
        self.result.is_some()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn result(&self) -> Option<&StepResult> {
        self.result.as_ref()
    }

    /// Ejecuta el trabajo del handle una única vez y cachea el resultado.
    /// Llamadas posteriores son no-ops que conservan el resultado cacheado.
    /// Una falta (`Err`) del trabajo se propaga sin modificación y deja el
    /// step sin ejecutar.
    ///
    /// El trabajo corre con el `RefCell` del handle libre: se extrae bajo un
    /// préstamo corto y se restituye al terminar, así el propio trabajo puede
    /// leer su handle a través del storage del contexto sin doble préstamo.
    pub async fn execute_handle(handle: &StepHandle, ctx: &mut ScenarioContext) -> Result<(), FlowError> {
        let mut work = {
            let mut step = handle.borrow_mut();
            if step.is_executed() {
                return Ok(());
            }
            step.work.take().ok_or_else(|| {
                             FlowError::Internal(format!("step '{}' ya está en ejecución",
                                                         step.display_name()))
                         })?
        };
        let outcome = work.run(ctx).await;
        let mut step = handle.borrow_mut();
        step.work = Some(work);
        step.result = Some(outcome?);
        Ok(())
    }

    /// Evalúa el predicado del caller contra el resultado y fija la bandera
    /// `valid` con el veredicto. Falta de uso si el step no se ejecutó aún.
    pub fn validate<F>(&mut self, predicate: F) -> Result<bool, FlowError>
        where F: FnOnce(&StepResult) -> bool
    {
        let result = self.result.as_ref()
                         .ok_or_else(|| FlowError::StepNotExecuted(self.display_name().to_string()))?;
        self.valid = predicate(result);
        Ok(self.valid)
    }
}
