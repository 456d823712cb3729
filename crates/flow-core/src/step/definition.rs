//! Contrato de step implementado por cada tecnología.

use async_trait::async_trait;

use crate::constants::DEFAULT_STEP_TYPE;
use crate::errors::FlowError;
use crate::model::{ScenarioContext, StepResult};

/// Unidad de trabajo diferido. Cada implementación encapsula una operación
/// asíncrona específica de su tecnología (request HTTP, produce/consume de
/// cola, etc.) y produce exactamente un `StepResult` al ejecutarse.
///
/// Política de fallas: la implementación decide si una falla de transporte se
/// propaga como falta (`Err`) o se convierte en un resultado Failed
/// (`success == false` con `errors` poblado). El core no reintenta ni
/// suprime en ningún caso.
///
/// `?Send` a propósito: un escenario se conduce desde un único hilo lógico y
/// sus handles internos no son `Send`.
#[async_trait(?Send)]
pub trait StepDefinition {
    /// Nombre amigable opcional para reportes y diagnósticos.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Discriminador de tecnología ("http", "kafka", ...).
    fn step_type(&self) -> &str {
        DEFAULT_STEP_TYPE
    }

    /// Trabajo asíncrono del step. Se invoca a lo sumo una vez por step; la
    /// guarda de idempotencia vive en el wrapper `Step`, no aquí.
    async fn run(&mut self, ctx: &mut ScenarioContext) -> Result<StepResult, FlowError>;
}
