//! Puntos de entrada del DSL.
//!
//! Tres constructores sin estado de un escenario fresco. La variante con
//! colaborador registra la referencia en el registro tipado de capacidades
//! del contexto: los steps de tecnología la descubren desde ahí sin que el
//! DSL dependa de sus tipos concretos.

use std::sync::Arc;

use crate::model::ScenarioContext;
use crate::scenario::Scenario;

/// Escenario con contexto y storage frescos.
pub fn given() -> Scenario {
    Scenario::new()
}

/// Escenario sobre un contexto provisto por el caller (compartir estado
/// entre escenarios, pre-sembrar propiedades o colaboradores).
pub fn given_context(context: ScenarioContext) -> Scenario {
    Scenario::with_context(context)
}

/// Escenario fresco con el colaborador registrado como capacidad tipada.
pub fn given_capability<C: Send + Sync + 'static>(collaborator: Arc<C>) -> Scenario {
    let mut context = ScenarioContext::new();
    context.register_capability(collaborator);
    Scenario::with_context(context)
}
