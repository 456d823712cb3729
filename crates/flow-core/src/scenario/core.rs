//! Orquestador de la cadena fluida Given-When-Then.
//!
//! El escenario mantiene exactamente un "step actual" y avanza estado sólo
//! cuando la cadena lo pide explícitamente:
//! - *sin step actual* -> `set_current_step`/`with_step` -> *step pendiente*
//! - *step pendiente* -> `and`/`on`/`save_step`/`execute` -> *step ejecutado*
//!
//! La superficie es asíncrona de punta a punta: cada método que dispara
//! ejecución es `async` y devuelve `&mut Self`, de modo que el step N+1
//! nunca se adjunta antes de que el resultado del step N esté resuelto. El
//! único punto de suspensión del core es `execute_current_step`. El orden
//! izquierda-a-derecha escrito en la cadena es exactamente el orden de
//! ejecución; no existe concurrencia entre steps de un mismo escenario.
//!
//! Política de fallas: cero reintentos, cero supresión. Una falta surgida del
//! trabajo de un step se propaga sin modificación vía `?` al caller del
//! método que disparó la ejecución. Los métodos de la cadena prestan el
//! escenario en lugar de consumirlo, así que tras capturar la falta el caller
//! conserva el escenario: el contexto y los steps ya persistidos en el
//! storage quedan inspeccionables para diagnóstico.

use std::fmt;

use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::errors::FlowError;
use crate::model::ScenarioContext;
use crate::step::{Step, StepDefinition, StepHandle};
use crate::validation::ValidationBuilder;

pub struct Scenario {
    id: Uuid,
    context: ScenarioContext,
    current: Option<StepHandle>,
}

impl Scenario {
    /// Escenario con contexto fresco.
    pub fn new() -> Self {
        Self::with_context(ScenarioContext::new())
    }

    /// Escenario sobre un contexto provisto por el caller (permite compartir
    /// estado entre escenarios o pre-sembrar colaboradores).
    pub fn with_context(context: ScenarioContext) -> Self {
        Self { id: Uuid::new_v4(),
               context,
               current: None }
    }

    /// Identidad del escenario, para reportes y correlación de diagnósticos.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Reemplaza incondicionalmente el step actual. El step previo se
    /// descarta salvo que un segmento anterior lo haya persistido con
    /// `save_step`. Seam de bajo nivel: los builders de steps deciden cuándo
    /// avanzar; el escenario no cuestiona el orden.
    pub fn set_current_step(&mut self, step: StepHandle) {
        self.current = Some(step);
    }

    /// Conveniencia fluida: envuelve la definición en un `Step` y la fija
    /// como step actual.
    pub fn with_step(&mut self, definition: impl StepDefinition + 'static) -> &mut Self {
        self.set_current_step(Step::handle(Box::new(definition)));
        self
    }

    /// Fuerza la ejecución del step actual y presta el escenario para seguir
    /// encadenando. Garantiza que los efectos del step previo están
    /// completamente resueltos antes de adjuntar uno nuevo.
    pub async fn and(&mut self) -> Result<&mut Self, FlowError> {
        self.execute_current_step().await?;
        Ok(self)
    }

    /// Sinónimo de `and` para que la prosa BDD lea natural ("on the queue").
    pub async fn on(&mut self) -> Result<&mut Self, FlowError> {
        self.and().await
    }

    /// Pass-through puro, sin ejecución: existe para que la cadena lea como
    /// prosa Given-When-Then.
    pub fn when(&mut self) -> &mut Self {
        self
    }

    /// Pass-through puro, sin ejecución.
    pub fn then(&mut self) -> &mut Self {
        self
    }

    /// Ejecuta el step actual hasta completar su trabajo asíncrono y cachea
    /// el resultado en el step. No-op sin step actual; no-op (idempotente) si
    /// ya está ejecutado. El préstamo del handle no se retiene a través del
    /// await, de modo que el propio trabajo puede leer su handle vía el
    /// storage del contexto.
    pub async fn execute_current_step(&mut self) -> Result<(), FlowError> {
        let Some(handle) = self.current.clone() else {
            return Ok(());
        };
        Step::execute_handle(&handle, &mut self.context).await
    }

    /// Fuerza la ejecución y persiste el step actual en el storage bajo
    /// `name` (sobreescritura silenciosa ante colisión). El step sigue siendo
    /// el actual, así que la cadena puede validar sobre él a continuación.
    pub async fn save_step(&mut self, name: &str) -> Result<&mut Self, FlowError> {
        self.execute_current_step().await?;
        let handle = self.current.clone().ok_or(FlowError::NoCurrentStep)?;
        self.context.steps.save(name, handle)?;
        Ok(self)
    }

    /// Puente a la capa de aserciones: fuerza la ejecución y devuelve un
    /// builder tipado ligado al step actual de este escenario.
    pub async fn execute<T: DeserializeOwned>(&mut self) -> Result<ValidationBuilder<'_, T>, FlowError> {
        self.execute_current_step().await?;
        Ok(ValidationBuilder::new(self))
    }

    pub fn context(&self) -> &ScenarioContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ScenarioContext {
        &mut self.context
    }

    /// Handle al step actual, si hay uno.
    pub fn current_step(&self) -> Option<StepHandle> {
        self.current.clone()
    }

    pub fn has_current_step(&self) -> bool {
        self.current.is_some()
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
         .field("id", &self.id)
         .field("saved_steps", &self.context.steps.len())
         .field("has_current_step", &self.has_current_step())
         .finish()
    }
}
