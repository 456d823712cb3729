//! Fachada síncrona sobre el escenario asíncrono.
//!
//! El core es asíncrono de punta a punta; esta es la ÚNICA frontera donde se
//! bloquea sobre trabajo asíncrono, y está confinada aquí a propósito: cada
//! método resuelve exactamente un `block_on` sobre un runtime propio de un
//! solo hilo. La garantía de orden es la misma del core (el step N+1 nunca se
//! adjunta antes de resolver el resultado del step N).
//!
//! No usar desde dentro de un runtime tokio: `block_on` anidado aborta.

use serde::de::DeserializeOwned;

use flow_core::errors::FlowError;
use flow_core::model::ScenarioContext;
use flow_core::scenario::Scenario;
use flow_core::step::{StepDefinition, StepHandle};
use flow_core::validation::ValidationBuilder;

pub struct BlockingScenario {
    runtime: tokio::runtime::Runtime,
    scenario: Scenario,
}

impl BlockingScenario {
    /// Fachada sobre un escenario fresco.
    pub fn new() -> Result<Self, FlowError> {
        Self::from_scenario(Scenario::new())
    }

    /// Fachada sobre un escenario ya construido (p. ej. desde `given()`).
    pub fn from_scenario(scenario: Scenario) -> Result<Self, FlowError> {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_time()
                                                                   .build()
                                                                   .map_err(|e| FlowError::Internal(e.to_string()))?;
        Ok(Self { runtime, scenario })
    }

    /// Fija el step actual (reemplazo incondicional, como en el core).
    pub fn with_step(&mut self, definition: impl StepDefinition + 'static) -> &mut Self {
        self.scenario.with_step(definition);
        self
    }

    /// Fuerza la ejecución del step actual y devuelve la fachada para seguir
    /// encadenando. Las faltas se propagan sin modificación.
    pub fn and(&mut self) -> Result<&mut Self, FlowError> {
        self.execute_current_step()?;
        Ok(self)
    }

    /// Sinónimo de `and`.
    pub fn on(&mut self) -> Result<&mut Self, FlowError> {
        self.and()
    }

    /// Pass-through puro.
    pub fn when(&mut self) -> &mut Self {
        self
    }

    /// Pass-through puro.
    pub fn then(&mut self) -> &mut Self {
        self
    }

    /// Un único `block_on` sobre el punto de suspensión del core.
    pub fn execute_current_step(&mut self) -> Result<(), FlowError> {
        self.runtime.block_on(self.scenario.execute_current_step())
    }

    /// Ejecuta y persiste el step actual bajo `name`.
    pub fn save_step(&mut self, name: &str) -> Result<&mut Self, FlowError> {
        self.runtime.block_on(self.scenario.save_step(name))?;
        Ok(self)
    }

    /// Puente a la capa de aserciones, idéntico a `Scenario::execute`.
    pub fn execute<T: DeserializeOwned>(&mut self) -> Result<ValidationBuilder<'_, T>, FlowError> {
        self.execute_current_step()?;
        Ok(ValidationBuilder::new(&self.scenario))
    }

    pub fn context(&self) -> &ScenarioContext {
        self.scenario.context()
    }

    pub fn context_mut(&mut self) -> &mut ScenarioContext {
        self.scenario.context_mut()
    }

    pub fn current_step(&self) -> Option<StepHandle> {
        self.scenario.current_step()
    }

    /// Devuelve el escenario interno, descartando el runtime.
    pub fn into_inner(self) -> Scenario {
        self.scenario
    }
}
