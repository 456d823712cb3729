//! Steps instrumentados para suites de integración.
//!
//! Fakes deterministas que observan el comportamiento del motor desde
//! afuera: conteo de invocaciones (guarda de ejecución única), registro de
//! orden (izquierda-a-derecha estricto), eco de payload y fallas/faltas
//! controladas.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use flow_core::errors::FlowError;
use flow_core::model::{ScenarioContext, StepResult};
use flow_core::step::StepDefinition;
use serde_json::Value;

/// Eco: resultado exitoso cuyo payload es el valor dado.
pub struct EchoStep {
    payload: Value,
}

impl EchoStep {
    pub fn new(payload: impl Into<Value>) -> Self {
        Self { payload: payload.into() }
    }
}

#[async_trait(?Send)]
impl StepDefinition for EchoStep {
    fn name(&self) -> Option<&str> {
        Some("echo")
    }

    async fn run(&mut self, _ctx: &mut ScenarioContext) -> Result<StepResult, FlowError> {
        Ok(StepResult::success_with(&self.payload))
    }
}

/// Falla controlada: resultado Failed con los errores dados (política
/// "convertir la falla en resultado", no falta).
pub struct FailingStep {
    errors: Vec<String>,
}

impl FailingStep {
    pub fn new<I, S>(errors: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { errors: errors.into_iter().map(Into::into).collect() }
    }
}

#[async_trait(?Send)]
impl StepDefinition for FailingStep {
    fn name(&self) -> Option<&str> {
        Some("failing")
    }

    async fn run(&mut self, _ctx: &mut ScenarioContext) -> Result<StepResult, FlowError> {
        Ok(StepResult::failure(self.errors.clone()))
    }
}

/// Falta controlada: el `run` levanta una falta de ejecución (política
/// "propagar la falla como falta").
pub struct FaultingStep {
    message: String,
}

impl FaultingStep {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[async_trait(?Send)]
impl StepDefinition for FaultingStep {
    fn name(&self) -> Option<&str> {
        Some("faulting")
    }

    async fn run(&mut self, _ctx: &mut ScenarioContext) -> Result<StepResult, FlowError> {
        Err(FlowError::Execution(self.message.clone()))
    }
}

/// Contador de invocaciones compartido: verifica que el trabajo del step se
/// invoque a lo sumo una vez por más que la cadena dispare ejecución varias
/// veces.
pub struct CountingStep {
    invocations: Rc<Cell<u32>>,
}

impl CountingStep {
    pub fn with_counter() -> (Self, Rc<Cell<u32>>) {
        let counter = Rc::new(Cell::new(0));
        (Self { invocations: Rc::clone(&counter) }, counter)
    }
}

#[async_trait(?Send)]
impl StepDefinition for CountingStep {
    fn name(&self) -> Option<&str> {
        Some("counting")
    }

    async fn run(&mut self, _ctx: &mut ScenarioContext) -> Result<StepResult, FlowError> {
        self.invocations.set(self.invocations.get() + 1);
        Ok(StepResult::success_with(&self.invocations.get()))
    }
}

/// Registro de orden global: cada ejecución agrega su etiqueta al log
/// compartido. Permite afirmar que A completó estrictamente antes de que B
/// comenzara.
pub struct RecordingStep {
    label: String,
    log: Rc<RefCell<Vec<String>>>,
}

impl RecordingStep {
    pub fn new(label: impl Into<String>, log: Rc<RefCell<Vec<String>>>) -> Self {
        Self { label: label.into(), log }
    }

    /// Log de orden fresco para compartir entre varios recording steps.
    pub fn shared_log() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }
}

#[async_trait(?Send)]
impl StepDefinition for RecordingStep {
    fn name(&self) -> Option<&str> {
        Some("recording")
    }

    async fn run(&mut self, _ctx: &mut ScenarioContext) -> Result<StepResult, FlowError> {
        self.log.borrow_mut().push(format!("{}:start", self.label));
        tokio::task::yield_now().await;
        self.log.borrow_mut().push(format!("{}:end", self.label));
        Ok(StepResult::success_with(&self.label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flow_core::given;

    #[tokio::test]
    async fn counting_step_reports_each_real_invocation() {
        let (step, counter) = CountingStep::with_counter();
        let mut scenario = given();
        scenario.with_step(step);
        scenario.execute_current_step().await.expect("first run");
        scenario.execute_current_step().await.expect("idempotent no-op");
        assert_eq!(counter.get(), 1);
    }

    #[tokio::test]
    async fn recording_step_logs_start_and_end() {
        let log = RecordingStep::shared_log();
        let mut scenario = given();
        scenario.with_step(RecordingStep::new("a", Rc::clone(&log)));
        scenario.execute_current_step().await.expect("runs");
        assert_eq!(*log.borrow(), vec!["a:start".to_string(), "a:end".to_string()]);
    }
}
