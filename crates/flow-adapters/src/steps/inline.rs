//! Steps inline respaldados por closures.
//!
//! Permiten escribir un escenario completo sin declarar un struct por paso:
//! la variante síncrona recibe el contexto y devuelve el resultado; la
//! asíncrona devuelve un futuro (para steps que esperan IO real).

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use flow_core::errors::FlowError;
use flow_core::model::{ScenarioContext, StepResult};
use flow_core::step::StepDefinition;

type SyncOp = Box<dyn FnMut(&mut ScenarioContext) -> Result<StepResult, FlowError>>;
type AsyncOp = Box<dyn for<'a> FnMut(&'a mut ScenarioContext)
                                     -> Pin<Box<dyn Future<Output = Result<StepResult, FlowError>> + 'a>>>;

/// Step cuyo trabajo es una closure síncrona sobre el contexto.
pub struct InlineStep {
    name: Option<String>,
    step_type: String,
    op: SyncOp,
}

impl InlineStep {
    pub fn new<F>(op: F) -> Self
        where F: FnMut(&mut ScenarioContext) -> Result<StepResult, FlowError> + 'static
    {
        Self { name: None,
               step_type: flow_core::constants::DEFAULT_STEP_TYPE.to_string(),
               op: Box::new(op) }
    }

    /// Asigna un nombre amigable para reportes.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Cambia el discriminador de tecnología reportado.
    pub fn step_type(mut self, step_type: impl Into<String>) -> Self {
        self.step_type = step_type.into();
        self
    }
}

#[async_trait(?Send)]
impl StepDefinition for InlineStep {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn step_type(&self) -> &str {
        &self.step_type
    }

    async fn run(&mut self, ctx: &mut ScenarioContext) -> Result<StepResult, FlowError> {
        (self.op)(ctx)
    }
}

/// Step cuyo trabajo es una closure que produce un futuro sobre el contexto.
/// Para espera real de IO; el escenario resuelve el futuro antes de devolver
/// el control a la cadena.
pub struct AsyncInlineStep {
    name: Option<String>,
    step_type: String,
    op: AsyncOp,
}

impl AsyncInlineStep {
    pub fn new<F>(op: F) -> Self
        where F: for<'a> FnMut(&'a mut ScenarioContext)
                               -> Pin<Box<dyn Future<Output = Result<StepResult, FlowError>> + 'a>>
                 + 'static
    {
        Self { name: None,
               step_type: flow_core::constants::DEFAULT_STEP_TYPE.to_string(),
               op: Box::new(op) }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn step_type(mut self, step_type: impl Into<String>) -> Self {
        self.step_type = step_type.into();
        self
    }
}

#[async_trait(?Send)]
impl StepDefinition for AsyncInlineStep {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn step_type(&self) -> &str {
        &self.step_type
    }

    async fn run(&mut self, ctx: &mut ScenarioContext) -> Result<StepResult, FlowError> {
        (self.op)(ctx).await
    }
}
