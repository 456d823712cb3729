//! Wrapper de timeout para steps.
//!
//! El core no modela cancelación ni timeout; acotar la duración es política
//! de cada implementación. Este wrapper envuelve cualquier `StepDefinition` y
//! convierte la expiración en un resultado Failed (no en falta), dejando el
//! mensaje en la lista de errores.

use std::time::Duration;

use async_trait::async_trait;
use flow_core::errors::FlowError;
use flow_core::model::{ScenarioContext, StepResult};
use flow_core::step::StepDefinition;

pub struct TimeoutStep<S: StepDefinition> {
    inner: S,
    limit: Duration,
}

impl<S: StepDefinition> TimeoutStep<S> {
    pub fn new(inner: S, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait(?Send)]
impl<S: StepDefinition> StepDefinition for TimeoutStep<S> {
    fn name(&self) -> Option<&str> {
        self.inner.name()
    }

    fn step_type(&self) -> &str {
        self.inner.step_type()
    }

    async fn run(&mut self, ctx: &mut ScenarioContext) -> Result<StepResult, FlowError> {
        match tokio::time::timeout(self.limit, self.inner.run(ctx)).await {
            Ok(outcome) => outcome,
            Err(_elapsed) => {
                Ok(StepResult::failure([format!("step '{}' timed out after {:?}",
                                                self.inner.name().unwrap_or_else(|| self.inner.step_type()),
                                                self.limit)]))
            }
        }
    }
}
