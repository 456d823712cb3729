//! TestFlow Rust Library
//!
//! Este crate actúa como paraguas del framework TestFlow:
//! - Re-exporta el motor de escenarios (`flow_core`) y los steps concretos
//!   (`flow_adapters`).
//! - Expone `config` con la configuración del runner cargada de entorno.
//!
//! Puede usarse desde `main.rs` o por suites de integración externas.

pub mod config;

pub use flow_adapters::{AsyncInlineStep, BlockingScenario, CountingStep, EchoStep, FailingStep,
                        FaultingStep, InlineStep, RecordingStep, TimeoutStep};
pub use flow_core::{given, given_capability, given_context, FlowError, Scenario, ScenarioContext,
                    Step, StepDefinition, StepHandle, StepMetadata, StepResult, StepStatus,
                    StepStorage, TypedResult, ValidationBuilder};
