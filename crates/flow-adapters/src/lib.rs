//! flow-adapters: steps concretos y fachada bloqueante sobre flow-core
//!
//! Este crate provee:
//! - Steps inline respaldados por closures (`InlineStep`, `AsyncInlineStep`)
//!   para escribir escenarios sin definir structs por paso.
//! - Steps instrumentados (`EchoStep`, `FailingStep`, `FaultingStep`,
//!   `CountingStep`, `RecordingStep`) usados como fakes en suites de
//!   integración: verifican la guarda de ejecución única y el orden estricto
//!   izquierda-a-derecha de la cadena.
//! - `TimeoutStep`: wrapper que acota la duración de otro step; el timeout es
//!   política del step, nunca del core.
//! - `BlockingScenario`: la única frontera síncrono/asíncrono documentada.
//!
//! Nota: el core sólo conoce `StepDefinition` y `StepResult`; nada de lo que
//! hay aquí introduce semántica nueva en el motor.

pub mod blocking;
pub mod steps;

pub use blocking::BlockingScenario;
pub use steps::{AsyncInlineStep, CountingStep, EchoStep, FailingStep, FaultingStep, InlineStep,
                RecordingStep, TimeoutStep};
