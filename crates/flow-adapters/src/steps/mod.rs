//! Steps concretos construidos sobre el contrato neutro del core.

pub mod inline;
pub mod probe;
pub mod timeout;

pub use inline::{AsyncInlineStep, InlineStep};
pub use probe::{CountingStep, EchoStep, FailingStep, FaultingStep, RecordingStep};
pub use timeout::TimeoutStep;
