//! Modelos neutrales del motor (metadata, resultado, contexto, storage).

mod coerce;

pub(crate) use coerce::value_kind;
pub mod context;
pub mod metadata;
pub mod result;
pub mod status;
pub mod storage;

pub use context::ScenarioContext;
pub use metadata::StepMetadata;
pub use result::StepResult;
pub use status::StepStatus;
pub use storage::StepStorage;
