//! flow-core: motor de escenarios Given-When-Then de ejecución diferida
pub mod constants;
pub mod dsl;
pub mod errors;
pub mod model;
pub mod scenario;
pub mod step;
pub mod validation;

pub use dsl::{given, given_capability, given_context};
pub use errors::FlowError;
pub use model::{ScenarioContext, StepMetadata, StepResult, StepStatus, StepStorage};
pub use scenario::Scenario;
pub use step::{Step, StepDefinition, StepHandle};
pub use validation::{TypedResult, ValidationBuilder};
