//! Demo de la superficie fluida de TestFlow.
//!
//! Recorre el DSL completo con steps inline: given -> when -> and -> then,
//! persistencia por nombre en el storage, lectura cruzada de resultados y la
//! capa de aserciones tipada. Sin transporte real: los steps de la demo son
//! inline, con el trabajo asíncrono resuelto igual que lo haría un step HTTP
//! o de cola.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use testflow_rust::config::CONFIG;
use testflow_rust::{given_capability, AsyncInlineStep, FlowError, InlineStep, StepResult,
                    TimeoutStep};

/// Colaborador de ejemplo descubierto vía registro de capacidades: simula el
/// proveedor de cliente que un step de transporte obtendría del contexto.
struct DemoClientProvider {
    base_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), FlowError> {
    let provider = Arc::new(DemoClientProvider { base_url: "https://demo.local".to_string() });
    let payload = CONFIG.scenario.demo_payload.clone();

    // Segmento 1: step que descubre el colaborador y "envía" el payload.
    let send = AsyncInlineStep::new(move |ctx| {
                   let payload = payload.clone();
                   Box::pin(async move {
                       let client = ctx.capability::<DemoClientProvider>()?;
                       // Aquí iría la espera de IO real del transporte.
                       tokio::task::yield_now().await;
                       Ok(StepResult::success_with(&payload)
                               .with_property("endpoint", json!(client.base_url.clone()))
                               .with_property("status", json!("201")))
                   })
               }).named("send-request")
                 .step_type("http");

    // Segmento 2: step que lee el resultado del segmento anterior desde el
    // storage y lo resume.
    let summarize = InlineStep::new(|ctx| {
                        let sent = ctx.steps.get("request")?;
                        let sent = sent.borrow();
                        let echoed: String = sent.result()
                                                 .map(|r| r.get_data::<String>())
                                                 .unwrap_or_default();
                        Ok(StepResult::success_with(&format!("summary of '{echoed}'")))
                    }).named("summarize");

    let mut scenario = given_capability(provider);
    scenario.with_step(TimeoutStep::new(send, CONFIG.scenario.step_timeout))
            .when()
            .save_step("request")
            .await?
            .and()
            .await?
            .with_step(TimeoutStep::new(summarize, Duration::from_secs(5)))
            .then();

    let summary = {
        let mut builder = scenario.execute::<String>().await?.assert_success()?;
        builder.get_result()?.data.clone().unwrap_or_default()
    };
    println!("summary payload: {summary}");

    // Lectura final: el step persistido queda inspeccionable por nombre.
    let request = scenario.context().steps.get("request")?;
    let request = request.borrow();
    let result = request.result()
                        .ok_or_else(|| FlowError::StepNotExecuted("request".to_string()))?;
    println!("request payload: {}", result.get_data::<String>());
    println!("request status:  {}", result.get_property::<i64>("status"));
    println!("steps stored:    {:?}", scenario.context().steps.step_names());
    println!("scenario {} completed", scenario.id());

    Ok(())
}
