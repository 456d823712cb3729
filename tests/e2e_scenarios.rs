//! E2E sobre la superficie pública del paraguas: DSL completo, descubrimiento
//! de colaboradores y fachada bloqueante.

use std::rc::Rc;
use std::sync::Arc;

use serde_json::json;
use testflow_rust::{given, given_capability, given_context, AsyncInlineStep, BlockingScenario,
                    EchoStep, FlowError, InlineStep, RecordingStep, ScenarioContext, StepResult};

#[tokio::test]
async fn echo_end_to_end_reads_back_from_storage() {
    let mut scenario = given();
    scenario.with_step(EchoStep::new("X"))
            .save_step("s1")
            .await
            .expect("echo persists");
    let handle = scenario.context().steps.get("s1").expect("stored");
    let step = handle.borrow();
    assert_eq!(step.result().expect("executed").get_data::<String>(), "X");
}

#[tokio::test]
async fn failure_end_to_end_assert_success_contains_boom() {
    let step = InlineStep::new(|_ctx| Ok(StepResult::failure(["boom"])));
    let mut scenario = given();
    scenario.with_step(step);
    let err = scenario.execute::<serde_json::Value>()
                      .await
                      .expect("bridge executes")
                      .assert_success()
                      .unwrap_err();
    assert!(err.to_string().contains("boom"));

    scenario.execute::<serde_json::Value>()
            .await
            .expect("bridge is idempotent")
            .assert_failure()
            .expect("assert_failure passes on the same step");
}

#[tokio::test]
async fn two_steps_chained_with_and_run_in_written_order() {
    let log = RecordingStep::shared_log();
    given().with_step(RecordingStep::new("A", Rc::clone(&log)))
           .and()
           .await
           .expect("A runs")
           .with_step(RecordingStep::new("B", Rc::clone(&log)))
           .and()
           .await
           .expect("B runs");
    let order = log.borrow().clone();
    let a_end = order.iter().position(|e| e == "A:end").expect("A finished");
    let b_start = order.iter().position(|e| e == "B:start").expect("B started");
    assert!(a_end < b_start, "A must complete strictly before B begins: {order:?}");
}

#[tokio::test]
async fn collaborators_are_discovered_through_the_capability_registry() {
    struct QueueClientProvider {
        broker: String,
    }

    let provider = Arc::new(QueueClientProvider { broker: "amqp://local".to_string() });
    let step = AsyncInlineStep::new(|ctx| {
                   Box::pin(async move {
                       let client = ctx.capability::<QueueClientProvider>()?;
                       Ok(StepResult::success().with_property("broker", json!(client.broker.clone())))
                   })
               }).step_type("queue");
    let mut scenario = given_capability(provider);
    scenario.with_step(step);
    scenario.execute::<serde_json::Value>()
            .await
            .expect("bridge executes")
            .assert_success()
            .expect("capability resolved")
            .assert_property::<String, _>("broker", |b| assert_eq!(b, "amqp://local"))
            .expect("property coerced");
}

#[tokio::test]
async fn a_missing_required_capability_fails_fast() {
    struct NeverRegistered;

    let step = AsyncInlineStep::new(|ctx| {
                   Box::pin(async move {
                       let _ = ctx.capability::<NeverRegistered>()?;
                       Ok(StepResult::success())
                   })
               });
    let err = given().with_step(step).and().await.unwrap_err();
    assert!(matches!(err, FlowError::MissingCapability(_)));
}

#[tokio::test]
async fn a_caller_supplied_context_is_shared_state() {
    let mut ctx = ScenarioContext::new();
    ctx.set_property("environment", "staging");
    let step = InlineStep::new(|ctx| {
                   let env: String = ctx.get_property("environment");
                   Ok(StepResult::success_with(&env))
               });
    let mut scenario = given_context(ctx);
    scenario.with_step(step).and().await.expect("runs");
    let handle = scenario.current_step().expect("attached");
    assert_eq!(handle.borrow().result().expect("executed").get_data::<String>(), "staging");
}

#[test]
fn the_blocking_facade_walks_the_same_chain_synchronously() {
    let mut sc = BlockingScenario::new().expect("runtime builds");
    sc.with_step(EchoStep::new("X"));
    sc.when().save_step("s1").expect("persists");
    sc.then()
      .execute::<String>()
      .expect("bridge executes")
      .assert_success()
      .expect("echo succeeds");
    let handle = sc.context().steps.get("S1").expect("case-insensitive");
    assert_eq!(handle.borrow().result().expect("executed").get_data::<String>(), "X");
}
