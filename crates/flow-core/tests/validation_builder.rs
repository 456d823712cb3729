//! Integración del validation builder: resolución perezosa, faltas de uso
//! con diagnóstico y la superficie de aserciones.

use flow_adapters::{EchoStep, FailingStep, InlineStep};
use flow_core::errors::FlowError;
use flow_core::validation::ValidationBuilder;
use flow_core::{given, StepResult};
use serde_json::json;

#[tokio::test]
async fn resolving_without_a_current_step_is_a_usage_fault() {
    let scenario = given();
    let mut builder: ValidationBuilder<'_, String> = ValidationBuilder::new(&scenario);
    assert_eq!(builder.get_result().unwrap_err(), FlowError::NoCurrentStep);
}

#[tokio::test]
async fn resolving_an_unexecuted_step_names_the_step() {
    let mut scenario = given();
    scenario.with_step(EchoStep::new("X"));
    let mut builder: ValidationBuilder<'_, String> = ValidationBuilder::new(&scenario);
    let err = builder.get_result().unwrap_err();
    assert!(err.to_string().contains("has not been executed"));
    assert!(err.to_string().contains("echo"));
}

#[tokio::test]
async fn a_narrowing_mismatch_names_both_types() {
    let mut scenario = given();
    scenario.with_step(EchoStep::new("not-a-struct-shape"));
    #[derive(serde::Deserialize, Debug)]
    struct Expected {
        #[allow(dead_code)]
        field: i64,
    }
    let err = scenario.execute::<Expected>()
                      .await
                      .expect("execution itself succeeds")
                      .assert_success()
                      .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Expected"), "expected type must appear: {msg}");
    assert!(msg.contains("expected"), "diagnostic shape: {msg}");
    assert!(matches!(err, FlowError::ResultTypeMismatch { .. }));
}

#[tokio::test]
async fn assert_success_on_a_failed_step_carries_the_error_list() {
    let mut scenario = given();
    scenario.with_step(FailingStep::new(["boom", "secondary"]));
    let err = scenario.execute::<serde_json::Value>()
                      .await
                      .expect("bridge executes")
                      .assert_success()
                      .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("boom"));
    assert!(msg.contains("secondary"));
}

#[tokio::test]
async fn assert_failure_passes_on_the_same_failed_step() {
    let mut scenario = given();
    scenario.with_step(FailingStep::new(["boom"]));
    scenario.execute::<serde_json::Value>()
            .await
            .expect("bridge executes")
            .assert_failure()
            .expect("failure was expected");
}

#[tokio::test]
async fn assert_failure_on_a_successful_step_is_an_assertion_fault() {
    let mut scenario = given();
    scenario.with_step(EchoStep::new("X"));
    let err = scenario.execute::<String>()
                      .await
                      .expect("bridge executes")
                      .assert_failure()
                      .unwrap_err();
    assert!(matches!(err, FlowError::AssertionFailed(_)));
}

#[tokio::test]
async fn escape_hatches_hand_the_caller_the_typed_result() {
    let step = InlineStep::new(|_ctx| {
                   Ok(StepResult::success_with(&"payload".to_string())
                           .with_property("status", json!(200)))
               });
    let mut scenario = given();
    scenario.with_step(step);
    scenario.execute::<String>()
            .await
            .expect("bridge executes")
            .assert_success()
            .expect("success")
            .validate(|typed| {
                assert_eq!(typed.data.as_deref(), Some("payload"));
                assert!(typed.result.errors.is_empty());
            })
            .expect("validate passes through")
            .assert_errors(|errors| assert!(errors.is_empty()))
            .expect("assert_errors passes through")
            .then()
            .assert_property::<i64, _>("status", |status| assert_eq!(status, 200))
            .expect("property coerced");
}

#[tokio::test]
async fn assert_property_is_permissive_on_absence() {
    let mut scenario = given();
    scenario.with_step(EchoStep::new("X"));
    scenario.execute::<String>()
            .await
            .expect("bridge executes")
            .assert_property::<i64, _>("missing", |value| assert_eq!(value, 0))
            .expect("absence is the caller's assertion to make");
}

#[tokio::test]
async fn the_typed_result_is_memoized_for_the_builder_lifetime() {
    let mut scenario = given();
    scenario.with_step(EchoStep::new("X"));
    let mut builder = scenario.execute::<String>().await.expect("bridge executes");
    let first = builder.get_result().expect("resolves").result.metadata.started_at;
    let second = builder.get_result().expect("memoized").result.metadata.started_at;
    assert_eq!(first, second);
}
