//! Integración del escenario: avance de cadena, guarda de ejecución única,
//! orden estricto y propagación de faltas.

use std::rc::Rc;

use flow_adapters::{CountingStep, EchoStep, FailingStep, FaultingStep, InlineStep, RecordingStep};
use flow_core::errors::FlowError;
use flow_core::{given, Step, StepResult};

#[tokio::test]
async fn a_step_is_not_executed_until_the_chain_asks() {
    let mut scenario = given();
    scenario.with_step(EchoStep::new("X"));
    let handle = scenario.current_step().expect("step attached");
    assert!(!handle.borrow().is_executed());
    assert!(handle.borrow().result().is_none());
    assert!(!handle.borrow().is_valid());
}

#[tokio::test]
async fn when_and_then_are_pure_pass_through() {
    let mut scenario = given();
    scenario.with_step(EchoStep::new("X")).when().then();
    let handle = scenario.current_step().expect("step attached");
    assert!(!handle.borrow().is_executed(), "when/then must not trigger execution");
}

#[tokio::test]
async fn and_executes_and_further_triggers_are_no_ops() {
    let (step, counter) = CountingStep::with_counter();
    let mut scenario = given();
    scenario.with_step(step);
    scenario.and().await.expect("first trigger runs the step");
    scenario.and().await.expect("second trigger is a safe no-op");
    scenario.on().await.expect("on() is a synonym of and()");
    scenario.execute_current_step().await.expect("explicit trigger is also a no-op");
    assert_eq!(counter.get(), 1, "work must run exactly once");
}

#[tokio::test]
async fn execute_current_step_without_step_is_a_no_op() {
    let mut scenario = given();
    scenario.execute_current_step().await.expect("no current step: nothing to do");
    assert!(!scenario.has_current_step());
}

#[tokio::test]
async fn chained_steps_execute_strictly_left_to_right() {
    let log = RecordingStep::shared_log();
    let mut scenario = given();
    scenario.with_step(RecordingStep::new("a", Rc::clone(&log)))
            .and()
            .await
            .expect("a runs")
            .with_step(RecordingStep::new("b", Rc::clone(&log)))
            .and()
            .await
            .expect("b runs");
    // A completa estrictamente antes de que B comience.
    assert_eq!(*log.borrow(),
               vec!["a:start".to_string(), "a:end".to_string(), "b:start".to_string(), "b:end".to_string()]);
}

#[tokio::test]
async fn replacing_an_unsaved_step_discards_it() {
    let (counted, counter) = CountingStep::with_counter();
    let mut scenario = given();
    scenario.with_step(counted).with_step(EchoStep::new("X"));
    scenario.and().await.expect("echo runs");
    assert_eq!(counter.get(), 0, "replaced step must never run");
    let handle = scenario.current_step().expect("echo is current");
    assert_eq!(handle.borrow().result().expect("executed").get_data::<String>(), "X");
}

#[tokio::test]
async fn execution_faults_propagate_unmodified_and_prior_steps_stay_inspectable() {
    let mut scenario = given();
    scenario.with_step(EchoStep::new("first"))
            .save_step("s1")
            .await
            .expect("first segment persists");
    let err = scenario.with_step(FaultingStep::new("socket refused"))
                      .and()
                      .await
                      .unwrap_err();
    assert_eq!(err, FlowError::Execution("socket refused".to_string()));
    // El caller que capturó la falta conserva el escenario: el step ya
    // persistido sigue legible para diagnóstico.
    let saved = scenario.context().steps.get("s1").expect("prior step survives the fault");
    assert_eq!(saved.borrow().result().expect("executed").get_data::<String>(), "first");
    assert_eq!(scenario.context().steps.step_names(), vec!["s1".to_string()]);
}

#[tokio::test]
async fn a_failed_result_is_not_a_fault() {
    let mut scenario = given();
    scenario.with_step(FailingStep::new(["boom"]));
    scenario.and().await.expect("failed result still advances the chain");
    let handle = scenario.current_step().expect("attached");
    let step = handle.borrow();
    let result = step.result().expect("executed");
    assert!(!result.success);
    assert_eq!(result.errors, vec!["boom"]);
}

#[tokio::test]
async fn a_step_can_read_its_own_handle_from_storage_while_running() {
    let reader = InlineStep::new(|ctx| {
                     let own = ctx.steps.get("self")?;
                     let pending = !own.borrow().is_executed();
                     Ok(StepResult::success_with(&pending))
                 }).named("self-reader");
    let handle = Step::handle(Box::new(reader));
    let mut scenario = given();
    scenario.context_mut().steps.save("self", Rc::clone(&handle)).expect("pre-saved");
    scenario.set_current_step(handle);
    scenario.execute_current_step().await.expect("own handle is readable mid-run");
    let stored = scenario.context().steps.get("self").expect("stored");
    assert!(stored.borrow().result().expect("executed").get_data::<bool>(),
            "the step must observe itself as still pending");
}

#[tokio::test]
async fn save_step_executes_before_persisting() {
    let (step, counter) = CountingStep::with_counter();
    let mut scenario = given();
    scenario.with_step(step).save_step("counted").await.expect("saves");
    assert_eq!(counter.get(), 1, "save_step must resolve the step first");
    let handle = scenario.context().steps.get("Counted").expect("stored");
    assert!(handle.borrow().is_executed());
}

#[tokio::test]
async fn save_step_without_current_step_is_a_usage_fault() {
    let err = given().save_step("nothing").await.unwrap_err();
    assert_eq!(err, FlowError::NoCurrentStep);
}

#[tokio::test]
async fn step_validate_sets_the_valid_flag() {
    let mut scenario = given();
    scenario.with_step(EchoStep::new("X")).and().await.expect("runs");
    let handle = scenario.current_step().expect("attached");
    let verdict = handle.borrow_mut()
                        .validate(|r| r.success)
                        .expect("executed step can be validated");
    assert!(verdict);
    assert!(handle.borrow().is_valid());
}

#[tokio::test]
async fn validating_an_unexecuted_step_is_a_usage_fault() {
    let mut scenario = given();
    scenario.with_step(EchoStep::new("X"));
    let handle = scenario.current_step().expect("attached");
    let err = handle.borrow_mut().validate(|r| r.success).unwrap_err();
    assert!(err.to_string().contains("has not been executed"));
}
