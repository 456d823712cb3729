//! Fachada de aserciones tipada, de resolución perezosa.
//!
//! El builder se liga a un escenario y resuelve "el resultado tipado" del
//! step actual recién en el primer uso, memoizándolo por el resto de su vida:
//! 1. falta si el escenario no tiene step actual;
//! 2. falta si el step actual no se ejecutó todavía;
//! 3. falta nombrando tipo esperado y tipo real si el payload no puede
//!    estrecharse al tipo solicitado.
//!
//! Los métodos de cadena consumen y devuelven `Self` dentro de `Result`, así
//! que el encadenado se escribe con `?` y las faltas surgen exactamente en la
//! llamada que las disparó. Builders de tecnología más ricos se construyen
//! envolviendo este (no hay herencia que preservar: devolver `Self` ya
//! conserva el tipo concreto a lo largo de la cadena).

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::FlowError;
use crate::model::StepResult;
use crate::scenario::Scenario;

/// Resultado estrechado al tipo `T`: la representación neutra completa más
/// el payload ya deserializado (ausente si el step no produjo datos).
#[derive(Debug, Clone)]
pub struct TypedResult<T> {
    pub result: StepResult,
    pub data: Option<T>,
}

pub struct ValidationBuilder<'s, T> {
    scenario: &'s Scenario,
    resolved: Option<TypedResult<T>>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for ValidationBuilder<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationBuilder")
         .field("resolved", &self.resolved)
         .finish_non_exhaustive()
    }
}

impl<'s, T: DeserializeOwned> ValidationBuilder<'s, T> {
    pub fn new(scenario: &'s Scenario) -> Self {
        Self { scenario, resolved: None }
    }

    /// Resolución perezosa y memoizada del resultado tipado.
    fn resolve(&mut self) -> Result<&TypedResult<T>, FlowError> {
        if self.resolved.is_none() {
            let handle = self.scenario.current_step().ok_or(FlowError::NoCurrentStep)?;
            let step = handle.borrow();
            let result = step.result()
                             .ok_or_else(|| FlowError::StepNotExecuted(step.display_name().to_string()))?
                             .clone();
            let data = match &result.data {
                None => None,
                Some(value) => Some(Self::narrow(value, result.data_type.as_deref())?),
            };
            self.resolved = Some(TypedResult { result, data });
        }
        Ok(self.resolved.as_ref().expect("resolved above"))
    }

    /// Estrecha el payload neutro a `T`; ante mismatch la falta nombra ambos
    /// lados (tipo esperado, forma real registrada o variante JSON).
    fn narrow(value: &Value, recorded: Option<&str>) -> Result<T, FlowError> {
        serde_json::from_value::<T>(value.clone()).map_err(|_| {
            let actual = recorded.map(str::to_string)
                                 .unwrap_or_else(|| crate::model::value_kind(value).to_string());
            FlowError::ResultTypeMismatch { expected: std::any::type_name::<T>().to_string(),
                                            actual }
        })
    }

    /// Falta si el step no fue exitoso. El mensaje incluye la lista de
    /// errores acumulados para que la falla sea diagnosticable sin volver a
    /// inspeccionar el resultado a mano.
    pub fn assert_success(mut self) -> Result<Self, FlowError> {
        let typed = self.resolve()?;
        if !typed.result.success {
            return Err(FlowError::AssertionFailed(format!("expected success but step failed: [{}]",
                                                          typed.result.errors.join("; "))));
        }
        Ok(self)
    }

    /// Falta si el step fue exitoso cuando se esperaba falla.
    pub fn assert_failure(mut self) -> Result<Self, FlowError> {
        let typed = self.resolve()?;
        if typed.result.success {
            return Err(FlowError::AssertionFailed("expected failure but step succeeded".to_string()));
        }
        Ok(self)
    }

    /// Escape hatch sobre la lista de errores: el builder no decide el
    /// veredicto, lo que el predicado levante (o no) es el desenlace.
    pub fn assert_errors<F>(mut self, predicate: F) -> Result<Self, FlowError>
        where F: FnOnce(&[String])
    {
        let typed = self.resolve()?;
        predicate(&typed.result.errors);
        Ok(self)
    }

    /// Escape hatch sobre el resultado tipado completo.
    pub fn validate<F>(mut self, predicate: F) -> Result<Self, FlowError>
        where F: FnOnce(&TypedResult<T>)
    {
        let typed = self.resolve()?;
        predicate(typed);
        Ok(self)
    }

    /// Resuelve la propiedad con la coerción permisiva (zero-value ante
    /// ausencia) y la entrega al predicado del caller. El builder no falta
    /// por ausencia, a propósito: la aserción del caller comunica el
    /// diagnóstico más específico.
    pub fn assert_property<P, F>(mut self, key: &str, predicate: F) -> Result<Self, FlowError>
        where P: DeserializeOwned + Default,
              F: FnOnce(P)
    {
        let typed = self.resolve()?;
        predicate(typed.result.get_property::<P>(key));
        Ok(self)
    }

    /// Acceso directo al resultado tipado memoizado, para inspección
    /// avanzada.
    pub fn get_result(&mut self) -> Result<&TypedResult<T>, FlowError> {
        self.resolve()
    }

    /// Pass-through puro para que la cadena lea como prosa.
    pub fn then(self) -> Self {
        self
    }
}
