//! Resultado canónico de ejecutar un step.
//!
//! Un `StepResult` es inmutable una vez construido: metadata estampada,
//! bandera de éxito, lista ordenada de errores (vacía en éxito), payload
//! opaco JSON opcional con su descriptor de tipo, y un property bag
//! específico de la tecnología. El core no interpreta la semántica del
//! payload ni de las propiedades.

use std::error::Error;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::coerce::coerce;
use super::{StepMetadata, StepStatus};

#[derive(Debug, Clone)]
pub struct StepResult {
    /// Metadata de ejecución (tiempos, estado, intento, tags).
    pub metadata: StepMetadata,
    /// Bandera de éxito del step.
    pub success: bool,
    /// Errores acumulados, en orden; vacío cuando `success`.
    pub errors: Vec<String>,
    /// Payload opaco; `None` si el step no produce datos.
    pub data: Option<Value>,
    /// Descriptor del tipo Rust del payload, registrado al construir.
    /// Permite diagnósticos de estrechamiento sin inspeccionar el JSON.
    pub data_type: Option<String>,
    /// Propiedades específicas de la tecnología (status de transporte,
    /// headers, partición/offset de cola, etc.).
    pub properties: IndexMap<String, Value>,
}

impl StepResult {
    /// Resultado exitoso sin payload.
    pub fn success() -> Self {
        Self { metadata: StepMetadata::stamped(StepStatus::Succeeded),
               success: true,
               errors: Vec::new(),
               data: None,
               data_type: None,
               properties: IndexMap::new() }
    }

    /// Resultado exitoso con payload tipado. El tipo concreto queda
    /// registrado en `data_type` para estrechamiento seguro posterior.
    pub fn success_with<T: Serialize>(payload: &T) -> Self {
        let value = serde_json::to_value(payload).expect("serialize step payload");
        Self { data: Some(value),
               data_type: Some(std::any::type_name::<T>().to_string()),
               ..Self::success() }
    }

    /// Resultado fallido con uno o más mensajes de error.
    pub fn failure<I, S>(errors: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { metadata: StepMetadata::stamped(StepStatus::Failed),
               success: false,
               errors: errors.into_iter().map(Into::into).collect(),
               data: None,
               data_type: None,
               properties: IndexMap::new() }
    }

    /// Resultado fallido a partir de una falta subyacente.
    pub fn failure_from(error: &dyn Error) -> Self {
        Self::failure([error.to_string()])
    }

    /// Añade una propiedad al resultado (estilo builder, consume `self`;
    /// el resultado sigue siendo inmutable una vez publicado).
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Reemplaza el property bag completo.
    pub fn with_properties(mut self, properties: IndexMap<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    /// Recupera una propiedad estrechada a `T` con la escalera de coerción
    /// permisiva. Devuelve el zero-value de `T` si la clave está ausente, en
    /// blanco, o el valor no es convertible. Nunca levanta una falta.
    pub fn get_property<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        if key.trim().is_empty() {
            return T::default();
        }
        self.properties.get(key)
            .and_then(|v| coerce(v))
            .unwrap_or_default()
    }

    /// Recupera el payload estrechado a `T` con la misma escalera permisiva.
    /// Zero-value si no hay payload o no es convertible.
    pub fn get_data<T: DeserializeOwned + Default>(&self) -> T {
        self.data.as_ref()
            .and_then(|v| coerce(v))
            .unwrap_or_default()
    }
}
