//! Contexto de ejecución de un escenario.
//!
//! Estado per-escenario compartido entre segmentos de la cadena fluida y las
//! implementaciones de steps:
//! - un property bag arbitrario (clave string -> JSON), permisivo por diseño;
//! - un registro tipado de capacidades para descubrir colaboradores externos
//!   (proveedor de cliente de transporte, etc.) sin que el core dependa de
//!   sus tipos concretos;
//! - el step storage con los steps persistidos por nombre.
//!
//! El contexto vive exactamente lo que vive su escenario y se muta sólo desde
//! el hilo que lo conduce.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::FlowError;
use crate::model::coerce::coerce;
use crate::model::StepStorage;

#[derive(Default)]
pub struct ScenarioContext {
    /// Propiedades arbitrarias definidas por el caller o por steps.
    properties: IndexMap<String, Value>,
    /// Registro de capacidades: tipo concreto -> referencia compartida.
    capabilities: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    /// Steps persistidos por nombre para recuperación entre segmentos.
    pub steps: StepStorage,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guarda una propiedad serializable bajo `key`. Claves en blanco se
    /// ignoran en silencio, consistente con la lectura permisiva.
    pub fn set_property<T: Serialize>(&mut self, key: impl Into<String>, value: T) {
        let key = key.into();
        if key.trim().is_empty() {
            return;
        }
        if let Ok(v) = serde_json::to_value(value) {
            self.properties.insert(key, v);
        }
    }

    /// Lee una propiedad estrechada a `T`. Devuelve el zero-value de `T` si
    /// la clave está ausente, en blanco, o el valor almacenado no tiene la
    /// forma pedida. Nunca levanta una falta: el contexto se comparte entre
    /// colaboradores de tecnologías que no conocen las formas ajenas.
    pub fn get_property<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        if key.trim().is_empty() {
            return T::default();
        }
        self.properties.get(key)
            .and_then(|v| coerce(v))
            .unwrap_or_default()
    }

    /// Nombres de propiedades presentes, en orden de inserción.
    pub fn property_keys(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }

    /// Registra un colaborador bajo su tipo concreto. Registrar dos veces el
    /// mismo tipo reemplaza la referencia anterior.
    pub fn register_capability<T: Send + Sync + 'static>(&mut self, capability: Arc<T>) {
        self.capabilities.insert(TypeId::of::<T>(), capability);
    }

    /// Recupera un colaborador registrado, fallando rápido si falta. A
    /// diferencia del property bag, una capacidad requerida ausente es una
    /// falta de uso, no un valor vacío.
    pub fn capability<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, FlowError> {
        self.try_capability::<T>()
            .ok_or_else(|| FlowError::MissingCapability(std::any::type_name::<T>().to_string()))
    }

    /// Variante opcional de `capability`, sin falta.
    pub fn try_capability<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.capabilities.get(&TypeId::of::<T>())
            .cloned()
            .and_then(|any| any.downcast::<T>().ok())
    }
}
