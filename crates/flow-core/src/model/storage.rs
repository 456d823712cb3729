//! Registro de steps por nombre, case-insensitive.
//!
//! Las claves se normalizan (trim + lowercase); la grafía original se
//! conserva para reportes. `save` sobreescribe en silencio ante colisión
//! (semántica observada del diseño original); `save_if_absent` es la variante
//! explícita para quien quiera detectar la colisión.

use indexmap::IndexMap;

use crate::errors::FlowError;
use crate::step::StepHandle;

struct StoredStep {
    /// Grafía original con la que se guardó el step.
    name: String,
    step: StepHandle,
}

#[derive(Default)]
pub struct StepStorage {
    steps: IndexMap<String, StoredStep>,
}

impl StepStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Inserta o sobreescribe el step bajo el nombre normalizado.
    /// Falta de argumento si el nombre está en blanco.
    pub fn save(&mut self, name: &str, step: StepHandle) -> Result<(), FlowError> {
        let key = Self::normalize(name);
        if key.is_empty() {
            return Err(FlowError::BlankStepName);
        }
        self.steps.insert(key, StoredStep { name: name.trim().to_string(), step });
        Ok(())
    }

    /// Variante que no sobreescribe: devuelve `true` si insertó, `false` si
    /// el nombre ya estaba tomado (el step existente queda intacto).
    pub fn save_if_absent(&mut self, name: &str, step: StepHandle) -> Result<bool, FlowError> {
        let key = Self::normalize(name);
        if key.is_empty() {
            return Err(FlowError::BlankStepName);
        }
        if self.steps.contains_key(&key) {
            return Ok(false);
        }
        self.steps.insert(key, StoredStep { name: name.trim().to_string(), step });
        Ok(true)
    }

    /// Lookup estricto: falta de argumento con nombre en blanco, falta
    /// not-found si el nombre no está registrado.
    pub fn get(&self, name: &str) -> Result<StepHandle, FlowError> {
        let key = Self::normalize(name);
        if key.is_empty() {
            return Err(FlowError::BlankStepName);
        }
        self.steps.get(&key)
            .map(|s| s.step.clone())
            .ok_or_else(|| FlowError::StepNotFound(name.trim().to_string()))
    }

    /// Lookup permisivo: `None` ante nombre en blanco o desconocido.
    pub fn try_get(&self, name: &str) -> Option<StepHandle> {
        let key = Self::normalize(name);
        if key.is_empty() {
            return None;
        }
        self.steps.get(&key).map(|s| s.step.clone())
    }

    /// Membresía case-insensitive.
    pub fn contains(&self, name: &str) -> bool {
        self.steps.contains_key(&Self::normalize(name))
    }

    /// Snapshot de los nombres guardados (grafía original, orden de
    /// inserción).
    pub fn step_names(&self) -> Vec<String> {
        self.steps.values().map(|s| s.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Vacía el registro.
    pub fn clear(&mut self) {
        self.steps.clear();
    }
}
