//! Coerción permisiva de valores JSON a tipos solicitados.
//!
//! Distintas tecnologías pueblan propiedades con representaciones
//! heterogéneas (numérica, textual, estructurada); el caller pide un tipo
//! objetivo sin conocer la representación almacenada. La escalera de
//! conversión es un match exhaustivo sobre las variantes cerradas de
//! `serde_json::Value`:
//! 1. deserialización exacta vía serde;
//! 2. puente string <-> number <-> bool para primitivos.
//!
//! Si todo falla, el caller recibe `None` y decide (normalmente el zero-value
//! del tipo, vía `Default`). Nunca se levanta una falta desde aquí.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Intenta estrechar `value` a `T` con la escalera de conversión descrita
/// arriba. `None` si ninguna conversión aplica.
pub(crate) fn coerce<T: DeserializeOwned>(value: &Value) -> Option<T> {
    if let Ok(exact) = serde_json::from_value::<T>(value.clone()) {
        return Some(exact);
    }
    match value {
        Value::String(s) => coerce_from_text(s),
        Value::Number(n) => serde_json::from_value(Value::String(n.to_string())).ok(),
        Value::Bool(b) => serde_json::from_value(Value::String(b.to_string())).ok(),
        // Null / Array / Object sin deserialización exacta: no hay puente.
        _ => None,
    }
}

/// Puente textual: reinterpreta el string como número entero, decimal o
/// booleano, en ese orden.
fn coerce_from_text<T: DeserializeOwned>(text: &str) -> Option<T> {
    let trimmed = text.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        if let Ok(v) = serde_json::from_value(Value::from(i)) {
            return Some(v);
        }
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if let Ok(v) = serde_json::from_value(Value::from(f)) {
            return Some(v);
        }
    }
    if let Ok(b) = trimmed.parse::<bool>() {
        if let Ok(v) = serde_json::from_value(Value::from(b)) {
            return Some(v);
        }
    }
    None
}

/// Nombre legible de la variante JSON, para diagnósticos de mismatch.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
