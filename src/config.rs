//! Configuración central del runner.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
//! Todos los valores tienen default: el runner funciona sin entorno alguno.
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuración global del runner (extensible para más secciones).
pub struct AppConfig {
    /// Configuración específica de escenarios.
    pub scenario: ScenarioConfig,
}

/// Parámetros por defecto de los escenarios de la demo y de suites locales.
pub struct ScenarioConfig {
    /// Límite por defecto al envolver steps en `TimeoutStep`.
    pub step_timeout: Duration,
    /// Payload de la demo (`main.rs`); sobrescribible por entorno.
    pub demo_payload: String,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    // `.env` es opcional; si no existe seguimos con el entorno del proceso.
    let _ = dotenvy::dotenv();
    let timeout_ms = env::var("TESTFLOW_STEP_TIMEOUT_MS").ok()
        .and_then(|v| v.parse().ok()).unwrap_or(30_000u64);
    let demo_payload = env::var("TESTFLOW_DEMO_PAYLOAD")
        .unwrap_or_else(|_| "hello-testflow".to_string());
    AppConfig {
        scenario: ScenarioConfig { step_timeout: Duration::from_millis(timeout_ms),
                                   demo_payload },
    }
});
