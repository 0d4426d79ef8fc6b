//! HTTP API Client
//!
//! One fetch wrapper per backend endpoint. All requests are unauthenticated
//! GETs; non-2xx responses and network failures reject with a message string
//! that callers log or toast. There is no retry and no timeout: the next
//! scheduled poll is the only retry mechanism.

use gloo_net::http::Request;

use crate::state::global::{CurveItem, DashboardSummary, EvolutionPoint, Product};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// localStorage key for the configured API base
const API_URL_KEY: &str = "estoque_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

// ============ Response Types ============

/// Error body from the backend (FastAPI-style `detail` or plain `error`)
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    #[serde(default, alias = "detail")]
    pub error: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct EvolutionResponse {
    #[serde(default)]
    pub evolucao: Vec<EvolutionPoint>,
    #[serde(default)]
    pub fonte: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

// ============ API Functions ============

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error: ApiError = response
            .json()
            .await
            .unwrap_or(ApiError { error: String::new() });
        return Err(if error.error.is_empty() {
            format!("HTTP {}", status)
        } else {
            error.error
        });
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the aggregated dashboard summary
pub async fn fetch_dashboard_summary() -> Result<DashboardSummary, String> {
    get_json(&format!("{}/dashboard/dados", get_api_base())).await
}

/// Fetch the full ABC curve listing
pub async fn fetch_curve_listing() -> Result<Vec<CurveItem>, String> {
    get_json(&format!("{}/curvaabc", get_api_base())).await
}

/// Fetch the products of one curve ("A", "B" or "C")
pub async fn fetch_curve_products(curve: &str) -> Result<Vec<Product>, String> {
    get_json(&format!(
        "{}/curva/{}",
        get_api_base(),
        curve.to_uppercase()
    ))
    .await
}

/// Fetch the monthly evolution series for a date range (ISO dates)
pub async fn fetch_evolution(inicio: &str, fim: &str) -> Result<EvolutionResponse, String> {
    get_json(&format!(
        "{}/curvaabc/evolucao?inicio={}&fim={}",
        get_api_base(),
        inicio,
        fim
    ))
    .await
}

/// Fetch the full product listing
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    get_json(&format!("{}/api/produtos", get_api_base())).await
}

/// Fetch the live product feed, optionally narrowed by a filter expression
pub async fn fetch_live_products(filtros: &str) -> Result<Vec<Product>, String> {
    get_json(&format!(
        "{}/api/tempo-real/produtos?filtros={}",
        get_api_base(),
        filtros
    ))
    .await
}

/// Check API health
pub async fn check_health() -> Result<HealthResponse, String> {
    let response = Request::get(&format!("{}/health", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_accepts_fastapi_detail() {
        let e: ApiError = serde_json::from_str(r#"{"detail":"Curva inválida: use A, B ou C"}"#)
            .unwrap();
        assert_eq!(e.error, "Curva inválida: use A, B ou C");

        let e: ApiError = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(e.error, "boom");
    }

    #[test]
    fn default_base_has_no_trailing_slash() {
        assert!(!DEFAULT_API_BASE.ends_with('/'));
    }

    #[test]
    fn evolution_response_defaults_to_empty() {
        let r: EvolutionResponse = serde_json::from_str("{}").unwrap();
        assert!(r.evolucao.is_empty());

        let r: EvolutionResponse = serde_json::from_str(
            r#"{"evolucao":[{"mes":"2025-04","curva_a":150,"curva_b":80,"curva_c":70}],
                "fonte":"Simulação Temporal"}"#,
        )
        .unwrap();
        assert_eq!(r.evolucao.len(), 1);
        assert_eq!(r.evolucao[0].mes, "2025-04");
        assert_eq!(r.fonte, "Simulação Temporal");
    }
}

// Browser-only tests (run with wasm-pack / wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn api_base_roundtrips_through_local_storage() {
        set_api_base("http://10.0.0.2:9000/");
        // Trailing slash is normalized away on read
        assert_eq!(get_api_base(), "http://10.0.0.2:9000");
    }
}
