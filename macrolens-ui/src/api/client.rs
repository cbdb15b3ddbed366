//! HTTP API Client
//!
//! Posts the selected photo to the analysis endpoint.

use gloo_net::http::Request;
use macrolens::analysis::AnalysisResponse;
use web_sys::FormData;

/// Local storage key holding an alternative API base
pub const API_BASE_KEY: &str = "macrolens_api_url";

/// Path of the analysis endpoint
pub const ANALYZE_PATH: &str = "/analyze-image";

/// Get the API base URL from local storage; empty means same origin
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_default();
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_KEY, url);
        }
    }
}

/// Full URL of the analysis endpoint for a base
pub fn analyze_url(api_base: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), ANALYZE_PATH)
}

/// Upload the form and decode the answer.
///
/// The status code is ignored: the body says whether the analysis worked.
/// `Err` means the request or the decoding failed.
pub async fn analyze_image(form: FormData) -> Result<AnalysisResponse, String> {
    let url = analyze_url(&get_api_base());

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let body = response
        .text()
        .await
        .map_err(|e| format!("Read error: {}", e))?;

    serde_json::from_str(&body).map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_test_configure!(run_in_browser);

    #[test]
    fn test_analyze_url() {
        assert_eq!(analyze_url(""), "/analyze-image");
        assert_eq!(
            analyze_url("http://localhost:5000/"),
            "http://localhost:5000/analyze-image"
        );
    }

    // Needs a browser for localStorage: wasm-pack test --headless --firefox
    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen_test]
    fn test_api_base_persists() {
        set_api_base("http://localhost:5000/");
        assert_eq!(get_api_base(), "http://localhost:5000");
        assert_eq!(analyze_url(&get_api_base()), "http://localhost:5000/analyze-image");

        set_api_base("");
        assert_eq!(get_api_base(), "");
    }
}
