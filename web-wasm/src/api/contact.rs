//! Contact form delivery
//!
//! The form relay is an external collaborator: it accepts a structured
//! submission and answers success or failure. Nothing else about it is our
//! concern.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use portfolio_common::ContactSubmission;
use serde::Deserialize;

const CONTACT_API_URL: &str = "https://formspree.io/f/mvgpyrwd";

/// Error payload the relay returns on rejection.
#[derive(Deserialize)]
struct RelayError {
    #[serde(default)]
    error: String,
}

/// Builds the POST request carrying a submission as JSON.
fn build_relay_request(submission: &ContactSubmission) -> Result<Request, JsValue> {
    let body =
        serde_json::to_string(submission).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(CONTACT_API_URL, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    request.headers().set("Accept", "application/json")?;
    Ok(request)
}

/// Posts a validated submission to the relay. Any non-2xx status surfaces as
/// a retryable error; catalog/filter/selection state is never touched here.
pub async fn send_message(submission: &ContactSubmission) -> Result<(), JsValue> {
    let request = build_relay_request(submission)?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if resp.ok() {
        return Ok(());
    }

    let detail = match resp.json() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|json| serde_wasm_bindgen::from_value::<RelayError>(json).ok())
            .map(|e| e.error)
            .filter(|e| !e.is_empty()),
        Err(_) => None,
    };

    match detail {
        Some(reason) => Err(JsValue::from_str(&format!(
            "relay error {}: {}",
            resp.status(),
            reason
        ))),
        None => Err(JsValue::from_str(&format!("relay error {}", resp.status()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_body_shape() {
        let submission = ContactSubmission::new("Ada", "ada@example.com", "Hello!");
        let body = serde_json::to_string(&submission).expect("serialize failed");
        assert!(body.contains("\"name\":\"Ada\""));
        assert!(body.contains("\"email\":\"ada@example.com\""));
        assert!(body.contains("\"message\":\"Hello!\""));
    }

    #[test]
    fn test_relay_error_deserialize() {
        let json = r#"{"error": "form disabled"}"#;
        let relay: RelayError = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(relay.error, "form disabled");
    }

    #[test]
    fn test_relay_error_deserialize_without_detail() {
        let relay: RelayError = serde_json::from_str("{}").expect("deserialize failed");
        assert_eq!(relay.error, "");
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_relay_request_is_json_post() {
        let submission = ContactSubmission::new("Ada", "ada@example.com", "Hello!");
        let request = build_relay_request(&submission).expect("request build failed");

        assert_eq!(request.method(), "POST");
        assert_eq!(request.url(), CONTACT_API_URL);
        assert_eq!(
            request
                .headers()
                .get("Content-Type")
                .expect("header lookup failed"),
            Some("application/json".to_string())
        );
        assert_eq!(
            request
                .headers()
                .get("Accept")
                .expect("header lookup failed"),
            Some("application/json".to_string())
        );
    }
}
