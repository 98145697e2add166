//! Submission gateway.
//!
//! There is no backend; real transmission is an expected external
//! collaborator and this module is the seam where it plugs in. The
//! shipped implementation is an explicit mock: it logs the structured
//! payload to the browser console, waits a short simulated latency and
//! acknowledges. The signatures admit failure so a real transport can
//! replace the bodies without touching the forms.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use leptos::window;
use zagros_forms::{ApplicationPayload, InquiryPayload, SubmissionError, SubmissionReceipt};

const SIMULATED_LATENCY_MS: i32 = 600;

async fn simulated_latency() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let _ = window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, SIMULATED_LATENCY_MS);
    });
    let _ = JsFuture::from(promise).await;
}

/// Submit a job application.
pub async fn submit_application(
    payload: ApplicationPayload,
) -> Result<SubmissionReceipt, SubmissionError> {
    if let Ok(value) = serde_wasm_bindgen::to_value(&payload) {
        web_sys::console::log_2(&JsValue::from_str("application submission"), &value);
    }
    simulated_latency().await;

    tracing::info!(job = %payload.job_id, "application accepted by mock gateway");
    Ok(SubmissionReceipt::new(format!(
        "APP-{}-{}",
        payload.job_id,
        js_sys::Date::now() as u64
    )))
}

/// Submit a contact-page inquiry.
pub async fn submit_inquiry(
    payload: InquiryPayload,
) -> Result<SubmissionReceipt, SubmissionError> {
    if let Ok(value) = serde_wasm_bindgen::to_value(&payload) {
        web_sys::console::log_2(&JsValue::from_str("inquiry submission"), &value);
    }
    simulated_latency().await;

    tracing::info!("inquiry accepted by mock gateway");
    Ok(SubmissionReceipt::new(format!(
        "INQ-{}",
        js_sys::Date::now() as u64
    )))
}
