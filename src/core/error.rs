//! Browser-side errors and global error reporting.
//!
//! Nothing here is fatal: failures are logged and the page stays
//! interactive.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::utils::dom;

/// Errors from DOM and Web API setup.
#[derive(Debug, Clone, Error)]
pub enum DomError {
    /// Browser window not available.
    #[error("browser window not available")]
    NoWindow,
    /// A 2D canvas context could not be created.
    #[error("canvas 2d context unavailable")]
    NoCanvasContext,
    /// A Web API call threw.
    #[error("{op} failed: {detail}")]
    Js { op: &'static str, detail: String },
}

impl DomError {
    pub fn js(op: &'static str, value: JsValue) -> Self {
        let detail = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Js { op, detail }
    }
}

/// Log uncaught script errors and unhandled promise rejections.
pub fn install_global_handlers() {
    dom::on_window("error", |event| {
        if let Some(e) = event.dyn_ref::<web_sys::ErrorEvent>() {
            dom::error(&format!(
                "uncaught error: {} ({}:{})",
                e.message(),
                e.filename(),
                e.lineno()
            ));
        }
    });

    dom::on_window("unhandledrejection", |event| {
        if let Some(e) = event.dyn_ref::<web_sys::PromiseRejectionEvent>() {
            dom::error(&format!("unhandled rejection: {:?}", e.reason()));
        }
    });
}
