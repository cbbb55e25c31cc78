//! Client-side configuration constants.

/// Base URL of the backend REST API.
pub const API_BASE_URL: &str = "http://localhost:8000";

/// Maximum number of files that may be staged for a single upload.
pub const MAX_UPLOAD_FILES: usize = 5;

/// Maximum size of a single uploaded file, in megabytes.
pub const MAX_FILE_SIZE_MB: u64 = 10;

/// Maximum size of a single uploaded file, in bytes.
pub const MAX_FILE_SIZE_BYTES: f64 = (MAX_FILE_SIZE_MB * 1024 * 1024) as f64;

/// File extensions accepted by the upload stager.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "txt"];

/// MIME types accepted by the upload stager.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
    "text/plain",
];

/// Query parameter that reveals the demo admin affordances.
///
/// This is a demo toggle, not an authorization mechanism: the backend applies
/// the same non-authoritative check, and nothing sensitive hides behind it.
pub const ADMIN_QUERY_FLAG: &str = "is_admin_query";

/// Returns whether the current page URL carries the demo admin flag.
#[cfg(target_arch = "wasm32")]
pub fn is_admin_demo() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(search) = window.location().search() else {
        return false;
    };
    match web_sys::UrlSearchParams::new_with_str(&search) {
        Ok(params) => params.get(ADMIN_QUERY_FLAG).as_deref() == Some("true"),
        Err(_) => false,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn is_admin_demo() -> bool {
    false
}
