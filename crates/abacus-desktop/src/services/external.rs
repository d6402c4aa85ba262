//! Opening pages outside the app

use abacus_core::util::is_http_url;

/// Open an http(s) URL in the system browser. Other schemes are refused.
pub fn open_external(url: &str) {
    if !is_http_url(url) {
        tracing::warn!("Refusing to open non-http URL: {}", url);
        return;
    }
    match open::that_detached(url) {
        Ok(()) => tracing::debug!("Opened {} in browser", url),
        Err(e) => tracing::error!("Failed to open {}: {}", url, e),
    }
}
