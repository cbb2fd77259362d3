//! Full-page navigation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The logout flow is a server round trip, not a client route change, so
//! the chrome issues an explicit full-page redirect the way the other
//! server-rendered pages do.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Path handled by the server's logout route.
pub const LOGOUT_PATH: &str = "/logout";

/// Navigate the whole page to `path`. No-op outside the browser.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
