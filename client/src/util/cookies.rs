//! Expiry of client-visible session cookie artifacts.
//!
//! The session itself is invalidated server-side; this only removes leftover
//! artifacts so no stale credential material lingers in the cookie jar.
//! HttpOnly cookies are unreachable from script and are cleared by the
//! server's `Set-Cookie` response instead. Nothing here ever *reads* a
//! cookie; the resolver's response is the sole source of truth.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

/// Cookie names the login flow may leave client-visible.
#[cfg(any(test, feature = "hydrate"))]
const SESSION_COOKIES: [&str; 3] = ["session_token", "access_token", "csrf_token"];

#[cfg(any(test, feature = "hydrate"))]
fn expiry_directive(name: &str) -> String {
    format!("{name}=; Max-Age=0; path=/")
}

/// Expire every client-visible session cookie. Browser-only; a no-op on the
/// server.
pub fn clear_session_artifacts() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(document) = document.dyn_into::<web_sys::HtmlDocument>() else {
            return;
        };
        for name in SESSION_COOKIES {
            let _ = document.set_cookie(&expiry_directive(name));
        }
    }
}
