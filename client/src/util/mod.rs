//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision logic (`route`, `guard`) lives apart from browser/environment
//! concerns (`cookies`, `download`) so the authorization rules stay testable
//! without a DOM.

pub mod cookies;
pub mod download;
pub mod guard;
pub mod route;
