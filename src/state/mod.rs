//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `menu`, `flash`) so individual
//! components depend on small focused models. Each machine is a plain
//! struct with one method per transition and stays unit-testable without
//! a browser.

pub mod flash;
pub mod menu;
pub mod theme;
