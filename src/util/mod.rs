//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic to improve reuse and testability. Non-hydrate builds see
//! deterministic no-ops.

pub mod flash_data;
pub mod navigation;
pub mod theme_store;
