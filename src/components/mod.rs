//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and feed DOM events into the shared
//! state machines provided through Leptos context.

pub mod flash_stack;
pub mod nav_bar;
pub mod theme_switch;
