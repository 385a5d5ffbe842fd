//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep pure logic (validation, class composition) out of
//! components so it can be tested without a browser.

pub mod classes;
pub mod console;
pub mod validators;
