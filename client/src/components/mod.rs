//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Styled primitives (button, card, modal) and validated form inputs. Pages
//! compose them and own all visibility state.

pub mod button;
pub mod card;
pub mod modal;
pub mod password_input;
pub mod validated_input;
