//! Value and error list owned by a single validated input.
//!
//! DESIGN
//! ======
//! Errors are recomputed in full from the validator list on every change.
//! There is no debounce and no incremental diffing.

use crate::util::validators::{Validator, collect_errors};

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub errors: Vec<&'static str>,
}

impl FieldState {
    /// Store `value` and revalidate it against `validators`.
    pub fn update(&mut self, value: String, validators: &[Validator]) {
        self.errors = collect_errors(validators, &value);
        self.value = value;
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
