//! Local state of the landing page.
//!
//! The page owns modal visibility plus a single password-visibility flag that
//! both forms share, so revealing the password in one form reveals it in the
//! other.

use super::modal::{ModalKind, ModalVisibility};

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandingState {
    pub modals: ModalVisibility,
    pub password_visible: bool,
}

impl LandingState {
    pub fn open_modal(&mut self, kind: ModalKind) {
        self.modals.open(kind);
    }

    pub fn close_modal(&mut self, kind: ModalKind) {
        self.modals.close(kind);
    }

    pub fn is_modal_open(&self, kind: ModalKind) -> bool {
        self.modals.is_open(kind)
    }

    /// Flip the shared password visibility flag and return the new value.
    pub fn toggle_password_visible(&mut self) -> bool {
        self.password_visible = !self.password_visible;
        self.password_visible
    }
}
