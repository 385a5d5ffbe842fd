//! Visibility flags for the page's modals.
//!
//! DESIGN
//! ======
//! One flag per `ModalKind`, kept in a map so adding a modal is a new enum
//! variant rather than a new field. Each flag changes only through an explicit
//! `open`/`close` call from the page.

use std::collections::HashMap;

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Modals available on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalKind {
    SignUp,
    Login,
}

impl ModalKind {
    /// Heading shown at the top of the modal.
    pub fn title(self) -> &'static str {
        match self {
            Self::SignUp => "Cadastre-se",
            Self::Login => "Entrar",
        }
    }

    /// Label of the form's action button.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::SignUp => "Cadastrar",
            Self::Login => "Entrar",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalVisibility {
    open: HashMap<ModalKind, bool>,
}

impl ModalVisibility {
    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.open.get(&kind).copied().unwrap_or(false)
    }

    pub fn open(&mut self, kind: ModalKind) {
        self.open.insert(kind, true);
    }

    pub fn close(&mut self, kind: ModalKind) {
        self.open.insert(kind, false);
    }
}
