use super::*;

#[test]
fn modals_start_closed() {
    let state = ModalVisibility::default();
    assert!(!state.is_open(ModalKind::SignUp));
    assert!(!state.is_open(ModalKind::Login));
}

#[test]
fn open_sets_only_that_modal() {
    let mut state = ModalVisibility::default();
    state.open(ModalKind::SignUp);
    assert!(state.is_open(ModalKind::SignUp));
    assert!(!state.is_open(ModalKind::Login));
}

#[test]
fn close_clears_only_that_modal() {
    let mut state = ModalVisibility::default();
    state.open(ModalKind::SignUp);
    state.open(ModalKind::Login);
    state.close(ModalKind::Login);
    assert!(state.is_open(ModalKind::SignUp));
    assert!(!state.is_open(ModalKind::Login));
}

#[test]
fn open_and_close_are_idempotent() {
    let mut state = ModalVisibility::default();
    state.open(ModalKind::Login);
    state.open(ModalKind::Login);
    assert!(state.is_open(ModalKind::Login));
    state.close(ModalKind::Login);
    state.close(ModalKind::Login);
    assert!(!state.is_open(ModalKind::Login));
}

#[test]
fn both_modals_can_be_open_together() {
    let mut state = ModalVisibility::default();
    state.open(ModalKind::Login);
    state.open(ModalKind::SignUp);
    assert!(state.is_open(ModalKind::Login));
    assert!(state.is_open(ModalKind::SignUp));
}

#[test]
fn modal_kind_titles() {
    assert_eq!(ModalKind::SignUp.title(), "Cadastre-se");
    assert_eq!(ModalKind::Login.title(), "Entrar");
}

#[test]
fn modal_kind_action_labels() {
    assert_eq!(ModalKind::SignUp.action_label(), "Cadastrar");
    assert_eq!(ModalKind::Login.action_label(), "Entrar");
}
