#![cfg(feature = "ssr")]

use leptos::reactive::owner::Owner;

use super::*;

fn render(is_open: bool) -> String {
    Owner::new().with(|| {
        view! {
            <Modal is_open=is_open on_close=Callback::new(|()| {}) title="Entrar">
                <p>"conteúdo do modal"</p>
            </Modal>
        }
        .to_html()
    })
}

#[test]
fn closed_modal_renders_nothing() {
    let html = render(false);
    assert!(!html.contains("modal__backdrop"));
    assert!(!html.contains("conteúdo do modal"));
    assert!(!html.contains("Entrar"));
}

#[test]
fn open_modal_renders_children_and_title() {
    let html = render(true);
    assert!(html.contains("modal__backdrop"));
    assert!(html.contains("<p>conteúdo do modal</p>"));
    assert!(html.contains("Entrar"));
    assert!(html.contains(r#"role="dialog""#));
}

#[test]
fn modal_without_title_omits_heading() {
    let html = Owner::new().with(|| {
        view! {
            <Modal is_open=true on_close=Callback::new(|()| {})>
                <span>"x"</span>
            </Modal>
        }
        .to_html()
    });
    assert!(!html.contains("<h2"));
    assert!(html.contains("<span>x</span>"));
}
