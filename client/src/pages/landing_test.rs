#![cfg(feature = "ssr")]

use leptos::reactive::owner::Owner;

use super::*;

fn render_page() -> String {
    Owner::new().with(|| view! { <LandingPage/> }.to_html())
}

#[test]
fn landing_page_renders_welcome_and_entry_buttons() {
    let html = render_page();
    assert!(html.contains("Seja bem-vindo ao Momentum"));
    assert!(html.contains("Google"));
    assert!(html.contains("Criar Conta"));
    assert!(html.contains("Já possui cadastro?"));
    assert!(html.contains(LOGO_SRC));
}

#[test]
fn landing_page_starts_with_modals_closed() {
    let html = render_page();
    assert!(!html.contains("modal__backdrop"));
    assert!(!html.contains("Cadastrar"));
    assert!(!html.contains("Data de Nascimento"));
}

#[test]
fn auth_modal_open_renders_form_and_action_label() {
    let html = Owner::new().with(|| {
        let page = RwSignal::new(LandingState::default());
        page.update(|s| s.open_modal(ModalKind::SignUp));
        view! {
            <AuthModal kind=ModalKind::SignUp page=page>
                <p>"campos"</p>
            </AuthModal>
            <AuthModal kind=ModalKind::Login page=page>
                <p>"login"</p>
            </AuthModal>
        }
        .to_html()
    });
    assert!(html.contains("<form"));
    assert!(html.contains("campos"));
    assert!(html.contains("Cadastrar"));
    assert!(html.contains(r#"type="submit""#));
    assert!(!html.contains("login"));
}
