use super::*;

#[test]
fn password_input_type_follows_visibility() {
    assert_eq!(password_input_type(false), "password");
    assert_eq!(password_input_type(true), "text");
}

#[test]
fn toggle_label_describes_next_action() {
    assert_eq!(toggle_label(false), "Mostrar senha");
    assert_eq!(toggle_label(true), "Esconder senha");
}

#[cfg(feature = "ssr")]
mod render {
    use leptos::prelude::*;
    use leptos::reactive::owner::Owner;

    use super::super::*;
    use crate::util::validators::TEXT_VALIDATORS;

    fn render(visible: bool) -> String {
        Owner::new().with(|| {
            view! {
                <ValidatedPasswordInput
                    label="Senha"
                    validators=TEXT_VALIDATORS
                    visible=visible
                    on_toggle=Callback::new(|()| {})
                />
            }
            .to_html()
        })
    }

    #[test]
    fn masked_password_shows_eye_icon() {
        let html = render(false);
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains(r#"aria-label="Mostrar senha""#));
        assert!(html.contains("eye-icon"));
        assert!(!html.contains("eye-slash-icon"));
    }

    #[test]
    fn visible_password_shows_eye_slash_icon() {
        let html = render(true);
        assert!(html.contains(r#"type="text""#));
        assert!(html.contains(r#"aria-label="Esconder senha""#));
        assert!(html.contains("eye-slash-icon"));
    }

    #[test]
    fn password_field_id_derives_from_label() {
        let html = render(false);
        assert!(html.contains(r#"id="password-input-senha""#));
    }
}
