//! Password input with a show/hide toggle.
//!
//! The visibility flag belongs to the caller; the toggle only asks the caller
//! to flip it. Validation and the typed value are unaffected by visibility.

use leptos::prelude::*;

use crate::components::validated_input::{FieldErrors, FieldKind, field_id, input_classes};
use crate::state::field::FieldState;
use crate::util::classes::join_classes;
use crate::util::validators::Validator;

#[cfg(test)]
#[path = "password_input_test.rs"]
mod password_input_test;

const PASSWORD_BASE_CLASSES: &str = "w-full p-2 pr-10 border rounded";

/// `type` attribute for the given visibility.
pub fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

/// Accessible label of the toggle, describing what a click will do.
pub fn toggle_label(visible: bool) -> &'static str {
    if visible { "Esconder senha" } else { "Mostrar senha" }
}

#[component]
pub fn ValidatedPasswordInput(
    #[prop(into)] label: String,
    validators: &'static [Validator],
    #[prop(into)] visible: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] container_class: String,
    #[prop(into, optional)] input_class: String,
    #[prop(into, optional)] label_class: String,
    #[prop(into, optional)] error_class: String,
    #[prop(into, optional)] icon_class: String,
) -> impl IntoView {
    let field = RwSignal::new(FieldState::default());
    let id = field_id(FieldKind::Password, &label);
    let icon_class = join_classes([
        "absolute inset-y-0 right-2 flex items-center text-gray-600 focus:outline-none",
        icon_class.as_str(),
    ]);

    view! {
        <div class=join_classes(["relative", container_class.as_str()])>
            <label for=id.clone() class=join_classes(["block mb-2 text-sm font-medium", label_class.as_str()])>
                {label}
            </label>
            <div class="relative">
                <input
                    type=move || password_input_type(visible.get())
                    id=id
                    placeholder=placeholder
                    prop:value=move || field.with(|f| f.value.clone())
                    on:input=move |ev| field.update(|f| f.update(event_target_value(&ev), validators))
                    class=move || input_classes(PASSWORD_BASE_CLASSES, field.with(FieldState::has_errors), &input_class)
                />
                <button
                    type="button"
                    class=icon_class
                    aria-label=move || toggle_label(visible.get())
                    on:click=move |_| on_toggle.run(())
                >
                    {move || if visible.get() { view! { <EyeSlashIcon/> }.into_any() } else { view! { <EyeIcon/> }.into_any() }}
                </button>
            </div>
            <FieldErrors field=field class=error_class/>
        </div>
    }
}

#[component]
fn EyeIcon() -> impl IntoView {
    view! {
        <svg
            class="eye-icon w-5 h-5"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke-width="1.5"
            stroke="currentColor"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                d="M1.5 12S4.5 4.5 12 4.5s10.5 7.5 10.5 7.5-3 7.5-10.5 7.5S1.5 12 1.5 12z"
            />
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                d="M12 15.75a3.75 3.75 0 100-7.5 3.75 3.75 0 000 7.5z"
            />
        </svg>
    }
}

#[component]
fn EyeSlashIcon() -> impl IntoView {
    view! {
        <svg
            class="eye-slash-icon w-5 h-5"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke-width="1.5"
            stroke="currentColor"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                d="M3.98 8.344a11.954 11.954 0 011.97-2.148 11.979 11.979 0 0116.108 16.108 11.954 11.954 0 01-2.148 1.97M21 21l-4.55-4.55M15.54 15.54A7.455 7.455 0 016.46 6.46"
            />
        </svg>
    }
}
