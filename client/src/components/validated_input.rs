//! Text and date inputs that revalidate on every keystroke.
//!
//! Each input owns a `FieldState`; the validator list is shared and
//! `'static`. Error messages render below the input only while the last
//! validation produced any.

use leptos::prelude::*;

use crate::state::field::FieldState;
use crate::util::classes::join_classes;
use crate::util::validators::Validator;

#[cfg(test)]
#[path = "validated_input_test.rs"]
mod validated_input_test;

/// Input variants sharing the same validation behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Password,
}

impl FieldKind {
    fn id_prefix(self) -> &'static str {
        match self {
            Self::Text => "validated-input",
            Self::Date => "validated-date-input",
            Self::Password => "password-input",
        }
    }
}

/// Element id for a field, derived from its label.
pub fn field_id(kind: FieldKind, label: &str) -> String {
    let slug = label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-{slug}", kind.id_prefix())
}

/// Border color follows error presence; caller classes are appended.
pub fn input_classes(base: &str, has_errors: bool, extra: &str) -> String {
    join_classes([base, if has_errors { "border-red-500" } else { "border-gray-300" }, extra])
}

pub(crate) const INPUT_BASE_CLASSES: &str = "border p-2 rounded";

/// Block list of the current error messages, hidden when there are none.
#[component]
pub(crate) fn FieldErrors(field: RwSignal<FieldState>, #[prop(into)] class: String) -> impl IntoView {
    let class = join_classes(["mt-1 text-red-500 text-sm", class.as_str()]);

    view! {
        <Show when=move || field.with(FieldState::has_errors)>
            <div class=class.clone()>
                {move || {
                    field
                        .with(|f| f.errors.clone())
                        .into_iter()
                        .map(|error| view! { <span class="block">{error}</span> })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

#[component]
fn FieldInput(
    kind: FieldKind,
    label: String,
    input_type: &'static str,
    validators: &'static [Validator],
    placeholder: String,
    container_class: String,
    input_class: String,
    error_class: String,
) -> impl IntoView {
    let field = RwSignal::new(FieldState::default());
    let id = field_id(kind, &label);

    view! {
        <div class=join_classes(["flex flex-col", container_class.as_str()])>
            <label for=id.clone() class="mb-2 text-sm font-medium text-gray-700">
                {label}
            </label>
            <input
                type=input_type
                id=id
                placeholder=placeholder
                prop:value=move || field.with(|f| f.value.clone())
                on:input=move |ev| field.update(|f| f.update(event_target_value(&ev), validators))
                class=move || input_classes(INPUT_BASE_CLASSES, field.with(FieldState::has_errors), &input_class)
            />
            <FieldErrors field=field class=error_class/>
        </div>
    }
}

/// Free-text input. `input_type` may be any text-like type (`email`, `tel`).
#[component]
pub fn ValidatedInput(
    #[prop(into)] label: String,
    validators: &'static [Validator],
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] container_class: String,
    #[prop(into, optional)] input_class: String,
    #[prop(into, optional)] error_class: String,
) -> impl IntoView {
    view! {
        <FieldInput
            kind=FieldKind::Text
            label=label
            input_type=input_type
            validators=validators
            placeholder=placeholder
            container_class=container_class
            input_class=input_class
            error_class=error_class
        />
    }
}

/// Calendar date input; values arrive as `YYYY-MM-DD`.
#[component]
pub fn ValidatedDateInput(
    #[prop(into)] label: String,
    validators: &'static [Validator],
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] container_class: String,
    #[prop(into, optional)] input_class: String,
    #[prop(into, optional)] error_class: String,
) -> impl IntoView {
    view! {
        <FieldInput
            kind=FieldKind::Date
            label=label
            input_type="date"
            validators=validators
            placeholder=placeholder
            container_class=container_class
            input_class=input_class
            error_class=error_class
        />
    }
}
