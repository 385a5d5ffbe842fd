//! Styled button primitive.

use leptos::prelude::*;

use crate::util::classes::join_classes;

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

/// Padding and font size presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Small => "py-1 px-3 text-sm",
            Self::Medium => "py-2 px-4 text-base",
            Self::Large => "py-3 px-6 text-lg",
        }
    }
}

/// Visual options of a [`Button`].
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonStyle {
    pub background: String,
    pub text_color: String,
    pub size: ButtonSize,
    pub full_width: bool,
    pub rounded: bool,
    pub outline: bool,
    pub hover_effect: bool,
    pub class: String,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background: "bg-blue-500".to_owned(),
            text_color: "text-white".to_owned(),
            size: ButtonSize::Medium,
            full_width: false,
            rounded: true,
            outline: false,
            hover_effect: true,
            class: String::new(),
        }
    }
}

impl ButtonStyle {
    /// Full class attribute, caller classes last so they win on conflicts.
    pub fn classes(&self) -> String {
        join_classes([
            self.background.as_str(),
            self.text_color.as_str(),
            self.size.classes(),
            if self.full_width { "w-full" } else { "" },
            if self.rounded { "rounded-md" } else { "rounded-none" },
            if self.outline { "border-2 border-blue-500 hover:bg-blue-500 hover:text-white" } else { "" },
            if self.hover_effect { "hover:bg-opacity-75 transition" } else { "" },
            self.class.as_str(),
        ])
    }
}

#[allow(clippy::fn_params_excessive_bools)]
#[component]
pub fn Button(
    #[prop(into, default = "bg-blue-500".to_owned())] background: String,
    #[prop(into, default = "text-white".to_owned())] text_color: String,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(default = true)] rounded: bool,
    #[prop(optional)] outline: bool,
    #[prop(default = true)] hover_effect: bool,
    #[prop(into, optional)] class: String,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let style = ButtonStyle { background, text_color, size, full_width, rounded, outline, hover_effect, class };

    view! {
        <button
            type=button_type
            class=style.classes()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
