//! Styled surface container.

use leptos::prelude::*;

use crate::util::classes::join_classes;

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

/// Visual options of a [`Card`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardStyle {
    pub width: String,
    pub height: String,
    pub padding: String,
    pub background: String,
    pub border_radius: String,
    pub shadow: String,
    pub hover_effect: bool,
    pub class: String,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            width: "w-64".to_owned(),
            height: "h-40".to_owned(),
            padding: "p-4".to_owned(),
            background: "bg-white".to_owned(),
            border_radius: "rounded-lg".to_owned(),
            shadow: "shadow-md".to_owned(),
            hover_effect: true,
            class: String::new(),
        }
    }
}

impl CardStyle {
    pub fn classes(&self) -> String {
        join_classes([
            self.width.as_str(),
            self.height.as_str(),
            self.padding.as_str(),
            self.background.as_str(),
            self.border_radius.as_str(),
            self.shadow.as_str(),
            if self.hover_effect { "hover:shadow-lg hover:-translate-y-1 transform transition" } else { "" },
            self.class.as_str(),
        ])
    }
}

#[component]
pub fn Card(
    #[prop(into, default = "w-64".to_owned())] width: String,
    #[prop(into, default = "h-40".to_owned())] height: String,
    #[prop(into, default = "p-4".to_owned())] padding: String,
    #[prop(into, default = "bg-white".to_owned())] background: String,
    #[prop(into, default = "rounded-lg".to_owned())] border_radius: String,
    #[prop(into, default = "shadow-md".to_owned())] shadow: String,
    #[prop(default = true)] hover_effect: bool,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let style = CardStyle { width, height, padding, background, border_radius, shadow, hover_effect, class };

    view! { <div class=style.classes()>{children()}</div> }
}
