use super::*;

#[test]
fn default_card_classes() {
    assert_eq!(
        CardStyle::default().classes(),
        "w-64 h-40 p-4 bg-white rounded-lg shadow-md hover:shadow-lg hover:-translate-y-1 transform transition"
    );
}

#[test]
fn card_without_hover_effect() {
    let style = CardStyle { hover_effect: false, ..CardStyle::default() };
    assert_eq!(style.classes(), "w-64 h-40 p-4 bg-white rounded-lg shadow-md");
}

#[test]
fn card_overrides_and_extra_classes() {
    let style = CardStyle {
        width: "w-full".to_owned(),
        height: "h-5/6".to_owned(),
        background: "bg-gray-200".to_owned(),
        border_radius: "rounded-xl".to_owned(),
        hover_effect: false,
        class: "m-4".to_owned(),
        ..CardStyle::default()
    };
    assert_eq!(style.classes(), "w-full h-5/6 p-4 bg-gray-200 rounded-xl shadow-md m-4");
}

#[cfg(feature = "ssr")]
mod render {
    use leptos::prelude::*;
    use leptos::reactive::owner::Owner;

    use super::super::*;

    #[test]
    fn renders_children_inside_div() {
        let html = Owner::new().with(|| view! { <Card class="m-4"><h1>"Oi"</h1></Card> }.to_html());
        assert!(html.contains("<h1>Oi</h1>"));
        assert!(html.contains("shadow-md"));
        assert!(html.contains("m-4"));
    }
}
