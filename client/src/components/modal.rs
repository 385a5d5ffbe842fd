//! Overlay container whose visibility is owned by the parent.
//!
//! DESIGN
//! ======
//! The modal never changes its own visibility. Backdrop clicks, the close
//! control and Escape only invoke `on_close`; the parent decides whether the
//! flag actually flips. With `is_open = false` nothing is rendered.

use leptos::prelude::*;

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into, optional)] title: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <Show when=move || is_open.get()>
            <div
                class="modal__backdrop fixed inset-0 z-50 flex items-center justify-center bg-black bg-opacity-50"
                on:click=move |_| on_close.run(())
            >
                <div
                    class="modal__dialog relative w-full max-w-md rounded-lg bg-white p-6 shadow-lg"
                    role="dialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                >
                    <div class="modal__header mb-4 flex items-center justify-between">
                        {title.clone().map(|title| view! { <h2 class="text-xl font-bold">{title}</h2> })}
                        <button
                            type="button"
                            class="modal__close text-gray-500 hover:text-gray-700"
                            title="Fechar"
                            aria-label="Fechar"
                            on:click=move |_| on_close.run(())
                        >
                            "✕"
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
