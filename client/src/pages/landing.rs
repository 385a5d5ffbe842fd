//! Landing page with sign-up and login modals.
//!
//! Forms are not wired to any submission handler; submitting is prevented so
//! the page never reloads.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize};
use crate::components::card::Card;
use crate::components::modal::Modal;
use crate::components::password_input::ValidatedPasswordInput;
use crate::components::validated_input::{ValidatedDateInput, ValidatedInput};
use crate::state::landing::LandingState;
use crate::state::modal::ModalKind;
use crate::util::console;
use crate::util::validators::{DATE_VALIDATORS, TEXT_VALIDATORS};

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

const INPUT_CLASS: &str = "mt-1 block w-full border-gray-300 rounded-md shadow-sm focus:border-indigo-300 \
                           focus:ring focus:ring-indigo-200 focus:ring-opacity-50";
const PASSWORD_INPUT_CLASS: &str = "focus:border-blue-500 focus:ring focus:ring-blue-200";
pub const LOGO_SRC: &str = "/assets/logo.svg";

/// Modal wrapping a form and its action button.
#[component]
fn AuthModal(kind: ModalKind, page: RwSignal<LandingState>, children: ChildrenFn) -> impl IntoView {
    let is_open = Signal::derive(move || page.with(|s| s.is_modal_open(kind)));
    let on_close = Callback::new(move |()| {
        page.update(|s| s.close_modal(kind));
        console::debug(&format!("closed modal {kind:?}"));
    });

    view! {
        <Modal is_open=is_open on_close=on_close title=kind.title()>
            <form class="space-y-4" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                {children()}
                <div class="flex justify-end">
                    <Button
                        background="bg-red-500"
                        text_color="text-white"
                        class="rounded-lg px-4 py-2"
                        size=ButtonSize::Large
                        button_type="submit"
                    >
                        {kind.action_label()}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let page = RwSignal::new(LandingState::default());

    let open_modal = move |kind: ModalKind| {
        page.update(|s| s.open_modal(kind));
        console::debug(&format!("opened modal {kind:?}"));
    };
    let password_visible = Signal::derive(move || page.with(|s| s.password_visible));
    let toggle_password = Callback::new(move |()| {
        let mut visible = false;
        page.update(|s| visible = s.toggle_password_visible());
        console::debug(&format!("password visible: {visible}"));
    });

    view! {
        <div class="grid grid-cols-2 h-screen bg-red-400">
            <Card
                width="w-full"
                height="h-5/6"
                background="bg-gray-200"
                border_radius="rounded-xl"
                class="m-4"
            >
                <div class="flex flex-col justify-center h-full p-4">
                    <h1 class="text-4xl font-bold text-start mb-8">"Seja bem-vindo ao Momentum"</h1>
                    <h2 class="text-start mb-4 text-xl">"Cadastre-se"</h2>
                    <Button
                        background="bg-gray-300"
                        text_color="text-black"
                        class="rounded-3xl w-1/2 mb-4"
                        size=ButtonSize::Large
                    >
                        "Google"
                    </Button>
                    <div class="flex items-center w-1/2">
                        <div class="flex-grow border-t border-gray-400 mr-2"></div>
                        <h3 class="text-center">"ou"</h3>
                        <div class="flex-grow border-t border-gray-400 ml-2"></div>
                    </div>
                    <Button
                        background="bg-red-500"
                        text_color="text-white"
                        class="rounded-3xl w-1/2 mt-4"
                        size=ButtonSize::Large
                        on_click=Callback::new(move |_| open_modal(ModalKind::SignUp))
                    >
                        "Criar Conta"
                    </Button>
                    <h2 class="text-start mt-20 text-xl">"Já possui cadastro?"</h2>
                    <Button
                        background="bg-gray-500"
                        text_color="text-white"
                        class="rounded-3xl w-1/2 mt-4"
                        size=ButtonSize::Large
                        on_click=Callback::new(move |_| open_modal(ModalKind::Login))
                    >
                        "Entrar"
                    </Button>
                </div>
            </Card>
            <div class="flex items-center justify-center p-4">
                <img src=LOGO_SRC alt="Logo" class="max-w-full max-h-full pb-48"/>
            </div>
        </div>
        <AuthModal kind=ModalKind::SignUp page=page>
            <ValidatedInput label="Nome" validators=TEXT_VALIDATORS input_class=INPUT_CLASS/>
            <ValidatedInput label="Email" validators=TEXT_VALIDATORS input_type="email" input_class=INPUT_CLASS/>
            <ValidatedDateInput label="Data de Nascimento" validators=DATE_VALIDATORS input_class=INPUT_CLASS/>
            <ValidatedPasswordInput
                label="Senha"
                validators=TEXT_VALIDATORS
                visible=password_visible
                on_toggle=toggle_password
                input_class=PASSWORD_INPUT_CLASS
            />
        </AuthModal>
        <AuthModal kind=ModalKind::Login page=page>
            <ValidatedInput label="Email" validators=TEXT_VALIDATORS input_type="email" input_class=INPUT_CLASS/>
            <ValidatedPasswordInput
                label="Senha"
                validators=TEXT_VALIDATORS
                visible=password_visible
                on_toggle=toggle_password
                input_class=PASSWORD_INPUT_CLASS
            />
        </AuthModal>
    }
}
