use crate::hooks::use_console;
use registry_console_core::{Credentials, CredentialsPrompt};
use yew::prelude::*;

/// Login form shown while the session gate waits for credentials
#[function_component(LoginModal)]
pub fn login_modal() -> Html {
    let ctx = use_console();
    let login = use_state(String::new);
    let password = use_state(String::new);

    if !ctx.dialogs.login_pending() {
        return html! {};
    }

    let on_submit = {
        let dialogs = ctx.dialogs.clone();
        let login = login.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let credentials = Credentials::new((*login).clone(), (*password).clone());
            password.set(String::new());
            dialogs.answer_login(CredentialsPrompt::Submitted(credentials));
        })
    };

    let on_close = {
        let dialogs = ctx.dialogs.clone();
        Callback::from(move |_: MouseEvent| dialogs.answer_login(CredentialsPrompt::Dismissed))
    };

    html! {
        <div class="registry-modal">
            <form class="registry-modal__dialog registry-login" onsubmit={on_submit}>
                <h2 class="registry-login__title">{"Sign in"}</h2>
                <label class="registry-login__label">
                    {"Login"}
                    <input
                        class="registry-login__input"
                        type="text"
                        value={(*login).clone()}
                        oninput={let login = login.clone(); move |e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            login.set(input.value());
                        }}
                    />
                </label>
                <label class="registry-login__label">
                    {"Password"}
                    <input
                        class="registry-login__input"
                        type="password"
                        value={(*password).clone()}
                        oninput={let password = password.clone(); move |e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            password.set(input.value());
                        }}
                    />
                </label>
                <div class="registry-login__actions">
                    <button class="registry-login__button" type="submit">{"Sign in"}</button>
                    <button class="registry-login__button" type="button" onclick={on_close}>
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </div>
    }
}
