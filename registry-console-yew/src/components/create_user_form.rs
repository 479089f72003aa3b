use crate::hooks::use_console;
use registry_console_core::{ConsoleError, FieldError, UserForm};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn text_input(value: &UseStateHandle<String>, kind: &'static str, class: Classes) -> Html {
    let handle = value.clone();
    html! {
        <input
            class={class}
            type={kind}
            value={(**value).clone()}
            oninput={move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                handle.set(input.value());
            }}
        />
    }
}

fn field_class(errors: &[FieldError], fields: &[FieldError]) -> Classes {
    let invalid = fields.iter().any(|f| errors.contains(f));
    classes!("registry-create-user__input", invalid.then_some("invalid"))
}

/// Create-user form; every failing field is flagged before anything is sent
#[function_component(CreateUserForm)]
pub fn create_user_form() -> Html {
    let ctx = use_console();
    let login = use_state(String::new);
    let email = use_state(String::new);
    let password_first = use_state(String::new);
    let password_second = use_state(String::new);
    let is_admin = use_state(|| false);
    let errors = use_state(Vec::<FieldError>::new);

    let on_submit = {
        let admin = ctx.console.users().clone();
        let login = login.clone();
        let email = email.clone();
        let password_first = password_first.clone();
        let password_second = password_second.clone();
        let is_admin = is_admin.clone();
        let errors = errors.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = UserForm {
                login: (*login).clone(),
                email: (*email).clone(),
                password_first: (*password_first).clone(),
                password_second: (*password_second).clone(),
                is_admin: *is_admin,
            };

            let admin = admin.clone();
            let login = login.clone();
            let email = email.clone();
            let password_first = password_first.clone();
            let password_second = password_second.clone();
            let is_admin = is_admin.clone();
            let errors = errors.clone();
            spawn_local(async move {
                match admin.create(&form).await {
                    Ok(_) => {
                        errors.set(Vec::new());
                        login.set(String::new());
                        email.set(String::new());
                        password_first.set(String::new());
                        password_second.set(String::new());
                        is_admin.set(false);
                    }
                    Err(ConsoleError::Validation(invalid)) => errors.set(invalid.fields().to_vec()),
                    Err(e) => tracing::warn!(error = %e, "User creation failed"),
                }
            });
        })
    };

    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();

    html! {
        <form class="registry-create-user" onsubmit={on_submit}>
            <h3 class="registry-create-user__title">{"New user"}</h3>
            <label>
                {"Login"}
                {text_input(&login, "text", field_class(&errors, &[FieldError::MissingLogin]))}
            </label>
            <label>
                {"Email"}
                {text_input(&email, "email", field_class(&errors, &[FieldError::MissingEmail]))}
            </label>
            <label>
                {"Password"}
                {text_input(
                    &password_first,
                    "password",
                    field_class(&errors, &[FieldError::MissingPassword, FieldError::PasswordMismatch]),
                )}
            </label>
            <label>
                {"Repeat password"}
                {text_input(
                    &password_second,
                    "password",
                    field_class(&errors, &[FieldError::MissingPassword, FieldError::PasswordMismatch]),
                )}
            </label>
            <label>
                <input
                    type="checkbox"
                    checked={*is_admin}
                    onclick={let is_admin = is_admin.clone(); move |_| is_admin.set(!*is_admin)}
                />
                {"Administrator"}
            </label>
            {for messages.into_iter().map(|m| html! { <p class="registry-create-user__error">{m}</p> })}
            <button class="registry-create-user__submit" type="submit">{"Create"}</button>
        </form>
    }
}
