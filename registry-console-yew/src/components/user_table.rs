use crate::hooks::use_console;
use registry_console_core::{User, UserPatch};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserTableProps {
    pub users: Vec<User>,
}

#[function_component(UserTable)]
pub fn user_table(props: &UserTableProps) -> Html {
    html! {
        <table class="registry-users">
            <thead>
                <tr>
                    <th>{"Login"}</th>
                    <th>{"Email"}</th>
                    <th>{"Admin"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {for props.users.iter().map(|user| html! {
                    <UserRow key={user.id.to_string()} user={user.clone()} />
                })}
            </tbody>
        </table>
    }
}

#[derive(Properties, PartialEq)]
struct UserRowProps {
    user: User,
}

#[function_component(UserRow)]
fn user_row(props: &UserRowProps) -> Html {
    let ctx = use_console();
    let user = &props.user;

    let on_toggle_admin = {
        let admin = ctx.console.users().clone();
        let id = user.id;
        let is_admin = user.is_admin;
        Callback::from(move |_: MouseEvent| {
            let admin = admin.clone();
            let patch = UserPatch {
                is_admin: Some(!is_admin),
                ..UserPatch::default()
            };
            spawn_local(async move {
                if let Err(e) = admin.modify(id, patch).await {
                    tracing::warn!(id, error = %e, "User update failed");
                }
            });
        })
    };

    let on_password = {
        let console = ctx.console.clone();
        let id = user.id;
        let login = user.login.clone();
        Callback::from(move |_: MouseEvent| {
            let console = console.clone();
            let login = login.clone();
            spawn_local(async move {
                let question = format!("New password for \"{login}\"");
                let Some(password) = console.gateway().dialogs().prompt(&question, "").await else {
                    return;
                };
                if password.is_empty() {
                    return;
                }
                let patch = UserPatch {
                    password: Some(password),
                    ..UserPatch::default()
                };
                if let Err(e) = console.users().modify(id, patch).await {
                    tracing::warn!(id, error = %e, "Password change failed");
                }
            });
        })
    };

    let on_remove = {
        let admin = ctx.console.users().clone();
        let id = user.id;
        Callback::from(move |_: MouseEvent| {
            let admin = admin.clone();
            spawn_local(async move {
                if let Err(e) = admin.remove(id).await {
                    tracing::warn!(id, error = %e, "User removal failed");
                }
            });
        })
    };

    html! {
        <tr class={classes!("registry-user", user.disabled.then_some("disabled"))}>
            <td>{&user.login}</td>
            <td>{&user.email}</td>
            <td>
                <input type="checkbox" checked={user.is_admin} onclick={on_toggle_admin} />
            </td>
            <td>
                <button class="registry-user__action" onclick={on_password}>{"Password"}</button>
                {if user.disabled {
                    html! { <span class="registry-user__state">{"disabled"}</span> }
                } else {
                    html! {
                        <button class="registry-user__action danger" onclick={on_remove}>{"Delete"}</button>
                    }
                }}
            </td>
        </tr>
    }
}
