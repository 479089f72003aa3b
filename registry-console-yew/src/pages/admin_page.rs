use crate::components::{CreateUserForm, UserTable};
use crate::hooks::use_console;
use yew::prelude::*;

/// User administration, loaded once a session exists
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let ctx = use_console();

    {
        let console = ctx.console.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let admin = console.users().clone();
                let loaded = console
                    .session()
                    .run(|| async move { admin.load_users().await })
                    .await;
                if let Err(e) = loaded {
                    tracing::warn!(error = %e, "User list not loaded");
                }
            });
            || {}
        });
    }

    let users = ctx.console.users().users();

    html! {
        <section class="registry-admin">
            <h2 class="registry-admin__title">{"Users"}</h2>
            <UserTable {users} />
            <CreateUserForm />
        </section>
    }
}
