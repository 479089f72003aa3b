use crate::components::VersionList;
use crate::hooks::use_console;
use registry_console_core::{OwnerRef, Package, PackageActions};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PackageRowProps {
    pub package: Package,
    pub expanded: bool,
}

/// Text the owner prompt starts with
fn owner_input(owner: Option<&OwnerRef>) -> String {
    match owner {
        Some(OwnerRef::Id(id)) => id.to_string(),
        Some(OwnerRef::Login(login)) => login.clone(),
        None => String::new(),
    }
}

/// One package of the tree with its actions and, once expanded, its versions
#[function_component(PackageRow)]
pub fn package_row(props: &PackageRowProps) -> Html {
    let ctx = use_console();
    let name = props.package.name().to_string();

    let on_toggle = {
        let tree = ctx.console.tree().clone();
        let name = name.clone();
        let expanded = props.expanded;
        Callback::from(move |_: MouseEvent| {
            if expanded {
                tree.collapse(&name);
                return;
            }
            let tree = tree.clone();
            let name = name.clone();
            spawn_local(async move {
                if let Err(e) = tree.expand(&name).await {
                    tracing::warn!(package = %name, error = %e, "Expand failed");
                }
            });
        })
    };

    let on_chown = {
        let console = ctx.console.clone();
        let name = name.clone();
        let current = owner_input(props.package.owner());
        Callback::from(move |_: MouseEvent| {
            let console = console.clone();
            let name = name.clone();
            let current = current.clone();
            spawn_local(async move {
                let question = format!("New owner of \"{name}\"");
                let Some(input) = console.gateway().dialogs().prompt(&question, &current).await
                else {
                    return;
                };
                if input.trim().is_empty() || input.trim() == current {
                    return;
                }
                let owner = OwnerRef::parse(&input);
                let result = match console.users().resolve_owner(&owner).await {
                    Ok(id) => console.tree().package_actions(&name).change_owner(id).await,
                    Err(e) => Err(e),
                };
                if let Err(e) = result {
                    tracing::warn!(package = %name, owner = %owner, error = %e, "Owner change failed");
                }
            });
        })
    };

    let on_remove = {
        let tree = ctx.console.tree().clone();
        let name = name.clone();
        Callback::from(move |_: MouseEvent| {
            let handle = tree.package_actions(&name);
            spawn_local(async move {
                if let Err(e) = handle.remove().await {
                    tracing::warn!(package = %handle.package(), error = %e, "Package removal failed");
                }
            });
        })
    };

    let owner = props
        .package
        .owner()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string());

    html! {
        <li class={classes!("registry-package", props.expanded.then_some("expanded"))}>
            <div class="registry-package__header">
                <button class="registry-package__toggle" onclick={on_toggle}>
                    {if props.expanded { "▾" } else { "▸" }}
                </button>
                <span class="registry-package__name">{&name}</span>
                <span class="registry-package__owner">{owner}</span>
                {if props.package.info().is_some_and(|info| info.is_proxy()) {
                    html! { <span class="registry-package__badge">{"proxy"}</span> }
                } else {
                    html! {}
                }}
                <button class="registry-package__action" onclick={on_chown}>{"Change owner"}</button>
                <button class="registry-package__action danger" onclick={on_remove}>{"Remove"}</button>
            </div>
            {if props.expanded {
                match props.package.info() {
                    Some(info) => html! {
                        <VersionList package={name.clone()} versions={info.versions().to_vec()} />
                    },
                    None => html! { <div class="registry-package__pending">{"Loading versions…"}</div> },
                }
            } else {
                html! {}
            }}
        </li>
    }
}
