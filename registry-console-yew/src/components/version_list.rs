use crate::components::VersionDetailView;
use crate::hooks::use_console;
use registry_console_core::{VersionActions, VersionNode};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VersionListProps {
    pub package: String,
    pub versions: Vec<VersionNode>,
}

#[function_component(VersionList)]
pub fn version_list(props: &VersionListProps) -> Html {
    if props.versions.is_empty() {
        return html! { <p class="registry-versions__empty">{"No versions"}</p> };
    }

    html! {
        <ul class="registry-versions">
            {for props.versions.iter().map(|node| html! {
                <VersionRow
                    key={node.name().to_string()}
                    package={props.package.clone()}
                    node={node.clone()}
                />
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct VersionRowProps {
    package: String,
    node: VersionNode,
}

#[function_component(VersionRow)]
fn version_row(props: &VersionRowProps) -> Html {
    let ctx = use_console();
    let handle = ctx
        .console
        .tree()
        .version_actions(&props.package, props.node.name());

    let on_details = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| {
            let handle = handle.clone();
            spawn_local(async move {
                if let Err(e) = handle.fetch_detail().await {
                    tracing::warn!(version = %handle.version(), error = %e, "Version detail failed");
                }
            });
        })
    };

    let on_hide = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| {
            let handle = handle.clone();
            spawn_local(async move {
                if let Err(e) = handle.hide().await {
                    tracing::warn!(version = %handle.version(), error = %e, "Hiding failed");
                }
            });
        })
    };

    let on_remove = Callback::from(move |_: MouseEvent| {
        let handle = handle.clone();
        spawn_local(async move {
            if let Err(e) = handle.remove().await {
                tracing::warn!(version = %handle.version(), error = %e, "Version removal failed");
            }
        });
    });

    html! {
        <li class="registry-version">
            <div class="registry-version__header">
                <span class="registry-version__name">{props.node.name()}</span>
                <button class="registry-version__action" onclick={on_details}>{"Details"}</button>
                <button class="registry-version__action" onclick={on_hide}>{"Hide"}</button>
                <button class="registry-version__action danger" onclick={on_remove}>{"Remove"}</button>
            </div>
            {match props.node.detail() {
                Some(detail) => html! { <VersionDetailView detail={detail.clone()} /> },
                None => html! {},
            }}
        </li>
    }
}
