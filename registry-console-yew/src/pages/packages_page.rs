use crate::components::PackageRow;
use crate::hooks::{use_console, use_packages};
use yew::prelude::*;

/// Package tree, loaded once a session exists
#[function_component(PackagesPage)]
pub fn packages_page() -> Html {
    let ctx = use_console();
    let packages = use_packages();

    {
        let console = ctx.console.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let tree = console.tree().clone();
                let loaded = console
                    .session()
                    .run(|| async move { tree.load_packages().await })
                    .await;
                if let Err(e) = loaded {
                    tracing::warn!(error = %e, "Package list not loaded");
                }
            });
            || {}
        });
    }

    let tree = ctx.console.tree();

    html! {
        <section class="registry-packages">
            <h2 class="registry-packages__title">
                {"Packages ("}{packages.len()}{")"}
            </h2>
            {if packages.is_empty() {
                html! { <p class="registry-packages__empty">{"No packages"}</p> }
            } else {
                html! {
                    <ul class="registry-packages__list">
                        {for packages.into_iter().map(|package| {
                            let expanded = tree.is_expanded(package.name());
                            let key = package.name().to_string();
                            html! {
                                <PackageRow {key} {package} {expanded} />
                            }
                        })}
                    </ul>
                }
            }}
        </section>
    }
}
