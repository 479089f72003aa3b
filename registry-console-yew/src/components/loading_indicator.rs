use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingIndicatorProps {
    pub loading: bool,
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator(props: &LoadingIndicatorProps) -> Html {
    html! {
        <span class={classes!("registry-loading", props.loading.then_some("active"))}>
            {if props.loading { "Loading…" } else { "" }}
        </span>
    }
}
