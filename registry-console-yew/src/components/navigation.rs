use crate::app::Screen;
use crate::components::LoadingIndicator;
use crate::hooks::use_console;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub current: Screen,
    pub on_select: Callback<Screen>,
}

/// Top bar: screen tabs, signed-in account and the loading indicator
#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let ctx = use_console();
    let session = ctx.console.session().session();

    let tab = |screen: Screen| {
        let on_select = props.on_select.clone();
        html! {
            <button
                class={classes!("registry-nav__tab", (props.current == screen).then_some("active"))}
                onclick={move |_| on_select.emit(screen)}
            >
                {screen.title()}
            </button>
        }
    };

    html! {
        <nav class="registry-nav">
            {tab(Screen::Packages)}
            {tab(Screen::Users)}
            <span class="registry-nav__account">
                {match session {
                    Some(info) if info.is_admin => format!("{} (admin)", info.login),
                    Some(info) => info.login,
                    None => String::new(),
                }}
            </span>
            <LoadingIndicator loading={ctx.loading} />
        </nav>
    }
}
