use crate::components::{LoginModal, Navigation, NoticeArea};
use crate::pages::{AdminPage, PackagesPage};
use crate::providers::ConsoleProvider;
use yew::prelude::*;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Packages,
    Users,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Packages => "Packages",
            Screen::Users => "Users",
        }
    }

    fn hash(&self) -> &'static str {
        match self {
            Screen::Packages => "#/packages",
            Screen::Users => "#/admin",
        }
    }

    fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_matches('/') {
            "admin" | "users" => Screen::Users,
            _ => Screen::Packages,
        }
    }
}

fn current_hash() -> Option<String> {
    web_sys::window()?.location().hash().ok()
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ConsoleProvider>
            <Shell />
        </ConsoleProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let screen = use_state(|| {
        current_hash()
            .map(|hash| Screen::from_hash(&hash))
            .unwrap_or(Screen::Packages)
    });

    let on_select = {
        let screen = screen.clone();
        Callback::from(move |next: Screen| {
            tracing::info!(screen = next.title(), "Switching screen");
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_hash(next.hash());
            }
            screen.set(next);
        })
    };

    html! {
        <div class="registry-app">
            <Navigation current={*screen} {on_select} />
            <NoticeArea />
            {match *screen {
                Screen::Packages => html! { <PackagesPage /> },
                Screen::Users => html! { <AdminPage /> },
            }}
            <LoginModal />
        </div>
    }
}
