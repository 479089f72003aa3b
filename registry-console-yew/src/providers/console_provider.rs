use crate::config::Config;
use crate::hooks::ConsoleContext;
use crate::infrastructure::{BrowserDialogs, GlooTransport};
use futures::StreamExt;
use registry_console_core::Console;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConsoleProviderProps {
    #[prop_or_else(Config::from_location)]
    pub config: Config,
    pub children: Children,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Snapshot {
    loading: bool,
    tree: u64,
    users: u64,
    dialogs: u64,
}

impl Snapshot {
    fn take(console: &Console, dialogs: &BrowserDialogs) -> Self {
        Self {
            // Settling clears the busy map once every foreground call has finished
            loading: !console.loading().settle(),
            tree: console.tree().revision(),
            users: console.users().revision(),
            dialogs: dialogs.revision(),
        }
    }
}

#[function_component(ConsoleProvider)]
pub fn console_provider(props: &ConsoleProviderProps) -> Html {
    let dialogs = use_memo((), |_| BrowserDialogs::new());
    let console = {
        let config = props.config.clone();
        let dialogs = dialogs.clone();
        use_memo((), move |_| {
            tracing::info!(api = %config.api_base_url, "Console starting");
            Console::new(
                Rc::new(GlooTransport::new(config)),
                Rc::new((*dialogs).clone()),
            )
        })
    };
    let snapshot = use_state(Snapshot::default);

    {
        let console = console.clone();
        let dialogs = dialogs.clone();
        let snapshot = snapshot.clone();

        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let running = alive.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let mut interval = gloo_timers::future::IntervalStream::new(100);
                let mut last = Snapshot::default();

                while running.get() && interval.next().await.is_some() {
                    let next = Snapshot::take(&console, &dialogs);
                    if next != last {
                        if next.loading != last.loading {
                            tracing::debug!(loading = next.loading, "Loading state changed");
                        }
                        last = next;
                        snapshot.set(next);
                    }
                }
            });

            move || alive.set(false)
        });
    }

    let context = ConsoleContext {
        console: (*console).clone(),
        dialogs: (*dialogs).clone(),
        loading: snapshot.loading,
        tree_revision: snapshot.tree,
        users_revision: snapshot.users,
        dialog_revision: snapshot.dialogs,
    };

    html! {
        <ContextProvider<ConsoleContext> {context}>
            {props.children.clone()}
        </ContextProvider<ConsoleContext>>
    }
}
