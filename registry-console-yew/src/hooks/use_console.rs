use crate::infrastructure::BrowserDialogs;
use registry_console_core::Console;
use yew::prelude::*;

/// Console state accessible via hook
///
/// The revisions change whenever the matching part of the console changed, so
/// components re-render from fresh snapshots.
#[derive(Clone)]
pub struct ConsoleContext {
    pub console: Console,
    pub dialogs: BrowserDialogs,

    /// Some foreground call is still outstanding
    pub loading: bool,
    pub tree_revision: u64,
    pub users_revision: u64,
    pub dialog_revision: u64,
}

impl PartialEq for ConsoleContext {
    fn eq(&self, other: &Self) -> bool {
        self.loading == other.loading
            && self.tree_revision == other.tree_revision
            && self.users_revision == other.users_revision
            && self.dialog_revision == other.dialog_revision
    }
}

/// Hook to access the console
///
/// # Example
///
/// ```rust,no_run
/// use registry_console_yew::use_console;
/// use yew::prelude::*;
///
/// #[function_component]
/// fn Example() -> Html {
///     let ctx = use_console();
///     let packages = ctx.console.tree().packages();
///     # let _ = packages;
///     html! {}
/// }
/// ```
#[hook]
pub fn use_console() -> ConsoleContext {
    use_context::<ConsoleContext>().expect("use_console must be used within a ConsoleProvider")
}
