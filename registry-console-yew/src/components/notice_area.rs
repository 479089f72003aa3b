use crate::hooks::use_console;
use crate::infrastructure::Notice;
use yew::prelude::*;

/// Alerts and error notifications, newest last
#[function_component(NoticeArea)]
pub fn notice_area() -> Html {
    let ctx = use_console();
    let notices = ctx.dialogs.notices();

    if notices.is_empty() {
        return html! {};
    }

    html! {
        <div class="registry-notices">
            {for notices.into_iter().map(|(id, notice)| {
                let on_dismiss = {
                    let dialogs = ctx.dialogs.clone();
                    Callback::from(move |_: MouseEvent| dialogs.dismiss(id))
                };
                let body = match notice {
                    Notice::Info(message) => html! {
                        <div class="registry-notice registry-notice--info">
                            <span class="registry-notice__message">{message}</span>
                            <button class="registry-notice__close" onclick={on_dismiss}>{"×"}</button>
                        </div>
                    },
                    Notice::Error { title, message } => html! {
                        <div class="registry-notice registry-notice--error">
                            <strong class="registry-notice__title">{title}</strong>
                            <span class="registry-notice__message">{message}</span>
                            <button class="registry-notice__close" onclick={on_dismiss}>{"×"}</button>
                        </div>
                    },
                };
                html! { <div key={id.to_string()}>{body}</div> }
            })}
        </div>
    }
}
