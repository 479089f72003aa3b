use registry_console_core::VersionDetail;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VersionDetailProps {
    pub detail: VersionDetail,
}

fn row(label: &'static str, value: Option<&String>) -> Html {
    match value.filter(|v| !v.is_empty()) {
        Some(value) => html! {
            <tr>
                <th class="registry-version-detail__label">{label}</th>
                <td class="registry-version-detail__value">{value}</td>
            </tr>
        },
        None => html! {},
    }
}

#[function_component(VersionDetailView)]
pub fn version_detail_view(props: &VersionDetailProps) -> Html {
    let detail = &props.detail;

    html! {
        <div class="registry-version-detail">
            <table>
                {row("Summary", detail.summary.as_ref())}
                {row("Author", detail.author.as_ref())}
                {row("Author email", detail.author_email.as_ref())}
                {row("Maintainer", detail.maintainer.as_ref())}
                {row("License", detail.license.as_ref())}
                {row("Home page", detail.home_page.as_ref())}
                {row("Keywords", detail.keywords.as_ref())}
                {row("Platform", detail.platform.as_ref())}
                <tr>
                    <th class="registry-version-detail__label">{"Downloads"}</th>
                    <td class="registry-version-detail__value">{detail.downloads}</td>
                </tr>
                {if detail.hidden {
                    html! { <tr><td colspan="2">{"Hidden from the index"}</td></tr> }
                } else {
                    html! {}
                }}
            </table>
            {if detail.files.is_empty() {
                html! {}
            } else {
                html! {
                    <ul class="registry-version-detail__files">
                        {for detail.files.iter().map(|file| html! {
                            <li><a href={file.url.clone()}>{&file.name}</a></li>
                        })}
                    </ul>
                }
            }}
        </div>
    }
}
