//! HTML views.
//!
//! Pages and modal fragments are `view!` templates rendered to strings on the
//! server. The template layer escapes all text and attribute values.

use leptos::prelude::*;

use bayport_app::domain::{geometry::StatusCounts, units::BackendStatus};

pub(crate) mod admin;
pub(crate) mod building;
pub(crate) mod landing;
pub(crate) mod modal;

/// Render a view to an HTML string.
pub(crate) fn render<F, V>(build: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    Owner::new().with(|| build().to_html())
}

/// Wrap `body` in the site chrome.
pub(crate) fn document<V>(site_name: &str, title: Option<&str>, body: V) -> String
where
    V: IntoView,
{
    let page_title = match title {
        Some(title) => format!("{title} · {site_name}"),
        None => site_name.to_string(),
    };
    let site_name = site_name.to_string();

    let html = render(move || {
        view! {
            <html lang="en">
                <head>
                    <meta charset="utf-8" />
                    <meta name="viewport" content="width=device-width, initial-scale=1" />
                    <title>{page_title}</title>
                    <link rel="stylesheet" href="/assets/app.css" />
                </head>
                <body>
                    <header class="site-header">
                        <a href="/" class="site-title">{site_name}</a>
                    </header>
                    <main class="site-main">{body}</main>
                    <script src="/assets/app.js"></script>
                </body>
            </html>
        }
    });

    format!("<!DOCTYPE html>{html}")
}

/// Available/taken/reserved tallies.
#[component]
pub(crate) fn Legend(counts: StatusCounts) -> impl IntoView {
    view! {
        <div class="legend">
            <div class="legend-item">
                <span class="legend-dot available"></span>
                <span>"Available: "<span class="legend-count">{counts.available}</span></span>
            </div>
            <div class="legend-item">
                <span class="legend-dot taken"></span>
                <span>"Taken: "<span class="legend-count">{counts.taken}</span></span>
            </div>
            <div class="legend-item">
                <span class="legend-dot reserved"></span>
                <span>"Reserved: "<span class="legend-count">{counts.reserved}</span></span>
            </div>
        </div>
    }
}

/// Backend connectivity indicator.
#[component]
pub(crate) fn StatusIndicator(status: BackendStatus) -> impl IntoView {
    view! {
        <div class={format!("backend-status {}", status.tone())} role="status">
            {status.to_string()}
        </div>
    }
}
