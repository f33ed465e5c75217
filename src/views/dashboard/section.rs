use crate::data::section_title;
use crate::Route;
use dioxus::prelude::*;

/// Placeholder for `/dashboard/<section>` pages
#[component]
pub fn DashboardSection(segments: Vec<String>) -> Element {
    let section = segments.first().cloned().unwrap_or_default();
    let title = section_title(&section)
        .map(str::to_string)
        .unwrap_or_else(|| capitalize(&section));

    rsx! {
        div { class: "overview",
            h1 { class: "page-title", "{title}" }
            section { class: "panel empty-state",
                div { class: "empty-icon", "🚧" }
                p { "The {title} page is under construction." }
                Link { class: "btn btn-primary", to: Route::DashboardHome {}, "Back to overview" }
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Section".to_string(),
    }
}
