use chrono::Local;
use dioxus::prelude::*;

use crate::components::{AppView, Icon};

#[component]
pub fn Header() -> Element {
    // e.g. "Thu, 8 August"
    let current_date = Local::now().format("%a, %-d %B").to_string();

    rsx! {
        header { class: "app-header",
            Link { to: AppView::HomeView {}, class: "app-header-brand",
                Icon {
                    name: "logo".to_string(),
                    class: "app-header-logo".to_string(),
                }
                strong { "rustcast" }
            }

            p { class: "app-header-tagline", "The best for you to hear, always" }

            span { class: "app-header-date", "{current_date}" }
        }
    }
}
