//! Defines the application's routes.

use dioxus::prelude::*;

use crate::components::app::AppShell;
use crate::components::views::{EpisodeDetailView, HomeView};

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum AppView {
    #[layout(AppShell)]
    #[route("/")]
    HomeView {},
    #[route("/episodes/:id")]
    EpisodeDetailView { id: String },
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::HomeView {} => "Home",
        AppView::EpisodeDetailView { .. } => "Episode",
    }
}
