use crate::api::{Episode, EpisodeSortField, PodcastClient, SortOrder};
use crate::components::{AppView, Icon};
use crate::diagnostics::{log_perf, PerfTimer};
use crate::player::PlayerController;
use dioxus::logger::tracing;
use dioxus::prelude::*;

const HOME_EPISODE_FETCH_LIMIT: u32 = 12;
const HOME_LATEST_COUNT: usize = 2;

#[component]
pub fn HomeView() -> Element {
    let controller = use_context::<PlayerController>();
    let mut episodes = use_signal(Vec::<Episode>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);

    use_effect(move || {
        spawn(async move {
            let timer = PerfTimer::now();
            let client = PodcastClient::new();
            match client
                .get_episodes(
                    HOME_EPISODE_FETCH_LIMIT,
                    EpisodeSortField::PublishedAt,
                    SortOrder::Desc,
                )
                .await
            {
                Ok(fetched) => {
                    log_perf(
                        "home.episodes_fetch",
                        &timer,
                        &format!("count={}", fetched.len()),
                    );
                    episodes.set(fetched);
                    load_error.set(None);
                }
                Err(err) => {
                    tracing::error!("failed to load episodes: {err}");
                    load_error.set(Some(err));
                }
            }
            loading.set(false);
        });
    });

    let episode_list = episodes();
    let latest: Vec<Episode> = episode_list.iter().take(HOME_LATEST_COUNT).cloned().collect();
    let rest: Vec<Episode> = episode_list.iter().skip(HOME_LATEST_COUNT).cloned().collect();

    rsx! {
        div { class: "home-page",
            if loading() {
                div { class: "page-status",
                    Icon {
                        name: "loader".to_string(),
                        class: "page-status-icon".to_string(),
                    }
                    span { "Loading episodes..." }
                }
            } else if let Some(message) = load_error() {
                div { class: "page-status is-error",
                    span { "Could not load episodes: {message}" }
                }
            } else {
                section { class: "latest-episodes",
                    h2 { "Latest releases" }

                    ul {
                        for (index, episode) in latest.iter().cloned().enumerate() {
                            li { key: "{episode.id}",
                                img {
                                    src: "{episode.thumbnail}",
                                    alt: "{episode.title}",
                                    loading: "lazy",
                                }
                                div { class: "episode-details",
                                    Link { to: AppView::EpisodeDetailView { id: episode.id.clone() },
                                        "{episode.title}"
                                    }
                                    p { "{episode.member}" }
                                    span { "{episode.published_at}" }
                                    span { "{episode.duration_label}" }
                                }
                                button {
                                    r#type: "button",
                                    class: "episode-play-btn",
                                    aria_label: "Play episode",
                                    onclick: {
                                        let list = episode_list.clone();
                                        let mut controller = controller;
                                        move |_| controller.play_list(list.clone(), index)
                                    },
                                    Icon {
                                        name: "play".to_string(),
                                        class: "episode-play-icon".to_string(),
                                    }
                                }
                            }
                        }
                    }
                }

                section { class: "all-episodes",
                    h2 { "All episodes" }

                    table {
                        thead {
                            tr {
                                th {}
                                th { "Podcast" }
                                th { "Members" }
                                th { "Date" }
                                th { "Duration" }
                                th {}
                            }
                        }
                        tbody {
                            for (offset, episode) in rest.iter().cloned().enumerate() {
                                tr { key: "{episode.id}",
                                    td { class: "episode-thumb-cell",
                                        img {
                                            src: "{episode.thumbnail}",
                                            alt: "{episode.title}",
                                            loading: "lazy",
                                        }
                                    }
                                    td {
                                        Link { to: AppView::EpisodeDetailView { id: episode.id.clone() },
                                            "{episode.title}"
                                        }
                                    }
                                    td { "{episode.member}" }
                                    td { class: "episode-date-cell", "{episode.published_at}" }
                                    td { "{episode.duration_label}" }
                                    td {
                                        button {
                                            r#type: "button",
                                            class: "episode-play-btn",
                                            aria_label: "Play episode",
                                            onclick: {
                                                let list = episode_list.clone();
                                                let mut controller = controller;
                                                move |_| {
                                                    controller.play_list(
                                                        list.clone(),
                                                        offset + HOME_LATEST_COUNT,
                                                    )
                                                }
                                            },
                                            Icon {
                                                name: "play".to_string(),
                                                class: "episode-play-icon".to_string(),
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
