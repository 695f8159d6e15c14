use crate::api::PodcastClient;
use crate::components::{AppView, Icon};
use crate::player::PlayerController;
use dioxus::prelude::*;

#[component]
pub fn EpisodeDetailView(id: String) -> Element {
    let controller = use_context::<PlayerController>();

    let episode_data = use_resource(move || {
        let id = id.clone();
        async move {
            let client = PodcastClient::new();
            client.get_episode(&id).await
        }
    });

    rsx! {
        div { class: "episode-page",
            {
                match episode_data() {
                    None => rsx! {
                        div { class: "page-status",
                            Icon {
                                name: "loader".to_string(),
                                class: "page-status-icon".to_string(),
                            }
                            span { "Loading episode..." }
                        }
                    },
                    Some(Err(message)) => rsx! {
                        div { class: "page-status is-error",
                            span { "Could not load this episode: {message}" }
                        }
                        Link { to: AppView::HomeView {}, class: "episode-back-link",
                            Icon {
                                name: "arrow-left".to_string(),
                                class: "episode-back-icon".to_string(),
                            }
                            "Back to episodes"
                        }
                    },
                    Some(Ok(episode)) => rsx! {
                        div { class: "episode-banner",
                            Link { to: AppView::HomeView {}, class: "episode-back-btn",
                                Icon {
                                    name: "arrow-left".to_string(),
                                    class: "episode-back-icon".to_string(),
                                }
                            }
                            img { src: "{episode.thumbnail}", alt: "{episode.title}" }
                            button {
                                r#type: "button",
                                class: "episode-banner-play-btn",
                                aria_label: "Play episode",
                                onclick: {
                                    let episode = episode.clone();
                                    let mut controller = controller;
                                    move |_| controller.play(episode.clone())
                                },
                                Icon {
                                    name: "play".to_string(),
                                    class: "episode-play-icon".to_string(),
                                }
                            }
                        }

                        header { class: "episode-header",
                            h1 { "{episode.title}" }
                            span { "{episode.member}" }
                            span { class: "episode-meta",
                                Icon {
                                    name: "calendar".to_string(),
                                    class: "episode-meta-icon".to_string(),
                                }
                                "{episode.published_at}"
                            }
                            span { class: "episode-meta",
                                Icon {
                                    name: "clock".to_string(),
                                    class: "episode-meta-icon".to_string(),
                                }
                                "{episode.duration_label}"
                            }
                        }

                        div {
                            class: "episode-description",
                            dangerous_inner_html: "{episode.description}",
                        }
                    },
                }
            }
        }
    }
}
