use crate::components::Icon;
use crate::player::PlayerController;
use dioxus::prelude::*;

/// Shuffle button - a single-episode queue has nothing to shuffle.
#[component]
pub(super) fn ShuffleButton() -> Element {
    let mut controller = use_context::<PlayerController>();
    let shuffled = controller.is_shuffled();
    let selectable = controller.episodes().len() > 1;

    rsx! {
        button {
            id: "shuffle-btn",
            r#type: "button",
            disabled: !selectable,
            class: if shuffled { "player-btn is-active" } else { "player-btn" },
            onclick: move |_| controller.toggle_shuffle(),
            Icon {
                name: "shuffle".to_string(),
                class: "player-btn-icon".to_string(),
            }
        }
    }
}

/// Previous button - completely isolated component
#[component]
pub(super) fn PrevButton() -> Element {
    let mut controller = use_context::<PlayerController>();
    let usable = controller.current_episode().is_some() && controller.has_previous();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            disabled: !usable,
            class: "player-btn",
            onclick: move |_| controller.play_previous(),
            Icon {
                name: "prev".to_string(),
                class: "player-btn-icon".to_string(),
            }
        }
    }
}

/// Play/Pause button - completely isolated component
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut controller = use_context::<PlayerController>();
    let has_episode = controller.current_episode().is_some();
    let playing = controller.is_playing();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            disabled: !has_episode,
            class: "player-btn player-btn-primary",
            onclick: move |_| controller.toggle_play(),
            if playing {
                Icon {
                    name: "pause".to_string(),
                    class: "player-btn-icon".to_string(),
                }
            } else {
                Icon {
                    name: "play".to_string(),
                    class: "player-btn-icon".to_string(),
                }
            }
        }
    }
}

/// Next button - completely isolated component
#[component]
pub(super) fn NextButton() -> Element {
    let mut controller = use_context::<PlayerController>();
    let usable = controller.current_episode().is_some() && controller.has_next();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            disabled: !usable,
            class: "player-btn",
            onclick: move |_| controller.play_next(),
            Icon {
                name: "next".to_string(),
                class: "player-btn-icon".to_string(),
            }
        }
    }
}

/// Loop button - restart-on-completion flag; enforcement lives in the audio
/// element.
#[component]
pub(super) fn LoopButton() -> Element {
    let mut controller = use_context::<PlayerController>();
    let looping = controller.is_looping();
    let has_episode = controller.current_episode().is_some();

    rsx! {
        button {
            id: "loop-btn",
            r#type: "button",
            disabled: !has_episode,
            class: if looping { "player-btn is-active" } else { "player-btn" },
            onclick: move |_| controller.toggle_loop(),
            Icon {
                name: "repeat".to_string(),
                class: "player-btn-icon".to_string(),
            }
        }
    }
}
