use crate::api::models::format_duration;
use crate::components::{seek_to, AudioStatus, Icon, PlaybackPositionSignal};
use crate::player::PlayerController;
use dioxus::prelude::*;

mod controls;

use controls::{LoopButton, NextButton, PlayPauseButton, PrevButton, ShuffleButton};

#[component]
pub fn Player() -> Element {
    let controller = use_context::<PlayerController>();
    let audio_status = use_context::<Signal<AudioStatus>>();
    let playback_position = use_context::<PlaybackPositionSignal>().0;

    let current_episode = controller.current_episode();

    // Signal fields need to be read with ()
    let current_time = (audio_status().current_time)();
    let audio_duration = (audio_status().duration)();
    let playback_error = (audio_status().playback_error)();

    // The element reports its duration once metadata loads; until then fall
    // back to the episode record.
    let duration = if audio_duration > 0.0 {
        audio_duration
    } else {
        current_episode
            .as_ref()
            .map(|e| e.duration as f64)
            .unwrap_or(0.0)
    };

    let progress_percent = if duration > 0.0 {
        ((current_time / duration) * 100.0).round() as i32
    } else {
        0
    };

    let on_seek_input = {
        let mut playback_position = playback_position;
        let mut audio_status = audio_status;
        move |e: Event<FormData>| {
            if let Ok(percent) = e.value().parse::<f64>() {
                let percent = percent.clamp(0.0, 100.0);
                if duration > 0.0 {
                    let new_time = (percent / 100.0) * duration;
                    playback_position.set(new_time);
                    audio_status.write().current_time.set(new_time);
                    seek_to(new_time);
                }
            }
        }
    };

    let total_label = current_episode
        .as_ref()
        .map(|e| e.duration_label.clone())
        .unwrap_or_else(|| "00:00:00".to_string());

    rsx! {
        aside { class: "player-shell",
            if let Some(message) = playback_error {
                div { class: "player-error", "{message}" }
            }

            header { class: "player-header",
                Icon {
                    name: "logo".to_string(),
                    class: "player-header-icon".to_string(),
                }
                strong { "Now playing" }
            }

            {
                match &current_episode {
                    Some(episode) => rsx! {
                        div { class: "player-current",
                            img { src: "{episode.thumbnail}", alt: "{episode.title}" }
                            strong { "{episode.title}" }
                            span { "{episode.member}" }
                        }
                    },
                    None => rsx! {
                        div { class: "player-empty",
                            strong { "Select an episode to listen" }
                        }
                    },
                }
            }

            footer { class: if current_episode.is_none() { "player-footer is-empty" } else { "player-footer" },
                div { class: "player-progress",
                    span { class: "player-time", {format_duration(current_time.max(0.0) as u32)} }
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        disabled: current_episode.is_none(),
                        value: progress_percent,
                        class: "player-slider",
                        oninput: on_seek_input,
                    }
                    span { class: "player-time", "{total_label}" }
                }

                div { class: "player-buttons",
                    ShuffleButton {}
                    PrevButton {}
                    PlayPauseButton {}
                    NextButton {}
                    LoopButton {}
                }
            }
        }
    }
}
