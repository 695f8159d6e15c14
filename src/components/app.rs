use dioxus::prelude::*;

use crate::components::{
    view_label, AppView, AudioController, AudioStatus, Header, PlaybackPositionSignal, Player,
};
use crate::player::{PlaybackQueue, PlayerController};

#[component]
pub fn AppShell() -> Element {
    let playback = use_signal(PlaybackQueue::new);
    let controller = PlayerController::new(playback);
    let playback_position = use_signal(|| 0.0f64);
    let audio_status = use_signal(AudioStatus::default);

    // Provide state via context
    use_context_provider(|| controller);
    use_context_provider(|| PlaybackPositionSignal(playback_position));
    use_context_provider(|| audio_status);

    let view = use_route::<AppView>();
    let title = format!("{} | rustcast", view_label(&view));

    rsx! {
        document::Title { "{title}" }

        div { class: "app-container",
            div { class: "app-main",
                Header {}
                main { class: "page-shell",
                    Outlet::<AppView> {}
                }
            }

            // Fixed player column
            Player {}
        }

        // Audio controller - manages playback separately from UI
        AudioController {}
    }
}
