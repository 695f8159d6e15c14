//! Audio playback glue - keeps the shared `<audio>` element in sync with the
//! playback state outside of the component render cycle.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::player::PlayerController;
#[cfg(target_arch = "wasm32")]
use std::cell::Cell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement, HtmlElement, KeyboardEvent};

/// Playback readings mirrored off the audio element for the player UI.
#[derive(Clone)]
pub struct AudioStatus {
    pub current_time: Signal<f64>,
    pub duration: Signal<f64>,
    pub playback_error: Signal<Option<String>>,
}

impl Default for AudioStatus {
    fn default() -> Self {
        Self {
            current_time: Signal::new(0.0),
            duration: Signal::new(0.0),
            playback_error: Signal::new(None),
        }
    }
}

/// Newtype so the position signal stays distinguishable in context.
#[derive(Clone, Copy)]
pub struct PlaybackPositionSignal(pub Signal<f64>);

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id("rustcast-audio") {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id("rustcast-audio");
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(target_arch = "wasm32")]
pub fn seek_to(time: f64) {
    if let Some(audio) = get_or_create_audio_element() {
        audio.set_current_time(time.max(0.0));
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn seek_to(_time: f64) {}

#[cfg(target_arch = "wasm32")]
fn try_play(audio: &HtmlAudioElement) {
    if let Ok(promise) = audio.play() {
        spawn(async move {
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn playback_error_message(audio: &HtmlAudioElement) -> Option<String> {
    let audio_js = wasm_bindgen::JsValue::from(audio.clone());
    let error_js = js_sys::Reflect::get(&audio_js, &"error".into()).ok()?;
    if error_js.is_null() || error_js.is_undefined() {
        return None;
    }
    let code = js_sys::Reflect::get(&error_js, &"code".into())
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0) as u16;

    Some(match code {
        1 => "Playback was aborted before the episode loaded.".to_string(),
        2 => "Network error while loading this episode.".to_string(),
        3 => "Audio playback failed due to a decode error.".to_string(),
        4 => "Failed to load audio because no supported source was found.".to_string(),
        _ => "Unable to load this audio source.".to_string(),
    })
}

#[cfg(target_arch = "wasm32")]
fn is_editable_shortcut_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        current = element.parent_element();
    }

    false
}

#[cfg(target_arch = "wasm32")]
fn shortcut_action_from_key(event: &KeyboardEvent) -> Option<&'static str> {
    if event.default_prevented() || event.is_composing() || is_editable_shortcut_target(event) {
        return None;
    }

    let key = event.key();
    let code = event.code();
    let meta_or_ctrl = event.meta_key() || event.ctrl_key();

    if key == "MediaTrackNext" || code == "MediaTrackNext" {
        return Some("next");
    }
    if key == "MediaTrackPrevious" || code == "MediaTrackPrevious" {
        return Some("previous");
    }
    if key == "MediaPlayPause" || code == "MediaPlayPause" {
        return Some("toggle_play");
    }

    if meta_or_ctrl && !event.alt_key() && !event.shift_key() {
        if key == "ArrowRight" {
            return Some("next");
        }
        if key == "ArrowLeft" {
            return Some("previous");
        }
    }

    if !event.meta_key()
        && !event.ctrl_key()
        && !event.alt_key()
        && (key == " " || key == "Spacebar" || code == "Space")
    {
        return Some("toggle_play");
    }

    None
}

#[cfg(target_arch = "wasm32")]
fn click_player_control_button(id: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(element) = doc.get_element_by_id(id) {
            if let Ok(html) = element.dyn_into::<HtmlElement>() {
                html.click();
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<PlayerController>();
    let audio_status = use_context::<Signal<AudioStatus>>();
    let playback_position = use_context::<PlaybackPositionSignal>().0;

    let mut last_src = use_signal(|| None::<String>);

    thread_local! {
        static USER_INTERACTED: Cell<bool> = Cell::new(false);
    }
    let has_user_interacted = || USER_INTERACTED.with(|c| c.get());

    // One-time setup: create the element, wire the gesture latch and
    // keyboard shortcuts, and start the polling loop.
    {
        let mut controller = controller;
        let audio_status = audio_status;
        let playback_position = playback_position;
        use_effect(move || {
            let Some(_audio) = get_or_create_audio_element() else {
                return;
            };

            if let Some(doc) = window().and_then(|w| w.document()) {
                let click_cb = Closure::wrap(
                    Box::new(move || USER_INTERACTED.with(|c| c.set(true))) as Box<dyn FnMut()>,
                );
                let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                    USER_INTERACTED.with(|c| c.set(true));
                    if let Some(action) = shortcut_action_from_key(&event) {
                        event.prevent_default();
                        match action {
                            "next" => click_player_control_button("next-btn"),
                            "previous" => click_player_control_button("prev-btn"),
                            "toggle_play" => click_player_control_button("play-pause-btn"),
                            _ => {}
                        }
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);
                let touch_cb = Closure::wrap(
                    Box::new(move || USER_INTERACTED.with(|c| c.set(true))) as Box<dyn FnMut()>,
                );
                let _ = doc
                    .add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
                let _ = doc
                    .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
                let _ = doc.add_event_listener_with_callback(
                    "touchstart",
                    touch_cb.as_ref().unchecked_ref(),
                );
                click_cb.forget();
                key_cb.forget();
                touch_cb.forget();
            }

            let mut current_time_signal = audio_status.peek().current_time;
            let mut duration_signal = audio_status.peek().duration;
            let mut error_signal = audio_status.peek().playback_error;
            let mut playback_position = playback_position;

            spawn(async move {
                let mut last_emit = 0.0f64;
                let mut last_duration = -1.0f64;
                let mut ended_for_episode: Option<String> = None;
                let mut paused_streak: u8 = 0;
                let mut playing_streak: u8 = 0;

                loop {
                    gloo_timers::future::TimeoutFuture::new(200).await;

                    let Some(audio) = get_or_create_audio_element() else {
                        continue;
                    };

                    let time = audio.current_time();
                    if (time - last_emit).abs() >= 0.2 {
                        last_emit = time;
                        current_time_signal.set(time);
                        playback_position.set(time);
                    }

                    let dur = audio.duration();
                    if !dur.is_nan() && (dur - last_duration).abs() > 0.5 {
                        last_duration = dur;
                        duration_signal.set(dur);
                    }

                    let state = controller.state();
                    let current = state.peek().current_episode().cloned();
                    let paused = audio.paused();

                    if current.is_some() {
                        // Fold playback driven from outside the app buttons
                        // (hardware media keys, browser UI) back into the
                        // store.
                        if paused {
                            paused_streak = paused_streak.saturating_add(1);
                            playing_streak = 0;
                        } else {
                            playing_streak = playing_streak.saturating_add(1);
                            paused_streak = 0;
                        }

                        if state.peek().is_playing() && paused_streak >= 2 && !audio.ended() {
                            controller.set_playing_state(false);
                        } else if !state.peek().is_playing() && playing_streak >= 2 {
                            controller.set_playing_state(true);
                        }

                        if let Some(message) = playback_error_message(&audio) {
                            if error_signal.peek().as_ref() != Some(&message) {
                                error_signal.set(Some(message));
                            }
                        } else if error_signal.peek().is_some() {
                            let has_started = time > 0.0 || (!dur.is_nan() && dur > 0.0) || !paused;
                            if has_started {
                                error_signal.set(None);
                            }
                        }
                    } else {
                        paused_streak = 0;
                        playing_streak = 0;
                        if state.peek().is_playing() {
                            controller.set_playing_state(false);
                        }
                        if error_signal.peek().is_some() {
                            error_signal.set(None);
                        }
                    }

                    if audio.ended() {
                        let current_id = current.as_ref().map(|e| e.id.clone());
                        if ended_for_episode == current_id {
                            continue;
                        }
                        ended_for_episode = current_id;

                        // Loop restarts live on the element's loop flag; an
                        // ended event with looping on means the flag flipped
                        // after the track finished.
                        if state.peek().is_looping() {
                            audio.set_current_time(0.0);
                            if state.peek().is_playing() {
                                try_play(&audio);
                            }
                            continue;
                        }

                        if state.peek().has_next() {
                            controller.play_next();
                        } else {
                            controller.set_playing_state(false);
                            controller.clear();
                        }
                    } else {
                        ended_for_episode = None;
                    }
                }
            });
        });
    }

    // Swap the element source when the active episode changes.
    {
        let mut controller = controller;
        let audio_status = audio_status;
        let mut playback_position = playback_position;
        let mut last_src = last_src;
        use_effect(move || {
            let mut error_signal = audio_status.peek().playback_error;
            let mut current_time_signal = audio_status.peek().current_time;
            let episode = controller.current_episode();

            let Some(episode) = episode else {
                if let Some(audio) = get_or_create_audio_element() {
                    let _ = audio.pause();
                    audio.set_src("");
                    let _ = audio.remove_attribute("src");
                    audio.load();
                }
                last_src.set(None);
                error_signal.set(None);
                return;
            };

            if episode.url.trim().is_empty() {
                error_signal.set(Some("This episode has no playable audio URL.".to_string()));
                return;
            }

            if Some(&episode.url) != last_src.peek().as_ref() {
                last_src.set(Some(episode.url.clone()));
                error_signal.set(None);

                if let Some(audio) = get_or_create_audio_element() {
                    audio.set_src(&episode.url);
                    playback_position.set(0.0);
                    current_time_signal.set(0.0);

                    let was_playing = controller.state().peek().is_playing();
                    if has_user_interacted() && was_playing {
                        try_play(&audio);
                    } else {
                        let _ = audio.pause();
                        if was_playing {
                            controller.set_playing_state(false);
                        }
                    }
                }
            }
        });
    }

    // Handle play/pause state changes.
    {
        let mut controller = controller;
        use_effect(move || {
            let playing = controller.is_playing();
            if let Some(audio) = get_or_create_audio_element() {
                if playing {
                    if has_user_interacted() {
                        if audio.paused() {
                            try_play(&audio);
                        }
                    } else {
                        controller.set_playing_state(false);
                    }
                } else if !audio.paused() {
                    let _ = audio.pause();
                }
            }
        });
    }

    // Loop policy is enforced by the element, not the store.
    {
        let controller = controller;
        use_effect(move || {
            let looping = controller.is_looping();
            if let Some(audio) = get_or_create_audio_element() {
                audio.set_loop(looping);
            }
        });
    }

    rsx! {}
}

/// Native shells render the UI but carry no audio bridge.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    rsx! {}
}
