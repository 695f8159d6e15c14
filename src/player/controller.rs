use dioxus::prelude::*;

use crate::api::Episode;
use crate::player::PlaybackQueue;

/// Shared handle to the playback state, provided once from the app shell
/// via context. Cloning is cheap; every clone points at the same signal,
/// and reads subscribe the calling component to state changes.
#[derive(Clone, Copy)]
pub struct PlayerController {
    state: Signal<PlaybackQueue>,
}

impl PlayerController {
    pub fn new(state: Signal<PlaybackQueue>) -> Self {
        Self { state }
    }

    /// Raw signal, for non-subscribing `peek` reads in effects.
    pub fn state(&self) -> Signal<PlaybackQueue> {
        self.state
    }

    pub fn current_episode(&self) -> Option<Episode> {
        self.state.read().current_episode().cloned()
    }

    pub fn episodes(&self) -> Vec<Episode> {
        self.state.read().episodes().to_vec()
    }

    pub fn current_index(&self) -> usize {
        self.state.read().current_index()
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().is_playing()
    }

    pub fn is_looping(&self) -> bool {
        self.state.read().is_looping()
    }

    pub fn is_shuffled(&self) -> bool {
        self.state.read().is_shuffled()
    }

    pub fn has_previous(&self) -> bool {
        self.state.read().has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.state.read().has_next()
    }

    pub fn play(&mut self, episode: Episode) {
        self.state.write().play(episode);
    }

    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        self.state.write().play_list(list, index);
    }

    pub fn play_next(&mut self) {
        self.state.write().play_next(&mut rand::thread_rng());
    }

    pub fn play_previous(&mut self) {
        self.state.write().play_previous();
    }

    pub fn toggle_play(&mut self) {
        self.state.write().toggle_play();
    }

    pub fn set_playing_state(&mut self, playing: bool) {
        self.state.write().set_playing_state(playing);
    }

    pub fn toggle_loop(&mut self) {
        self.state.write().toggle_loop();
    }

    pub fn toggle_shuffle(&mut self) {
        self.state.write().toggle_shuffle();
    }

    pub fn clear(&mut self) {
        self.state.write().clear();
    }
}
