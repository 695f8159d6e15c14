use rand::Rng;

use crate::api::Episode;

/// Single source of truth for the playback queue and transport flags.
///
/// All mutation funnels through the named operations below so the derived
/// `has_previous`/`has_next` values stay consistent with the queue. The
/// three flags are orthogonal booleans, not a mode enum: every combination
/// of playing/looping/shuffled is meaningful.
///
/// Navigation past either end of the queue is absorbed as a no-op rather
/// than reported; out-of-range requests come from the UI and carry no
/// recovery action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackQueue {
    queue: Vec<Episode>,
    current_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffled: bool,
}

impl PlaybackQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.queue
    }

    /// Index of the active episode; meaningless while the queue is empty.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.get(self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffled(&self) -> bool {
        self.is_shuffled
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Shuffle always offers a next pick; otherwise there must be an
    /// episode after the current one.
    pub fn has_next(&self) -> bool {
        self.is_shuffled || self.current_index + 1 < self.queue.len()
    }

    /// Replace whatever is queued with a single episode and start playing.
    pub fn play(&mut self, episode: Episode) {
        self.queue = vec![episode];
        self.current_index = 0;
        self.is_playing = true;
    }

    /// Replace the queue with `list`, positioned at `index`, and start
    /// playing. Callers supply an index within `list`; it is not checked.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        self.queue = list;
        self.current_index = index;
        self.is_playing = true;
    }

    /// Advance to the next episode. Under shuffle the next position is a
    /// uniform re-roll over the whole queue, which may land on the current
    /// index again.
    pub fn play_next(&mut self, rng: &mut impl Rng) {
        if self.is_shuffled {
            if self.queue.is_empty() {
                return;
            }
            self.current_index = rng.gen_range(0..self.queue.len());
        } else if self.has_next() {
            self.current_index += 1;
        }
    }

    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_index -= 1;
        }
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Direct write used when the audio element reports a state change the
    /// UI did not initiate (natural track end, browser media controls).
    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffled = !self.is_shuffled;
    }

    /// Drop the queue and reset the position. Transport flags keep their
    /// values; the audio layer reports the resulting pause on its own.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.current_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn episode(title: &str) -> Episode {
        Episode {
            id: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            member: "Ana Costa".to_string(),
            url: format!("https://example.com/audio/{title}.mp3"),
            duration: 1800,
            ..Episode::default()
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn starts_empty_and_stopped() {
        let state = PlaybackQueue::new();
        assert!(state.episodes().is_empty());
        assert_eq!(state.current_index(), 0);
        assert!(state.current_episode().is_none());
        assert!(!state.is_playing());
        assert!(!state.is_looping());
        assert!(!state.is_shuffled());
        assert!(!state.has_previous());
        assert!(!state.has_next());
    }

    #[test]
    fn play_replaces_queue_with_singleton() {
        let mut state = PlaybackQueue::new();
        state.play_list(vec![episode("A"), episode("B"), episode("C")], 2);

        state.play(episode("Solo"));

        assert_eq!(state.episodes().len(), 1);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.current_episode().unwrap().title, "Solo");
        assert!(state.is_playing());
    }

    #[test]
    fn play_list_adopts_queue_index_and_starts() {
        let mut state = PlaybackQueue::new();
        let list = vec![episode("A"), episode("B"), episode("C")];

        state.play_list(list.clone(), 1);

        assert_eq!(state.episodes(), list.as_slice());
        assert_eq!(state.current_index(), 1);
        assert!(state.is_playing());
    }

    #[test]
    fn sequential_next_walks_then_stops_at_the_end() {
        let mut state = PlaybackQueue::new();
        state.play_list(vec![episode("A"), episode("B"), episode("C")], 0);

        state.play_next(&mut rng());
        assert_eq!(state.current_index(), 1);
        state.play_next(&mut rng());
        assert_eq!(state.current_index(), 2);
        assert!(!state.has_next());

        state.play_next(&mut rng());
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn previous_at_start_is_a_no_op() {
        let mut state = PlaybackQueue::new();
        state.play_list(vec![episode("A"), episode("B")], 0);

        state.play_previous();

        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn previous_steps_back_from_the_tail() {
        let mut state = PlaybackQueue::new();
        state.play_list(vec![episode("A"), episode("B"), episode("C")], 2);

        state.play_previous();

        assert_eq!(state.current_index(), 1);
        assert!(state.has_previous());
    }

    #[test]
    fn toggles_are_involutions() {
        let mut state = PlaybackQueue::new();

        state.toggle_play();
        assert!(state.is_playing());
        state.toggle_play();
        assert!(!state.is_playing());

        state.toggle_loop();
        state.toggle_loop();
        assert!(!state.is_looping());

        state.toggle_shuffle();
        state.toggle_shuffle();
        assert!(!state.is_shuffled());
    }

    #[test]
    fn set_playing_state_overrides_in_both_directions() {
        let mut state = PlaybackQueue::new();

        state.set_playing_state(true);
        assert!(state.is_playing());
        state.set_playing_state(true);
        assert!(state.is_playing());
        state.set_playing_state(false);
        assert!(!state.is_playing());
    }

    #[test]
    fn shuffle_makes_next_available_everywhere() {
        let mut state = PlaybackQueue::new();
        state.play_list(vec![episode("A"), episode("B")], 1);
        assert!(!state.has_next());

        state.toggle_shuffle();

        assert!(state.has_next());
    }

    #[test]
    fn shuffled_next_stays_in_bounds_and_reaches_every_index() {
        let mut state = PlaybackQueue::new();
        state.play_list(
            vec![episode("A"), episode("B"), episode("C"), episode("D")],
            0,
        );
        state.toggle_shuffle();

        let mut rng = rng();
        let mut seen = HashSet::new();
        for _ in 0..200 {
            state.play_next(&mut rng);
            assert!(state.current_index() < state.episodes().len());
            seen.insert(state.current_index());
        }

        assert_eq!(seen.len(), state.episodes().len());
    }

    #[test]
    fn shuffled_next_may_reselect_the_current_index() {
        let mut state = PlaybackQueue::new();
        state.play_list(vec![episode("A"), episode("B"), episode("C")], 0);
        state.toggle_shuffle();

        let mut rng = rng();
        let mut repeated = false;
        for _ in 0..200 {
            let before = state.current_index();
            state.play_next(&mut rng);
            if state.current_index() == before {
                repeated = true;
                break;
            }
        }

        assert!(repeated);
    }

    #[test]
    fn shuffled_next_on_empty_queue_is_a_no_op() {
        let mut state = PlaybackQueue::new();
        state.toggle_shuffle();

        state.play_next(&mut rng());

        assert!(state.episodes().is_empty());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn clear_drops_queue_but_keeps_flags() {
        let mut state = PlaybackQueue::new();
        state.play_list(vec![episode("A"), episode("B")], 1);
        state.toggle_loop();
        state.toggle_shuffle();

        state.clear();

        assert!(state.episodes().is_empty());
        assert_eq!(state.current_index(), 0);
        assert!(state.current_episode().is_none());
        assert!(state.is_playing());
        assert!(state.is_looping());
        assert!(state.is_shuffled());
    }
}
