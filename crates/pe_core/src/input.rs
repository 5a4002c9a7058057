//! Keyboard poll tables.
//!
//! - **Held:** `is_down(key)` is true every frame the key is physically down.
//! - **Released:** `is_released(key)` is true only during the frame in which
//!   the key went up. The loop clears it with `end_frame()` after the game's
//!   tick, so every piece of logic in that tick sees the release and none in
//!   the next one does.
//!
//! `any_released()` mirrors the released table for "press any key" prompts.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
    Escape,
    Space,
    Enter,
    E,
    H,
    N,
    P,
    R,
}

impl Key {
    pub const COUNT: usize = 12;

    pub const ALL: [Key; Key::COUNT] = [
        Key::Left,
        Key::Up,
        Key::Right,
        Key::Down,
        Key::Escape,
        Key::Space,
        Key::Enter,
        Key::E,
        Key::H,
        Key::N,
        Key::P,
        Key::R,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone)]
pub struct InputState {
    held: [bool; Key::COUNT],
    released: [bool; Key::COUNT],
    any_released: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held: [false; Key::COUNT],
            released: [false; Key::COUNT],
            any_released: false,
        }
    }

    pub fn key_down(&mut self, key: Key) {
        self.held[key.index()] = true;
    }

    pub fn key_up(&mut self, key: Key) {
        self.held[key.index()] = false;
        self.released[key.index()] = true;
        self.any_released = true;
    }

    /// A key the engine does not map still counts for "any key".
    pub fn unmapped_key_up(&mut self) {
        self.any_released = true;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    pub fn is_released(&self, key: Key) -> bool {
        self.released[key.index()]
    }

    pub fn any_released(&self) -> bool {
        self.any_released
    }

    pub fn end_frame(&mut self) {
        self.released = [false; Key::COUNT];
        self.any_released = false;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_indices_cover_table() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn test_key_down_sets_held() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        assert!(input.is_down(Key::Left));
        assert!(!input.is_released(Key::Left));
    }

    #[test]
    fn test_key_up_clears_held_sets_released() {
        let mut input = InputState::new();
        input.key_down(Key::R);
        input.key_up(Key::R);
        assert!(!input.is_down(Key::R));
        assert!(input.is_released(Key::R));
        assert!(input.any_released());
    }

    #[test]
    fn test_release_visible_until_end_frame() {
        let mut input = InputState::new();
        input.key_down(Key::Up);
        input.key_up(Key::Up);
        // Several reads in the same frame all observe the release.
        assert!(input.is_released(Key::Up));
        assert!(input.is_released(Key::Up));
        input.end_frame();
        assert!(!input.is_released(Key::Up));
        assert!(!input.any_released());
    }

    #[test]
    fn test_end_frame_keeps_held() {
        let mut input = InputState::new();
        input.key_down(Key::Space);
        input.end_frame();
        assert!(input.is_down(Key::Space));
    }

    #[test]
    fn test_key_up_without_down_still_reports_release() {
        let mut input = InputState::new();
        input.key_up(Key::N);
        assert!(input.is_released(Key::N));
        assert!(!input.is_down(Key::N));
    }

    #[test]
    fn test_unmapped_key_counts_as_any() {
        let mut input = InputState::new();
        input.unmapped_key_up();
        assert!(input.any_released());
        assert!(Key::ALL.iter().all(|&k| !input.is_released(k)));
    }

    #[test]
    fn test_multiple_keys_independent() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        input.key_down(Key::Right);
        input.key_up(Key::Left);
        assert!(input.is_released(Key::Left));
        assert!(input.is_down(Key::Right));
        assert!(!input.is_released(Key::Right));
    }

    #[test]
    fn test_default_state_is_empty() {
        let input = InputState::default();
        for key in Key::ALL {
            assert!(!input.is_down(key));
            assert!(!input.is_released(key));
        }
        assert!(!input.any_released());
    }
}
