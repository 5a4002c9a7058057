//! Built-in levels.
//!
//! Tile codes: 0 empty, 1 floor, 4 blocked, 5 ice, 6..=9 movers (left, up,
//! right, down), 10 crumbling. Rows are listed top to bottom.

use glam::IVec2;

use crate::board::MAP_SIZE;

pub const MAX_LEVELS: i32 = 7;

#[derive(Debug, Clone)]
pub struct Level {
    pub tiles: [u8; MAP_SIZE],
    pub hats: &'static [IVec2],
    pub start: IVec2,
    /// Goal cell, marked by the pin.
    pub pin: IVec2,
}

#[rustfmt::skip]
static LEVELS: [Level; MAX_LEVELS as usize] = [
    Level {
        tiles: [
            0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0,
            1, 1, 1, 1, 1, 1, 1,
            0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0,
        ],
        hats: &[IVec2::new(3, 2)],
        start: IVec2::new(0, 2),
        pin: IVec2::new(6, 2),
    },
    Level {
        tiles: [
            0, 1, 1, 1, 1, 1, 0,
            0, 1, 0, 0, 0, 1, 0,
            1, 1, 0, 4, 0, 1, 1,
            0, 1, 0, 0, 0, 1, 0,
            0, 1, 1, 1, 1, 1, 0,
        ],
        hats: &[IVec2::new(1, 0), IVec2::new(5, 4)],
        start: IVec2::new(0, 2),
        pin: IVec2::new(6, 2),
    },
    Level {
        tiles: [
            1, 5, 5, 5, 1, 0, 0,
            1, 0, 0, 0, 1, 0, 0,
            1, 0, 0, 0, 1, 1, 1,
            1, 0, 0, 0, 0, 0, 1,
            1, 1, 1, 1, 1, 1, 1,
        ],
        hats: &[IVec2::new(4, 1), IVec2::new(6, 4)],
        start: IVec2::new(0, 4),
        pin: IVec2::new(6, 2),
    },
    Level {
        tiles: [
            1, 1, 8, 1, 1, 1, 1,
            1, 0, 0, 0, 0, 0, 1,
            1, 0, 1, 1, 1, 0, 9,
            1, 0, 1, 0, 1, 0, 1,
            7, 1, 1, 0, 1, 1, 1,
        ],
        hats: &[IVec2::new(6, 0), IVec2::new(4, 4)],
        start: IVec2::new(0, 0),
        pin: IVec2::new(3, 2),
    },
    Level {
        tiles: [
            0, 10, 10, 10,  0,  0, 0,
            0, 10,  0, 10,  0,  0, 0,
            1, 10, 10, 10, 10, 10, 1,
            0,  0,  0, 10,  0,  0, 0,
            0,  0,  0,  1,  0,  0, 0,
        ],
        hats: &[IVec2::new(3, 0)],
        start: IVec2::new(0, 2),
        pin: IVec2::new(6, 2),
    },
    Level {
        tiles: [
            1, 1,  1, 4,  1, 1, 1,
            1, 5,  5, 5,  5, 5, 1,
            1, 1, 10, 0, 10, 1, 1,
            1, 1,  1, 0,  1, 1, 1,
            0, 0,  1, 1,  1, 0, 0,
        ],
        hats: &[IVec2::new(0, 0), IVec2::new(4, 2)],
        start: IVec2::new(2, 4),
        pin: IVec2::new(6, 0),
    },
    Level {
        tiles: [
            9, 1, 1,  1, 1, 1, 1,
            1, 0, 4,  0, 4, 0, 5,
            1, 1, 1, 10, 1, 1, 1,
            7, 0, 1,  0, 1, 0, 1,
            1, 1, 1,  8, 1, 1, 1,
        ],
        hats: &[IVec2::new(2, 0), IVec2::new(4, 3), IVec2::new(0, 4)],
        start: IVec2::new(3, 2),
        pin: IVec2::new(6, 4),
    },
];

/// Level by 1-based number. Anything outside `1..=MAX_LEVELS` (a stale or
/// hand-edited settings file) falls back to the first level.
pub fn level(number: i32) -> &'static Level {
    let index = usize::try_from(number)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| LEVELS.get(i));
    match index {
        Some(level) => level,
        None => {
            log::warn!("Level {number} does not exist, loading level 1");
            &LEVELS[0]
        }
    }
}
