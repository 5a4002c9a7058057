//! The player piece: board cell, pixel tween between cells, and the idle
//! tilt/wobble animation.

use glam::{IVec2, Vec2};
use pe_core::math::{lerp_vec2, FRAME_TARGET_MS};

use crate::board::{cell_position, Board, Direction};

pub const MOVE_TIME_MS: f32 = 250.0;
pub const PLAYER_OFFSET: f32 = 33.0;
pub const MAX_TILT: f32 = 20.0;
pub const TILT_STEP: f32 = 1.5;
pub const WOBBLE_STEP: f32 = 1.5;

#[derive(Debug, Clone)]
pub struct Player {
    pub cell: IVec2,
    pub target_cell: IVec2,
    /// Top-left pixel of the player sprite.
    pub position: Vec2,
    pub start: Vec2,
    pub target: Vec2,
    pub moving: bool,
    pub flipped: bool,
    pub elapsed_ms: f32,
    pub tilt: f32,
    pub tilt_forward: bool,
    /// Radians; fed through `cos` when drawing.
    pub wobble: f32,
    /// Degrees of spin during a move.
    pub spin: f32,
    pub last_direction: Direction,
}

impl Player {
    pub fn new(cell: IVec2) -> Self {
        let position = Self::pixel_position(cell);
        Self {
            cell,
            target_cell: cell,
            position,
            start: position,
            target: position,
            moving: false,
            flipped: false,
            elapsed_ms: 0.0,
            tilt: 0.0,
            tilt_forward: false,
            wobble: 0.0,
            spin: 0.0,
            last_direction: Direction::Left,
        }
    }

    pub fn pixel_position(cell: IVec2) -> Vec2 {
        cell_position(cell) + Vec2::splat(PLAYER_OFFSET)
    }

    /// Tilt bounces between 0 and `MAX_TILT`; wobble only advances.
    pub fn animate(&mut self, delta: f32) {
        if self.tilt_forward && self.tilt > MAX_TILT {
            self.tilt_forward = false;
        } else if !self.tilt_forward && self.tilt < 0.0 {
            self.tilt_forward = true;
        }
        let sign = if self.tilt_forward { 1.0 } else { -1.0 };
        self.tilt += delta * TILT_STEP * sign;
        self.wobble += delta * WOBBLE_STEP;
    }

    /// Advance an in-progress move. Returns true on the tick it lands.
    pub fn advance(&mut self, delta: f32) -> bool {
        if !self.moving {
            return false;
        }
        self.elapsed_ms += delta * FRAME_TARGET_MS;
        let pct = self.elapsed_ms / MOVE_TIME_MS;

        if pct < 1.0 {
            self.position = lerp_vec2(self.start, self.target, pct);
            self.spin = pct * 360.0 * if self.flipped { -1.0 } else { 1.0 };
            false
        } else {
            self.position = self.target;
            self.spin = 0.0;
            self.moving = false;
            self.elapsed_ms = 0.0;
            self.cell = self.target_cell;
            true
        }
    }

    /// Start a move one cell in `direction`. Rejected moves change nothing.
    pub fn try_move(&mut self, board: &mut Board, direction: Direction) -> bool {
        let next = self.cell + direction.offset();
        if !board.is_walkable(next) {
            return false;
        }

        board.crumble(self.cell);

        self.target_cell = next;
        self.last_direction = direction;
        self.flipped = direction.flips();
        self.moving = true;
        self.elapsed_ms = 0.0;
        self.start = self.position;
        self.target = Self::pixel_position(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Tile;
    use crate::levels::Level;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board() -> Board {
        #[rustfmt::skip]
        let tiles = [
            1, 1,  4, 0, 0, 0, 0,
            1, 10, 1, 0, 0, 0, 0,
            0, 0,  0, 0, 0, 0, 0,
            0, 0,  0, 0, 0, 0, 0,
            0, 0,  0, 0, 0, 0, 0,
        ];
        let level = Level {
            tiles,
            hats: &[],
            start: IVec2::ZERO,
            pin: IVec2::new(2, 1),
        };
        Board::from_level(&level, &mut StdRng::seed_from_u64(1))
    }

    fn finish_move(player: &mut Player) -> u32 {
        let mut ticks = 0;
        while player.moving {
            player.advance(1.0);
            ticks += 1;
            assert!(ticks < 100);
        }
        ticks
    }

    #[test]
    fn blocked_empty_and_edge_moves_are_rejected() {
        let mut board = board();
        let mut player = Player::new(IVec2::new(1, 0));
        assert!(!player.try_move(&mut board, Direction::Right));
        assert!(!player.try_move(&mut board, Direction::Up));

        let mut player = Player::new(IVec2::new(0, 1));
        assert!(!player.try_move(&mut board, Direction::Left));
        assert!(!player.try_move(&mut board, Direction::Down));

        assert!(!player.moving);
        assert_eq!(player.cell, IVec2::new(0, 1));
        assert_eq!(player.target_cell, player.cell);
        assert_eq!(player.position, Player::pixel_position(player.cell));
    }

    #[test]
    fn move_lands_after_move_time_and_resyncs() {
        let mut board = board();
        let mut player = Player::new(IVec2::ZERO);
        assert!(player.try_move(&mut board, Direction::Right));
        assert!(player.flipped);
        assert_eq!(player.cell, IVec2::ZERO);

        player.advance(1.0);
        assert!(player.moving);
        assert!(player.spin < 0.0);
        assert!(player.position.x > player.start.x);

        // 250 / 16.67 rounds up to 15 frames.
        assert_eq!(finish_move(&mut player) + 1, 15);
        assert_eq!(player.cell, IVec2::new(1, 0));
        assert_eq!(player.position, Player::pixel_position(player.cell));
        assert_eq!(player.spin, 0.0);
    }

    #[test]
    fn leaving_crumbling_tile_blocks_it() {
        let mut board = board();
        let mut player = Player::new(IVec2::new(1, 1));
        assert!(player.try_move(&mut board, Direction::Right));
        assert_eq!(board.tile(IVec2::new(1, 1)), Some(Tile::Blocked));
        finish_move(&mut player);
        assert!(!player.try_move(&mut board, Direction::Left));
    }

    #[test]
    fn down_and_left_moves_do_not_flip() {
        let mut board = board();
        let mut player = Player::new(IVec2::ZERO);
        assert!(player.try_move(&mut board, Direction::Down));
        assert!(!player.flipped);
        player.advance(1.0);
        assert!(player.spin > 0.0);
    }

    #[test]
    fn tilt_stays_near_its_range() {
        let mut player = Player::new(IVec2::ZERO);
        for _ in 0..200 {
            player.animate(1.0);
            assert!(player.tilt >= -TILT_STEP && player.tilt <= MAX_TILT + TILT_STEP);
        }
        assert!((player.wobble - 300.0).abs() < 1e-3);
    }
}
