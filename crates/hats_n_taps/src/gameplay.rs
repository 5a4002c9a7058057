//! The puzzle itself.
//!
//! Per tick: hotkeys, player logic, floor re-shading, indicator blink, then
//! drawing. Player logic only looks at the board once a move has landed, so
//! ice and movers chain one cell per landing.

use glam::{IVec2, Vec2};
use pe_core::graphics::Graphics;
use pe_core::input::Key;
use pe_core::math::HALF_PI;
use pe_core::sprite::Sprite;
use rand::rngs::StdRng;

use crate::board::{cell_position, Board, Direction, Tile};
use crate::levels::{self, Level, MAX_LEVELS};
use crate::player::Player;
use crate::res_path;
use crate::scene::{OverMode, SceneFrame, SceneKind};
use crate::settings::Settings;
use crate::timer::{Blink, Interval, BLINK_TIME_MS};

const TILE_TEXTURE_COUNT: usize = 10;
const SWAP_TILES_MS: f32 = 250.0;

const PLAYER_SHADOW_OFFSET: Vec2 = Vec2::new(-12.0, 100.0);
const PIN_OFFSET: Vec2 = Vec2::new(40.0, 30.0);
const PIN_SHADOW_OFFSET: Vec2 = Vec2::new(-20.0, 110.0);
const HAT_OFFSET: Vec2 = Vec2::new(20.0, 33.0);
const HAT_SHADOW_OFFSET: Vec2 = Vec2::new(22.0, 120.0);
const PICK_POSITION: Vec2 = Vec2::new(1500.0, 380.0);

/// Arrow keys in the order they are checked; only the first release counts.
const MOVE_KEYS: [(Key, Direction); 4] = [
    (Key::Left, Direction::Left),
    (Key::Up, Direction::Up),
    (Key::Right, Direction::Right),
    (Key::Down, Direction::Down),
];

/// Advance progress after the goal is reached with every hat collected.
pub fn complete_level(settings: &mut Settings) -> OverMode {
    if settings.level < MAX_LEVELS {
        settings.level += 1;
        settings.max = settings.max.max(settings.level);
        OverMode::LevelUp
    } else {
        settings.level = 1;
        OverMode::GameOver
    }
}

struct Textures {
    tiles: [Sprite; TILE_TEXTURE_COUNT],
    player: Sprite,
    pin: Sprite,
    hat: Sprite,
    shadow: Sprite,
    pick: Sprite,
}

impl Textures {
    fn load(graphics: &mut dyn Graphics) -> Self {
        let mut tiles = [Sprite::default(); TILE_TEXTURE_COUNT];
        for (i, tile) in tiles.iter_mut().enumerate() {
            *tile = graphics.load_texture(&res_path(&format!("tile{}.png", i + 1)));
        }
        Self {
            tiles,
            player: graphics.load_texture(&res_path("player.png")),
            pin: graphics.load_texture(&res_path("pin.png")),
            pick: graphics
                .load_texture(&res_path("pick.png"))
                .with_position(PICK_POSITION),
            shadow: graphics.load_texture(&res_path("shadow.png")),
            hat: graphics.load_texture(&res_path("hat.png")),
        }
    }

    fn unload(&self, graphics: &mut dyn Graphics) {
        for tile in &self.tiles {
            graphics.unload_texture(tile);
        }
        graphics.unload_texture(&self.pick);
        graphics.unload_texture(&self.hat);
        graphics.unload_texture(&self.pin);
        graphics.unload_texture(&self.player);
        graphics.unload_texture(&self.shadow);
    }

    fn tile(&self, tile: Tile) -> Option<&Sprite> {
        match tile.code() {
            0 => None,
            code => self.tiles.get(usize::from(code) - 1),
        }
    }
}

pub struct GameplayScene {
    textures: Textures,
    board: Board,
    player: Player,
    pin: IVec2,
    swap_timer: Interval,
    pick_blink: Blink,
    /// Set once the player stands on the goal with hats left to collect.
    pick_required: bool,
}

impl GameplayScene {
    pub fn init(graphics: &mut dyn Graphics, settings: &Settings, rng: &mut StdRng) -> Self {
        let level = levels::level(settings.level);
        log::info!("Starting level {}", settings.level);
        Self::with_level(graphics, level, rng)
    }

    pub fn with_level(graphics: &mut dyn Graphics, level: &Level, rng: &mut StdRng) -> Self {
        Self {
            textures: Textures::load(graphics),
            board: Board::from_level(level, rng),
            player: Player::new(level.start),
            pin: level.pin,
            swap_timer: Interval::new(SWAP_TILES_MS),
            pick_blink: Blink::new(BLINK_TIME_MS),
            pick_required: false,
        }
    }

    #[cfg(test)]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn pick_required(&self) -> bool {
        self.pick_required
    }

    pub fn tick(&mut self, frame: &mut SceneFrame, rng: &mut StdRng, delta: f32) {
        self.handle_hotkeys(frame);
        self.player_logic(frame, delta);

        if self.swap_timer.tick(delta) {
            self.board.reshade(rng);
        }
        self.pick_blink.tick(delta);

        self.draw(frame.graphics);
    }

    pub fn terminate(self, graphics: &mut dyn Graphics) {
        self.textures.unload(graphics);
    }

    fn handle_hotkeys(&mut self, frame: &mut SceneFrame) {
        let input = frame.input;

        if input.is_released(Key::R) {
            frame.switch_to(SceneKind::Gameplay);
        }
        if input.is_released(Key::E) {
            frame.quit();
        }
        if input.is_released(Key::P) && frame.settings.level > 1 {
            frame.settings.level -= 1;
            frame.switch_to(SceneKind::Gameplay);
        }
        if input.is_released(Key::N) && frame.settings.level < frame.settings.max {
            frame.settings.level += 1;
            frame.switch_to(SceneKind::Gameplay);
        }
        if input.is_released(Key::H) {
            frame.switch_to(SceneKind::Over(OverMode::Help));
        }
    }

    fn player_logic(&mut self, frame: &mut SceneFrame, delta: f32) {
        self.player.animate(delta);

        if self.player.moving {
            self.player.advance(delta);
            return;
        }

        let here = self.player.cell;
        match self.board.tile(here) {
            Some(Tile::Ice) => {
                let direction = self.player.last_direction;
                self.player.try_move(&mut self.board, direction);
                return;
            }
            Some(Tile::Mover(direction)) => {
                self.player.try_move(&mut self.board, direction);
                return;
            }
            _ => {}
        }

        if self.board.take_hat(here) {
            log::debug!("Hat collected, {} left", self.board.remaining_hats());
        }

        if here == self.pin {
            if self.board.remaining_hats() == 0 {
                let mode = complete_level(frame.settings);
                log::info!("Level complete, next level {}", frame.settings.level);
                frame.switch_to(SceneKind::Over(mode));
            } else {
                self.pick_required = true;
            }
        }

        let released = MOVE_KEYS
            .iter()
            .find(|(key, _)| frame.input.is_released(*key));
        if let Some(&(_, direction)) = released {
            self.player.try_move(&mut self.board, direction);
        }
    }

    fn draw(&self, graphics: &mut dyn Graphics) {
        let textures = &self.textures;
        let sway = self.player.wobble.cos() * HALF_PI;
        let tilt = self.player.tilt;

        for (cell, tile, has_hat) in self.board.cells() {
            let base = cell_position(cell);
            if let Some(sprite) = textures.tile(tile) {
                graphics.draw(&sprite.with_position(base));
            }
            if has_hat {
                graphics.draw(&textures.shadow.with_position(base + HAT_SHADOW_OFFSET));
                let bob = Vec2::new(sway / 2.0, -tilt / 2.0);
                graphics.draw(&textures.hat.with_position(base + HAT_OFFSET + bob));
            }
        }

        // Pin bobs against the hats.
        let pin_base = cell_position(self.pin) + PIN_OFFSET;
        graphics.draw(&textures.shadow.with_position(pin_base + PIN_SHADOW_OFFSET));
        let bob = Vec2::new(-sway / 2.0, tilt / 2.0);
        graphics.draw(&textures.pin.with_position(pin_base + bob));

        graphics.draw(
            &textures
                .shadow
                .with_position(self.player.position + PLAYER_SHADOW_OFFSET),
        );
        let mut player = textures
            .player
            .with_position(self.player.position + Vec2::new(sway, -tilt));
        player.rotation = self.player.spin;
        graphics.draw(&player);

        if self.pick_required && self.pick_blink.visible {
            graphics.draw(&textures.pick);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingGraphics;
    use pe_core::input::InputState;
    use rand::SeedableRng;

    /// Row 2 floor, goal two cells right of the start, hat beyond it.
    fn corridor() -> Level {
        #[rustfmt::skip]
        let tiles = [
            0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0,
            1, 1, 1, 1, 1, 0, 0,
            0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0,
        ];
        const HATS: &[IVec2] = &[IVec2::new(4, 2)];
        Level {
            tiles,
            hats: HATS,
            start: IVec2::new(0, 2),
            pin: IVec2::new(2, 2),
        }
    }

    /// Start on floor, then an ice strip ending on floor, with a down-mover.
    fn slippery() -> Level {
        #[rustfmt::skip]
        let tiles = [
            1, 5, 5, 1, 9, 0, 0,
            0, 0, 0, 0, 1, 0, 0,
            0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0,
        ];
        const HATS: &[IVec2] = &[IVec2::new(4, 1)];
        Level {
            tiles,
            hats: HATS,
            start: IVec2::new(0, 0),
            pin: IVec2::new(3, 0),
        }
    }

    struct Harness {
        gfx: RecordingGraphics,
        input: InputState,
        settings: Settings,
        rng: StdRng,
        scene: GameplayScene,
        requested: Option<SceneKind>,
        quit: bool,
    }

    impl Harness {
        fn new(level: &Level) -> Self {
            let mut gfx = RecordingGraphics::default();
            let mut rng = StdRng::seed_from_u64(9);
            let scene = GameplayScene::with_level(&mut gfx, level, &mut rng);
            Self {
                gfx,
                input: InputState::new(),
                settings: Settings::default(),
                rng,
                scene,
                requested: None,
                quit: false,
            }
        }

        fn tick(&mut self) {
            self.gfx.draws.clear();
            let mut frame = SceneFrame::new(&mut self.gfx, &self.input, &mut self.settings);
            self.scene.tick(&mut frame, &mut self.rng, 1.0);
            if let Some(kind) = frame.requested() {
                self.requested = Some(kind);
            }
            self.quit |= frame.quit_requested();
            self.input.end_frame();
        }

        fn tap(&mut self, key: Key) {
            self.input.key_down(key);
            self.input.key_up(key);
            self.tick();
        }

        /// Tick until the player is idle for a whole tick.
        fn settle(&mut self) {
            for _ in 0..200 {
                self.tick();
                if !self.scene.player().moving {
                    self.tick();
                    if !self.scene.player().moving {
                        return;
                    }
                }
            }
            panic!("player never settled");
        }

        fn walk(&mut self, key: Key) {
            self.tap(key);
            self.settle();
        }
    }

    #[test]
    fn blocked_move_leaves_player_in_place() {
        let mut h = Harness::new(&corridor());
        h.walk(Key::Left);
        h.walk(Key::Up);
        assert_eq!(h.scene.player().cell, IVec2::new(0, 2));
        assert!(!h.scene.player().moving);
    }

    #[test]
    fn goal_with_hats_left_raises_the_pick_indicator() {
        let mut h = Harness::new(&corridor());
        h.walk(Key::Right);
        h.walk(Key::Right);
        assert_eq!(h.scene.player().cell, IVec2::new(2, 2));
        assert!(h.scene.pick_required());
        assert_eq!(h.requested, None);

        let mut shown = 0;
        for _ in 0..40 {
            h.tick();
            shown += h.gfx.draws_of("pick.png").len();
        }
        assert!(shown > 0 && shown < 40, "indicator should blink, shown {shown}");
    }

    #[test]
    fn last_hat_then_goal_completes_the_level() {
        let mut h = Harness::new(&corridor());
        for _ in 0..4 {
            h.walk(Key::Right);
        }
        assert_eq!(h.scene.board().remaining_hats(), 0);
        assert_eq!(h.requested, None);

        h.walk(Key::Left);
        h.walk(Key::Left);
        assert_eq!(h.requested, Some(SceneKind::Over(OverMode::LevelUp)));
        assert_eq!(h.settings, Settings { level: 2, max: 2 });
    }

    #[test]
    fn ice_keeps_sliding_in_the_last_direction() {
        let mut h = Harness::new(&slippery());
        h.walk(Key::Right);
        // Two ice cells carry the player onto the floor at (3, 0).
        assert_eq!(h.scene.player().cell, IVec2::new(3, 0));
        assert_eq!(h.scene.player().last_direction, Direction::Right);
    }

    #[test]
    fn mover_pushes_in_its_own_direction_and_skips_pickup() {
        let mut h = Harness::new(&slippery());
        h.walk(Key::Right);
        h.walk(Key::Right);
        // (4, 0) pushes down onto (4, 1), where the hat is collected.
        assert_eq!(h.scene.player().cell, IVec2::new(4, 1));
        assert_eq!(h.scene.player().last_direction, Direction::Down);
        assert_eq!(h.scene.board().remaining_hats(), 0);
    }

    #[test]
    fn restart_and_help_hotkeys_request_scenes() {
        let mut h = Harness::new(&corridor());
        h.tap(Key::R);
        assert_eq!(h.requested, Some(SceneKind::Gameplay));
        h.tap(Key::H);
        assert_eq!(h.requested, Some(SceneKind::Over(OverMode::Help)));
        h.tap(Key::E);
        assert!(h.quit);
    }

    #[test]
    fn previous_and_next_respect_progress() {
        let mut h = Harness::new(&corridor());
        h.tap(Key::P);
        h.tap(Key::N);
        assert_eq!(h.requested, None);
        assert_eq!(h.settings.level, 1);

        h.settings = Settings { level: 2, max: 3 };
        h.tap(Key::N);
        assert_eq!(h.settings.level, 3);
        h.tap(Key::N);
        assert_eq!(h.settings.level, 3);
        h.tap(Key::P);
        assert_eq!(h.settings.level, 2);
        assert_eq!(h.requested, Some(SceneKind::Gameplay));
    }

    #[test]
    fn complete_level_advances_then_wraps_after_the_last() {
        let mut settings = Settings { level: 3, max: 3 };
        assert_eq!(complete_level(&mut settings), OverMode::LevelUp);
        assert_eq!(settings, Settings { level: 4, max: 4 });

        let mut settings = Settings { level: 2, max: 5 };
        complete_level(&mut settings);
        assert_eq!(settings, Settings { level: 3, max: 5 });

        let mut settings = Settings { level: 7, max: 7 };
        assert_eq!(complete_level(&mut settings), OverMode::GameOver);
        assert_eq!(settings, Settings { level: 1, max: 7 });
    }

    #[test]
    fn draw_order_is_board_then_pin_then_player() {
        let mut h = Harness::new(&corridor());
        h.tick();
        let player_id = h.gfx.id_of("player.png");
        let pin_id = h.gfx.id_of("pin.png");
        let ids: Vec<_> = h.gfx.draws.iter().map(|s| Some(s.id)).collect();

        // 5 floor tiles, hat + shadow, pin + shadow, player + shadow.
        assert_eq!(ids.len(), 11);
        assert_eq!(ids[ids.len() - 1], player_id);
        assert_eq!(ids[ids.len() - 3], pin_id);
    }

    #[test]
    fn terminate_unloads_everything_it_loaded() {
        let mut h = Harness::new(&corridor());
        assert_eq!(h.gfx.loaded.len(), 15);
        h.scene.terminate(&mut h.gfx);
        assert_eq!(h.gfx.live_textures(), 0);
    }
}
