//! A 4x3 grid of tiles with a hat on top.

use std::path::Path;

use pe_core::sprite::Sprite;
use pe_core::Vec2;
use pe_runtime::{Context, Game};

const COLUMNS: u32 = 4;
const ROWS: u32 = 3;
const MARGIN: f32 = 20.0;
const GAP: f32 = 10.0;
const HAT_POSITION: Vec2 = Vec2::new(35.0, 60.0);

#[derive(Default)]
struct GridDemo {
    hat: Sprite,
    tile: Sprite,
    cells: Vec<Vec2>,
}

impl Game for GridDemo {
    fn init(&mut self, ctx: &mut Context) {
        self.hat = ctx
            .graphics
            .load_texture(Path::new("res/hat.png"))
            .with_position(HAT_POSITION);
        self.tile = ctx.graphics.load_texture(Path::new("res/tile.png"));
        self.cells = pe_demos::grid_positions(&self.tile, COLUMNS, ROWS, MARGIN, GAP);
    }

    fn tick(&mut self, ctx: &mut Context, _delta: f32) {
        for &cell in &self.cells {
            ctx.graphics.draw(&self.tile.with_position(cell));
        }
        ctx.graphics.draw(&self.hat);
    }

    fn terminate(&mut self, ctx: &mut Context) {
        ctx.graphics.unload_texture(&self.tile);
        ctx.graphics.unload_texture(&self.hat);
    }
}

fn main() {
    let config = pe_demos::demo_config("Grid Demo");
    pe_platform::logging::init(&config);

    if let Err(err) = pe_runtime::run(config, GridDemo::default()) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
