//! One hat in the top-left corner.

use std::path::Path;

use pe_core::sprite::Sprite;
use pe_runtime::{Context, Game};

#[derive(Default)]
struct HatDemo {
    hat: Sprite,
}

impl Game for HatDemo {
    fn init(&mut self, ctx: &mut Context) {
        self.hat = ctx.graphics.load_texture(Path::new("res/hat.png"));
    }

    fn tick(&mut self, ctx: &mut Context, _delta: f32) {
        ctx.graphics.draw(&self.hat);
    }

    fn terminate(&mut self, ctx: &mut Context) {
        ctx.graphics.unload_texture(&self.hat);
    }
}

fn main() {
    let config = pe_demos::demo_config("Hat Demo");
    pe_platform::logging::init(&config);

    if let Err(err) = pe_runtime::run(config, HatDemo::default()) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
