pub mod gpu_context;
pub mod renderer;
pub mod sprite_pipeline;
pub mod texture;
pub mod vertex;

pub use gpu_context::GpuContext;
pub use renderer::Renderer;
pub use sprite_pipeline::SpritePipeline;
pub use texture::{Texture, TextureFilter};
pub use vertex::SpriteVertex;
