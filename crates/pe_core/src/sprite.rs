use glam::Vec2;

/// Handle to a GPU texture owned by the renderer. Zero means "no texture".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

impl TextureId {
    pub const NONE: TextureId = TextureId(0);

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// Pixel rectangle inside a texture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A GPU texture plus everything needed to place it on screen.
///
/// Copying a `Sprite` copies the handle, not the texture. Only the renderer
/// that produced the handle may unload it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
    pub position: Vec2,
    /// Offset from the top-left corner that scale and rotation pivot around.
    pub pivot: Vec2,
    pub source: Rect,
    pub alpha: u8,
    pub shadow: u8,
    pub scale: f32,
    /// Degrees, clockwise on screen.
    pub rotation: f32,
    pub visible: bool,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl Sprite {
    /// A sprite showing the whole `width` x `height` texture at the origin.
    pub fn new(id: TextureId, width: u32, height: u32) -> Self {
        Self {
            id,
            width,
            height,
            position: Vec2::ZERO,
            pivot: Vec2::ZERO,
            source: Rect::new(0, 0, width, height),
            alpha: 255,
            shadow: 0,
            scale: 1.0,
            rotation: 0.0,
            visible: true,
            flip_x: false,
            flip_y: false,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// UV rectangle of `source` as `[u0, v0, u1, v1]`.
    pub fn uv_rect(&self) -> [f32; 4] {
        if self.width == 0 || self.height == 0 {
            return [0.0, 0.0, 0.0, 0.0];
        }
        let w = self.width as f32;
        let h = self.height as f32;
        [
            self.source.x as f32 / w,
            self.source.y as f32 / h,
            (self.source.x + self.source.width) as f32 / w,
            (self.source.y + self.source.height) as f32 / h,
        ]
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new(TextureId::NONE, 0, 0)
    }
}
