//! GPU textures decoded from image files.
//!
//! Every texture is an RGBA8 2D image sampled with clamp-to-edge addressing.
//! The filter is chosen once per engine: nearest on a single level for pixel
//! art, otherwise trilinear over a mip chain built on the CPU at load time.

use image::imageops::{self, FilterType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest,
    LinearMipmap,
}

impl TextureFilter {
    pub fn for_pixel_art(pixel_art: bool) -> Self {
        if pixel_art {
            Self::Nearest
        } else {
            Self::LinearMipmap
        }
    }

    fn wgpu_mode(self) -> wgpu::FilterMode {
        match self {
            Self::Nearest => wgpu::FilterMode::Nearest,
            Self::LinearMipmap => wgpu::FilterMode::Linear,
        }
    }

    /// `floor(log2(max(w, h))) + 1` levels when mipmapped, one otherwise.
    pub fn mip_level_count(self, width: u32, height: u32) -> u32 {
        match self {
            Self::Nearest => 1,
            Self::LinearMipmap => u32::BITS - width.max(height).max(1).leading_zeros(),
        }
    }
}

/// Decoded RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub fn decode_rgba(bytes: &[u8]) -> Result<DecodedImage, String> {
    let image = image::load_from_memory(bytes).map_err(|e| format!("Failed to decode image: {e}"))?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(format!("Decoded image has zero size ({width}x{height})"));
    }
    Ok(DecodedImage {
        rgba: rgba.into_raw(),
        width,
        height,
    })
}

/// Level 0 followed by successively halved copies, down to 1x1 on the
/// longer side, `levels` entries in all.
pub fn mip_chain(base: &DecodedImage, levels: u32) -> Vec<DecodedImage> {
    let mut chain = vec![base.clone()];
    let Some(mut previous) =
        image::RgbaImage::from_raw(base.width, base.height, base.rgba.clone())
    else {
        log::warn!(
            "Pixel buffer does not match {}x{}, skipping mipmaps",
            base.width,
            base.height
        );
        return chain;
    };
    for _ in 1..levels {
        let width = (previous.width() / 2).max(1);
        let height = (previous.height() / 2).max(1);
        let next = imageops::resize(&previous, width, height, FilterType::Triangle);
        chain.push(DecodedImage {
            rgba: next.as_raw().clone(),
            width,
            height,
        });
        previous = next;
    }
    chain
}

pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub size: (u32, u32),
}

impl Texture {
    pub fn from_bytes(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: &[u8],
        label: &str,
        filter: TextureFilter,
    ) -> Result<Self, String> {
        let decoded = decode_rgba(bytes).map_err(|e| format!("{label}: {e}"))?;
        Ok(Self::from_image(device, queue, &decoded, label, filter))
    }

    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &DecodedImage,
        label: &str,
        filter: TextureFilter,
    ) -> Self {
        let levels = mip_chain(image, filter.mip_level_count(image.width, image.height));
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: image.width,
                height: image.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: levels.len() as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (mip_level, level) in (0u32..).zip(&levels) {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                &level.rgba,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * level.width),
                    rows_per_image: Some(level.height),
                },
                wgpu::Extent3d {
                    width: level.width,
                    height: level.height,
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: filter.wgpu_mode(),
            min_filter: filter.wgpu_mode(),
            mipmap_filter: filter.wgpu_mode(),
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
            size: (image.width, image.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(width, height, image::Rgba(pixel));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn decode_png_to_rgba() {
        let bytes = encode_png(3, 2, [10, 20, 30, 255]);
        let decoded = decode_rgba(&bytes).expect("png should decode");
        assert_eq!((decoded.width, decoded.height), (3, 2));
        assert_eq!(decoded.rgba.len(), 3 * 2 * 4);
        assert_eq!(&decoded.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = decode_rgba(b"definitely not a png").expect_err("garbage should fail");
        assert!(err.contains("Failed to decode image"));
    }

    #[test]
    fn pixel_art_flag_selects_filter() {
        assert_eq!(TextureFilter::for_pixel_art(true), TextureFilter::Nearest);
        assert_eq!(TextureFilter::for_pixel_art(false), TextureFilter::LinearMipmap);
    }

    #[test]
    fn mipmapped_textures_get_a_full_chain() {
        let filter = TextureFilter::LinearMipmap;
        assert_eq!(filter.mip_level_count(1, 1), 1);
        assert_eq!(filter.mip_level_count(256, 64), 9);
        assert_eq!(filter.mip_level_count(200, 200), 8);
        assert_eq!(filter.mip_level_count(5, 3), 3);
        for (w, h) in [(1u32, 1u32), (3, 7), (100, 50), (1024, 1), (1000, 999)] {
            let expected = (w.max(h) as f64).log2().floor() as u32 + 1;
            assert_eq!(filter.mip_level_count(w, h), expected, "{w}x{h}");
        }
    }

    #[test]
    fn pixel_art_textures_stay_single_level() {
        assert_eq!(TextureFilter::Nearest.mip_level_count(256, 64), 1);
    }

    #[test]
    fn mip_chain_halves_down_to_one_pixel() {
        let base = decode_rgba(&encode_png(5, 3, [200, 100, 50, 255])).expect("png should decode");
        let chain = mip_chain(&base, TextureFilter::LinearMipmap.mip_level_count(5, 3));

        let sizes: Vec<_> = chain.iter().map(|l| (l.width, l.height)).collect();
        assert_eq!(sizes, vec![(5, 3), (2, 1), (1, 1)]);
        for level in &chain {
            assert_eq!(level.rgba.len(), (level.width * level.height * 4) as usize);
            // A flat colour stays flat at every level.
            for (got, want) in level.rgba[..4].iter().zip([200u8, 100, 50, 255]) {
                assert!(got.abs_diff(want) <= 1, "level {}x{}: {got} vs {want}", level.width, level.height);
            }
        }
    }

    #[test]
    fn mismatched_buffer_keeps_only_the_base_level() {
        let base = DecodedImage {
            rgba: vec![0; 3],
            width: 4,
            height: 4,
        };
        assert_eq!(mip_chain(&base, 3).len(), 1);
    }
}
