use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// Decodes one body texture from the working directory. A missing or
/// undecodable file is not fatal: the caller renders that body as a
/// plain gray sphere instead.
pub fn load_body_texture(path: &str) -> Option<Image> {
    match image::open(path) {
        Ok(decoded) => {
            let rgba = decoded.to_rgba8();
            let (width, height) = rgba.dimensions();
            info!("Loaded texture {} ({}x{})", path, width, height);
            Some(Image::new(
                Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                TextureDimension::D2,
                rgba.into_raw(),
                TextureFormat::Rgba8UnormSrgb,
                RenderAssetUsages::RENDER_WORLD,
            ))
        }
        Err(err) => {
            warn!("Failed to load texture {}: {}", path, err);
            None
        }
    }
}
