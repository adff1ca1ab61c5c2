//! Asset loading with guaranteed fallbacks.
//!
//! Every loader resolves a logical relative path against the deployment
//! layouts the game ships in, then degrades gracefully on failure: images
//! fall back to a solid-color surface so gameplay continues, sounds fall
//! back to silence. A load failure is reported once on stderr and never
//! interrupts play.

use sdl2::image::LoadTexture;
use sdl2::mixer::{Chunk, MAX_VOLUME, Music};
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::WindowContext;
use std::env;
use std::path::{Path, PathBuf};

const HALF_VOLUME: i32 = MAX_VOLUME / 2;

/// Resolves a logical relative path against the supported layouts:
/// an `ASSET_ROOT` override (embedded/hosted builds), the directory next
/// to the executable (bundled builds), and finally the crate manifest
/// directory (local development).
pub fn resolve(relative: &str) -> PathBuf {
    let mut candidates: Vec<PathBuf> = Vec::new();

    if let Ok(root) = env::var("ASSET_ROOT") {
        candidates.push(PathBuf::from(root).join(relative));
    }
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join(relative));
        }
    }
    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(relative));

    for candidate in &candidates {
        if candidate.exists() {
            return candidate.clone();
        }
    }
    // Nothing exists; hand back the development path so the load error
    // names a sensible location.
    candidates
        .pop()
        .unwrap_or_else(|| PathBuf::from(relative))
}

/// Loads a texture, or synthesizes a solid-color stand-in of the expected
/// size so the game keeps rendering something sensible.
pub fn load_texture_or_fallback<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    relative: &str,
    size: (u32, u32),
    fallback_color: Color,
) -> Result<Texture<'a>, String> {
    let path = resolve(relative);
    match texture_creator.load_texture(&path) {
        Ok(texture) => Ok(texture),
        Err(e) => {
            eprintln!("Failed to load image {}: {}", path.display(), e);
            solid_texture(texture_creator, size, fallback_color)
        }
    }
}

/// Creates a single-color texture, used as the image fallback.
fn solid_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    (width, height): (u32, u32),
    color: Color,
) -> Result<Texture<'a>, String> {
    let mut surface = Surface::new(width, height, PixelFormatEnum::RGBA32)?;
    surface.fill_rect(None, color)?;
    surface
        .as_texture(texture_creator)
        .map_err(|e| e.to_string())
}

/// Loads a one-shot sound at half volume; `None` means stay silent.
pub fn load_chunk_or_silent(relative: &str) -> Option<Chunk> {
    let path = resolve(relative);
    match Chunk::from_file(&path) {
        Ok(mut chunk) => {
            chunk.set_volume(HALF_VOLUME);
            Some(chunk)
        }
        Err(e) => {
            eprintln!("Failed to load sound {}: {}", path.display(), e);
            None
        }
    }
}

/// Loads a music track; `None` means stay silent.
pub fn load_music_or_silent(relative: &str) -> Option<Music<'static>> {
    let path = resolve(relative);
    match Music::from_file(&path) {
        Ok(music) => Some(music),
        Err(e) => {
            eprintln!("Failed to load music {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_falls_back_to_manifest_path() {
        let resolved = resolve("environment/definitely/missing.png");
        assert!(resolved.ends_with("environment/definitely/missing.png"));
    }

    #[test]
    fn resolve_finds_existing_manifest_file() {
        // Cargo.toml always exists in the manifest directory
        let resolved = resolve("Cargo.toml");
        assert!(resolved.exists());
    }
}
