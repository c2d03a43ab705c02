//! Avatar references and image path selection.
//!
//! The avatar pool holds exactly [`AVATAR_POOL_SIZE`] images, numbered from
//! 1. A record at position `i` owns image `i + 1`; anything outside the pool
//! falls back to image 1, so the mapping never fails.

use serde::Serialize;
use std::fmt;

pub const AVATAR_POOL_SIZE: usize = 60;
pub const FALLBACK_AVATAR: usize = 1;

const AVATAR_DIR: &str = "/assets/images/avatar/";
const DEFAULT_AVATAR_FILE: &str = "default-avatar.jpg";
const WEBP_SOURCE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// A reference to one image of the avatar pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarRef {
    /// 1-based image number
    pub number: usize,
    /// Path the presentation layer resolves
    pub path: String,
}

impl AvatarRef {
    pub fn new(number: usize, asset_base: &str) -> Self {
        Self {
            number,
            path: format!("{}{}avatar-{}.jpg", asset_base, AVATAR_DIR, number),
        }
    }
}

impl fmt::Display for AvatarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Image number for a record position, with the fallback applied
pub fn avatar_number(index: usize) -> usize {
    if index < AVATAR_POOL_SIZE {
        index + 1
    } else {
        FALLBACK_AVATAR
    }
}

pub fn avatar_for_index(index: usize, asset_base: &str) -> AvatarRef {
    AvatarRef::new(avatar_number(index), asset_base)
}

/// What the rendering host can decode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageCapabilities {
    pub webp: bool,
}

/// Picks the image path to load for `path`.
///
/// Avatars are always served as-is; other raster images switch to `.webp`
/// when the host supports it.
pub fn optimized_image_path(path: &str, caps: ImageCapabilities, asset_base: &str) -> String {
    if path.is_empty() {
        return format!("{}{}{}", asset_base, AVATAR_DIR, DEFAULT_AVATAR_FILE);
    }

    if !asset_base.is_empty() && path.contains(asset_base) {
        return path.to_string();
    }

    if path.contains("/avatar/") || path.contains("avatar/") {
        return path.to_string();
    }

    let (stem, extension) = match path.rfind('.') {
        Some(dot) => (&path[..dot], &path[dot + 1..]),
        None => (path, ""),
    };

    if caps.webp
        && WEBP_SOURCE_EXTENSIONS
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    {
        return format!("{}.webp", stem);
    }

    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_mapping_is_total() {
        assert_eq!(avatar_number(0), 1);
        assert_eq!(avatar_number(59), 60);
        assert_eq!(avatar_number(60), FALLBACK_AVATAR);
        assert_eq!(avatar_number(usize::MAX), FALLBACK_AVATAR);
    }

    #[test]
    fn test_avatar_path() {
        let avatar = avatar_for_index(6, "/eeeflix");
        assert_eq!(avatar.number, 7);
        assert_eq!(avatar.path, "/eeeflix/assets/images/avatar/avatar-7.jpg");
        assert_eq!(avatar.to_string(), avatar.path);
    }

    #[test]
    fn test_optimized_path_defaults_when_empty() {
        let path = optimized_image_path("", ImageCapabilities::default(), "");
        assert_eq!(path, "/assets/images/avatar/default-avatar.jpg");
    }

    #[test]
    fn test_optimized_path_keeps_avatars() {
        let caps = ImageCapabilities { webp: true };
        let path = "/assets/images/avatar/avatar-3.jpg";
        assert_eq!(optimized_image_path(path, caps, ""), path);
    }

    #[test]
    fn test_optimized_path_swaps_to_webp() {
        let caps = ImageCapabilities { webp: true };
        assert_eq!(
            optimized_image_path("images/hero.JPG", caps, ""),
            "images/hero.webp"
        );
        assert_eq!(
            optimized_image_path("images/logo.png", caps, ""),
            "images/logo.webp"
        );
        assert_eq!(optimized_image_path("images/clip.gif", caps, ""), "images/clip.gif");
        assert_eq!(optimized_image_path("images/noext", caps, ""), "images/noext");
    }

    #[test]
    fn test_optimized_path_without_webp() {
        let caps = ImageCapabilities { webp: false };
        assert_eq!(
            optimized_image_path("images/hero.jpg", caps, ""),
            "images/hero.jpg"
        );
    }

    #[test]
    fn test_optimized_path_already_under_base() {
        let caps = ImageCapabilities { webp: true };
        assert_eq!(
            optimized_image_path("/site/images/hero.jpg", caps, "/site"),
            "/site/images/hero.jpg"
        );
    }
}
