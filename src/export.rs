//! Writing finished planet textures to disk.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};

pub const DEFAULT_OUTPUT_DIR: &str = "./resources/img";

/// `<dir>/<name>.jpg`
pub fn output_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.jpg", name))
}

/// Encode `image` as JPEG under `dir`, creating the directory if needed.
///
/// Returns the absolute path of the written file.
pub fn save_planet_image(image: &RgbImage, dir: &Path, name: &str) -> Result<PathBuf, image::ImageError> {
    std::fs::create_dir_all(dir)?;
    let path = output_path(dir, name);
    image.save_with_format(&path, ImageFormat::Jpeg)?;
    Ok(std::fs::canonicalize(&path)?)
}
