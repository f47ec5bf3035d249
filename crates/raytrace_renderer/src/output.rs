//! Writing rendered images to disk.
//!
//! PNG goes through the `image` crate; PPM is written by hand as ASCII P3.

use crate::{color_to_rgba, color_to_rgba_linear, ImageBuffer};
use image::{ColorType, ImageFormat};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Save an image, picking the encoder from the file extension.
///
/// `gamma` applies gamma-2 correction while quantizing to 8 bits.
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P, gamma: bool) -> OutputResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "png" => save_png(image, path, gamma)?,
        "ppm" => save_ppm(image, path, gamma)?,
        other => return Err(OutputError::UnsupportedFormat(other.to_string())),
    }

    info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

/// Save as 8-bit RGBA PNG.
pub fn save_png<P: AsRef<Path>>(image: &ImageBuffer, path: P, gamma: bool) -> OutputResult<()> {
    let bytes = image.to_rgba(gamma);
    image::save_buffer_with_format(
        path,
        &bytes,
        image.width,
        image.height,
        ColorType::Rgba8,
        ImageFormat::Png,
    )?;
    Ok(())
}

/// Save as plain-text PPM (P3).
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P, gamma: bool) -> OutputResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(image, &mut writer, gamma)?;
    writer.flush()?;
    Ok(())
}

/// Write PPM (P3) text to any writer.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W, gamma: bool) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        let rgba = if gamma {
            color_to_rgba(*color)
        } else {
            color_to_rgba_linear(*color)
        };
        writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gradient, Color};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("raytrace_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_write_ppm() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::ONE);
        image.set(1, 0, Color::new(0.25, 0.0, 0.0));

        let mut out = Vec::new();
        write_ppm(&image, &mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "P3\n2 1\n255\n255 255 255\n127 0 0\n");
    }

    #[test]
    fn test_save_png_round_trip() {
        let image = gradient(20, 10);
        let path = temp_path("gradient.png");

        save_image(&image, &path, false).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.dimensions(), (20, 10));
        assert_eq!(loaded.get_pixel(10, 5).0, [127, 127, 51, 255]);
    }

    #[test]
    fn test_save_ppm_file() {
        let image = ImageBuffer::new(4, 3);
        let path = temp_path("black.ppm");

        save_image(&image, &path, true).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(text.starts_with("P3\n4 3\n255\n"));
        assert_eq!(text.lines().count(), 3 + 12);
    }

    #[test]
    fn test_png_write_failure_is_image_error() {
        let image = ImageBuffer::new(2, 2);
        let path = temp_path("missing_dir").join("out.png");

        let err = save_image(&image, &path, true).unwrap_err();
        assert!(matches!(err, OutputError::Image(_)));
    }

    #[test]
    fn test_unsupported_format() {
        let image = ImageBuffer::new(1, 1);
        let err = save_image(&image, temp_path("out.exr"), true).unwrap_err();

        assert!(matches!(err, OutputError::UnsupportedFormat(ref ext) if ext == "exr"));
    }
}
