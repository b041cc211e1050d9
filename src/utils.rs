use chrono::Local;
use image::{ImageFormat, RgbImage};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Prefixes a message with the local time, e.g. `[2024-05-01 12:00:00] Created ...`.
pub fn timestamped(message: &str) -> String {
    format!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message)
}

/// Calculates the SHA256 hash of a canvas' raw RGB pixels.
pub fn pixel_digest(image: &RgbImage) -> String {
    let mut hasher = Sha256::new();
    hasher.update(image.as_raw());
    format!("{:x}", hasher.finalize())
}

/// Encodes the canvas as PNG at `path`, replacing any existing file.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn digest_is_hex_sha256() {
        let image = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));
        let digest = pixel_digest(&image);
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn digest_follows_pixel_content() {
        let a = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));
        let mut b = a.clone();
        assert_eq!(pixel_digest(&a), pixel_digest(&b));

        b.put_pixel(3, 3, Rgb([1, 2, 4]));
        assert_ne!(pixel_digest(&a), pixel_digest(&b));
    }

    #[test]
    fn timestamped_line_format() {
        let line = timestamped("Created assets/icon-64.png");
        assert!(line.starts_with('['));
        // "[YYYY-MM-DD HH:MM:SS] " is 22 bytes.
        assert_eq!(&line[20..22], "] ");
        assert!(line.ends_with("Created assets/icon-64.png"));
    }

    #[test]
    fn save_png_writes_decodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swatch.png");
        let image = RgbImage::from_pixel(3, 2, Rgb([9, 8, 7]));

        save_png(&image, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded, image);
    }
}
