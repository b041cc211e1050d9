use crate::models::{BACKGROUND_COLOR, BODY_COLOR, EnvelopeGeometry, FLAP_COLOR};
use crate::utils::{pixel_digest, save_png, timestamped};
use image::RgbImage;
use std::path::Path;

/// Paints the envelope icon into a fresh `size x size` canvas.
///
/// Layers, bottom to top: background fill, envelope body, flap.
pub fn draw_icon(size: u32) -> Result<RgbImage, Box<dyn std::error::Error>> {
    if size == 0 {
        return Err("icon size must be positive".into());
    }

    let geometry = EnvelopeGeometry::for_size(size);
    let mut image = RgbImage::new(size, size);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        *pixel = if geometry.in_flap(x, y) {
            FLAP_COLOR
        } else if geometry.in_body(x, y) {
            BODY_COLOR
        } else {
            BACKGROUND_COLOR
        };
    }
    Ok(image)
}

/// Draws the icon at `size` and writes it to `output_path` as PNG.
///
/// The parent directory must already exist. Prints one confirmation line on success.
pub fn render_icon(size: u32, output_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let image = draw_icon(size)?;
    save_png(&image, output_path)?;

    println!(
        "{}",
        timestamped(&format!(
            "Created {} ({}x{}, sha256 {})",
            output_path.display(),
            size,
            size,
            pixel_digest(&image)
        ))
    );
    Ok(())
}
