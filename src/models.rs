use image::Rgb;
use std::path::PathBuf;

/// Office blue, `#0078D4`.
pub const BACKGROUND_COLOR: Rgb<u8> = Rgb([0x00, 0x78, 0xD4]);
pub const BODY_COLOR: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
/// Light gray, `#E0E0E0`.
pub const FLAP_COLOR: Rgb<u8> = Rgb([0xE0, 0xE0, 0xE0]);

/// One icon to generate: a square pixel size and where to write it.
#[derive(Clone, Debug, PartialEq)]
pub struct IconTarget {
    pub size: u32,
    pub path: PathBuf,
}

impl IconTarget {
    pub fn new(size: u32, path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            path: path.into(),
        }
    }
}

/// Integer layout of the envelope on a `size x size` canvas.
///
/// The body spans `x1..=x2` by `y1..=y2` (both ends inclusive) and is centered
/// vertically. The flap is the triangle `(x1, y1)`, `apex`, `(x2, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvelopeGeometry {
    pub size: u32,
    pub margin: u32,
    pub rect_width: u32,
    pub rect_height: u32,
}

impl EnvelopeGeometry {
    pub fn for_size(size: u32) -> Self {
        let margin = size / 6;
        let rect_width = size - 2 * margin;
        let rect_height = (u64::from(rect_width) * 2 / 3) as u32;
        Self {
            size,
            margin,
            rect_width,
            rect_height,
        }
    }

    pub fn x1(&self) -> u32 {
        self.margin
    }

    pub fn y1(&self) -> u32 {
        (self.size - self.rect_height) / 2
    }

    pub fn x2(&self) -> u32 {
        self.x1() + self.rect_width
    }

    pub fn y2(&self) -> u32 {
        self.y1() + self.rect_height
    }

    pub fn flap_height(&self) -> u32 {
        self.rect_height / 3
    }

    pub fn apex(&self) -> (u32, u32) {
        (self.size / 2, self.y1() + self.flap_height())
    }

    pub fn in_body(&self, x: u32, y: u32) -> bool {
        (self.x1()..=self.x2()).contains(&x) && (self.y1()..=self.y2()).contains(&y)
    }

    /// Inclusive `(left, right)` columns the flap covers on row `y`, if any.
    ///
    /// Each edge crossing is rounded to the nearest column, ties widening outward,
    /// so the outline pixels are part of the flap.
    pub fn flap_span(&self, y: u32) -> Option<(u32, u32)> {
        let top = self.y1();
        let height = self.flap_height();
        if !(top..=top + height).contains(&y) {
            return None;
        }
        if height == 0 {
            return Some((self.x1(), self.x2()));
        }

        let (apex_x, _) = self.apex();
        let depth = u64::from(y - top);
        let inset = |run: u32| round_half_down(u64::from(run) * depth, u64::from(height)) as u32;

        Some((
            self.x1() + inset(apex_x - self.x1()),
            self.x2() - inset(self.x2() - apex_x),
        ))
    }

    pub fn in_flap(&self, x: u32, y: u32) -> bool {
        self.flap_span(y)
            .is_some_and(|(left, right)| (left..=right).contains(&x))
    }
}

/// `num / den` rounded to the nearest integer, exact halves rounding down.
fn round_half_down(num: u64, den: u64) -> u64 {
    (2 * num + den - 1) / (2 * den)
}
