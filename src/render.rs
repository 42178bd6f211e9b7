use image::{ImageResult, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::field::HeightField;

/// Color maps available for rasterizing a height field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    /// Reversed blue ramp: deep troughs dark, crests near white
    BluesReversed,
    Viridis,
}

impl FromStr for Colormap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blues" | "blues_r" => Ok(Colormap::BluesReversed),
            "viridis" => Ok(Colormap::Viridis),
            _ => Err(format!("unknown colormap (expected blues or viridis): {}", s)),
        }
    }
}

// Anchor colors sampled at even spacing; values in between are
// linearly interpolated
const BLUES_REVERSED: [[u8; 3]; 9] = [
    [8, 48, 107],
    [8, 81, 156],
    [33, 113, 181],
    [66, 146, 198],
    [107, 174, 214],
    [158, 202, 225],
    [198, 219, 239],
    [222, 235, 247],
    [247, 251, 255],
];

const VIRIDIS: [[u8; 3]; 10] = [
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [109, 205, 89],
    [180, 222, 44],
    [253, 231, 37],
];

impl Colormap {
    /// Color for a normalized value t in [0, 1]
    pub fn sample(&self, t: f64) -> Rgb<u8> {
        let anchors: &[[u8; 3]] = match self {
            Colormap::BluesReversed => &BLUES_REVERSED,
            Colormap::Viridis => &VIRIDIS,
        };
        let t = t.clamp(0.0, 1.0);
        let pos = t * (anchors.len() - 1) as f64;
        let lo = pos.floor() as usize;
        let hi = (lo + 1).min(anchors.len() - 1);
        let frac = pos - lo as f64;

        let mut rgb = [0u8; 3];
        for c in 0..3 {
            let a = anchors[lo][c] as f64;
            let b = anchors[hi][c] as f64;
            rgb[c] = (a + (b - a) * frac).round() as u8;
        }
        Rgb(rgb)
    }
}

/// Clamp a value to [lower, upper] and normalize to [0, 1]
pub fn transfer(value: f64, lower: f64, upper: f64) -> f64 {
    let v = value.min(upper).max(lower);
    (v - lower) / (upper - lower)
}

/// How a height field is turned into pixels
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub colormap: Colormap,
    pub vmin: f64,
    pub vmax: f64,
    /// Number of discrete color bands; fewer than 2 disables banding
    pub levels: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            colormap: Colormap::BluesReversed,
            vmin: -3.0,
            vmax: 3.5,
            levels: 120,
        }
    }
}

/// Rasterize a height field to an RGB image, one pixel per grid point.
///
/// The color scale is fixed by `vmin`/`vmax` so every frame of an animation
/// shares the same mapping. Row 0 of the field lands at the bottom of the
/// image.
pub fn render_height_field(field: &HeightField, options: &RenderOptions) -> RgbImage {
    let n = field.resolution;
    let mut img = RgbImage::new(n as u32, n as u32);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let value = field.values[n - 1 - y as usize][x as usize];
        let mut t = transfer(value, options.vmin, options.vmax);
        if options.levels >= 2 {
            let bands = options.levels as f64;
            t = (t * bands).floor().min(bands - 1.0) / (bands - 1.0);
        }
        *pixel = options.colormap.sample(t);
    }

    img
}

/// Output path for a frame, zero-padded to three digits
pub fn frame_path(dir: &Path, frame: usize) -> PathBuf {
    dir.join(format!("frame_{:03}.png", frame))
}

/// Render a height field and write it as a PNG into `dir`
pub fn save_frame(
    field: &HeightField,
    options: &RenderOptions,
    dir: &Path,
    frame: usize,
) -> ImageResult<PathBuf> {
    let path = frame_path(dir, frame);
    render_height_field(field, options).save(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_field(resolution: usize, value: f64) -> HeightField {
        HeightField {
            resolution,
            values: vec![vec![value; resolution]; resolution],
        }
    }

    #[test]
    fn colormap_parses_known_names() {
        assert_eq!("blues".parse::<Colormap>(), Ok(Colormap::BluesReversed));
        assert_eq!("Blues_r".parse::<Colormap>(), Ok(Colormap::BluesReversed));
        assert_eq!("viridis".parse::<Colormap>(), Ok(Colormap::Viridis));
        assert!("magma".parse::<Colormap>().is_err());
    }

    #[test]
    fn transfer_clamps_and_normalizes() {
        assert_eq!(transfer(-10.0, -3.0, 3.5), 0.0);
        assert_eq!(transfer(10.0, -3.0, 3.5), 1.0);
        assert!((transfer(0.25, -3.0, 3.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn colormap_endpoints_hit_anchor_colors() {
        assert_eq!(Colormap::BluesReversed.sample(0.0), Rgb([8, 48, 107]));
        assert_eq!(Colormap::BluesReversed.sample(1.0), Rgb([247, 251, 255]));
        assert_eq!(Colormap::Viridis.sample(0.0), Rgb([68, 1, 84]));
        assert_eq!(Colormap::Viridis.sample(1.0), Rgb([253, 231, 37]));
    }

    #[test]
    fn render_flips_rows_vertically() {
        let options = RenderOptions {
            levels: 0,
            ..RenderOptions::default()
        };
        let field = HeightField {
            resolution: 2,
            values: vec![
                vec![options.vmin, options.vmin],
                vec![options.vmax, options.vmax],
            ],
        };
        let img = render_height_field(&field, &options);
        assert_eq!(img.dimensions(), (2, 2));
        // Field row 1 (vmax) is the top image row
        assert_eq!(*img.get_pixel(0, 0), Colormap::BluesReversed.sample(1.0));
        assert_eq!(*img.get_pixel(0, 1), Colormap::BluesReversed.sample(0.0));
    }

    #[test]
    fn render_is_uniform_for_constant_field() {
        let field = uniform_field(4, 0.0);
        let img = render_height_field(&field, &RenderOptions::default());
        let first = *img.get_pixel(0, 0);
        assert!(img.pixels().all(|p| *p == first));
    }

    #[test]
    fn frame_names_are_zero_padded() {
        let dir = Path::new("figs");
        assert_eq!(frame_path(dir, 0), dir.join("frame_000.png"));
        assert_eq!(frame_path(dir, 42), dir.join("frame_042.png"));
        assert_eq!(frame_path(dir, 4999), dir.join("frame_4999.png"));
    }

    #[test]
    fn save_frame_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let field = uniform_field(3, 1.0);
        let path = save_frame(&field, &RenderOptions::default(), dir.path(), 7).unwrap();
        assert_eq!(path.file_name().unwrap(), "frame_007.png");
        assert!(path.exists());
    }
}
