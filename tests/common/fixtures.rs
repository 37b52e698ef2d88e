//! Shared color fixtures.

use colorwheel::Rgb;

/// Named colors whose RGB -> HSL/HSV -> RGB round trip stays within one
/// unit per channel.
pub const REPRESENTATIVE: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("lime", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("silver", Rgb::new(192, 192, 192)),
    ("gray", Rgb::new(128, 128, 128)),
    ("maroon", Rgb::new(128, 0, 0)),
    ("orange", Rgb::new(255, 128, 0)),
    ("turquoise", Rgb::new(64, 224, 208)),
    ("indigo", Rgb::new(75, 0, 130)),
    ("violet", Rgb::new(238, 130, 238)),
    ("steel", Rgb::new(51, 117, 187)),
    ("rust", Rgb::new(210, 117, 42)),
];

/// Every `step`-th value on each channel, always including 255.
pub fn rgb_grid(step: usize) -> Vec<Rgb> {
    let mut levels: Vec<u8> = (0..=255u8).step_by(step).collect();
    if levels.last() != Some(&255) {
        levels.push(255);
    }

    let mut grid = Vec::with_capacity(levels.len().pow(3));
    for &r in &levels {
        for &g in &levels {
            for &b in &levels {
                grid.push(Rgb::new(r, g, b));
            }
        }
    }
    grid
}
