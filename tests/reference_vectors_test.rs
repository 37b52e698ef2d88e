//! Regression vectors for the four conversion functions.

mod common;

use colorwheel::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv, Hsl, Hsv, Rgb};
use pretty_assertions::assert_eq;

#[test]
fn test_rgb_to_hsl_vectors() {
    let cases = [
        ((0, 0, 0), (0.0, 0.0, 0.0)),
        ((255, 255, 255), (0.0, 0.0, 100.0)),
        ((255, 0, 0), (0.0, 100.0, 50.0)),
        ((0, 255, 0), (120.0, 100.0, 50.0)),
        ((0, 0, 255), (240.0, 100.0, 50.0)),
        ((128, 128, 128), (0.0, 0.0, 50.2)),
        ((51, 117, 187), (211.0, 57.1, 46.7)),
        ((210, 117, 42), (27.0, 66.7, 49.4)),
    ];

    for ((r, g, b), expected) in cases {
        assert_eq!(rgb_to_hsl(r, g, b).to_tuple(), expected, "rgb_to_hsl({r}, {g}, {b})");
    }
}

#[test]
fn test_rgb_to_hsv_vectors() {
    let cases = [
        ((0, 0, 0), (0.0, 0.0, 0.0)),
        ((255, 255, 255), (0.0, 0.0, 100.0)),
        ((255, 0, 0), (0.0, 100.0, 100.0)),
        ((0, 255, 0), (120.0, 100.0, 100.0)),
        ((0, 0, 255), (240.0, 100.0, 100.0)),
        ((128, 128, 128), (0.0, 0.0, 50.2)),
        ((51, 117, 187), (211.0, 72.7, 73.3)),
        ((210, 117, 42), (27.0, 80.0, 82.4)),
    ];

    for ((r, g, b), expected) in cases {
        assert_eq!(rgb_to_hsv(r, g, b).to_tuple(), expected, "rgb_to_hsv({r}, {g}, {b})");
    }
}

#[test]
fn test_hsl_to_rgb_vectors() {
    let cases = [
        ((0.0, 0.0, 0.0), (0, 0, 0)),
        ((359.0, 100.0, 100.0), (255, 255, 255)),
        ((0.0, 100.0, 50.0), (255, 0, 0)),
        ((120.0, 100.0, 50.0), (0, 255, 0)),
        ((240.0, 100.0, 50.0), (0, 0, 255)),
        ((0.0, 0.0, 50.0), (127, 127, 127)),
        ((211.0, 57.0, 47.0), (51, 117, 188)),
        ((27.0, 66.0, 49.0), (207, 116, 42)),
        ((180.0, 100.0, 25.0), (0, 127, 127)),
        ((30.0, 50.0, 75.0), (223, 191, 159)),
    ];

    for ((h, s, l), expected) in cases {
        let rgb = hsl_to_rgb(h, s, l).unwrap();
        assert_eq!(<(u8, u8, u8)>::from(rgb), expected, "hsl_to_rgb({h}, {s}, {l})");
    }
}

#[test]
fn test_hsv_to_rgb_vectors() {
    let cases = [
        ((0.0, 0.0, 0.0), (0, 0, 0)),
        ((0.0, 0.0, 100.0), (255, 255, 255)),
        ((0.0, 100.0, 100.0), (255, 0, 0)),
        ((120.0, 100.0, 100.0), (0, 255, 0)),
        ((240.0, 100.0, 100.0), (0, 0, 255)),
        ((0.0, 0.0, 50.0), (127, 127, 127)),
        ((211.0, 57.0, 47.0), (51, 84, 119)),
        ((27.0, 66.0, 49.0), (124, 79, 42)),
        ((359.0, 100.0, 100.0), (255, 0, 4)),
        ((30.0, 50.0, 75.0), (191, 143, 95)),
    ];

    for ((h, s, v), expected) in cases {
        let rgb = hsv_to_rgb(h, s, v).unwrap();
        assert_eq!(<(u8, u8, u8)>::from(rgb), expected, "hsv_to_rgb({h}, {s}, {v})");
    }
}

#[test]
fn test_secondary_colors() {
    assert_eq!(rgb_to_hsl(255, 255, 0), Hsl::new(60.0, 100.0, 50.0));
    assert_eq!(rgb_to_hsl(0, 255, 255), Hsl::new(180.0, 100.0, 50.0));
    assert_eq!(rgb_to_hsv(255, 0, 255), Hsv::new(300.0, 100.0, 100.0));

    assert_eq!(hsl_to_rgb(60.0, 100.0, 50.0).unwrap(), Rgb::new(255, 255, 0));
    assert_eq!(hsl_to_rgb(300.0, 100.0, 50.0).unwrap(), Rgb::new(255, 0, 255));
}

#[test]
fn test_dark_and_light_tints() {
    assert_eq!(rgb_to_hsl(128, 0, 0), Hsl::new(0.0, 100.0, 25.1));
    assert_eq!(rgb_to_hsv(128, 0, 0), Hsv::new(0.0, 100.0, 50.2));
    assert_eq!(rgb_to_hsl(238, 130, 238), Hsl::new(300.0, 76.1, 72.2));
    assert_eq!(rgb_to_hsv(238, 130, 238), Hsv::new(300.0, 45.4, 93.3));
}
