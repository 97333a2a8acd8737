//! Fixed color sets. Each entity draws its color once at creation.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn alpha(self, a: f64) -> Rgba {
        Rgba { rgb: self, a }
    }

    pub const fn opaque(self) -> Rgba {
        self.alpha(1.0)
    }
}

/// A color with alpha, formatted as a CSS `rgba()` string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f64,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb(r, g, b) = self.rgb;
        write!(f, "rgba({r}, {g}, {b}, {})", self.a)
    }
}

pub const GOLD: Rgb = Rgb(212, 175, 55);
pub const GOLD_LIGHT: Rgb = Rgb(244, 228, 188);
pub const GREEN: Rgb = Rgb(27, 94, 32);
pub const WHITE: Rgb = Rgb(255, 255, 255);

pub const AMBIENT: &[Rgb] = &[GOLD, GOLD_LIGHT, GREEN, WHITE];

pub const RIBBON: &[Rgb] = &[
    Rgb(0x6c, 0xa2, 0xf3),
    Rgb(0x89, 0x06, 0xf3),
    Rgb(0x81, 0x09, 0x4f),
    Rgb(0x29, 0x05, 0xad),
    Rgb(0x27, 0x6d, 0xc9),
    WHITE,
];

pub const BALLOON: &[Rgb] = &[
    Rgb(0xbe, 0x25, 0x65),
    Rgb(0x46, 0x0c, 0xb3),
    Rgb(0xe8, 0x7c, 0xf1),
    Rgb(0x13, 0x95, 0xe0),
    GOLD_LIGHT,
];

pub const PETAL: &[Rgb] = &[
    Rgb(0xff, 0xb6, 0xc1),
    Rgb(0xff, 0xc0, 0xcb),
    Rgb(0xff, 0x69, 0xb4),
    GOLD_LIGHT,
    Rgb(0xff, 0xd7, 0x00),
    WHITE,
];

pub const CONFETTI: &[Rgb] = &[
    GOLD,
    GOLD_LIGHT,
    GREEN,
    Rgb(0xff, 0xd7, 0x00),
    Rgb(0xc9, 0xa2, 0x27),
    WHITE,
    Rgb(0xff, 0xb6, 0xc1),
];

pub const BALLOON_HIGHLIGHT: Rgba = WHITE.alpha(0.4);
pub const BALLOON_STRING: Rgba = WHITE.alpha(0.5);

pub fn pick(rng: &mut fastrand::Rng, palette: &[Rgb]) -> Rgb {
    palette[rng.usize(..palette.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formatting() {
        assert_eq!(GOLD.alpha(0.25).to_string(), "rgba(212, 175, 55, 0.25)");
        assert_eq!(WHITE.opaque().to_string(), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn pick_stays_in_palette() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..100 {
            assert!(CONFETTI.contains(&pick(&mut rng, CONFETTI)));
        }
    }
}
