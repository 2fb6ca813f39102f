//! Hex parsing and HSL math for analogous color generation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a color string as hex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("not a hex color: '{0}'")]
    NotHex(String),
}

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::NotHex(hex.to_string()));
        }
        let channel = |lo: usize| {
            u8::from_str_radix(&digits[lo..lo + 2], 16)
                .map_err(|_| ColorParseError::NotHex(hex.to_string()))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL.
    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sextant = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl {
            h: sextant * 60.0,
            s,
            l,
        }
    }
}

/// HSL color: hue in degrees, saturation and lightness in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Rotate the hue by `degrees`, wrapping into [0, 360).
    pub fn rotate(&self, degrees: f64) -> Hsl {
        Hsl {
            h: (self.h + degrees).rem_euclid(360.0),
            ..*self
        }
    }

    /// Convert back to RGB.
    pub fn to_rgb(&self) -> Rgb {
        if self.s == 0.0 {
            let gray = (self.l * 255.0).round() as u8;
            return Rgb {
                r: gray,
                g: gray,
                b: gray,
            };
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;
        let hue = self.h / 360.0;

        Rgb {
            r: hue_channel(p, q, hue + 1.0 / 3.0),
            g: hue_channel(p, q, hue),
            b: hue_channel(p, q, hue - 1.0 / 3.0),
        }
    }
}

fn hue_channel(p: f64, q: f64, t: f64) -> u8 {
    let t = t.rem_euclid(1.0);
    let value = if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    };
    (value * 255.0).round() as u8
}
