use crate::error::SignError;

/// A colour, expressed in the RGB colour space
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Colour {
    /// red, ranges from 0.0 to 1.0
    pub r: f32,
    /// green, ranges from 0.0 to 1.0
    pub g: f32,
    /// blue, ranges from 0.0 to 1.0
    pub b: f32,
}

impl Colour {
    /// Create a new colour. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour { r, g, b }
    }

    /// Create a new colour. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse a colour from an `rrggbb` hex string, with or without a leading `#`
    pub fn from_hex(hex: &str) -> Result<Colour, SignError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SignError::InvalidColour(hex.to_string()));
        }

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| SignError::InvalidColour(hex.to_string()))
        };
        Ok(Colour::new_rgb_bytes(
            parse(0..2)?,
            parse(2..4)?,
            parse(4..6)?,
        ))
    }

    /// Format the colour as `#rrggbb`, the form used for `{{BGCOLOR}}` and
    /// `{{COLOR}}` substitutions
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Convert the colour to fully opaque 8-bit RGBA
    pub fn to_rgba(&self) -> [u8; 4] {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b), 255]
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<[T; 3]> for Colour {
    fn from(c: [T; 3]) -> Self {
        let [r, g, b] = c;
        Colour {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Colour = Colour {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    pub const RED: Colour = Colour {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Colour = Colour {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}
