#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    fn next_two(chars: &mut dyn Iterator<Item = char>) -> Result<u8, Box<dyn std::error::Error>> {
        let hi = chars.next().ok_or("invalid")?.to_digit(16).ok_or("invalid character")?;
        let lo = chars.next().ok_or("invalid")?.to_digit(16).ok_or("invalid character")?;
        Ok((hi * 16 + lo) as u8)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`, the leading `#` being optional. Alpha defaults to opaque.
    pub fn from_hex(hex: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(format!("expected 6 or 8 hex digits, got '{}'", hex).into());
        }
        let mut chars = digits.chars();

        let r = Self::next_two(&mut chars)?;
        let g = Self::next_two(&mut chars)?;
        let b = Self::next_two(&mut chars)?;
        let a = Self::next_two(&mut chars).unwrap_or(255);

        Ok(Color { r, g, b, a })
    }
}

#[inline]
fn cv(n: f64) -> f64 {
    (n / 255.0).powf(2.2)
}

/// Converts color from srgb to wgpu color, but corrects for gamma.
/// sRGB is stored in relative color, while our eyes perceive the brightness differently, so we have to
/// modify the sRGB according to the gamma curve, with an exponent of ~ 2.2
/// See [learnopengl/gamma-correction](https://learnopengl.com/Advanced-Lighting/Gamma-Correction) & [learnwgpu/colorcorrection](https://sotrh.github.io/learn-wgpu/beginner/tutorial4-buffer/#color-correction)
/// for more information.
///
/// Alpha is linear already and only normalized.
impl From<Color> for wgpu::Color {
    fn from(val: Color) -> Self {
        wgpu::Color {
            r: cv(val.r as f64),
            g: cv(val.g as f64),
            b: cv(val.b as f64),
            a: val.a as f64 / 255.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Color;
    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex("#292828").unwrap();
        assert_eq!(
            color,
            Color {
                r: 41,
                g: 40,
                b: 40,
                a: 255
            }
        );
        assert_eq!(Color::from_hex("29282880").unwrap().a, 128);
    }
    #[test]
    fn test_color_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#29282").is_err());
        assert!(Color::from_hex("#zz2828").is_err());
    }
    #[test]
    fn test_color_to_wgpu_color() {
        assert_eq!(
            wgpu::Color::from(Color::from_rgb(0, 0, 0, 255)),
            wgpu::Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 1.0
            }
        );
        let white = wgpu::Color::from(Color::from_rgb(255, 255, 255, 255));
        assert!((white.r - 1.0).abs() < 1e-12);
    }
}
