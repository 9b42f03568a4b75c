//! 8-bit RGBA color value.

use std::fmt;

/// A color with four 8-bit channels.
///
/// `Rgba` is a plain value type. Equality and hashing compare all four
/// channels, which is what palette popularity counting keys on. The derived
/// ordering (red, then green, blue, alpha) gives popularity ranking a
/// deterministic tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Create a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    ///
    /// # Example
    /// ```
    /// use palette_quant::Rgba;
    /// let red = Rgba::opaque(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from a `[R, G, B, A]` byte array.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a `[R, G, B, A]` byte array.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The RGB channels as an array, alpha dropped.
    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance over red, green and blue.
    ///
    /// Alpha does not participate.
    ///
    /// # Example
    /// ```
    /// use palette_quant::Rgba;
    /// let black = Rgba::opaque(0, 0, 0);
    /// let gray = Rgba::new(3, 4, 0, 0);
    /// assert_eq!(black.distance_squared(gray), 25);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Rgba) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.to_bytes()
    }
}

impl fmt::Display for Rgba {
    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when the color is not opaque.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ignores_alpha() {
        let a = Rgba::new(10, 20, 30, 0);
        let b = Rgba::new(10, 20, 30, 255);
        assert_eq!(a.distance_squared(b), 0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Rgba::opaque(255, 0, 10);
        let b = Rgba::opaque(0, 255, 20);
        assert_eq!(a.distance_squared(b), b.distance_squared(a));
        assert_eq!(a.distance_squared(b), 255 * 255 * 2 + 100);
    }

    #[test]
    fn test_max_distance_fits() {
        let black = Rgba::opaque(0, 0, 0);
        let white = Rgba::opaque(255, 255, 255);
        assert_eq!(black.distance_squared(white), 3 * 255 * 255);
    }

    #[test]
    fn test_bytes_conversion() {
        let color = Rgba::from([1, 2, 3, 4]);
        assert_eq!(color, Rgba::new(1, 2, 3, 4));
        let bytes: [u8; 4] = color.into();
        assert_eq!(bytes, [1, 2, 3, 4]);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(Rgba::opaque(255, 128, 0).to_string(), "#FF8000");
        assert_eq!(Rgba::new(0, 0, 0, 16).to_string(), "#00000010");
    }

    #[test]
    fn test_ordering_is_channel_major() {
        assert!(Rgba::opaque(0, 0, 255) < Rgba::opaque(0, 255, 0));
        assert!(Rgba::opaque(0, 255, 0) < Rgba::opaque(1, 0, 0));
    }
}
