use glam::Vec2;

/// Texture coordinates for the four corners of a sprite quad.
///
/// The corners are independent points; nothing forces them to describe an
/// axis-aligned rectangle. Mirroring or rotating the sampled image is done by
/// permuting corners, see [`flipped_horizontal`](Self::flipped_horizontal).
///
/// The default maps the whole texture: top-left `(0, 0)`, bottom-right `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureCoordinates {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
}

impl TextureCoordinates {
    pub const IDENTITY: TextureCoordinates = TextureCoordinates {
        top_left: Vec2::new(0.0, 0.0),
        top_right: Vec2::new(1.0, 0.0),
        bottom_left: Vec2::new(0.0, 1.0),
        bottom_right: Vec2::new(1.0, 1.0),
    };

    pub const fn new(top_left: Vec2, top_right: Vec2, bottom_left: Vec2, bottom_right: Vec2) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Coordinates covering the normalized sub-rectangle `min..max`.
    pub fn from_bounds(min: Vec2, max: Vec2) -> Self {
        Self {
            top_left: min,
            top_right: Vec2::new(max.x, min.y),
            bottom_left: Vec2::new(min.x, max.y),
            bottom_right: max,
        }
    }

    /// Swap left and right corners (mirror around the vertical axis).
    pub fn flipped_horizontal(self) -> Self {
        Self {
            top_left: self.top_right,
            top_right: self.top_left,
            bottom_left: self.bottom_right,
            bottom_right: self.bottom_left,
        }
    }

    /// Swap top and bottom corners (mirror around the horizontal axis).
    pub fn flipped_vertical(self) -> Self {
        Self {
            top_left: self.bottom_left,
            top_right: self.bottom_right,
            bottom_left: self.top_left,
            bottom_right: self.top_right,
        }
    }
}

impl Default for TextureCoordinates {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unit_square() {
        let c = TextureCoordinates::default();
        assert_eq!(c.top_left, Vec2::new(0.0, 0.0));
        assert_eq!(c.top_right, Vec2::new(1.0, 0.0));
        assert_eq!(c.bottom_left, Vec2::new(0.0, 1.0));
        assert_eq!(c.bottom_right, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_double_flip_is_identity() {
        let c = TextureCoordinates::from_bounds(Vec2::new(0.25, 0.0), Vec2::new(0.5, 0.5));
        assert_eq!(c.flipped_horizontal().flipped_horizontal(), c);
        assert_eq!(c.flipped_vertical().flipped_vertical(), c);
    }

    #[test]
    fn test_from_bounds() {
        let c = TextureCoordinates::from_bounds(Vec2::new(0.25, 0.5), Vec2::new(0.75, 1.0));
        assert_eq!(c.top_right, Vec2::new(0.75, 0.5));
        assert_eq!(c.bottom_left, Vec2::new(0.25, 1.0));
    }
}
