use std::ops::{Add, Mul};

/// An axis-aligned rectangle described by its top-left corner and extent.
///
/// Width and height may be negative. Atlas lookups use that to express a
/// mirrored source region: the left/right (or top/bottom) edges swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect { x, y, width, height }
    }
}

impl<T: Copy + Add<Output = T>> Rect<T> {
    #[inline]
    pub fn left(&self) -> T {
        self.x
    }

    #[inline]
    pub fn right(&self) -> T {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> T {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> T {
        self.y + self.height
    }

    pub fn size(&self) -> Size<T> {
        Size::new(self.width, self.height)
    }
}

impl Rect<f32> {
    /// The same region with its horizontal edges swapped.
    pub fn flipped_horizontal(self) -> Self {
        Rect::new(self.x + self.width, self.y, -self.width, self.height)
    }

    /// The same region with its vertical edges swapped.
    pub fn flipped_vertical(self) -> Self {
        Rect::new(self.x, self.y + self.height, self.width, -self.height)
    }
}

impl From<Rect<u32>> for Rect<f32> {
    fn from(r: Rect<u32>) -> Self {
        Rect::new(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    pub fn cast<U: From<T>>(self) -> Size<U> {
        Size {
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}
