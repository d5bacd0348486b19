//! Error types for batch sessions and texture resources.

/// Batch session error.
///
/// The `Begin`/`Draw`/`End` protocol treats these as programmer errors: the
/// panicking entry points (`begin`, `draw`, `end`) abort with this error's
/// message, while `try_begin`/`try_end` hand it back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// `begin` was called while a session was already open
    AlreadyBegun(&'static str),
    /// `draw`, `end` or `flush` was called without an open session
    NotBegun(&'static str),
    /// A sprite draw needs a texture but none is active
    NoActiveTexture,
    /// The configured buffer cannot hold a single primitive
    CapacityTooSmall { max_buffer_size: usize, required: usize },
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyBegun(batch) => {
                write!(f, "{batch}::begin called twice without an intervening end")
            }
            Self::NotBegun(batch) => write!(f, "{batch} used outside of a begin/end pair"),
            Self::NoActiveTexture => {
                write!(f, "sprite drawn without an active texture; pass one to begin")
            }
            Self::CapacityTooSmall {
                max_buffer_size,
                required,
            } => write!(
                f,
                "buffer of {max_buffer_size} vertices cannot hold one primitive ({required} vertices)"
            ),
        }
    }
}

impl std::error::Error for BatchError {}

/// Texture creation or update error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureError {
    /// Width or height is zero
    ZeroSize,
    /// Pixel slice length does not match `width * height * 4`
    DataSizeMismatch { expected: usize, actual: usize },
    /// Region does not fit inside the texture
    RegionOutOfBounds,
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "Texture dimensions must be non-zero"),
            Self::DataSizeMismatch { expected, actual } => {
                write!(f, "Expected {} bytes of RGBA8 data, got {}", expected, actual)
            }
            Self::RegionOutOfBounds => write!(f, "Region lies outside the texture"),
        }
    }
}

impl std::error::Error for TextureError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_error_display() {
        let err = BatchError::AlreadyBegun("SpriteBatch");
        assert!(err.to_string().contains("SpriteBatch::begin"));

        let err = BatchError::CapacityTooSmall {
            max_buffer_size: 4,
            required: 6,
        };
        assert!(err.to_string().contains('4'));
        assert!(err.to_string().contains('6'));
    }

    #[test]
    fn test_texture_error_display() {
        let err = TextureError::DataSizeMismatch {
            expected: 16,
            actual: 12,
        };
        assert_eq!(err.to_string(), "Expected 16 bytes of RGBA8 data, got 12");
    }
}
