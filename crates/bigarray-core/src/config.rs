//! Page sizing configuration.

use crate::error::ConfigError;

/// Configuration for the page layout of a big array.
///
/// Validated when an array (or a [`PageGeometry`](crate::PageGeometry)) is
/// built; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    /// Size of each page in bytes.
    ///
    /// Default: 16384 (16 KiB, 4096 `i32` elements per page).
    /// Must be a power of two, hold at least one element and be at most
    /// [`MAX_PAGE_SIZE_BYTES`](Self::MAX_PAGE_SIZE_BYTES).
    pub page_size_bytes: usize,
}

impl PageConfig {
    /// Default page size: 16 KiB.
    pub const DEFAULT_PAGE_SIZE_BYTES: usize = 16 * 1024;

    /// Largest accepted page size: 1 GiB. Keeps every in-page offset
    /// within `u32`.
    pub const MAX_PAGE_SIZE_BYTES: usize = 1 << 30;

    /// Create a config with the given page size in bytes.
    pub fn new(page_size_bytes: usize) -> Self {
        Self { page_size_bytes }
    }

    /// Check this config against an element size.
    ///
    /// Returns the page size in elements on success.
    pub fn validate_for(&self, bytes_per_element: usize) -> Result<usize, ConfigError> {
        let page_size_bytes = self.page_size_bytes;
        if !page_size_bytes.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo { page_size_bytes });
        }
        if page_size_bytes < bytes_per_element {
            return Err(ConfigError::TooSmall {
                page_size_bytes,
                bytes_per_element,
            });
        }
        if page_size_bytes > Self::MAX_PAGE_SIZE_BYTES {
            return Err(ConfigError::TooLarge { page_size_bytes });
        }
        Ok(page_size_bytes / bytes_per_element)
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_holds_4096_ints() {
        let config = PageConfig::default();
        assert_eq!(config.validate_for(4), Ok(4096));
    }

    #[test]
    fn default_page_holds_2048_longs() {
        assert_eq!(PageConfig::default().validate_for(8), Ok(2048));
    }

    #[test]
    fn rejects_non_power_of_two() {
        let err = PageConfig::new(1000).validate_for(4).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotPowerOfTwo {
                page_size_bytes: 1000
            }
        );
    }

    #[test]
    fn rejects_zero() {
        assert!(matches!(
            PageConfig::new(0).validate_for(4),
            Err(ConfigError::NotPowerOfTwo { .. })
        ));
    }

    #[test]
    fn rejects_page_smaller_than_element() {
        assert!(matches!(
            PageConfig::new(4).validate_for(8),
            Err(ConfigError::TooSmall { .. })
        ));
    }

    #[test]
    fn rejects_oversized_page() {
        let config = PageConfig::new(PageConfig::MAX_PAGE_SIZE_BYTES * 2);
        assert!(matches!(
            config.validate_for(1),
            Err(ConfigError::TooLarge { .. })
        ));
    }

    #[test]
    fn single_element_page_is_valid() {
        assert_eq!(PageConfig::new(8).validate_for(8), Ok(1));
    }
}
