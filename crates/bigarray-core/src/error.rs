//! Error types for big array operations.

use std::error::Error;
use std::fmt;

/// Errors from validating a [`PageConfig`](crate::PageConfig).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Page size is not a power of two, so index math cannot use shift/mask.
    NotPowerOfTwo {
        /// The rejected page size in bytes.
        page_size_bytes: usize,
    },
    /// Page size cannot hold a single element.
    TooSmall {
        /// The rejected page size in bytes.
        page_size_bytes: usize,
        /// Size of one element in bytes.
        bytes_per_element: usize,
    },
    /// Page size exceeds [`PageConfig::MAX_PAGE_SIZE_BYTES`](crate::PageConfig::MAX_PAGE_SIZE_BYTES).
    TooLarge {
        /// The rejected page size in bytes.
        page_size_bytes: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPowerOfTwo { page_size_bytes } => {
                write!(f, "page size {page_size_bytes} bytes is not a power of two")
            }
            Self::TooSmall {
                page_size_bytes,
                bytes_per_element,
            } => {
                write!(
                    f,
                    "page size {page_size_bytes} bytes cannot hold one {bytes_per_element}-byte element"
                )
            }
            Self::TooLarge { page_size_bytes } => {
                write!(
                    f,
                    "page size {page_size_bytes} bytes exceeds the {} byte maximum",
                    crate::PageConfig::MAX_PAGE_SIZE_BYTES
                )
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors returned by big array operations.
///
/// Every variant is reported before the array is mutated: a failed call
/// leaves size, pages and contents exactly as they were.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An access at `index` on an array of length `size`.
    IndexOutOfRange {
        /// The requested logical index.
        index: u64,
        /// Logical length at the time of the call.
        size: u64,
    },
    /// Memory for a page or for the enlarged page table could not be obtained.
    AllocationFailure {
        /// Bytes that were being requested when allocation failed.
        requested_bytes: u64,
    },
    /// The requested logical size cannot be addressed: it is above
    /// [`MAX_SIZE`](crate::MAX_SIZE) or needs more pages than a native
    /// page table can index.
    CapacityOverflow {
        /// The requested logical size.
        requested_size: u64,
    },
    /// A range whose start lies past its end.
    InvalidRange {
        /// Inclusive start of the range.
        start: u64,
        /// Exclusive end of the range.
        end: u64,
    },
    /// The page configuration was rejected.
    InvalidConfig(ConfigError),
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index {index} out of range for array of size {size}")
            }
            Self::AllocationFailure { requested_bytes } => {
                write!(f, "failed to allocate {requested_bytes} bytes")
            }
            Self::CapacityOverflow { requested_size } => {
                write!(f, "size {requested_size} exceeds addressable capacity")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range: start {start} is past end {end}")
            }
            Self::InvalidConfig(reason) => write!(f, "invalid page config: {reason}"),
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<ConfigError> for ArrayError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}
