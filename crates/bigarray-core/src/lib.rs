//! Core types for paged big arrays.
//!
//! A big array is a logically contiguous sequence addressed by a 64-bit
//! index and backed by many fixed-size pages instead of one allocation.
//! This crate holds the parts that do not own storage:
//!
//! - [`PageGeometry`]: index to (page, offset) translation and byte
//!   accounting.
//! - [`Element`]: the value types a page can hold.
//! - [`PageConfig`]: page sizing, validated at construction.
//! - [`oversize`](growth::oversize): amortised capacity for the page table.
//! - [`ArrayError`] / [`ConfigError`]: everything that can go wrong.
//!
//! Storage lives in the `bigarray` crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod element;
pub mod error;
pub mod growth;
pub mod paging;

pub use config::PageConfig;
pub use element::Element;
pub use error::{ArrayError, ConfigError};
pub use paging::{PageGeometry, MAX_SIZE};
