//! Container file formats supported by resxcodec.
//!
//! One format is currently implemented: the ResX XML container. The store
//! depends only on the [`crate::traits::Parser`] surface and the format's
//! record types, not on the on-disk byte layout.

pub mod resx;

// Reexporting the formats for easier access
pub use resx::{DataElement, Format as ResxFormat};
