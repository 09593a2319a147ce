//! Emission backends that turn an accessor-class description into source
//! text.
//!
//! Each backend owns the identifier rules and formatting of its target
//! language; the description side of the seam is
//! [`crate::designer::DesignerClass`].

pub mod rust;

pub use rust::RustBackend;
