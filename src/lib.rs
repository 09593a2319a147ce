#![forbid(unsafe_code)]
//! ResX resource file toolkit for Rust.
//!
//! Reads and writes `.resx` resource containers losslessly — line endings are
//! canonicalized in both directions, so entries survive editing on Windows-
//! and Unix-style systems without spurious diffs — and derives strongly-typed
//! accessor ("designer") source code from a container's entries.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resxcodec::{ResxEntry, WriteOptions};
//!
//! let entries = vec![
//!     ResxEntry::new("WelcomeMessage", "Hello, world!").with_comment("Shown on startup"),
//! ];
//!
//! // Persisting comments is an explicit opt-in; writing skips them by default.
//! resxcodec::write_with_options(
//!     "Strings.resx",
//!     &entries,
//!     WriteOptions::new().with_comments(true),
//! )?;
//!
//! // Reading includes comments by default.
//! let round_tripped = resxcodec::read("Strings.resx")?;
//! assert_eq!(round_tripped[0].id, "WelcomeMessage");
//!
//! // Emit Strings.Designer.rs next to the container.
//! let all_generated = resxcodec::generate_designer_file("Strings.resx", "Strings", "my_app")?;
//! # let _ = all_generated;
//! # Ok::<(), resxcodec::Error>(())
//! ```
//!
//! # Features
//!
//! - 🔄 Lossless entry round trip with deterministic line-ending
//!   canonicalization
//! - 📝 Comment round-tripping with explicit, asymmetric defaults
//!   (read includes, write skips)
//! - 🦀 Designer generation through a pluggable emission backend; a Rust
//!   backend ships by default
//! - 📦 Designed for build-time code generation and translation
//!   round-tripping pipelines

pub mod codegen;
pub mod designer;
pub mod eol;
pub mod error;
pub mod formats;
pub mod options;
pub mod store;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    codegen::RustBackend,
    designer::{
        AccessLevel, AccessorMember, DesignerClass, generate_designer_file,
        generate_designer_file_with, generate_internal_designer_file,
    },
    error::Error,
    options::{ReadOptions, WriteOptions},
    store::{read, read_with_options, write, write_with_options},
    traits::{EmissionBackend, Parser},
    types::ResxEntry,
};
