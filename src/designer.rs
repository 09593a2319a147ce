//! Designer generation: deriving strongly-typed accessor source from a
//! container.
//!
//! Generation runs in two linear phases. Preconditions (container exists,
//! class and namespace names non-empty) are checked before any I/O beyond the
//! existence check; then the container's entries are read with comments
//! included, an accessor-class description is built with one candidate member
//! per entry, and an [`EmissionBackend`] materializes the source text. The
//! text lands in `<ClassName>.Designer.<ext>` next to the container,
//! overwriting any previous file of that name.

use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    codegen::RustBackend,
    error::Error,
    options::ReadOptions,
    store,
    traits::EmissionBackend,
    types::ResxEntry,
};

/// Visibility of the generated accessor class and its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum AccessLevel {
    Public,
    Internal,
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessLevel::Public => write!(f, "public"),
            AccessLevel::Internal => write!(f, "internal"),
        }
    }
}

/// The accessor-class description handed to an [`EmissionBackend`].
///
/// Built fresh on every generation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignerClass {
    /// The container the description was derived from.
    pub container_path: PathBuf,
    /// Name of the generated class.
    pub class_name: String,
    /// Namespace the class lives in; interpretation is backend-specific.
    pub namespace: String,
    /// Requested visibility.
    pub access: AccessLevel,
    /// One candidate member per container entry, in container order.
    pub members: Vec<AccessorMember>,
}

impl DesignerClass {
    /// True when every candidate member was generated.
    pub fn fully_generated(&self) -> bool {
        self.members.iter().all(|member| member.generated)
    }

    /// Ids of the members the backend could not generate.
    pub fn failed_ids(&self) -> Vec<&str> {
        self.members
            .iter()
            .filter(|member| !member.generated)
            .map(|member| member.entry.id.as_str())
            .collect()
    }
}

/// One candidate accessor member, 1:1 with a container entry.
///
/// The whole entry is carried because the value becomes the accessor payload
/// and the comment becomes member documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorMember {
    pub entry: ResxEntry,
    pub generated: bool,
}

impl AccessorMember {
    fn candidate(entry: ResxEntry) -> Self {
        AccessorMember {
            entry,
            generated: true,
        }
    }
}

/// Generates a public designer file with the default Rust backend.
///
/// Returns `Ok(false)` if at least one member couldn't be generated; the
/// output file still contains every member that did succeed.
pub fn generate_designer_file<P: AsRef<Path>>(
    container: P,
    class_name: &str,
    namespace: &str,
) -> Result<bool, Error> {
    generate_designer_file_with(
        container,
        class_name,
        namespace,
        AccessLevel::Public,
        &RustBackend,
    )
    .map(|class| class.fully_generated())
}

/// Generates an internal designer file with the default Rust backend.
///
/// Returns `Ok(false)` if at least one member couldn't be generated; the
/// output file still contains every member that did succeed.
pub fn generate_internal_designer_file<P: AsRef<Path>>(
    container: P,
    class_name: &str,
    namespace: &str,
) -> Result<bool, Error> {
    generate_designer_file_with(
        container,
        class_name,
        namespace,
        AccessLevel::Internal,
        &RustBackend,
    )
    .map(|class| class.fully_generated())
}

/// Generates a designer file with an explicit access level and backend.
///
/// The output path is `<dir-of-container>/<class_name>.Designer.<ext>` where
/// the extension comes from the backend; any existing file is overwritten.
/// Returns the final description, with `generated` cleared on every member
/// the backend reported as failed — use [`DesignerClass::fully_generated`]
/// or [`DesignerClass::failed_ids`] to inspect the outcome. Partial failure
/// is not an error: the file is written either way.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the container does not exist and
/// [`Error::Validation`] when `class_name` or `namespace` is empty, both
/// before any content I/O.
pub fn generate_designer_file_with<P: AsRef<Path>, B: EmissionBackend>(
    container: P,
    class_name: &str,
    namespace: &str,
    access: AccessLevel,
    backend: &B,
) -> Result<DesignerClass, Error> {
    let container = container.as_ref();

    if !container.exists() {
        return Err(Error::not_found(container));
    }
    if class_name.is_empty() {
        return Err(Error::validation_error("class name must not be empty"));
    }
    if namespace.is_empty() {
        return Err(Error::validation_error("namespace name must not be empty"));
    }

    // Comments are read back so they can become member documentation.
    let entries = store::read_with_options(container, ReadOptions::new().with_comments(true))?;

    let mut class = DesignerClass {
        container_path: container.to_path_buf(),
        class_name: class_name.to_string(),
        namespace: namespace.to_string(),
        access,
        members: entries.into_iter().map(AccessorMember::candidate).collect(),
    };

    let (source, failed) = backend.generate_accessor_source(&class);
    for member in &mut class.members {
        if failed.contains(&member.entry.id) {
            member.generated = false;
        }
    }

    let designer_path = container.with_file_name(format!(
        "{}.Designer.{}",
        class_name,
        backend.file_extension()
    ));
    fs::write(&designer_path, source)?;

    Ok(class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_level_display() {
        assert_eq!(AccessLevel::Public.to_string(), "public");
        assert_eq!(AccessLevel::Internal.to_string(), "internal");
    }

    #[test]
    fn test_failed_ids() {
        let class = DesignerClass {
            container_path: PathBuf::from("Strings.resx"),
            class_name: "Strings".to_string(),
            namespace: "app".to_string(),
            access: AccessLevel::Public,
            members: vec![
                AccessorMember {
                    entry: ResxEntry::new("Good", "ok"),
                    generated: true,
                },
                AccessorMember {
                    entry: ResxEntry::new("type", "bad"),
                    generated: false,
                },
            ],
        };
        assert!(!class.fully_generated());
        assert_eq!(class.failed_ids(), vec!["type"]);
    }
}
