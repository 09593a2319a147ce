//! The default emission backend, targeting Rust source.
//!
//! Resource ids become snake_case associated functions on a unit struct, the
//! namespace becomes nested modules (one per dot-separated segment), and
//! entry comments become doc comments. Ids that cannot be mapped to a valid,
//! unique Rust identifier are reported as failures and omitted from the
//! emitted source.

use std::collections::HashSet;

use heck::ToSnakeCase;

use crate::{
    designer::{AccessLevel, DesignerClass},
    traits::EmissionBackend,
};

/// Strict and reserved Rust keywords (2024 edition). Accessor names never
/// collide with these; raw identifiers are not used.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Emits a Rust module with one `&'static str` accessor per resource entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustBackend;

impl EmissionBackend for RustBackend {
    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn generate_accessor_source(&self, class: &DesignerClass) -> (String, Vec<String>) {
        let mut failed = Vec::new();
        let mut seen = HashSet::new();
        let mut accessors = Vec::new();

        for member in &class.members {
            let Some(name) = accessor_name(&member.entry.id) else {
                failed.push(member.entry.id.clone());
                continue;
            };
            if !seen.insert(name.clone()) {
                failed.push(member.entry.id.clone());
                continue;
            }
            accessors.push((name, &member.entry));
        }

        let vis = match class.access {
            AccessLevel::Public => "pub",
            AccessLevel::Internal => "pub(crate)",
        };
        let container_name = class
            .container_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("a resource container");

        let mut out = String::new();
        out.push_str(&format!(
            "// Generated from {}. Manual edits will be overwritten.\n\n",
            container_name
        ));

        let segments: Vec<String> = class
            .namespace
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.to_snake_case())
            .collect();

        let mut depth = 0;
        for segment in &segments {
            push_line(&mut out, depth, &format!("{} mod {} {{", vis, segment));
            depth += 1;
        }

        push_line(
            &mut out,
            depth,
            &format!("/// Strongly-typed accessors for `{}`.", container_name),
        );
        push_line(&mut out, depth, &format!("{} struct {};", vis, class.class_name));
        out.push('\n');
        push_line(&mut out, depth, &format!("impl {} {{", class.class_name));

        for (index, (name, entry)) in accessors.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            for line in entry.comment.lines() {
                push_line(&mut out, depth + 1, &format!("/// {}", line));
            }
            push_line(
                &mut out,
                depth + 1,
                &format!("{} fn {}() -> &'static str {{", vis, name),
            );
            push_line(&mut out, depth + 2, &format!("{:?}", entry.value));
            push_line(&mut out, depth + 1, "}");
        }

        push_line(&mut out, depth, "}");
        for _ in &segments {
            depth -= 1;
            push_line(&mut out, depth, "}");
        }

        (out, failed)
    }
}

/// Maps a resource id to a snake_case accessor name, or `None` when the id
/// has no valid spelling (empty, bad leading character, non-identifier
/// characters, or a reserved word).
fn accessor_name(id: &str) -> Option<String> {
    let name = id.to_snake_case();
    match name.chars().next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return None,
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }
    if RESERVED_WORDS.contains(&name.as_str()) {
        return None;
    }
    Some(name)
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str("    ");
    }
    out.push_str(line);
    out.push('\n');
}
