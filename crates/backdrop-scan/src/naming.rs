//! Naming rules shared by discovery and the manifest writer
//!
//! A component's short name is its file name without the source extension.
//! The manifest `name` and the output file are both derived from it:
//! - Aurora.svelte -> Aurora -> aurora -> aurora.json
//! - DarkVeil.svelte -> DarkVeil -> darkveil -> darkveil.json

/// Strip `.{extension}` from a file name.
///
/// Names without the suffix are returned unchanged. A name that is only the
/// suffix (`.svelte`) yields an empty short name.
pub fn short_name<'a>(file_name: &'a str, extension: &str) -> &'a str {
    let suffix = format!(".{}", extension);
    file_name.strip_suffix(suffix.as_str()).unwrap_or(file_name)
}

/// Registry name for a component: the short name lowercased
pub fn manifest_name(short_name: &str) -> String {
    short_name.to_lowercase()
}

/// Output file name for a component's manifest
pub fn manifest_file_name(short_name: &str) -> String {
    format!("{}.json", manifest_name(short_name))
}
