/// Normalizes a file name to lowercase with underscores instead of spaces.
///
/// The name is split at the last dot; earlier dots stay part of the base name.
/// Spaces are only replaced in the base name, the extension is just lowercased.
pub fn normalize_file_name(file_name: &str) -> String {
    let (base_name, extension) = match file_name.rfind('.') {
        Some(last_dot_index) => file_name.split_at(last_dot_index),
        None => (file_name, ""),
    };

    let mut normalized = base_name.to_lowercase().replace(' ', "_");
    normalized.push_str(&extension.to_lowercase());

    normalized
}
