use std::path::Path;

use langcat::plural_rules;

/// Validate that the translation directory exists and is a directory
pub fn validate_directory(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("Directory does not exist: {}", path));
    }

    if !path_obj.is_dir() {
        return Err(format!("Path is not a directory: {}", path));
    }

    Ok(())
}

/// Validate that a language code names a supported language.
///
/// Returns the canonical identifier (`en-US` becomes `en_US`).
pub fn validate_language_code(lang: &str) -> Result<&'static str, String> {
    if lang.is_empty() {
        return Err("Language code cannot be empty".to_string());
    }

    plural_rules::descriptor(lang).map(|d| d.id).map_err(|_| {
        let supported: Vec<&str> = plural_rules::available_languages()
            .iter()
            .map(|d| d.id)
            .collect();
        format!(
            "Unsupported language: {}. Supported languages: {}",
            lang,
            supported.join(", ")
        )
    })
}
