//! String preprocessing utilities
//!
//! The scoring engine itself never rewrites its inputs; callers that want
//! case-insensitive, punctuation-insensitive matching apply a processor such
//! as [`default_process`] before scoring.

/// Standard preprocessor: lowercase the string and replace every
/// non-alphanumeric character with a space, then trim.
///
/// # Example
/// ```
/// use fuzzscore::algorithms::normalize::default_process;
///
/// assert_eq!(default_process(" New York Mets! "), "new york mets");
/// ```
#[must_use]
pub fn default_process(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase();
    replaced.trim().to_string()
}
