/// Turns a name into a file stem: keeps alphanumerics, spaces, `-` and `_`,
/// drops everything else, then trims surrounding whitespace.
pub fn sanitize_filename(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();

    kept.trim().to_string()
}
