/// The characters that separate the entries of the appender list.
pub const APPENDER_DELIMITERS: [char; 2] = [';', ','];

/// Splits the appender list into its entries, in order.
/// Entries are trimmed; runs of delimiters and blank entries produce nothing.
pub fn parse_appender_list(value: &str) -> Vec<String> {
    value
        .split(&APPENDER_DELIMITERS[..])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
