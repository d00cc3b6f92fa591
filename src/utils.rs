/// Tokenizes a raw song list into trimmed, non-empty queries.
///
/// Supported delimiters, in priority order: `", "` (comma plus space) if
/// present, else newlines (blank lines dropped), else bare commas. The same
/// content yields the same token sequence regardless of which delimiter the
/// caller used.
pub fn parse_song_list(raw: &str) -> Vec<String> {
    let tokens: Vec<&str> = if raw.contains(", ") {
        raw.split(", ").collect()
    } else if raw.contains('\n') {
        raw.lines().collect()
    } else {
        raw.split(',').collect()
    };

    tokens
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
