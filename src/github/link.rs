const NEXT_RELATION: &str = r#"rel="next""#;

/// Extracts the `rel="next"` target from a `link` header value such as
/// `<https://api.github.com/user/repos?page=2>; rel="next", <...>; rel="last"`.
pub fn next_link(header: &str) -> Option<String> {
    let segment = header
        .split(',')
        .map(str::trim)
        .find(|segment| segment.ends_with(NEXT_RELATION))?;

    let target = segment
        .split(';')
        .next()?
        .trim()
        .trim_start_matches('<')
        .trim_end_matches('>');

    if target.is_empty() {
        return None;
    }

    Some(target.to_owned())
}
