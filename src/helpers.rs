use unicode_general_category::{get_general_category, GeneralCategory};

/// Remove every non-printable character from a header value.
///
/// Printable means a letter, mark, number, punctuation or symbol, or the
/// ASCII space. Controls, any other separator (tabs, NBSP, line separators),
/// format characters such as zero-width spaces and tag characters,
/// private-use and unassigned code points are dropped. Everything else is
/// kept verbatim, so the result is stable under repeated application.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|&c| is_printable(c)).collect()
}

pub(crate) fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
    )
}

/// Strip one leading and one trailing double quote, each only if present.
pub(crate) fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}
