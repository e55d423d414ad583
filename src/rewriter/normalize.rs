use super::scan::canonical_codes;
use regex::Regex;
use std::sync::OnceLock;

fn slash_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*/[\s/]*").expect("slash pattern"))
}

fn spaces_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" {2,}").expect("spaces pattern"))
}

/// Cosmetic pass applied to every resolved title.
///
/// Code tokens become `ISO <digits>` / `DIN <digits>`, a slash (or a run of
/// slashes) loses its surrounding whitespace, repeated spaces collapse and
/// the result is trimmed. Running it twice changes nothing.
pub fn normalize_title(title: &str) -> String {
    let title = canonical_codes(title);
    let title = slash_regex().replace_all(&title, "/");
    let title = spaces_regex().replace_all(&title, " ");
    title.trim().to_string()
}
