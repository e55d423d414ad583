// Extraction of ISO/DIN code occurrences from free text.
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Iso,
    Din,
}

/// A single `ISO <digits>` or `DIN <digits>` occurrence inside a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMatch<'a> {
    pub kind: CodeKind,
    /// The occurrence exactly as written, e.g. `"iso4017"`.
    pub text: &'a str,
    pub number: &'a str,
    pub end: usize,
}

// Tokens are ASCII-only so that matching agrees with `eq_ignore_ascii_case`.
fn code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i-u:(ISO|DIN))\s*([0-9]+)").expect("code pattern"))
}

fn pair_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i-u:ISO)\s*([0-9]+)\s*/\s*(?i-u:DIN)\s*([0-9]+)").expect("pair pattern")
    })
}

/// A token glued to a preceding letter (`RADIN 12`) is not a code; one
/// glued to a digit (`M8DIN 933`) is.
fn glued_to_word(title: &str, start: usize) -> bool {
    title[..start]
        .chars()
        .next_back()
        .is_some_and(char::is_alphabetic)
}

/// All code occurrences, left to right.
pub fn scan_codes(title: &str) -> Vec<CodeMatch<'_>> {
    code_regex()
        .captures_iter(title)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if glued_to_word(title, whole.start()) {
                return None;
            }
            let kind = if caps[1].eq_ignore_ascii_case("ISO") {
                CodeKind::Iso
            } else {
                CodeKind::Din
            };
            Some(CodeMatch {
                kind,
                text: whole.as_str(),
                number: caps.get(2)?.as_str(),
                end: whole.end(),
            })
        })
        .collect()
}

/// Every `ISO x / DIN y` adjacency in the title as `(x, y)` number pairs.
pub fn scan_pairs(title: &str) -> Vec<(&str, &str)> {
    pair_regex()
        .captures_iter(title)
        .filter(|caps| caps.get(0).is_some_and(|m| !glued_to_word(title, m.start())))
        .filter_map(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
        .collect()
}

/// Rewrites every code token as upper-case word, one space, digits. Uses the
/// same rules as [`scan_codes`], so exactly the scanned codes are touched.
pub(crate) fn canonical_codes(title: &str) -> String {
    code_regex()
        .replace_all(title, |caps: &regex::Captures| match caps.get(0) {
            Some(whole) if !glued_to_word(title, whole.start()) => {
                format!("{} {}", caps[1].to_ascii_uppercase(), &caps[2])
            }
            _ => caps[0].to_string(),
        })
        .into_owned()
}
