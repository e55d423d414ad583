use super::normalize::normalize_title;
use super::scan::{scan_codes, scan_pairs, CodeKind, CodeMatch};
use crate::standards::{StandardMapping, StandardTable};
use std::fmt;

/// Why a title could not be paired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    NoCodes,
    UnknownDin(String),
    UnknownIso(String),
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unresolved::NoCodes => write!(f, "no ISO or DIN code"),
            Unresolved::UnknownDin(n) => write!(f, "DIN {} has no known ISO equivalent", n),
            Unresolved::UnknownIso(n) => write!(f, "ISO {} has no known DIN equivalent", n),
        }
    }
}

/// The branch the rewriter took for a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The title already carries a known `ISO x/DIN y` pair; only spacing is fixed.
    ValidPair(&'static StandardMapping),
    /// Resolved from the leftmost DIN number.
    DinLed(&'static StandardMapping),
    /// No DIN present; resolved from the leftmost ISO number.
    IsoLed(&'static StandardMapping),
    Unresolved(Unresolved),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub outcome: Outcome,
    /// Corrected title, or the untouched input when unresolved.
    pub title: String,
}

impl Rewrite {
    pub fn is_resolved(&self) -> bool {
        !matches!(self.outcome, Outcome::Unresolved(_))
    }

    /// The corrected title if it differs byte-for-byte from `original`.
    pub fn proposed_change(&self, original: &str) -> Option<&str> {
        (self.is_resolved() && self.title != original).then_some(self.title.as_str())
    }
}

/// Pure title correction against a mapping table. Never fails: anything it
/// cannot pair comes back as [`Outcome::Unresolved`] with the input intact.
#[derive(Debug, Clone, Copy)]
pub struct TitleRewriter {
    table: StandardTable,
}

impl TitleRewriter {
    pub fn new(table: StandardTable) -> Self {
        Self { table }
    }

    pub fn rewrite(&self, title: &str) -> Rewrite {
        let codes = scan_codes(title);
        let outcome = self.classify(title, &codes);
        let corrected = match &outcome {
            Outcome::ValidPair(_) => normalize_title(title),
            Outcome::DinLed(mapping) => {
                let iso_head = codes
                    .iter()
                    .find(|c| c.kind == CodeKind::Iso && c.number == mapping.iso_number())
                    .map_or(mapping.iso_spaced, |c| c.text);
                normalize_title(&assemble(title, &codes, mapping, iso_head))
            }
            Outcome::IsoLed(mapping) => {
                normalize_title(&assemble(title, &codes, mapping, mapping.iso_spaced))
            }
            Outcome::Unresolved(_) => title.to_string(),
        };
        Rewrite {
            outcome,
            title: corrected,
        }
    }

    fn classify(&self, title: &str, codes: &[CodeMatch<'_>]) -> Outcome {
        let pairs = scan_pairs(title);
        if let Some(mapping) = self.table.iter().find(|m| {
            pairs
                .iter()
                .any(|&(iso, din)| iso == m.iso_number() && din == m.din_number())
        }) {
            return Outcome::ValidPair(mapping);
        }

        if let Some(din) = codes.iter().find(|c| c.kind == CodeKind::Din) {
            return match self.table.find_by_din(din.number) {
                Some(mapping) => Outcome::DinLed(mapping),
                None => Outcome::Unresolved(Unresolved::UnknownDin(din.number.to_string())),
            };
        }

        if let Some(iso) = codes.iter().find(|c| c.kind == CodeKind::Iso) {
            return match self.table.find_by_iso(iso.number) {
                Some(mapping) => Outcome::IsoLed(mapping),
                None => Outcome::Unresolved(Unresolved::UnknownIso(iso.number.to_string())),
            };
        }

        Outcome::Unresolved(Unresolved::NoCodes)
    }
}

/// Numbers of `kind` other than `resolved`, first occurrence order, no repeats.
fn other_numbers<'a>(codes: &[CodeMatch<'a>], kind: CodeKind, resolved: &str) -> Vec<&'a str> {
    let mut numbers: Vec<&str> = Vec::new();
    for code in codes.iter().filter(|c| c.kind == kind && c.number != resolved) {
        if !numbers.contains(&code.number) {
            numbers.push(code.number);
        }
    }
    numbers
}

/// `<iso-head>[/ISO n...]/DIN d[/DIN n...] <trailing text>`
fn assemble(
    title: &str,
    codes: &[CodeMatch<'_>],
    mapping: &StandardMapping,
    iso_head: &str,
) -> String {
    let mut parts = vec![iso_head.to_string()];
    parts.extend(
        other_numbers(codes, CodeKind::Iso, mapping.iso_number())
            .into_iter()
            .map(|n| format!("ISO {}", n)),
    );
    parts.push(mapping.din_append.trim_start_matches('/').to_string());
    parts.extend(
        other_numbers(codes, CodeKind::Din, mapping.din_number())
            .into_iter()
            .map(|n| format!("DIN {}", n)),
    );

    let trailing = codes.last().map_or("", |c| &title[c.end..]);
    format!("{} {}", parts.join("/"), trailing.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter() -> TitleRewriter {
        TitleRewriter::new(StandardTable::builtin())
    }

    fn fixed(title: &str) -> String {
        rewriter().rewrite(title).title
    }

    #[test]
    fn lone_iso_gets_din_appended() {
        let rewrite = rewriter().rewrite("ISO4017 Hex bolt");
        assert_eq!(rewrite.title, "ISO 4017/DIN 933 Hex bolt");
        assert!(matches!(rewrite.outcome, Outcome::IsoLed(m) if m.din_number() == "933"));
    }

    #[test]
    fn lone_din_gets_iso_prepended() {
        let rewrite = rewriter().rewrite("DIN 933");
        assert_eq!(rewrite.title, "ISO 4017/DIN 933");
        assert!(matches!(rewrite.outcome, Outcome::DinLed(m) if m.iso_number() == "4017"));
    }

    #[test]
    fn valid_pair_only_gets_spacing_fixed() {
        for raw in [
            "ISO  4017 /  DIN   933",
            "ISO4017/DIN933",
            "iso 4017 / din 933",
            "  ISO 4017/ DIN 933  ",
        ] {
            let rewrite = rewriter().rewrite(raw);
            assert!(matches!(rewrite.outcome, Outcome::ValidPair(_)), "{:?}", raw);
            assert_eq!(rewrite.title, "ISO 4017/DIN 933", "{:?}", raw);
        }
    }

    #[test]
    fn valid_pair_keeps_surrounding_text() {
        assert_eq!(
            fixed("Hex bolt ISO 4017 / DIN 933  M8"),
            "Hex bolt ISO 4017/DIN 933 M8"
        );
    }

    #[test]
    fn canonical_title_is_unchanged() {
        let rewrite = rewriter().rewrite("ISO 4017/DIN 933 Hex bolt");
        assert_eq!(rewrite.proposed_change("ISO 4017/DIN 933 Hex bolt"), None);
        assert!(rewrite.is_resolved());
    }

    #[test]
    fn extra_iso_numbers_follow_the_resolved_one() {
        assert_eq!(fixed("ISO4017/ISO9999 DIN 933"), "ISO 4017/ISO 9999/DIN 933");
        assert_eq!(fixed("DIN 933 ISO 9999 ISO 4017"), "ISO 4017/ISO 9999/DIN 933");
    }

    #[test]
    fn extra_din_numbers_follow_the_resolved_one() {
        assert_eq!(fixed("DIN 933 / DIN 9999 Bolt"), "ISO 4017/DIN 933/DIN 9999 Bolt");
    }

    #[test]
    fn din_before_iso_is_reordered() {
        let rewrite = rewriter().rewrite("DIN 933 / ISO 4017 M10");
        assert!(matches!(rewrite.outcome, Outcome::DinLed(_)));
        assert_eq!(rewrite.title, "ISO 4017/DIN 933 M10");
    }

    #[test]
    fn leftmost_din_drives_resolution() {
        assert_eq!(fixed("DIN 934 DIN 933"), "ISO 4032/DIN 934/DIN 933");
    }

    #[test]
    fn resolved_iso_keeps_title_spelling_before_normalizing() {
        let rewrite = rewriter().rewrite("iso4017 DIN933 zinc plated");
        assert!(matches!(rewrite.outcome, Outcome::DinLed(_)));
        assert_eq!(rewrite.title, "ISO 4017/DIN 933 zinc plated");
    }

    #[test]
    fn leading_text_is_dropped_when_reassembled() {
        assert_eq!(fixed("Hex bolt ISO 4017 M8x20"), "ISO 4017/DIN 933 M8x20");
    }

    #[test]
    fn title_without_codes_is_unresolved() {
        let rewrite = rewriter().rewrite("Hex bolt  M8 ");
        assert_eq!(rewrite.outcome, Outcome::Unresolved(Unresolved::NoCodes));
        assert_eq!(rewrite.title, "Hex bolt  M8 ");
        assert_eq!(rewrite.proposed_change("Hex bolt  M8 "), None);
    }

    #[test]
    fn unknown_numbers_are_unresolved_and_untouched() {
        let rewrite = rewriter().rewrite("ISO  9999 bolt");
        assert_eq!(
            rewrite.outcome,
            Outcome::Unresolved(Unresolved::UnknownIso("9999".into()))
        );
        assert_eq!(rewrite.title, "ISO  9999 bolt");

        let rewrite = rewriter().rewrite("ISO 4017 DIN 9999");
        assert_eq!(
            rewrite.outcome,
            Outcome::Unresolved(Unresolved::UnknownDin("9999".into()))
        );
        assert_eq!(rewrite.proposed_change("ISO 4017 DIN 9999"), None);
    }

    #[test]
    fn first_iso_decides_when_no_din() {
        let rewrite = rewriter().rewrite("ISO 9999 ISO 4017");
        assert_eq!(
            rewrite.outcome,
            Outcome::Unresolved(Unresolved::UnknownIso("9999".into()))
        );
        assert_eq!(fixed("ISO 4017 ISO 9999"), "ISO 4017/ISO 9999/DIN 933");
    }

    #[test]
    fn din_number_prefix_does_not_match_longer_number() {
        // DIN 1 is in the table; DIN 125 must not resolve through it.
        assert_eq!(fixed("DIN 125"), "ISO 7089/DIN 125");
        assert_eq!(fixed("ISO 2339/DIN 125"), "ISO 7089/ISO 2339/DIN 125");
    }

    #[test]
    fn table_order_breaks_ties_between_valid_pairs() {
        static TABLE: [StandardMapping; 2] = [
            StandardMapping::new("ISO 2", "ISO2", "/DIN 20"),
            StandardMapping::new("ISO 1", "ISO1", "/DIN 10"),
        ];
        let rewriter = TitleRewriter::new(StandardTable::new(&TABLE));
        let rewrite = rewriter.rewrite("ISO 1/DIN 10 ISO 2/DIN 20");
        assert!(matches!(rewrite.outcome, Outcome::ValidPair(m) if m.iso_number() == "2"));
        assert_eq!(rewrite.title, "ISO 1/DIN 10 ISO 2/DIN 20");
    }

    #[test]
    fn codes_glued_to_digits_are_not_duplicated() {
        let rewrite = rewriter().rewrite("ISO4017DIN933");
        assert!(matches!(rewrite.outcome, Outcome::DinLed(_)));
        assert_eq!(rewrite.title, "ISO 4017/DIN 933");
        assert_eq!(
            fixed("ISO 4017 iso4014ISO 4017 Hex"),
            "ISO 4017/ISO 4014/DIN 933 Hex"
        );
    }

    #[test]
    fn non_ascii_lookalike_token_is_not_a_code() {
        let rewrite = rewriter().rewrite("I\u{17F}O 4017 bolt");
        assert_eq!(rewrite.outcome, Outcome::Unresolved(Unresolved::NoCodes));
    }

    #[test]
    fn rewriting_generated_titles_is_idempotent() {
        let parts = [
            "ISO 4017", "iso4014", "DIN 933", "din934", "ISO 9999", "DIN 1", "Hex", "M8", "4014",
            "/",
        ];
        let separators = ["", " ", " / "];
        let rewriter = rewriter();
        for a in parts {
            for b in parts {
                for c in parts {
                    for s1 in separators {
                        for s2 in separators {
                            let title = format!("{a}{s1}{b}{s2}{c}");
                            let once = rewriter.rewrite(&title).title;
                            assert_eq!(rewriter.rewrite(&once).title, once, "input {:?}", title);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn rewriting_is_idempotent() {
        for raw in [
            "ISO4017 Hex bolt",
            "DIN 933",
            "ISO4017/ISO9999 DIN 933",
            "din 912 / ISO 4762   cylinder screw",
            "DIN 934 DIN 933 // nut",
            "Hex bolt ISO 4017 M8x20",
            "ISO 10642 / DIN 7991",
            "ISO 4017 ISO 9999 ISO 4017",
            "DIN 125 washer / A2",
            "ISO 9999 unknown",
            "no codes at all",
        ] {
            let once = fixed(raw);
            assert_eq!(fixed(&once), once, "input {:?}", raw);
        }
    }

    #[test]
    fn every_builtin_mapping_round_trips_from_either_side() {
        for m in StandardTable::builtin().iter() {
            let canonical = format!("{}{}", m.iso_spaced, m.din_append);
            assert_eq!(fixed(m.iso_unspaced), canonical);
            assert_eq!(fixed(&format!("DIN {}", m.din_number())), canonical);
            assert_eq!(fixed(&canonical), canonical);
        }
    }
}
