// Standards module: the fixed ISO/DIN equivalence table and its lookups.

mod data;

use data::STANDARD_MAPPINGS;

/// One authoritative ISO/DIN pair, stored in the three spellings the rewriter emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardMapping {
    /// `"ISO 4017"`
    pub iso_spaced: &'static str,
    /// `"ISO4017"`
    pub iso_unspaced: &'static str,
    /// `"/DIN 933"`
    pub din_append: &'static str,
}

impl StandardMapping {
    pub const fn new(
        iso_spaced: &'static str,
        iso_unspaced: &'static str,
        din_append: &'static str,
    ) -> Self {
        Self {
            iso_spaced,
            iso_unspaced,
            din_append,
        }
    }

    /// Bare ISO number, e.g. `"4017"`.
    pub fn iso_number(&self) -> &'static str {
        self.iso_unspaced.trim_start_matches("ISO")
    }

    /// Bare DIN number, e.g. `"933"`.
    pub fn din_number(&self) -> &'static str {
        self.din_append.trim_start_matches("/DIN ")
    }
}

/// Read-only view over an ordered set of mappings.
///
/// All lookups are exact string matches and return the first entry in
/// declaration order.
#[derive(Debug, Clone, Copy)]
pub struct StandardTable {
    entries: &'static [StandardMapping],
}

impl StandardTable {
    pub const fn new(entries: &'static [StandardMapping]) -> Self {
        Self { entries }
    }

    /// The built-in fastener table.
    pub fn builtin() -> Self {
        Self::new(&STANDARD_MAPPINGS)
    }

    pub fn iter(&self) -> std::slice::Iter<'static, StandardMapping> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Looks up by ISO number; matched against `"ISO" + digits`.
    pub fn find_by_iso(&self, digits: &str) -> Option<&'static StandardMapping> {
        let unspaced = format!("ISO{}", digits);
        self.entries.iter().find(|m| m.iso_unspaced == unspaced)
    }

    /// Looks up by bare DIN number (digits only).
    pub fn find_by_din(&self, digits: &str) -> Option<&'static StandardMapping> {
        self.entries.iter().find(|m| m.din_number() == digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_table_has_67_entries() {
        assert_eq!(StandardTable::builtin().len(), 67);
    }

    #[test]
    fn unspaced_form_is_spaced_form_without_space() {
        for m in StandardTable::builtin().iter() {
            assert_eq!(m.iso_spaced.replace(' ', ""), m.iso_unspaced, "{:?}", m);
            assert!(m.iso_spaced.starts_with("ISO "), "{:?}", m);
        }
    }

    #[test]
    fn din_suffix_is_slash_din_digits() {
        for m in StandardTable::builtin().iter() {
            assert!(m.din_append.starts_with("/DIN "), "{:?}", m);
            let digits = m.din_number();
            assert!(!digits.is_empty());
            assert!(digits.chars().all(|c| c.is_ascii_digit()), "{:?}", m);
        }
    }

    #[test]
    fn numbers_are_unique_on_both_sides() {
        let table = StandardTable::builtin();
        let isos: HashSet<_> = table.iter().map(|m| m.iso_number()).collect();
        let dins: HashSet<_> = table.iter().map(|m| m.din_number()).collect();
        assert_eq!(isos.len(), table.len());
        assert_eq!(dins.len(), table.len());
    }

    #[test]
    fn lookups_are_exact() {
        let table = StandardTable::builtin();
        assert_eq!(table.find_by_iso("4017").map(|m| m.din_append), Some("/DIN 933"));
        assert_eq!(table.find_by_din("933").map(|m| m.iso_spaced), Some("ISO 4017"));
        assert_eq!(table.find_by_din("1").map(|m| m.iso_spaced), Some("ISO 2339"));
        assert!(table.find_by_din("93").is_none());
        assert!(table.find_by_iso("401").is_none());
        assert!(table.find_by_iso("9999").is_none());
        assert!(table.find_by_iso("04017").is_none());
    }

    #[test]
    fn lookups_return_first_in_declaration_order() {
        static DUPLICATED: [StandardMapping; 2] = [
            StandardMapping::new("ISO 1", "ISO1", "/DIN 10"),
            StandardMapping::new("ISO 2", "ISO2", "/DIN 10"),
        ];
        let table = StandardTable::new(&DUPLICATED);
        assert_eq!(table.find_by_din("10").map(|m| m.iso_spaced), Some("ISO 1"));
    }
}
