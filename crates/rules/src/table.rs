//! The rule catalog and prefix lookup.
//!
//! Entries are kept in declaration order because order is the documented
//! tie-break for duplicate dial codes (`US`/`CA` both use `1`; the earliest
//! entry wins). The `rules_snapshot` test in `mask_core` pins the table, so
//! reordering or editing an entry fails loudly.

use crate::rule::Segment::{Group, Sep};
use crate::rule::{CountryRule, rule};

/// All known country rules, in declaration order.
pub static RULES: &[CountryRule] = &[
    rule("AF", "93", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("BD", "880", None, &[Sep(" "), Group(3), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("AZ", "994", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("AM", "374", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(3)]),
    rule("BY", "375", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("BH", "973", None, &[Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("BT", "975", None, &[Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("BN", "673", None, &[Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("CF", "236", None, &[Sep(" "), Group(2), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("TD", "235", None, &[Sep(" "), Group(2), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("KM", "269", None, &[Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("CV", "238", None, &[Sep(" "), Group(2), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("AL", "355", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("DZ", "213", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("AO", "244", None, &[Sep(" "), Group(3), Sep(" "), Group(3), Sep(" "), Group(3)]),
    rule("AR", "54", None, &[Sep(" "), Group(2), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("AU", "61", None, &[Sep(" "), Group(1), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("AT", "43", None, &[Sep(" "), Group(3), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("BE", "32", None, &[Sep(" "), Group(3), Sep(" "), Group(3), Sep(" "), Group(3)]),
    rule("BJ", "229", None, &[Sep(" "), Group(2), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("BO", "591", None, &[Sep(" "), Group(2), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("BA", "387", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("BR", "55", None, &[Sep(" "), Group(2), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("BG", "359", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("CM", "237", None, &[Sep(" "), Group(2), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("CA", "1", None, &[Sep(" "), Group(3), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("CN", "86", None, &[Sep(" "), Group(3), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("CO", "57", None, &[Sep(" "), Group(3), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("HR", "385", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("CU", "53", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("CY", "357", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("CZ", "420", None, &[Sep(" "), Group(3), Sep(" "), Group(3), Sep(" "), Group(3)]),
    rule("DK", "45", None, &[Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("EE", "372", None, &[Sep(" "), Group(3), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("FI", "358", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("FR", "33", None, &[Sep(" "), Group(1), Sep(" "), Group(2), Sep(" "), Group(2), Sep(" "), Group(2), Sep(" "), Group(2)]),
    rule("DE", "49", None, &[Sep(" "), Group(3), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("GR", "30", None, &[Sep(" "), Group(3), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("HU", "36", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("IE", "353", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("IL", "972", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("IT", "39", None, &[Sep(" "), Group(3), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("JP", "81", None, &[Sep(" "), Group(2), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("LV", "371", None, &[Sep(" "), Group(3), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("LT", "370", None, &[Sep(" "), Group(3), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("LU", "352", None, &[Sep(" "), Group(3), Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("MD", "373", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("ME", "382", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("NL", "31", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("NO", "47", None, &[Sep(" "), Group(4), Sep(" "), Group(4)]),
    rule("PL", "48", None, &[Sep(" "), Group(3), Sep(" "), Group(3), Sep(" "), Group(3)]),
    rule("PT", "351", None, &[Sep(" "), Group(3), Sep(" "), Group(3), Sep(" "), Group(3)]),
    rule("RO", "40", None, &[Sep(" "), Group(3), Sep(" "), Group(3), Sep(" "), Group(3)]),
    rule("RS", "381", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("SK", "421", None, &[Sep(" "), Group(3), Sep(" "), Group(3), Sep(" "), Group(3)]),
    rule("SI", "386", None, &[Sep(" "), Group(2), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("ES", "34", None, &[Sep(" "), Group(3), Sep(" "), Group(3), Sep(" "), Group(3)]),
    rule("SE", "46", None, &[Sep(" "), Group(3), Sep(" "), Group(3), Sep(" "), Group(3)]),
    rule("CH", "41", None, &[Sep(" "), Group(3), Sep(" "), Group(3), Sep(" "), Group(3)]),
    rule("TR", "90", None, &[Sep(" "), Group(3), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("UA", "38", Some("0"), &[Sep(" ("), Group(3), Sep(") "), Group(3), Sep("-"), Group(2), Sep("-"), Group(2)]),
    rule("GB", "44", None, &[Sep(" "), Group(4), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("US", "1", None, &[Sep(" "), Group(3), Sep(" "), Group(3), Sep(" "), Group(4)]),
    rule("CA", "1", None, &[Sep(" "), Group(3), Sep(" "), Group(3), Sep(" "), Group(4)]),
];

/// Find the rule for a digit stream.
///
/// The rule whose dial code or trunk prefix matches the longest leading run
/// of `digits` wins; ties go to the earlier entry in [`RULES`]. Returns
/// `None` when nothing matches, including for the empty stream.
pub fn find_rule(digits: &str) -> Option<&'static CountryRule> {
    let mut best: Option<(&'static CountryRule, usize)> = None;
    for candidate in RULES {
        let len = candidate.match_len(digits);
        if len == 0 {
            continue;
        }
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((candidate, len));
        }
    }
    best.map(|(rule, _)| rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Segment;

    fn by_code(code: &str) -> &'static CountryRule {
        RULES
            .iter()
            .find(|r| r.code == code)
            .unwrap_or_else(|| panic!("no rule for {code}"))
    }

    #[test]
    fn catalog_has_sixty_four_entries() {
        assert_eq!(RULES.len(), 64);
    }

    #[test]
    fn every_code_is_two_ascii_uppercase_letters() {
        for rule in RULES {
            assert_eq!(rule.code.len(), 2, "{}", rule.code);
            assert!(
                rule.code.chars().all(|c| c.is_ascii_uppercase()),
                "{}",
                rule.code
            );
        }
    }

    #[test]
    fn every_dial_and_trunk_prefix_is_nonempty_ascii_digits() {
        for rule in RULES {
            assert!(!rule.dial.is_empty(), "{}", rule.code);
            assert!(
                rule.dial.chars().all(|c| c.is_ascii_digit()),
                "{}",
                rule.code
            );
            if let Some(prefix) = rule.local_prefix {
                assert!(!prefix.is_empty(), "{}", rule.code);
                assert!(prefix.chars().all(|c| c.is_ascii_digit()), "{}", rule.code);
            }
        }
    }

    #[test]
    fn every_rule_upholds_the_digit_budget() {
        for rule in RULES {
            assert_eq!(
                rule.dial.len() + rule.digit_capacity(),
                rule.max_digits,
                "{}",
                rule.code
            );
        }
    }

    #[test]
    fn every_layout_is_well_formed() {
        for rule in RULES {
            assert!(!rule.segments.is_empty(), "{}", rule.code);
            assert!(rule.group_widths().count() > 0, "{}", rule.code);
            assert!(rule.group_widths().all(|w| w > 0), "{}", rule.code);

            let mut prev_was_sep = false;
            for seg in rule.segments {
                match seg {
                    Segment::Sep(sep) => {
                        assert!(!prev_was_sep, "adjacent separators in {}", rule.code);
                        assert!(!sep.is_empty(), "{}", rule.code);
                        assert!(
                            sep.chars().all(|c| matches!(c, ' ' | '(' | ')' | '-')),
                            "{}: separator {sep:?}",
                            rule.code
                        );
                        prev_was_sep = true;
                    }
                    Segment::Group(_) => prev_was_sep = false,
                }
            }
        }
    }

    #[test]
    fn no_dial_code_starts_with_zero() {
        // A zero-leading dial code would collide with trunk-prefix matching.
        for rule in RULES {
            assert!(!rule.dial.starts_with('0'), "{}", rule.code);
        }
    }

    #[test]
    fn trunk_prefix_never_shadows_its_own_dial_code() {
        // If the dial code started with the trunk prefix, an international
        // entry would get the dial code prefixed a second time.
        for rule in RULES {
            if let Some(prefix) = rule.local_prefix {
                assert!(!rule.dial.starts_with(prefix), "{}", rule.code);
            }
        }
    }

    #[test]
    fn mask_length_is_dial_plus_capacity_plus_separators() {
        for rule in RULES {
            let sep_len: usize = rule
                .segments
                .iter()
                .map(|seg| match seg {
                    Segment::Sep(sep) => sep.len(),
                    Segment::Group(_) => 0,
                })
                .sum();
            assert_eq!(
                rule.mask().len(),
                1 + rule.dial.len() + rule.digit_capacity() + sep_len,
                "{}",
                rule.code
            );
        }
    }

    #[test]
    fn find_rule_returns_none_for_empty_and_unknown_streams() {
        assert!(find_rule("").is_none());
        assert!(find_rule("999123").is_none());
        assert!(find_rule("7000").is_none());
    }

    #[test]
    fn duplicate_dial_code_resolves_to_the_earliest_entry() {
        // US and both CA entries share dial 1.
        let rule = find_rule("15551234567").unwrap();
        assert_eq!(rule.code, "CA");
        assert!(std::ptr::eq(rule, &RULES[25]));
    }

    #[test]
    fn longer_dial_code_wins_over_a_shorter_one() {
        // Dial 38 (UA) is a prefix of 387 (BA) and 385 (HR); the longer
        // dial must win regardless of where the entries sit in the table.
        assert_eq!(find_rule("38712345").unwrap().code, "BA");
        assert_eq!(find_rule("38512345").unwrap().code, "HR");
        assert_eq!(find_rule("38012345").unwrap().code, "UA");
    }

    #[test]
    fn trunk_prefix_matches_domestic_streams() {
        assert_eq!(find_rule("0991234567").unwrap().code, "UA");
    }

    #[test]
    fn ukraine_layout_spot_check() {
        let ua = by_code("UA");
        assert_eq!(ua.dial, "38");
        assert_eq!(ua.local_prefix, Some("0"));
        assert_eq!(ua.max_digits, 12);
        assert_eq!(ua.mask(), "+38 (___) ___-__-__");
    }

    #[test]
    fn normalized_budget_spot_checks() {
        // These shipped with copy-paste maxDigits values that disagreed with
        // their own group layout; the derived budget is the layout's.
        assert_eq!(by_code("GB").max_digits, 13);
        assert_eq!(by_code("BD").max_digits, 14);
        assert_eq!(by_code("AR").max_digits, 12);
        assert_eq!(by_code("CO").max_digits, 13);
    }

    #[test]
    fn declaration_order_is_stable_at_the_edges() {
        assert_eq!(RULES[0].code, "AF");
        assert_eq!(RULES[RULES.len() - 1].code, "CA");
    }
}
