//! Rule types: display segments and the per-country rule record.

/// One element of a country's display layout, after the `+dial` prefix.
///
/// A rule's layout is a flat sequence of separators and digit groups, e.g.
/// `+38 (099) 123-45-67` is
/// `[Sep(" ("), Group(3), Sep(") "), Group(3), Sep("-"), Group(2), Sep("-"), Group(2)]`.
///
/// Keeping the layout structured (instead of a textual template with
/// placeholders) means rendering can stop exactly at the last entered digit,
/// so partially filled numbers never carry trailing punctuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A literal separator run (spaces, parentheses, hyphens).
    Sep(&'static str),
    /// A digit group of the given width.
    Group(usize),
}

/// Formatting rule for one country/dial code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountryRule {
    /// Two-letter country identifier, e.g. `"UA"`.
    pub code: &'static str,
    /// Numeric dialing prefix, digits only, no leading `+`.
    pub dial: &'static str,
    /// Optional trunk prefix for domestically entered numbers.
    ///
    /// When the digit stream starts with this prefix, the rule applies and
    /// the dial code is prefixed onto the stream before formatting; the
    /// trunk digits stay part of the subscriber number.
    pub local_prefix: Option<&'static str>,
    /// Maximum total digit count, dial code included.
    ///
    /// Always equals `dial.len()` plus the sum of group widths; [`rule`]
    /// derives it from the segments so the two can never disagree.
    pub max_digits: usize,
    /// Display layout after the `+dial` prefix.
    pub segments: &'static [Segment],
}

impl CountryRule {
    /// Length of the leading run of `digits` this rule accounts for.
    ///
    /// Returns the longer of the matching trunk prefix and dial code, or 0
    /// when neither is a prefix of `digits`.
    pub fn match_len(&self, digits: &str) -> usize {
        let mut len = 0;
        if let Some(prefix) = self.local_prefix
            && digits.starts_with(prefix)
        {
            len = prefix.len();
        }
        if digits.starts_with(self.dial) && self.dial.len() > len {
            len = self.dial.len();
        }
        len
    }

    /// Digit group widths in display order.
    pub fn group_widths(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Group(width) => Some(*width),
            Segment::Sep(_) => None,
        })
    }

    /// Total digit capacity of the layout, dial code excluded.
    pub fn digit_capacity(&self) -> usize {
        self.group_widths().sum()
    }

    /// The full placeholder mask for this rule, e.g. `"+38 (___) ___-__-__"`.
    pub fn mask(&self) -> String {
        let mut out = String::with_capacity(1 + self.dial.len() + self.segments.len() * 4);
        out.push('+');
        out.push_str(self.dial);
        for seg in self.segments {
            match seg {
                Segment::Sep(sep) => out.push_str(sep),
                Segment::Group(width) => {
                    for _ in 0..*width {
                        out.push('_');
                    }
                }
            }
        }
        out
    }
}

/// Build a rule, deriving `max_digits` from the segment layout.
pub(crate) const fn rule(
    code: &'static str,
    dial: &'static str,
    local_prefix: Option<&'static str>,
    segments: &'static [Segment],
) -> CountryRule {
    let mut capacity = 0;
    let mut i = 0;
    while i < segments.len() {
        if let Segment::Group(width) = segments[i] {
            capacity += width;
        }
        i += 1;
    }
    CountryRule {
        code,
        dial,
        local_prefix,
        max_digits: dial.len() + capacity,
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UA: CountryRule = rule(
        "UA",
        "38",
        Some("0"),
        &[
            Segment::Sep(" ("),
            Segment::Group(3),
            Segment::Sep(") "),
            Segment::Group(3),
            Segment::Sep("-"),
            Segment::Group(2),
            Segment::Sep("-"),
            Segment::Group(2),
        ],
    );

    #[test]
    fn max_digits_is_dial_plus_capacity() {
        assert_eq!(UA.digit_capacity(), 10);
        assert_eq!(UA.max_digits, 12);
    }

    #[test]
    fn mask_renders_dial_and_placeholders() {
        assert_eq!(UA.mask(), "+38 (___) ___-__-__");
    }

    #[test]
    fn match_len_prefers_the_longer_of_dial_and_trunk_prefix() {
        assert_eq!(UA.match_len("380991234567"), 2);
        assert_eq!(UA.match_len("0991234567"), 1);
        assert_eq!(UA.match_len("991234567"), 0);
        assert_eq!(UA.match_len(""), 0);
    }

    #[test]
    fn group_widths_follow_display_order() {
        let widths: Vec<usize> = UA.group_widths().collect();
        assert_eq!(widths, vec![3, 3, 2, 2]);
    }
}
