//! # rules
//!
//! Static catalog of per-country phone formatting rules.
//!
//! Each [`CountryRule`] describes one country/dial code: the numeric dialing
//! prefix, an optional domestic trunk prefix, and the display layout as a
//! sequence of [`Segment`]s (literal separators and digit group widths).
//!
//! Lookup is string-in, rule-out: [`find_rule`] takes a digit stream (the
//! caller strips punctuation first) and returns the rule whose dial code or
//! trunk prefix matches the longest leading run of digits, with declaration
//! order in [`RULES`] breaking ties.
//!
//! This crate is deliberately free of formatting logic; it only answers
//! "which rule applies" and "what shape does this rule render as".

mod rule;
mod table;

pub use rule::{CountryRule, Segment};
pub use table::{RULES, find_rule};
