//! String ordering for roster views.
//!
//! Views are sorted the way a person reading the list expects rather than by
//! raw code point: `"amy"` and `"Amy"` sit next to each other, `"Émile"`
//! sorts with the other E names, and all of them come before `"Zoe"`.
//! Comparison works in three passes over the canonical decomposition (NFD):
//!
//! 1. **Primary**: base letters only, case-folded, accents stripped.
//! 2. **Secondary**: accents count; an unaccented letter sorts first.
//! 3. **Tertiary**: case counts; at the first differing position lowercase
//!    sorts before uppercase.
//!
//! Strings that are still equal fall back to code-point order so the result
//! is a total order.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn secondary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn tertiary_cmp(a: &str, b: &str) -> Ordering {
    for (x, y) in a.nfd().zip(b.nfd()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    Ordering::Equal
}

pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary_cmp(a, b))
        .then_with(|| a.cmp(b))
}
