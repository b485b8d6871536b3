//! Numeric-aware string ordering, so that `file2` sorts before `file10`.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

/// A number, optionally preceded by whitespace and a sign. Integer parts may
/// carry `,` grouping separators.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[-+]?(?:[0-9][0-9,]*(?:\.[0-9]+)?|\.[0-9]+)").expect("number pattern is valid")
});

/// Compare two strings, treating embedded numbers by value.
///
/// Both names are split into text characters and numeric runs. Whitespace
/// and sign in front of a number belong to the number. Text compares
/// case-insensitively, numbers by exact decimal value, and a number sorts
/// where the digit `0` would among text characters. Remaining ties are
/// broken by letter case (lowercase first), then by the raw text outside
/// numbers, so the result is a total order and `"007"` still equals `"7"`.
pub fn natural_compare(a: &str, b: &str) -> Ordering {
    NaturalKey::new(a).cmp(&NaturalKey::new(b))
}

/// Sort key of a name, compared level by level.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct NaturalKey {
    primary: Vec<Atom>,
    /// `true` for each uppercase text character.
    case: Vec<bool>,
    /// Text characters outside numeric runs, as written.
    text: Vec<char>,
}

impl NaturalKey {
    fn new(s: &str) -> Self {
        let mut key = NaturalKey {
            primary: Vec::new(),
            case: Vec::new(),
            text: Vec::new(),
        };
        let mut last = 0;
        for m in NUMBER.find_iter(s) {
            key.push_text(&s[last..m.start()]);
            key.primary.push(Atom::Number(Decimal::parse(m.as_str())));
            last = m.end();
        }
        key.push_text(&s[last..]);
        key
    }

    fn push_text(&mut self, text: &str) {
        for c in text.chars() {
            self.primary.extend(c.to_lowercase().map(Atom::Text));
            self.case.push(c.is_uppercase());
            self.text.push(c);
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Atom {
    Text(char),
    Number(Decimal),
}

impl Ord for Atom {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Atom::Text(a), Atom::Text(b)) => a.cmp(b),
            (Atom::Number(a), Atom::Number(b)) => a.cmp(b),
            // ASCII digits never end up in `Text`, so these are never equal.
            (Atom::Number(_), Atom::Text(c)) => '0'.cmp(c),
            (Atom::Text(c), Atom::Number(_)) => c.cmp(&'0'),
        }
    }
}

impl PartialOrd for Atom {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Exact decimal value of a numeric run: no leading zeros in `int`, no
/// trailing zeros in `frac`, zero is never negative.
#[derive(Debug, PartialEq, Eq)]
struct Decimal {
    negative: bool,
    int: String,
    frac: String,
}

impl Decimal {
    fn parse(run: &str) -> Self {
        let run = run.trim_start();
        let (negative, digits) = match run.as_bytes().first() {
            Some(b'-') => (true, &run[1..]),
            Some(b'+') => (false, &run[1..]),
            _ => (false, run),
        };
        let digits = digits.replace(',', "");
        let (int, frac) = digits.split_once('.').unwrap_or((&digits, ""));
        let int = int.trim_start_matches('0').to_string();
        let frac = frac.trim_end_matches('0').to_string();
        let negative = negative && !(int.is_empty() && frac.is_empty());
        Decimal {
            negative,
            int,
            frac,
        }
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.int
            .len()
            .cmp(&other.int.len())
            .then_with(|| self.int.cmp(&other.int))
            .then_with(|| self.frac.cmp(&other.frac))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
