// src/core/format.rs
//
// Display formatting shared by the GUI cards, the comparison table and the CLI.

use std::fmt;

pub const STAR_FULL: char = '★';
pub const STAR_HALF: char = '⯨';
pub const STAR_EMPTY: char = '☆';

/// Number of slots in a star rating.
pub const STAR_SLOTS: u8 = 5;

/// USD with two fraction digits and comma grouping.
/// Absent, zero and non-finite prices all read `$0.00`.
pub fn format_price(value: Option<f64>) -> String {
    let v = match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => return s!("$0.00"),
    };

    let cents = (v.abs() * 100.0).round() as u64;
    let whole = group_digits(cents / 100);
    let frac = cents % 100;

    if v < 0.0 && cents > 0 {
        format!("-${}.{:02}", whole, frac)
    } else {
        format!("${}.{:02}", whole, frac)
    }
}

/// Integer with comma thousands separators (`12345` -> `12,345`).
pub fn format_count(n: u64) -> String {
    group_digits(n)
}

fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-percent discount, only when `original > price`.
pub fn discount_percent(price: f64, original: Option<f64>) -> Option<i64> {
    let original = original?;
    if !(original.is_finite() && price.is_finite()) { return None; }
    if original > price && original > 0.0 {
        Some(((1.0 - price / original) * 100.0).round() as i64)
    } else {
        None
    }
}

/// Five-slot star breakdown; `full + half + empty == 5` always.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stars {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl Stars {
    pub fn slots(&self) -> u8 {
        self.full + self.half as u8 + self.empty
    }

    pub fn glyphs(&self) -> String {
        let mut s = String::with_capacity(STAR_SLOTS as usize * 3);
        for _ in 0..self.full { s.push(STAR_FULL); }
        if self.half { s.push(STAR_HALF); }
        for _ in 0..self.empty { s.push(STAR_EMPTY); }
        s
    }
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glyphs())
    }
}

/// Ratings outside [0, 5] are clamped; NaN counts as 0.
pub fn star_rating(value: f64) -> Stars {
    let r = if value.is_finite() { value.clamp(0.0, STAR_SLOTS as f64) } else { 0.0 };
    let full = r.floor() as u8;
    let half = full < STAR_SLOTS && r - r.floor() >= 0.5;
    let empty = STAR_SLOTS - full - half as u8;
    Stars { full, half, empty }
}
