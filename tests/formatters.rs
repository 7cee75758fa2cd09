// tests/formatters.rs
use amasift_compare::core::format::{discount_percent, format_count, format_price, star_rating, Stars};

#[test]
fn price_formatting() {
    assert_eq!(format_price(Some(19.99)), "$19.99");
    assert_eq!(format_price(Some(5.0)), "$5.00");
    assert_eq!(format_price(Some(1234.5)), "$1,234.50");
    assert_eq!(format_price(Some(1_000_000.0)), "$1,000,000.00");
    assert_eq!(format_price(Some(0.0)), "$0.00");
    assert_eq!(format_price(None), "$0.00");
}

#[test]
fn counts_are_grouped() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(12345), "12,345");
}

#[test]
fn star_breakdowns() {
    assert_eq!(star_rating(4.5), Stars { full: 4, half: true, empty: 0 });
    assert_eq!(star_rating(3.2), Stars { full: 3, half: false, empty: 2 });
    assert_eq!(star_rating(0.0), Stars { full: 0, half: false, empty: 5 });
    assert_eq!(star_rating(5.0), Stars { full: 5, half: false, empty: 0 });
}

#[test]
fn stars_always_total_five() {
    for tenth in -10..=70 {
        let s = star_rating(tenth as f64 / 10.0);
        assert_eq!(s.slots(), 5, "rating {}", tenth as f64 / 10.0);
    }
    assert_eq!(star_rating(f64::NAN).slots(), 5);
}

#[test]
fn star_glyphs() {
    assert_eq!(star_rating(2.5).to_string(), "★★⯨☆☆");
}

#[test]
fn discount_only_when_original_is_higher() {
    assert_eq!(discount_percent(80.0, Some(100.0)), Some(20));
    assert_eq!(discount_percent(100.0, Some(100.0)), None);
    assert_eq!(discount_percent(120.0, Some(100.0)), None);
    assert_eq!(discount_percent(10.0, None), None);
    assert_eq!(discount_percent(66.0, Some(99.0)), Some(33));
}
