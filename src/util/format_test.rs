use super::*;

#[test]
fn grouped_inserts_thousands_separators() {
    assert_eq!(grouped(0.0), "0");
    assert_eq!(grouped(999.0), "999");
    assert_eq!(grouped(1000.0), "1,000");
    assert_eq!(grouped(1_234_567.0), "1,234,567");
}

#[test]
fn grouped_keeps_significant_cents() {
    assert_eq!(grouped(1234.5), "1,234.5");
    assert_eq!(grouped(49.99), "49.99");
    assert_eq!(grouped(10.001), "10");
}

#[test]
fn grouped_handles_negative_and_non_finite() {
    assert_eq!(grouped(-1500.0), "-1,500");
    assert_eq!(grouped(-0.001), "0");
    assert_eq!(grouped(f64::NAN), "0");
}

#[test]
fn money_prefixes_dollar() {
    assert_eq!(money(250.0), "$250");
}

#[test]
fn millions_uses_one_decimal() {
    assert_eq!(millions(1_500_000.0), "$1.5M");
    assert_eq!(millions(0.0), "$0.0M");
}

#[test]
fn capitalize_first_char_only() {
    assert_eq!(capitalize("physical"), "Physical");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("éclair"), "Éclair");
}

#[test]
fn truncate_chars_counts_characters_not_bytes() {
    assert_eq!(truncate_chars("short", 10), "short");
    assert_eq!(truncate_chars("abcdef", 3), "abc...");
    assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
    assert_eq!(truncate_chars("exact", 5), "exact");
}
