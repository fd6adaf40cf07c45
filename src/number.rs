//! Number formatting for emitted markup.
//!
//! Every number written into a document goes through one of these
//! functions so that output can be diffed byte-for-byte between runs.

const DECIMALS: usize = 6;

/// Round to six decimal places and trim trailing zeros.
///
/// `10.0` prints as `10`, `4.5` as `4.5`, `1.0 / 9.0` as `0.111111`.
/// Negative zero (including values that round to it) prints as `0`.
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let s = format!("{:.*}", DECIMALS, value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Like [`fmt_num`], but integral values keep one fractional digit.
///
/// Used for computed path coordinates: `10.0`, `0.0`, `-10.0`.
pub fn fmt_coord(value: f64) -> String {
    let s = fmt_num(value);
    if !value.is_finite() || s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

/// Shortest text that parses back to exactly `value`.
///
/// Used where a value is echoed rather than computed, such as an arc radius:
/// `10.0` prints as `10`, `1.0 / 3.0` as `0.3333333333333333`.
pub fn fmt_exact(value: f64) -> String {
    if value == 0.0 { "0".to_string() } else { value.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(4.5), "4.5");
        assert_eq!(fmt_num(0.1), "0.1");
        assert_eq!(fmt_num(1.0 / 9.0), "0.111111");
        assert_eq!(fmt_num(-3.25), "-3.25");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-1e-12), "0");
        assert_eq!(fmt_coord(-1e-12), "0.0");
    }

    #[test]
    fn coords_keep_one_fractional_digit() {
        assert_eq!(fmt_coord(10.0), "10.0");
        assert_eq!(fmt_coord(-10.0), "-10.0");
        assert_eq!(fmt_coord(6.123233995736766e-16), "0.0");
        assert_eq!(fmt_coord(9.499999), "9.499999");
    }

    #[test]
    fn exact_values_survive_parsing() {
        assert_eq!(fmt_exact(10.0), "10");
        assert_eq!(fmt_exact(4.5), "4.5");
        assert_eq!(fmt_exact(-0.0), "0");
        for value in [1.0 / 3.0, 2.0_f64.sqrt(), 180.0 / 13.0, 1e-9] {
            assert_eq!(fmt_exact(value).parse::<f64>().unwrap(), value);
        }
    }
}
