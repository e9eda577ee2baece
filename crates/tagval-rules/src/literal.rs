//! # Integer Literals
//!
//! Two literal syntaxes are accepted by the rule language:
//!
//! - **Decimal** ([`parse_decimal`]) for `len`: optional sign, base-10 digits.
//! - **Prefixed** ([`parse_prefixed`]) for `min`, `max` and integer `in`
//!   entries. The base is taken from the prefix: `0x`/`0X` hexadecimal,
//!   `0o`/`0O` octal, `0b`/`0B` binary, a bare leading `0` octal, otherwise
//!   decimal. `_` may separate digits, or follow a prefix directly
//!   (`1_000`, `0x_ff`), but may not lead, trail or repeat.
//!
//! Both return `None` on any malformed input or on `i64` overflow.

/// Parse an optionally signed base-10 integer.
pub fn parse_decimal(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

/// Parse an optionally signed integer whose base is given by its prefix.
pub fn parse_prefixed(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'+' => (false, &text[1..]),
        b'-' => (true, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits, prefixed) = split_radix(unsigned);
    let digits = strip_separators(digits, prefixed)?;

    // `from_str_radix` would accept a second sign here.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let signed = if negative {
        format!("-{digits}")
    } else {
        digits
    };
    i64::from_str_radix(&signed, radix).ok()
}

fn split_radix(text: &str) -> (u32, &str, bool) {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        return match bytes[1] {
            b'x' | b'X' => (16, &text[2..], true),
            b'o' | b'O' => (8, &text[2..], true),
            b'b' | b'B' => (2, &text[2..], true),
            _ => (8, &text[1..], true),
        };
    }
    (10, text, false)
}

fn strip_separators(digits: &str, prefixed: bool) -> Option<String> {
    if !digits.contains('_') {
        return Some(digits.to_string());
    }

    let mut out = String::with_capacity(digits.len());
    // A prefix counts as a digit so `0x_ff` is accepted.
    let mut after_digit = prefixed;
    for ch in digits.chars() {
        if ch == '_' {
            if !after_digit {
                return None;
            }
            after_digit = false;
        } else {
            out.push(ch);
            after_digit = true;
        }
    }

    after_digit.then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decimal_accepts_signs() {
        assert_eq!(parse_decimal("5"), Some(5));
        assert_eq!(parse_decimal("+5"), Some(5));
        assert_eq!(parse_decimal("-5"), Some(-5));
        assert_eq!(parse_decimal("0x5"), None);
        assert_eq!(parse_decimal("five"), None);
    }

    #[test]
    fn prefixed_detects_base() {
        assert_eq!(parse_prefixed("42"), Some(42));
        assert_eq!(parse_prefixed("0x2A"), Some(42));
        assert_eq!(parse_prefixed("0X2a"), Some(42));
        assert_eq!(parse_prefixed("0o52"), Some(42));
        assert_eq!(parse_prefixed("052"), Some(42));
        assert_eq!(parse_prefixed("0b101010"), Some(42));
        assert_eq!(parse_prefixed("0"), Some(0));
        assert_eq!(parse_prefixed("-0x10"), Some(-16));
        assert_eq!(parse_prefixed("+7"), Some(7));
    }

    #[test]
    fn prefixed_rejects_malformed() {
        assert_eq!(parse_prefixed(""), None);
        assert_eq!(parse_prefixed("-"), None);
        assert_eq!(parse_prefixed("0x"), None);
        assert_eq!(parse_prefixed("08"), None);
        assert_eq!(parse_prefixed("0b2"), None);
        assert_eq!(parse_prefixed("--1"), None);
        assert_eq!(parse_prefixed("0x+1"), None);
        assert_eq!(parse_prefixed("x"), None);
        assert_eq!(parse_prefixed("1.5"), None);
    }

    #[test]
    fn separators_between_digits_only() {
        assert_eq!(parse_prefixed("1_000"), Some(1000));
        assert_eq!(parse_prefixed("0x_ff"), Some(255));
        assert_eq!(parse_prefixed("0_17"), Some(15));
        assert_eq!(parse_prefixed("_1"), None);
        assert_eq!(parse_prefixed("1_"), None);
        assert_eq!(parse_prefixed("1__0"), None);
        assert_eq!(parse_prefixed("0x_"), None);
    }

    #[test]
    fn prefixed_covers_full_i64_range() {
        assert_eq!(parse_prefixed("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_prefixed("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_prefixed("-0x8000000000000000"), Some(i64::MIN));
        assert_eq!(parse_prefixed("9223372036854775808"), None);
    }

    proptest! {
        #[test]
        fn decimal_rendering_round_trips(v in any::<i64>()) {
            prop_assert_eq!(parse_prefixed(&v.to_string()), Some(v));
            prop_assert_eq!(parse_decimal(&v.to_string()), Some(v));
        }

        #[test]
        fn hex_rendering_parses(v in 0i64..=i64::MAX) {
            prop_assert_eq!(parse_prefixed(&format!("{v:#x}")), Some(v));
            prop_assert_eq!(parse_prefixed(&format!("-{v:#x}")), Some(-v));
        }
    }
}
