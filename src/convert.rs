//! Number base conversion for the number-system page

/// Smallest and largest supported radix
pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Base {0} is not supported (use 2 to 36)")]
    InvalidBase(u32),

    #[error("Please enter a number")]
    Empty,

    #[error("'{digit}' is not a valid base-{base} digit")]
    InvalidDigit { digit: char, base: u32 },

    #[error("Number is too large to convert")]
    Overflow,
}

/// Convert `input` written in base `from` to base `to`.
///
/// Accepts a leading `-`, `_` or whitespace separators and a `0b`/`0o`/`0x`
/// prefix matching `from`. Digits above 9 are returned uppercase.
pub fn convert(input: &str, from: u32, to: u32) -> Result<String, ConvertError> {
    for base in [from, to] {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(ConvertError::InvalidBase(base));
        }
    }

    let (negative, magnitude) = parse_magnitude(input, from)?;
    Ok(format_radix(negative, magnitude, to))
}

fn parse_magnitude(input: &str, base: u32) -> Result<(bool, u128), ConvertError> {
    let cleaned: String = input
        .chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .collect();

    let (negative, rest) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(cleaned.as_str())),
    };
    let digits = strip_radix_prefix(rest, base);
    if digits.is_empty() {
        return Err(ConvertError::Empty);
    }

    let mut value: u128 = 0;
    for c in digits.chars() {
        let digit = c
            .to_digit(base)
            .ok_or(ConvertError::InvalidDigit { digit: c, base })?;
        value = value
            .checked_mul(base as u128)
            .and_then(|v| v.checked_add(digit as u128))
            .ok_or(ConvertError::Overflow)?;
    }
    Ok((negative, value))
}

fn strip_radix_prefix(s: &str, base: u32) -> &str {
    let prefix = match base {
        2 => "0b",
        8 => "0o",
        16 => "0x",
        _ => return s,
    };
    match s.get(..2) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &s[2..],
        _ => s,
    }
}

fn format_radix(negative: bool, mut value: u128, base: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        let d = (value % base as u128) as u32;
        digits.push(
            std::char::from_digit(d, base)
                .unwrap_or('?')
                .to_ascii_uppercase(),
        );
        value /= base as u128;
    }
    if negative {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

/// Insert thousands separators: `1234567` -> `1,234,567`
pub fn format_decimal(n: i128) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_bases() {
        assert_eq!(convert("255", 10, 16).unwrap(), "FF");
        assert_eq!(convert("ff", 16, 2).unwrap(), "11111111");
        assert_eq!(convert("0x1F", 16, 10).unwrap(), "31");
        assert_eq!(convert("777", 8, 10).unwrap(), "511");
        assert_eq!(convert("1010 1010", 2, 10).unwrap(), "170");
        assert_eq!(convert("0", 10, 2).unwrap(), "0");
    }

    #[test]
    fn test_negative_and_base36() {
        assert_eq!(convert("-42", 10, 2).unwrap(), "-101010");
        assert_eq!(convert("zz", 36, 10).unwrap(), "1295");
        assert_eq!(convert("1295", 10, 36).unwrap(), "ZZ");
    }

    #[test]
    fn test_prefix_only_stripped_for_matching_base() {
        // "0b1" is a valid hexadecimal number
        assert_eq!(convert("0b1", 16, 10).unwrap(), "177");
    }

    #[test]
    fn test_errors() {
        assert_eq!(convert("", 10, 2), Err(ConvertError::Empty));
        assert_eq!(convert("-", 10, 2), Err(ConvertError::Empty));
        assert_eq!(convert("12", 1, 2), Err(ConvertError::InvalidBase(1)));
        assert_eq!(convert("12", 10, 37), Err(ConvertError::InvalidBase(37)));
        assert_eq!(
            convert("102", 2, 10),
            Err(ConvertError::InvalidDigit { digit: '2', base: 2 })
        );
        assert_eq!(convert(&"z".repeat(40), 36, 10), Err(ConvertError::Overflow));
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(0), "0");
        assert_eq!(format_decimal(999), "999");
        assert_eq!(format_decimal(1000), "1,000");
        assert_eq!(format_decimal(1234567), "1,234,567");
        assert_eq!(format_decimal(-98765), "-98,765");
    }
}
