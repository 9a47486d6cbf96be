//! Roman numeral helpers.
//!
//! Act and scene headings number themselves with Roman numerals. Heading
//! recognition only needs the numeral alphabet; the conversions are used
//! when ordering or labelling structure programmatically.

const NUMERAL_VALUES: &[(u32, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Whether `c` belongs to the Roman numeral alphabet.
pub fn is_numeral_char(c: char) -> bool {
    matches!(c, 'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M')
}

/// Length of the leading run of numeral characters in `s`.
pub fn numeral_prefix_len(s: &str) -> usize {
    s.chars().take_while(|&c| is_numeral_char(c)).count()
}

/// Convert a positive integer to its Roman numeral form.
pub fn to_roman(mut num: u32) -> String {
    let mut out = String::new();
    for &(value, numeral) in NUMERAL_VALUES {
        while num >= value {
            out.push_str(numeral);
            num -= value;
        }
    }
    out
}

/// Parse a Roman numeral, case-insensitively.
///
/// Returns `None` when `roman` is empty or contains a non-numeral
/// character. Uses the subtractive reading (a smaller value before a
/// larger one subtracts), so sloppy forms like `IIII` still evaluate.
pub fn from_roman(roman: &str) -> Option<u32> {
    if roman.is_empty() {
        return None;
    }

    let mut total: i64 = 0;
    let mut prev = 0i64;
    for c in roman.chars().rev() {
        let value = match c.to_ascii_uppercase() {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => return None,
        };
        if value >= prev {
            total += value;
        } else {
            total -= value;
        }
        prev = value;
    }

    u32::try_from(total).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_to_roman() {
        assert_eq!(to_roman(1), "I");
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(9), "IX");
        assert_eq!(to_roman(14), "XIV");
        assert_eq!(to_roman(1994), "MCMXCIV");
    }

    #[test]
    fn parses_from_roman() {
        assert_eq!(from_roman("I"), Some(1));
        assert_eq!(from_roman("iv"), Some(4));
        assert_eq!(from_roman("XIV"), Some(14));
        assert_eq!(from_roman("MCMXCIV"), Some(1994));
        // Sloppy additive form still reads.
        assert_eq!(from_roman("IIII"), Some(4));
    }

    #[test]
    fn rejects_non_numerals() {
        assert_eq!(from_roman(""), None);
        assert_eq!(from_roman("A"), None);
        assert_eq!(from_roman("XQ"), None);
    }

    #[test]
    fn round_trips() {
        for n in 1..=400 {
            assert_eq!(from_roman(&to_roman(n)), Some(n));
        }
    }

    #[test]
    fn prefix_len_stops_at_first_non_numeral() {
        assert_eq!(numeral_prefix_len("III."), 3);
        assert_eq!(numeral_prefix_len("IV Elsinore"), 2);
        assert_eq!(numeral_prefix_len("one"), 0);
    }
}
