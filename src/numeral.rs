//! Conversions from a zero based index to letter and Roman numeral labels.

const ROMAN: [(usize, &str); 13] = [
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

/// Bijective base-26 label for the zero based `index`.
///
/// There is no zero digit: `0` is `A`, `25` is `Z`, `26` is `AA` and `702` is `AAA`.
#[must_use]
pub fn alphabet(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        // rem < 26 so it always fits a letter
        #[allow(clippy::cast_possible_truncation)]
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Roman numeral of the zero based `index` (so `0` is `I`).
///
/// Values beyond 3999 keep repeating `M`.
#[must_use]
pub fn roman(index: usize) -> String {
    let mut result = String::new();
    let mut remaining = index + 1;
    for (value, symbol) in ROMAN {
        while remaining >= value {
            result.push_str(symbol);
            remaining -= value;
        }
    }
    result
}

#[test]
fn alphabet_spot_checks() {
    let cases = [
        (0, "A"),
        (25, "Z"),
        (26, "AA"),
        (51, "AZ"),
        (52, "BA"),
        (79, "CB"),
        (701, "ZZ"),
        (702, "AAA"),
        (801, "ADV"),
        (1000, "ALM"),
    ];
    for (index, expected) in cases {
        assert_eq!(alphabet(index), expected, "index {index}");
    }
}

#[test]
fn roman_spot_checks() {
    let cases = [
        (0, "I"),
        (3, "IV"),
        (8, "IX"),
        (25, "XXVI"),
        (26, "XXVII"),
        (50, "LI"),
        (100, "CI"),
        (701, "DCCII"),
        (1000, "MI"),
        (1993, "MCMXCIV"),
    ];
    for (index, expected) in cases {
        assert_eq!(roman(index), expected, "index {index}");
    }
}

#[test]
fn roman_has_no_upper_bound() {
    assert_eq!(roman(3998), "MMMCMXCIX");
    assert_eq!(roman(3999), "MMMM");
    assert_eq!(roman(5999), "MMMMMM");
}
