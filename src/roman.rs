const NUMERALS: [(i64, &str); 13] = [
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

/// Roman numeral for `n`. Zero and negative values yield an empty string;
/// there is no upper bound.
pub fn to_roman(mut n: i64) -> String {
    let mut roman = String::new();
    for &(value, symbol) in &NUMERALS {
        while n >= value {
            roman.push_str(symbol);
            n -= value;
        }
    }
    roman
}
