use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;

lazy_static! {
    static ref POINT_NUMBER_RE: Regex = Regex::new(r"[0-9][0-9\.]+[0-9]").unwrap();
    static ref CURRENCY_RE: Regex = Regex::new(r"(£|\$|¥|€)([0-9,\.]*[0-9]+)").unwrap();
    static ref DECIMAL_NUMBER_RE: Regex = Regex::new(r"[0-9]+,[0-9]+").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"-?[0-9]+").unwrap();

    // Spoken unit names per currency symbol. Missing singular forms fall
    // back to the plural entry (¥ has no singular at all).
    static ref CURRENCIES: HashMap<char, CurrencyUnits> = {
        let mut m = HashMap::new();
        m.insert('$', CurrencyUnits {
            fraction_one: Some("cent"),
            fraction_many: "cents",
            unit_one: Some("dollar"),
            unit_many: "dollars",
        });
        m.insert('€', CurrencyUnits {
            fraction_one: Some("cent"),
            fraction_many: "cents",
            unit_one: Some("euro"),
            unit_many: "euros",
        });
        m.insert('£', CurrencyUnits {
            fraction_one: Some("penny"),
            fraction_many: "pence",
            unit_one: Some("pound sterling"),
            unit_many: "pounds sterling",
        });
        m.insert('¥', CurrencyUnits {
            fraction_one: None,
            fraction_many: "sen",
            unit_one: None,
            unit_many: "yen",
        });
        m
    };
}

/// Spoken unit names for one currency: integer units (dollar/dollars) and
/// fractional units (cent/cents).
struct CurrencyUnits {
    fraction_one: Option<&'static str>,
    fraction_many: &'static str,
    unit_one: Option<&'static str>,
    unit_many: &'static str,
}

const NUMBERS: [&str; 20] = [
    "noll", "ett", "två", "tre", "fyra", "fem", "sex", "sju", "åtta", "nio", "tio", "elva",
    "tolv", "tretton", "fjorton", "femton", "sexton", "sjuton", "arton", "nitton",
];

// Tens words keep a trailing space so a following units word needs no
// separator of its own.
const TENS: [&str; 8] = [
    "tjugo ", "tretti ", "fyrtio ", "femtio ", "sextio ", "sjuttio ", "åttio ", "nittio ",
];

/// Spell a non-negative integer in Swedish by place-value decomposition,
/// most significant group first. "miljoner" is always plural. A zero
/// remainder after a higher group emits nothing, so round values keep the
/// group word's trailing space (100 → "ett hundra ").
fn number_to_words(mut num: u64) -> String {
    let mut text = String::new();

    if num > 999_999 {
        text.push_str(&number_to_words(num / 1_000_000));
        text.push_str(" miljoner ");
        num %= 1_000_000;
    }
    if num > 999 {
        text.push_str(&number_to_words(num / 1000));
        text.push_str(" tusen ");
        num %= 1000;
    }
    if num > 99 {
        text.push_str(&number_to_words(num / 100));
        text.push_str(" hundra ");
        num %= 100;
    }

    if num < 20 {
        if num == 0 && !text.is_empty() {
            return text;
        }
        text.push_str(NUMBERS[num as usize]);
        return text;
    }
    text.push_str(TENS[(num / 10) as usize - 2]);
    if num % 10 != 0 {
        text.push_str(NUMBERS[(num % 10) as usize]);
    }
    text
}

/// Expand a currency amount ("1,50" etc., dots already meaningless) into
/// "<integer> <unit> <fraction> <unit>". Amounts with more than one comma
/// degrade to the raw amount plus the plural unit name.
fn expand_currency(amount: &str, units: &CurrencyUnits) -> String {
    let cleaned = amount.replace('.', "");
    let parts: Vec<&str> = cleaned.split(',').collect();
    if parts.len() > 2 {
        return format!("{} {}", amount, units.unit_many);
    }

    let integer = match parse_part(parts[0]) {
        Some(n) => n,
        None => return format!("{} {}", amount, units.unit_many),
    };
    let fraction = match parts.get(1).map(|p| parse_part(p)) {
        Some(Some(n)) => n,
        Some(None) => return format!("{} {}", amount, units.unit_many),
        None => 0,
    };

    let mut text = Vec::new();
    if integer > 0 {
        let unit = if integer == 1 {
            units.unit_one.unwrap_or(units.unit_many)
        } else {
            units.unit_many
        };
        text.push(format!("{} {}", integer, unit));
    }
    if fraction > 0 {
        let unit = if fraction == 1 {
            units.fraction_one.unwrap_or(units.fraction_many)
        } else {
            units.fraction_many
        };
        text.push(format!("{} {}", fraction, unit));
    }
    if text.is_empty() {
        return format!("{} {}", NUMBERS[0], units.unit_many);
    }
    text.join(" ")
}

// Empty parts count as zero ("$,50" has integer 0).
fn parse_part(part: &str) -> Option<u64> {
    if part.is_empty() {
        return Some(0);
    }
    part.parse().ok()
}

/// A stretch of text in the substitution pipeline. Sealed segments were
/// produced by an expanding pass and are skipped by later passes, so e.g.
/// the "50" in "50 cents" is never re-spelled by the integer pass.
enum Segment {
    Open(String),
    Sealed(String),
}

fn push_open(out: &mut Vec<Segment>, text: String) {
    if text.is_empty() {
        return;
    }
    // Merge adjacent open segments so later regexes can match across the
    // seam left by a non-sealing replacement.
    match out.last_mut() {
        Some(Segment::Open(prev)) => prev.push_str(&text),
        _ => out.push(Segment::Open(text)),
    }
}

/// Run one (pattern, handler) pass over every open segment. `seal` marks
/// the replacements as finished; the grouping-dot pass leaves its output
/// open so the later passes see the plain numerals.
fn apply_pass<F>(segments: Vec<Segment>, re: &Regex, seal: bool, expand: F) -> Vec<Segment>
where
    F: Fn(&Captures) -> String,
{
    let mut out = Vec::new();
    for segment in segments {
        match segment {
            Segment::Sealed(s) => out.push(Segment::Sealed(s)),
            Segment::Open(s) => {
                let mut last = 0;
                for caps in re.captures_iter(&s) {
                    let m = caps.get(0).unwrap();
                    push_open(&mut out, s[last..m.start()].to_string());
                    let replaced = expand(&caps);
                    if seal {
                        out.push(Segment::Sealed(replaced));
                    } else {
                        push_open(&mut out, replaced);
                    }
                    last = m.end();
                }
                push_open(&mut out, s[last..].to_string());
            }
        }
    }
    out
}

/// Replace every recognized numeric span in `text` with its Swedish spoken
/// form. Four passes in fixed order: strip grouping dots, expand currency
/// amounts, expand decimal commas, spell out remaining integers. Currency
/// runs before the decimal pass so amounts are consumed whole; the integer
/// pass runs last and only touches numerals no earlier pass claimed.
pub fn normalize_numbers(text: &str) -> String {
    let mut segments = vec![Segment::Open(text.to_string())];

    segments = apply_pass(segments, &POINT_NUMBER_RE, false, |caps: &Captures| {
        caps[0].replace('.', "")
    });
    segments = apply_pass(segments, &CURRENCY_RE, true, |caps: &Captures| {
        match caps[1].chars().next().and_then(|c| CURRENCIES.get(&c)) {
            Some(units) => expand_currency(&caps[2], units),
            None => caps[0].to_string(),
        }
    });
    segments = apply_pass(segments, &DECIMAL_NUMBER_RE, true, |caps: &Captures| {
        caps[0].replace(',', " komma ")
    });
    segments = apply_pass(segments, &NUMBER_RE, true, |caps: &Captures| {
        match caps[0].parse::<i64>() {
            // No minus word: the sign is folded into the parse and only the
            // magnitude is spelled.
            Ok(n) => number_to_words(n.unsigned_abs()),
            // Digit runs too long for i64 are left as-is.
            Err(_) => caps[0].to_string(),
        }
    });

    segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Open(s) | Segment::Sealed(s) => s,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(normalize_numbers("0"), "noll");
        assert_eq!(normalize_numbers("7"), "sju");
        assert_eq!(normalize_numbers("19"), "nitton");
        assert_eq!(normalize_numbers("42"), "fyrtio två");
    }

    #[test]
    fn test_round_values_keep_group_word_spacing() {
        assert_eq!(normalize_numbers("20"), "tjugo ");
        assert_eq!(normalize_numbers("100"), "ett hundra ");
        assert_eq!(normalize_numbers("1000"), "ett tusen ");
    }

    #[test]
    fn test_place_value_decomposition() {
        assert_eq!(normalize_numbers("365"), "tre hundra sextio fem");
        assert_eq!(
            normalize_numbers("1234"),
            "ett tusen två hundra tretti fyra"
        );
    }

    #[test]
    fn test_point_grouped_number() {
        assert_eq!(
            normalize_numbers("1.234.567"),
            "ett miljoner två hundra tretti fyra tusen fem hundra sextio sju"
        );
    }

    #[test]
    fn test_currency() {
        assert_eq!(normalize_numbers("$1,50"), "1 dollar 50 cents");
        assert_eq!(normalize_numbers("$0,00"), "noll dollars");
        assert_eq!(normalize_numbers("€1"), "1 euro");
        assert_eq!(normalize_numbers("£2,01"), "2 pounds sterling 1 penny");
    }

    #[test]
    fn test_yen_has_no_singular_units() {
        assert_eq!(normalize_numbers("¥1"), "1 yen");
        assert_eq!(normalize_numbers("¥3,01"), "3 yen 1 sen");
    }

    #[test]
    fn test_currency_with_grouping_dots() {
        assert_eq!(normalize_numbers("$1.234,50"), "1234 dollars 50 cents");
    }

    #[test]
    fn test_malformed_currency_falls_back_to_raw_amount() {
        assert_eq!(normalize_numbers("$1,2,3"), "1,2,3 dollars");
    }

    #[test]
    fn test_unknown_currency_symbol_not_matched() {
        // The symbol passes through; the digits still hit the integer pass.
        assert_eq!(normalize_numbers("₹100"), "₹ett hundra ");
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(normalize_numbers("3,14"), "3 komma 14");
    }

    #[test]
    fn test_negative_number_spelled_without_minus_word() {
        assert_eq!(normalize_numbers("-5"), "fem");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(normalize_numbers("hej världen"), "hej världen");
        assert_eq!(normalize_numbers(""), "");
    }

    #[test]
    fn test_mixed_sentence() {
        assert_eq!(
            normalize_numbers("Det kostar $5 i dag, ca 3,14 gånger mer än 7"),
            "Det kostar 5 dollars i dag, ca 3 komma 14 gånger mer än sju"
        );
    }

    #[test]
    fn test_overflowing_digit_run_left_unchanged() {
        let digits = "9".repeat(30);
        assert_eq!(normalize_numbers(&digits), digits);
    }
}
