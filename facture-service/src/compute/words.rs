//! Amount-in-words rendering.
//!
//! Decomposes an amount into whole dinars and millimes (1/1000 of a dinar)
//! and spells both parts as cardinal words. The locale is an explicit
//! parameter; there is no global language state.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Spelling locale for `amount_in_words`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    fn conjunction(&self) -> &'static str {
        match self {
            Locale::Fr => "et",
            Locale::En => "and",
        }
    }

    fn cardinal(&self, n: u64) -> String {
        match self {
            Locale::Fr => spell_fr(n, false),
            Locale::En => spell_en(n),
        }
    }
}

/// Spell `amount` as "<dinars> [<conjunction> <millimes>]", first letter
/// capitalised.
///
/// The minor part is the fractional part expressed in millimes, rounded to
/// the nearest whole millime. Major and minor nouns are pluralised whenever
/// their value differs from 1; a zero minor part omits the millime clause
/// entirely. Amounts are grand totals and therefore non-negative by
/// construction; a negative input is clamped to zero.
pub fn amount_in_words(amount: Decimal, locale: Locale) -> String {
    let amount = amount.max(Decimal::ZERO);
    let integer = amount.trunc();
    let mut major = integer.to_u64().unwrap_or(0);
    let mut millimes = ((amount - integer) * Decimal::from(1000))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0);

    // A fraction that rounds to a full 1000 carries into the dinar part.
    // Unreachable for amounts already rounded to 2 decimal places.
    if millimes == 1000 {
        major += 1;
        millimes = 0;
    }

    let mut result = format!(
        "{} dinar{}",
        locale.cardinal(major),
        if major != 1 { "s" } else { "" }
    );
    if millimes > 0 {
        result.push_str(&format!(
            " {} {} millime{}",
            locale.conjunction(),
            locale.cardinal(millimes),
            if millimes != 1 { "s" } else { "" }
        ));
    }
    capitalize(&result)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

const UNITS_FR: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize",
];

const TENS_FR: [&str; 7] = ["", "", "vingt", "trente", "quarante", "cinquante", "soixante"];

/// French cardinal spelling, traditional orthography (hyphens below one
/// hundred only). `multiplier` is set when the number multiplies "mille",
/// which suppresses the terminal s of "quatre-vingts" and "cents".
fn spell_fr(n: u64, multiplier: bool) -> String {
    if n < 1000 {
        return fr_below_1000(n, multiplier);
    }
    if n < 1_000_000 {
        let (thousands, rest) = (n / 1000, n % 1000);
        let prefix = if thousands == 1 {
            "mille".to_string()
        } else {
            format!("{} mille", fr_below_1000(thousands, true))
        };
        return if rest == 0 {
            prefix
        } else {
            format!("{} {}", prefix, fr_below_1000(rest, false))
        };
    }
    if n < 1_000_000_000 {
        let (millions, rest) = (n / 1_000_000, n % 1_000_000);
        let prefix = if millions == 1 {
            "un million".to_string()
        } else {
            format!("{} millions", spell_fr(millions, false))
        };
        return if rest == 0 {
            prefix
        } else {
            format!("{} {}", prefix, spell_fr(rest, false))
        };
    }
    let (billions, rest) = (n / 1_000_000_000, n % 1_000_000_000);
    let prefix = if billions == 1 {
        "un milliard".to_string()
    } else {
        format!("{} milliards", spell_fr(billions, false))
    };
    if rest == 0 {
        prefix
    } else {
        format!("{} {}", prefix, spell_fr(rest, false))
    }
}

fn fr_below_1000(n: u64, multiplier: bool) -> String {
    debug_assert!(n < 1000);
    let (hundreds, rest) = (n / 100, n % 100);
    match (hundreds, rest) {
        (0, _) => fr_below_100(rest, multiplier),
        (1, 0) => "cent".to_string(),
        (1, _) => format!("cent {}", fr_below_100(rest, multiplier)),
        (_, 0) => format!(
            "{} cent{}",
            UNITS_FR[hundreds as usize],
            if multiplier { "" } else { "s" }
        ),
        (_, _) => format!(
            "{} cent {}",
            UNITS_FR[hundreds as usize],
            fr_below_100(rest, multiplier)
        ),
    }
}

fn fr_below_100(n: u64, multiplier: bool) -> String {
    debug_assert!(n < 100);
    match n {
        0..=16 => UNITS_FR[n as usize].to_string(),
        17..=19 => format!("dix-{}", UNITS_FR[(n - 10) as usize]),
        20..=69 => {
            let tens = TENS_FR[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                1 => format!("{} et un", tens),
                unit => format!("{}-{}", tens, UNITS_FR[unit as usize]),
            }
        }
        71 => "soixante et onze".to_string(),
        70 | 72..=79 => format!("soixante-{}", fr_below_100(n - 60, false)),
        80 => {
            if multiplier {
                "quatre-vingt".to_string()
            } else {
                "quatre-vingts".to_string()
            }
        }
        _ => format!("quatre-vingt-{}", fr_below_100(n - 80, false)),
    }
}

const UNITS_EN: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS_EN: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

fn spell_en(n: u64) -> String {
    match n {
        0..=19 => UNITS_EN[n as usize].to_string(),
        20..=99 => {
            let tens = TENS_EN[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                unit => format!("{}-{}", tens, UNITS_EN[unit as usize]),
            }
        }
        100..=999 => {
            let (hundreds, rest) = (n / 100, n % 100);
            match rest {
                0 => format!("{} hundred", UNITS_EN[hundreds as usize]),
                _ => format!("{} hundred {}", UNITS_EN[hundreds as usize], spell_en(rest)),
            }
        }
        _ => {
            let (scale, name) = if n < 1_000_000 {
                (1000, "thousand")
            } else if n < 1_000_000_000 {
                (1_000_000, "million")
            } else {
                (1_000_000_000, "billion")
            };
            let (count, rest) = (n / scale, n % scale);
            match rest {
                0 => format!("{} {}", spell_en(count), name),
                _ => format!("{} {} {}", spell_en(count), name, spell_en(rest)),
            }
        }
    }
}
