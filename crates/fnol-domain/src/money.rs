//! Currency formatting for reasoning text and console output

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as dollars with thousands separators and two decimals
///
/// ```
/// use fnol_domain::{format_currency, Decimal};
///
/// assert_eq!(format_currency(Decimal::new(1500000, 2)), "$15,000.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    render(rounded, 2)
}

/// Format a threshold, dropping the cents when they are zero
///
/// `25000` renders as `$25,000`, `25000.5` as `$25,000.50`.
pub fn format_threshold(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.fract().is_zero() {
        render(rounded, 0)
    } else {
        render(rounded, 2)
    }
}

fn render(amount: Decimal, decimals: usize) -> String {
    let plain = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    let grouped = group_thousands(int_part);

    match frac_part {
        Some(frac) => format!("{}${}.{}", sign, grouped, frac),
        None => format!("{}${}", sign, grouped),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: removing the separators gives back the plain two-decimal amount
        #[test]
        fn test_separators_are_cosmetic(cents in 0i64..10_000_000_000i64) {
            let amount = Decimal::new(cents, 2);
            let formatted = format_currency(amount);
            let stripped: String = formatted
                .trim_start_matches('$')
                .chars()
                .filter(|c| *c != ',')
                .collect();
            prop_assert_eq!(stripped, format!("{:.2}", amount));
        }

        /// Property: groups between separators always hold three digits
        #[test]
        fn test_groups_are_three_digits(cents in 0i64..10_000_000_000i64) {
            let formatted = format_currency(Decimal::new(cents, 2));
            let int_part = formatted.trim_start_matches('$').split('.').next().unwrap_or("");
            for group in int_part.split(',').skip(1) {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
