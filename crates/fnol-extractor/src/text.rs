//! Normalization of captured values

use crate::config::ExtractorConfig;
use crate::patterns::{LABEL_LINE, LIST_SEPARATOR};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

/// Trim a capture; an empty capture counts as no match
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Collapse every run of whitespace (newlines included) to one space
pub(crate) fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Does this line open a new `Label:` field?
pub(crate) fn looks_like_label(line: &str) -> bool {
    LABEL_LINE.is_match(line)
}

/// Split a list line on commas, semicolons and "and", dropping sentinels
///
/// Returns `None` when nothing is left, so callers never see an empty list.
pub(crate) fn split_list(line: &str, config: &ExtractorConfig) -> Option<Vec<String>> {
    let entries: Vec<String> = LIST_SEPARATOR
        .split(line)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter(|entry| !config.is_sentinel(entry))
        .map(String::from)
        .collect();

    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

/// Significant digits `Decimal` holds without rounding
const MAX_SIGNIFICANT_DIGITS: usize = 28;

/// Parse a captured amount such as `15,000.00`
///
/// Separators are stripped first. Anything that still fails to parse, or
/// that would need rounding to fit a `Decimal`, is treated as absent.
pub(crate) fn parse_amount(raw: &str) -> Option<Decimal> {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        warn!("Discarding amount '{}': no digits", raw);
        return None;
    }

    let significant = significant_digits(&digits);
    if significant > MAX_SIGNIFICANT_DIGITS {
        warn!(
            "Discarding amount '{}': {} significant digits exceed {}",
            raw, significant, MAX_SIGNIFICANT_DIGITS
        );
        return None;
    }

    match Decimal::from_str(&digits) {
        Ok(amount) => Some(amount),
        Err(e) => {
            warn!("Discarding amount '{}': {}", raw, e);
            None
        }
    }
}

/// Digits left after dropping leading integer zeros and trailing fraction zeros
fn significant_digits(number: &str) -> usize {
    let (int_part, frac_part) = number.split_once('.').unwrap_or((number, ""));
    let int_part = int_part.trim_start_matches('0');
    let frac_part = frac_part.trim_end_matches('0');
    int_part.len() + frac_part.len()
}
