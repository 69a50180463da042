//! Compiled label patterns
//!
//! Every pattern is anchored on a label and captures the value in group 1.
//! Labels match case-insensitively; values keep the document's casing.
//! Single-token values (numbers, dates, times, amounts) may sit on the line
//! after their label, as PDF text extraction often leaves them; every other
//! value must share the label's line.

use once_cell::sync::Lazy;
use regex::Regex;

/// ISO `YYYY-MM-DD` or US `MM/DD/YYYY`
const DATE: &str = r"[0-9]{4}-[0-9]{2}-[0-9]{2}|[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}";

/// Amount with optional currency marker and thousands separators
const AMOUNT: &str = r"(?:[$€£]|usd)?[ \t]*([0-9,]+(?:\.[0-9]+)?)";

/// Label separator for single-token values: colons, blanks, one line break
const SEP: &str = r"[ \t:]*(?:\r?\n[ \t]*)?";

/// Two or more capitalized tokens followed by the end of the line
const PERSON_NAME: &str = r"([A-Z][A-Za-z'.\-]*(?:[ \t]+[A-Z][A-Za-z'.\-]*)+)[ \t]*\r?$";

pub(crate) static POLICY_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bpolicy[ \t]*(?:number|no\b\.?|#)[ \t:#]*(?:\r?\n[ \t]*)?([a-z0-9][a-z0-9\-]*)")
        .unwrap()
});

pub(crate) static POLICYHOLDER_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?m)\b(?i:policyholder)(?:[ \t]+(?i:name))?[ \t]*:?[ \t]*{}",
        PERSON_NAME
    ))
    .unwrap()
});

pub(crate) static CLAIMANT_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?m)\b(?i:claimant)(?:[ \t]+(?i:name))?[ \t]*:?[ \t]*{}",
        PERSON_NAME
    ))
    .unwrap()
});

pub(crate) static EFFECTIVE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\beffective[ \t]+dates?{sep}({date})[ \t]+(?:to|through)[ \t]+({date})",
        sep = SEP,
        date = DATE
    ))
    .unwrap()
});

pub(crate) static START_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\bstart[ \t]+date{}({})", SEP, DATE)).unwrap()
});

pub(crate) static END_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\bend[ \t]+date{}({})", SEP, DATE)).unwrap()
});

pub(crate) static INCIDENT_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:incident|accident)[ \t]+date{}({})", SEP, DATE)).unwrap()
});

pub(crate) static INCIDENT_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:incident|accident)[ \t]+time{}([0-9]{{1,2}}:[0-9]{{2}}(?:[ \t]*[ap]m\b)?)",
        SEP
    ))
    .unwrap()
});

pub(crate) static LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:incident|accident)[ \t]+)?location(?:[ \t]+of[ \t]+(?:loss|incident|accident))?[ \t]*:[ \t]*([^\r\n]+)",
    )
    .unwrap()
});

/// Start of the description block; the block itself is read line by line
pub(crate) static DESCRIPTION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)\b(?:incident[ \t]+)?description(?:[ \t]+of[ \t]+(?:loss|incident))?[ \t]*(?::|\r?$)").unwrap()
});

/// A line that opens a new `Label:` field
///
/// Up to three capitalized words before the colon, optionally joined by
/// "of"/"and"/"or" ("Description of Loss:") or ending in `#` ("Policy #:").
/// Prose such as "The adjuster noted:" is not a label.
pub(crate) static LABEL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[ \t]*[A-Z][A-Za-z0-9'()/&.\-]*(?:[ \t]+(?:(?:of|and|or)[ \t]+)?[A-Z][A-Za-z0-9'()/&.\-]*){0,2}(?:[ \t]*#)?[ \t]*:",
    )
    .unwrap()
});

pub(crate) static THIRD_PARTIES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bthird[ \t]+part(?:y|ies)(?:[ \t]+involved)?[ \t]*:[ \t]*([^\r\n]+)").unwrap()
});

pub(crate) static ATTACHMENTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\battachments?[ \t]*:[ \t]*([^\r\n]+)").unwrap()
});

/// Separators between list entries: comma, semicolon or the word "and"
pub(crate) static LIST_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[,;]|[ \t]+and[ \t]+").unwrap()
});

pub(crate) static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:phone|telephone|tel|contact)(?:[ \t]+(?:number|no\b\.?))?[ \t:]*(\+?[0-9(][0-9 ().\-]*)")
        .unwrap()
});

pub(crate) static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\be-?mail(?:[ \t]+address)?[ \t:]*([a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,})").unwrap()
});

pub(crate) static ASSET_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\basset[ \t]+type[ \t:]*([a-z][a-z /\-]*)").unwrap()
});

pub(crate) static ASSET_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:asset[ \t]+id|vin|serial)\b(?:[ \t]+(?:number|no\b\.?))?[ \t:#]*([a-z0-9][a-z0-9\-]*)")
        .unwrap()
});

pub(crate) static CLAIM_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bclaim[ \t]+type[ \t:]*([a-z][a-z /\-]*)").unwrap()
});

pub(crate) static ESTIMATED_DAMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\bestimated[ \t]+damages?{}{}", SEP, AMOUNT)).unwrap()
});

pub(crate) static INITIAL_ESTIMATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\binitial[ \t]+estimate{}{}", SEP, AMOUNT)).unwrap()
});
