//! Pattern-driven text masks for Brazilian document, phone and money fields.
//!
//! All operations are pure functions over the read-only pattern table.

mod format;
mod model;
mod parser;
mod rules;
mod table;

use log::{debug, trace};

use crate::error::{MaskError, MaskResult};

pub use model::{DEFAULT_PLACEHOLDER, MaskKind, MaskPattern, MaskToken, SentinelMap, SlotKind};
pub use rules::cpf_check_digits;
pub use table::{canonical_patterns, pattern_for};

/// Formats `raw` for display under the pattern of `kind`.
///
/// Characters a slot rejects are dropped. Kinds without a pattern return
/// `raw` as is; `custom` formats with `custom` and fails when it is absent.
pub fn apply_mask(
    raw: &str,
    kind: MaskKind,
    custom: Option<&MaskPattern>,
) -> MaskResult<String> {
    let pattern = match kind {
        MaskKind::Custom => custom.ok_or_else(|| {
            debug!("custom mask applied without a pattern");
            MaskError::MissingCustomPattern
        })?,
        _ => match table::pattern_for(kind) {
            Some(pattern) => pattern,
            None => return Ok(raw.to_string()),
        },
    };

    let formatted = format::fill(pattern, raw);
    trace!("{kind} mask {:?}: {raw:?} -> {formatted:?}", pattern.source());
    Ok(formatted)
}

/// Recovers the canonical value behind a formatted one.
pub fn remove_mask(formatted: &str, kind: MaskKind) -> String {
    match kind {
        MaskKind::Money => format::money_to_decimal(formatted),
        kind if kind.is_patterned() => format::digits_only(formatted),
        _ => formatted.to_string(),
    }
}

/// Checks `value` against the rule for `kind`. Empty values always pass.
pub fn validate(value: &str, kind: MaskKind) -> bool {
    rules::check(value, kind)
}

/// What a text field runs on every keystroke.
pub fn process_input(
    raw: &str,
    kind: MaskKind,
    custom: Option<&MaskPattern>,
) -> MaskResult<String> {
    match kind {
        MaskKind::Email | MaskKind::Password => Ok(raw.to_string()),
        MaskKind::Numeric => Ok(format::digits_only(raw)),
        MaskKind::Alphanumeric => Ok(format::alphanumeric_only(raw)),
        _ => apply_mask(raw, kind, custom),
    }
}

/// The part of `raw` a field should keep as typed input for `kind`.
///
/// `process_input` over the result renders the same slots.
pub fn accepted_input(
    raw: &str,
    kind: MaskKind,
    custom: Option<&MaskPattern>,
) -> MaskResult<String> {
    match kind {
        MaskKind::Custom => {
            let pattern = custom.ok_or(MaskError::MissingCustomPattern)?;
            Ok(format::accepted(pattern, raw))
        }
        _ => match table::pattern_for(kind) {
            Some(pattern) => Ok(format::accepted(pattern, raw)),
            None => process_input(raw, kind, custom),
        },
    }
}
