use super::model::{MaskPattern, MaskToken};

/// Fills the pattern's slots from `raw`, skipping characters a slot rejects.
pub(super) fn fill(pattern: &MaskPattern, raw: &str) -> String {
    let raw: Vec<char> = raw.chars().collect();
    if raw.is_empty() {
        return String::new();
    }

    let placeholder = pattern.shows_placeholder().then(|| pattern.placeholder());
    let mut cursor = 0usize;
    let mut out = String::with_capacity(pattern.len());

    for token in pattern.tokens() {
        match token {
            MaskToken::Literal(ch) => {
                if cursor >= raw.len() && placeholder.is_none() {
                    break;
                }
                out.push(*ch);
            }
            MaskToken::Slot(kind) => {
                while cursor < raw.len() && !kind.accepts(raw[cursor]) {
                    cursor += 1;
                }
                match (raw.get(cursor), placeholder) {
                    (Some(ch), _) => {
                        out.push(*ch);
                        cursor += 1;
                    }
                    (None, Some(placeholder)) => out.push(placeholder),
                    (None, None) => break,
                }
            }
        }
    }

    out
}

/// The characters of `raw` that `fill` would place in slots, in order.
pub(super) fn accepted(pattern: &MaskPattern, raw: &str) -> String {
    let raw: Vec<char> = raw.chars().collect();
    let mut cursor = 0usize;
    let mut out = String::new();

    for token in pattern.tokens() {
        let MaskToken::Slot(kind) = token else {
            continue;
        };
        while cursor < raw.len() && !kind.accepts(raw[cursor]) {
            cursor += 1;
        }
        let Some(ch) = raw.get(cursor) else {
            break;
        };
        out.push(*ch);
        cursor += 1;
    }

    out
}

pub(super) fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

pub(super) fn alphanumeric_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Keeps digits and the decimal comma, then turns the comma into a point.
pub(super) fn money_to_decimal(value: &str) -> String {
    value
        .chars()
        .filter_map(|ch| match ch {
            '0'..='9' => Some(ch),
            ',' => Some('.'),
            _ => None,
        })
        .collect()
}
