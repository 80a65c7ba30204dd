use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::model::MaskKind;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in validation regex must compile")
}

static EMAIL: Lazy<Regex> =
    Lazy::new(|| compile(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"));
static NUMERIC: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]+$"));
static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z0-9]+$"));
static PHONE: Lazy<Regex> = Lazy::new(|| compile(r"^\([0-9]{2}\) [0-9]{4,5}-[0-9]{4}$"));
static CNPJ: Lazy<Regex> =
    Lazy::new(|| compile(r"^[0-9]{2}\.[0-9]{3}\.[0-9]{3}/[0-9]{4}-[0-9]{2}$"));
static CEP: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{5}-[0-9]{3}$"));
static CPF: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$"));

// No look-around in `regex`, so each password requirement is its own expression.
static PASSWORD: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        compile(r"^.{8,}$"),
        compile(r"[a-z]"),
        compile(r"[A-Z]"),
        compile(r"[0-9]"),
    ]
});

pub(super) fn check(value: &str, kind: MaskKind) -> bool {
    if value.is_empty() {
        return true;
    }

    match kind {
        MaskKind::Email => EMAIL.is_match(value),
        MaskKind::Numeric => NUMERIC.is_match(value),
        MaskKind::Alphanumeric => ALPHANUMERIC.is_match(value),
        MaskKind::Password => PASSWORD.iter().all(|re| re.is_match(value)),
        MaskKind::Phone => PHONE.is_match(value),
        MaskKind::Cnpj => CNPJ.is_match(value),
        MaskKind::Cep => CEP.is_match(value),
        MaskKind::Cpf => CPF.is_match(value) && cpf_digits_valid(value),
        MaskKind::Date
        | MaskKind::Money
        | MaskKind::CreditCard
        | MaskKind::Time
        | MaskKind::Rg
        | MaskKind::Custom => true,
    }
}

fn cpf_digits_valid(value: &str) -> bool {
    let digits: Vec<u8> = value
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .map(|digit| digit as u8)
        .collect();

    let Ok(digits) = <[u8; 11]>::try_from(digits) else {
        return false;
    };

    if digits.iter().all(|digit| *digit == digits[0]) {
        debug!("rejecting cpf with repeated digit {}", digits[0]);
        return false;
    }

    let mut first_nine = [0u8; 9];
    first_nine.copy_from_slice(&digits[..9]);
    let (first, second) = cpf_check_digits(&first_nine);
    let valid = first == digits[9] && second == digits[10];
    if !valid {
        debug!(
            "cpf check digits mismatch: expected {first}{second}, got {}{}",
            digits[9], digits[10]
        );
    }
    valid
}

/// Both CPF check digits for the nine base digits.
pub fn cpf_check_digits(base: &[u8; 9]) -> (u8, u8) {
    let first = check_digit(base.iter().copied(), 10);
    let second = check_digit(base.iter().copied().chain(std::iter::once(first)), 11);
    (first, second)
}

// Weights run from `top_weight` down to 2; remainders 10 and 11 collapse to 0.
fn check_digit(digits: impl Iterator<Item = u8>, top_weight: u32) -> u8 {
    let sum: u32 = digits
        .zip((2..=top_weight).rev())
        .map(|(digit, weight)| u32::from(digit) * weight)
        .sum();
    let remainder = (sum * 10) % 11;
    if remainder >= 10 { 0 } else { remainder as u8 }
}
