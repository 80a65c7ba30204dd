use crate::mask::{MaskKind, validate};

/// Extra field check: `Err` carries the message shown under the field.
pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), String> {
    validators.iter().try_for_each(|validator| validator(value))
}

fn predicate<F>(accepts: F, message: impl Into<String>) -> Validator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    Box::new(move |value: &str| {
        if accepts(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

/// Rejects blank values, which every mask rule lets through.
pub fn required(message: impl Into<String>) -> Validator {
    predicate(|value| !value.trim().is_empty(), message)
}

/// Fails when `value` breaks the rule of `kind`.
pub fn matches_kind(kind: MaskKind, message: impl Into<String>) -> Validator {
    predicate(move |value| validate(value, kind), message)
}
