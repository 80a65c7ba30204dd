use unicode_width::UnicodeWidthStr;

use crate::error::MaskResult;
use crate::mask::{
    self, MaskKind, MaskPattern, MaskToken, accepted_input, process_input, remove_mask,
};
use crate::validators::{Validator, run_validators};

const INVALID_MASK_MESSAGE: &str = "Invalid or incomplete value";

fn default_message(kind: MaskKind) -> &'static str {
    match kind {
        MaskKind::Cpf => "Invalid CPF",
        MaskKind::Cnpj => "Invalid CNPJ",
        MaskKind::Phone => "Invalid phone number",
        MaskKind::Cep => "Invalid CEP",
        MaskKind::Email => "Invalid e-mail address",
        MaskKind::Password => {
            "Password needs 8 characters with upper and lower case letters and a digit"
        }
        MaskKind::Numeric => "Only digits are allowed",
        MaskKind::Alphanumeric => "Only letters and digits are allowed",
        _ => INVALID_MASK_MESSAGE,
    }
}

/// Text field state bound to a mask: formats while typing, validates on blur.
pub struct MaskedField {
    kind: MaskKind,
    pattern: Option<MaskPattern>,
    input: String,
    value: String,
    error: Option<String>,
    message: String,
    validators: Vec<Validator>,
}

impl MaskedField {
    pub fn new(kind: MaskKind) -> Self {
        Self {
            kind,
            pattern: None,
            input: String::new(),
            value: String::new(),
            error: None,
            message: default_message(kind).to_string(),
            validators: Vec::new(),
        }
    }

    pub fn custom(pattern: MaskPattern) -> Self {
        let mut field = Self::new(MaskKind::Custom);
        field.pattern = Some(pattern);
        field
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// The formatted text shown in the field.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// The value to send on submit, without formatting.
    pub fn submit_value(&self) -> String {
        remove_mask(self.value.as_str(), self.kind)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_text(&mut self, raw: &str) -> MaskResult<()> {
        let custom = self.pattern.as_ref();
        let input = accepted_input(raw, self.kind, custom)?;
        self.value = process_input(input.as_str(), self.kind, custom)?;
        self.input = input;
        self.error = None;
        Ok(())
    }

    pub fn insert_char(&mut self, ch: char) -> MaskResult<bool> {
        let before = self.value.clone();
        let mut next = self.input.clone();
        next.push(ch);
        self.set_text(next.as_str())?;
        Ok(self.value != before)
    }

    pub fn backspace(&mut self) -> MaskResult<bool> {
        let mut next = self.input.clone();
        if next.pop().is_none() {
            return Ok(false);
        }
        self.set_text(next.as_str())?;
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.value.clear();
        self.error = None;
    }

    /// Recomputes the inline error for the current value.
    pub fn blur(&mut self) -> Option<&str> {
        self.error = self.check().err();
        self.error.as_deref()
    }

    fn check(&self) -> Result<(), String> {
        if !mask::validate(self.value.as_str(), self.kind) {
            return Err(self.message.clone());
        }
        run_validators(&self.validators, self.value.as_str())
    }

    /// Display column just after the last typed character.
    pub fn cursor_col(&self) -> usize {
        let pattern = match self.kind {
            MaskKind::Custom => self.pattern.as_ref(),
            kind => mask::pattern_for(kind),
        };
        let Some(pattern) = pattern.filter(|pattern| pattern.shows_placeholder()) else {
            return UnicodeWidthStr::width(self.value.as_str());
        };

        let typed = self.input.chars().count();
        let mut filled = 0usize;
        let mut end = 0usize;
        for (token, ch) in pattern.tokens().iter().zip(self.value.chars()) {
            if filled == typed {
                break;
            }
            if matches!(token, MaskToken::Slot(_)) {
                filled += 1;
            }
            end += ch.len_utf8();
        }
        UnicodeWidthStr::width(&self.value[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::MaskedField;
    use crate::error::MaskError;
    use crate::mask::{MaskKind, MaskPattern};
    use crate::validators::required;

    fn type_text(field: &mut MaskedField, text: &str) {
        for ch in text.chars() {
            field.insert_char(ch).expect("insert");
        }
    }

    #[test]
    fn typing_formats_live() {
        let mut field = MaskedField::new(MaskKind::Cpf);
        type_text(&mut field, "1234");
        assert_eq!(field.value(), "123.4");
        type_text(&mut field, "5678909");
        assert_eq!(field.value(), "123.456.789-09");
        assert_eq!(field.submit_value(), "12345678909");
    }

    #[test]
    fn rejected_keys_change_nothing() {
        let mut field = MaskedField::new(MaskKind::Phone);
        type_text(&mut field, "11");
        assert!(!field.insert_char('x').expect("insert"));
        assert_eq!(field.value(), "(11");
    }

    #[test]
    fn overflow_is_ignored() {
        let mut field = MaskedField::new(MaskKind::Time);
        type_text(&mut field, "0930");
        assert!(!field.insert_char('1').expect("insert"));
        assert_eq!(field.value(), "09:30");
    }

    #[test]
    fn backspace_removes_typed_characters_not_separators() {
        let mut field = MaskedField::new(MaskKind::Cep);
        type_text(&mut field, "013101");
        assert_eq!(field.value(), "01310-1");
        assert!(field.backspace().expect("backspace"));
        assert_eq!(field.value(), "01310");
        field.clear();
        assert!(!field.backspace().expect("backspace"));
    }

    #[test]
    fn money_backspace_and_cursor_skip_placeholders() {
        let mut field = MaskedField::new(MaskKind::Money);
        type_text(&mut field, "5000");
        assert_eq!(field.value(), "R$ 500.0__.___,__");
        assert_eq!(field.cursor_col(), 8);

        field.backspace().expect("backspace");
        assert_eq!(field.value(), "R$ 500.___.___,__");
        assert_eq!(field.cursor_col(), 6);
    }

    #[test]
    fn pasted_text_is_reformatted() {
        let mut field = MaskedField::new(MaskKind::Cnpj);
        field.set_text("12.345.678/0001-95").expect("set");
        assert_eq!(field.value(), "12.345.678/0001-95");
        assert_eq!(field.cursor_col(), 18);
    }

    #[test]
    fn blur_reports_kind_message() {
        let mut field = MaskedField::new(MaskKind::Cpf);
        field.set_text("12345678900").expect("set");
        assert_eq!(field.blur(), Some("Invalid CPF"));

        field.set_text("11144477735").expect("set");
        assert_eq!(field.error(), None);
        assert_eq!(field.blur(), None);
    }

    #[test]
    fn empty_field_only_fails_extra_validators() {
        let mut optional = MaskedField::new(MaskKind::Email);
        assert_eq!(optional.blur(), None);

        let mut mandatory = MaskedField::new(MaskKind::Email)
            .with_message("E-mail inválido")
            .with_validator(required("E-mail is required"));
        assert_eq!(mandatory.blur(), Some("E-mail is required"));
        mandatory.set_text("nope").expect("set");
        assert_eq!(mandatory.blur(), Some("E-mail inválido"));
    }

    #[test]
    fn numeric_field_filters_keys() {
        let mut field = MaskedField::new(MaskKind::Numeric);
        type_text(&mut field, "4a2");
        assert_eq!(field.value(), "42");
        assert_eq!(field.submit_value(), "42");
    }

    #[test]
    fn custom_field_uses_its_pattern() {
        let mut field = MaskedField::custom(MaskPattern::new("aaa-9999"));
        type_text(&mut field, "abc1234");
        assert_eq!(field.value(), "abc-1234");
        assert_eq!(field.submit_value(), "abc-1234");
    }

    #[test]
    fn custom_kind_without_pattern_errors() {
        let mut field = MaskedField::new(MaskKind::Custom);
        let err = field.insert_char('1').expect_err("no pattern");
        assert!(matches!(err, MaskError::MissingCustomPattern));
    }
}
