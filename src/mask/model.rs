use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::parser;
use crate::error::{MaskError, MaskResult};

pub const DEFAULT_PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaskKind {
    Cpf,
    Cnpj,
    Phone,
    Cep,
    Date,
    Money,
    CreditCard,
    Time,
    Rg,
    Numeric,
    Alphanumeric,
    Email,
    Password,
    Custom,
}

impl MaskKind {
    pub const ALL: [MaskKind; 14] = [
        MaskKind::Cpf,
        MaskKind::Cnpj,
        MaskKind::Phone,
        MaskKind::Cep,
        MaskKind::Date,
        MaskKind::Money,
        MaskKind::CreditCard,
        MaskKind::Time,
        MaskKind::Rg,
        MaskKind::Numeric,
        MaskKind::Alphanumeric,
        MaskKind::Email,
        MaskKind::Password,
        MaskKind::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MaskKind::Cpf => "cpf",
            MaskKind::Cnpj => "cnpj",
            MaskKind::Phone => "phone",
            MaskKind::Cep => "cep",
            MaskKind::Date => "date",
            MaskKind::Money => "money",
            MaskKind::CreditCard => "creditCard",
            MaskKind::Time => "time",
            MaskKind::Rg => "rg",
            MaskKind::Numeric => "numeric",
            MaskKind::Alphanumeric => "alphanumeric",
            MaskKind::Email => "email",
            MaskKind::Password => "password",
            MaskKind::Custom => "custom",
        }
    }

    /// Whether the canonical table carries a fixed pattern for this kind.
    pub fn is_patterned(self) -> bool {
        !matches!(
            self,
            MaskKind::Numeric
                | MaskKind::Alphanumeric
                | MaskKind::Email
                | MaskKind::Password
                | MaskKind::Custom
        )
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaskKind {
    type Err = MaskError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        MaskKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| MaskError::UnknownKind(value.to_string()))
    }
}

#[derive(Debug, Clone)]
pub enum SlotKind {
    Digit,
    Alpha,
    Alnum,
    Matching(Regex),
}

impl SlotKind {
    pub fn matching(sentinel: char, pattern: &str) -> MaskResult<Self> {
        Regex::new(format!("^(?:{pattern})$").as_str())
            .map(SlotKind::Matching)
            .map_err(|source| MaskError::InvalidSentinel { sentinel, source })
    }

    pub fn accepts(&self, ch: char) -> bool {
        match self {
            SlotKind::Digit => ch.is_ascii_digit(),
            SlotKind::Alpha => ch.is_ascii_alphabetic(),
            SlotKind::Alnum => ch.is_ascii_alphanumeric(),
            SlotKind::Matching(re) => {
                let mut buf = [0u8; 4];
                re.is_match(ch.encode_utf8(&mut buf))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum MaskToken {
    Literal(char),
    Slot(SlotKind),
}

/// Characters of a pattern that are filled from input, and what each accepts.
#[derive(Debug, Clone)]
pub struct SentinelMap {
    entries: Vec<(char, SlotKind)>,
}

impl SentinelMap {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, sentinel: char, kind: SlotKind) {
        if let Some(entry) = self.entries.iter_mut().find(|(ch, _)| *ch == sentinel) {
            entry.1 = kind;
        } else {
            self.entries.push((sentinel, kind));
        }
    }

    pub fn insert_regex(&mut self, sentinel: char, pattern: &str) -> MaskResult<()> {
        let kind = SlotKind::matching(sentinel, pattern)?;
        self.insert(sentinel, kind);
        Ok(())
    }

    pub fn get(&self, sentinel: char) -> Option<&SlotKind> {
        self.entries
            .iter()
            .find(|(ch, _)| *ch == sentinel)
            .map(|(_, kind)| kind)
    }
}

impl Default for SentinelMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.insert('9', SlotKind::Digit);
        map.insert('a', SlotKind::Alpha);
        map.insert('*', SlotKind::Alnum);
        map
    }
}

#[derive(Debug, Clone)]
pub struct MaskPattern {
    source: String,
    tokens: Vec<MaskToken>,
    always_show_placeholder: bool,
    placeholder_char: char,
}

impl MaskPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::with_sentinels(pattern, &SentinelMap::default())
    }

    pub fn with_sentinels(pattern: impl Into<String>, sentinels: &SentinelMap) -> Self {
        let source = pattern.into();
        let tokens = parser::parse_pattern(source.as_str(), sentinels);
        Self {
            source,
            tokens,
            always_show_placeholder: false,
            placeholder_char: DEFAULT_PLACEHOLDER,
        }
    }

    pub fn always_show_placeholder(mut self, enabled: bool) -> Self {
        self.always_show_placeholder = enabled;
        self
    }

    pub fn placeholder_char(mut self, ch: char) -> Self {
        self.placeholder_char = ch;
        self
    }

    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    pub fn tokens(&self) -> &[MaskToken] {
        self.tokens.as_slice()
    }

    pub fn shows_placeholder(&self) -> bool {
        self.always_show_placeholder
    }

    pub fn placeholder(&self) -> char {
        self.placeholder_char
    }

    /// Number of input characters the pattern can hold.
    pub fn slot_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|token| matches!(token, MaskToken::Slot(_)))
            .count()
    }

    /// Width in chars of a completely filled value.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{MaskKind, MaskPattern, SentinelMap, SlotKind};
    use crate::error::MaskError;

    #[test]
    fn kind_parses_canonical_identifiers() {
        for kind in MaskKind::ALL {
            let parsed: MaskKind = kind.as_str().parse().expect("identifier should parse");
            assert_eq!(parsed, kind);
        }
        assert_eq!(
            "creditCard".parse::<MaskKind>().expect("kind"),
            MaskKind::CreditCard
        );
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let err = "ssn".parse::<MaskKind>().expect_err("ssn is not a kind");
        assert!(matches!(err, MaskError::UnknownKind(ref name) if name == "ssn"));
    }

    #[test]
    fn kind_serializes_as_camel_case() {
        let json = serde_json::to_string(&MaskKind::CreditCard).expect("serialize");
        assert_eq!(json, "\"creditCard\"");
        let kind: MaskKind = serde_json::from_str("\"alphanumeric\"").expect("deserialize");
        assert_eq!(kind, MaskKind::Alphanumeric);
    }

    #[test]
    fn pattern_counts_slots_and_width() {
        let pattern = MaskPattern::new("999.999.999-99");
        assert_eq!(pattern.slot_count(), 11);
        assert_eq!(pattern.len(), 14);
    }

    #[test]
    fn regex_sentinel_is_anchored_to_one_char() {
        let slot = SlotKind::matching('h', "[0-9a-f]").expect("regex");
        assert!(slot.accepts('c'));
        assert!(!slot.accepts('g'));
        assert!(!slot.accepts('C'));
    }

    #[test]
    fn broken_sentinel_regex_is_reported() {
        let mut map = SentinelMap::empty();
        let err = map.insert_regex('#', "[0-9").expect_err("unclosed class");
        assert!(matches!(err, MaskError::InvalidSentinel { sentinel: '#', .. }));
        assert!(map.get('#').is_none());
    }

    #[test]
    fn insert_replaces_existing_sentinel() {
        let mut map = SentinelMap::default();
        map.insert('9', SlotKind::Alnum);
        assert!(map.get('9').expect("sentinel").accepts('x'));
        assert!(map.get('a').expect("sentinel").accepts('x'));
    }
}
