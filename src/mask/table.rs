use once_cell::sync::Lazy;

use super::model::{MaskKind, MaskPattern};

const PATTERNS: [(MaskKind, &str, bool); 9] = [
    (MaskKind::Cpf, "999.999.999-99", false),
    (MaskKind::Cnpj, "99.999.999/9999-99", false),
    (MaskKind::Phone, "(99) 99999-9999", false),
    (MaskKind::Cep, "99999-999", false),
    (MaskKind::Date, "99/99/9999", false),
    (MaskKind::Money, "R$ 999.999.999,99", true),
    (MaskKind::CreditCard, "9999 9999 9999 9999", false),
    (MaskKind::Time, "99:99", false),
    (MaskKind::Rg, "99.999.999-9", false),
];

static TABLE: Lazy<Vec<(MaskKind, MaskPattern)>> = Lazy::new(|| {
    PATTERNS
        .iter()
        .map(|(kind, pattern, placeholder)| {
            (
                *kind,
                MaskPattern::new(*pattern).always_show_placeholder(*placeholder),
            )
        })
        .collect()
});

/// Canonical pattern for `kind`, if the kind has one.
pub fn pattern_for(kind: MaskKind) -> Option<&'static MaskPattern> {
    TABLE
        .iter()
        .find(|(entry, _)| *entry == kind)
        .map(|(_, pattern)| pattern)
}

pub fn canonical_patterns() -> impl Iterator<Item = (MaskKind, &'static MaskPattern)> {
    TABLE.iter().map(|(kind, pattern)| (*kind, pattern))
}
