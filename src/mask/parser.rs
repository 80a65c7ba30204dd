use super::model::{MaskToken, SentinelMap};

pub(super) fn parse_pattern(pattern: &str, sentinels: &SentinelMap) -> Vec<MaskToken> {
    pattern
        .chars()
        .map(|ch| match sentinels.get(ch) {
            Some(kind) => MaskToken::Slot(kind.clone()),
            None => MaskToken::Literal(ch),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_pattern;
    use crate::mask::model::{MaskToken, SentinelMap, SlotKind};

    fn shape(tokens: &[MaskToken]) -> String {
        tokens
            .iter()
            .map(|token| match token {
                MaskToken::Literal(ch) => *ch,
                MaskToken::Slot(SlotKind::Digit) => 'D',
                MaskToken::Slot(SlotKind::Alpha) => 'L',
                MaskToken::Slot(SlotKind::Alnum) => 'X',
                MaskToken::Slot(SlotKind::Matching(_)) => 'R',
            })
            .collect()
    }

    #[test]
    fn default_sentinels_become_slots() {
        let tokens = parse_pattern("(99) a*-9", &SentinelMap::default());
        assert_eq!(shape(&tokens), "(DD) LX-D");
    }

    #[test]
    fn uppercase_letters_stay_literal() {
        let tokens = parse_pattern("R$ 9,99", &SentinelMap::default());
        assert_eq!(shape(&tokens), "R$ D,DD");
    }

    #[test]
    fn overridden_map_replaces_defaults() {
        let mut map = SentinelMap::empty();
        map.insert_regex('#', "[0-9]").expect("regex");
        let tokens = parse_pattern("##-99", &map);
        assert_eq!(shape(&tokens), "RR-99");
    }
}
