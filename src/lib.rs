pub mod config;
pub mod error;
pub mod field;
pub mod mask;
pub mod validators;

pub use config::{MaskConfig, PatternConfig};
pub use error::{MaskError, MaskResult};
pub use field::MaskedField;
pub use mask::{
    MaskKind, MaskPattern, SentinelMap, SlotKind, accepted_input, apply_mask, process_input,
    remove_mask, validate,
};
