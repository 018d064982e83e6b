pub mod coherence_mode;
pub mod popover;
pub mod select;

pub use coherence_mode::{ChangeOutcome, CoherenceModeSelector, SelectorResponse};
pub use popover::InformationalPopover;
pub use select::{SearchableSelect, SelectChange, SelectResponse};
