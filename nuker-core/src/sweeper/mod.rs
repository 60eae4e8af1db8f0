mod walker;

pub use walker::{SweepConfig, Sweeper, VCS_DIR, validate_root};
