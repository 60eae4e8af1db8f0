mod confirm;
mod progress;
mod summary;
mod theme;

pub use confirm::confirm_sweep;
pub use progress::Spinner;
pub use summary::render_summary;
pub use theme::Theme;
