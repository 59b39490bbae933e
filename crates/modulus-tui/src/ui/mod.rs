//! Layout shell and step rendering for the onboarding TUI

mod content;
mod dump;
mod render;
mod sidebar;

pub use dump::dump_step;
pub use render::draw;
