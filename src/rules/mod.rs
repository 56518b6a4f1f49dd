//! Rules file generation: pattern resolution and serialization.

mod pattern;
mod writer;

pub use pattern::{escape_pattern, longest_first, resolve_patterns};
pub use writer::{render_rules, save_rules};
