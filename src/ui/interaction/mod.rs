//! Mouse interaction: clickable regions registered during render.

mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
