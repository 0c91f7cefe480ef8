pub mod machine;
pub mod popup_render;
mod popup_state;

pub use popup_state::{PopupHit, PopupList};
