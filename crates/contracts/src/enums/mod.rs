pub mod selectable_mode;

pub use selectable_mode::SelectableMode;
