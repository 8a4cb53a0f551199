pub mod checkbox;

pub use checkbox::SelectCheckbox;
