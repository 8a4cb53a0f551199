pub mod components;
pub mod icons;
pub mod selection;
pub mod theme;
