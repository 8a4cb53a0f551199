pub mod select_cell;
pub mod select_cell_styles;

pub use select_cell::SelectCell;
pub use select_cell_styles::SelectCellStyles;
