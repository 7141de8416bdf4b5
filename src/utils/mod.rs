pub mod display;
pub mod images;
pub mod pagination;
