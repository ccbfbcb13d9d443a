//! UI Components
//!
//! Reusable Leptos components.

mod catalog_select;
mod new_item_form;
mod search_box;
mod filter_bar;
mod item_table;
mod item_row;
mod icon_button;

pub use catalog_select::CatalogSelect;
pub use new_item_form::NewItemForm;
pub use search_box::SearchBox;
pub use filter_bar::FilterBar;
pub use item_table::ItemTable;
pub use item_row::ItemRow;
pub use icon_button::IconButton;
