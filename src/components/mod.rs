//! UI Components
//!
//! Reusable Leptos components and the two routed pages.

mod add_item_modal;
mod dashboard_page;
mod delete_confirm_button;
mod item_card;
mod lightbox;
mod new_tierlist_form;
mod sidebar;
pub mod tier_editor;
mod tier_row;
mod tierlist_page;
mod top_bar;

pub use add_item_modal::AddItemModal;
pub use dashboard_page::DashboardPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use item_card::ItemCard;
pub use lightbox::Lightbox;
pub use new_tierlist_form::NewTierlistForm;
pub use sidebar::Sidebar;
pub use tier_editor::TierEditor;
pub use tier_row::{TierRow, UnassignedRow};
pub use tierlist_page::TierlistPage;
pub use top_bar::TopBar;
