//! UI components

mod address_book;
mod document_panel;
mod form_field;
mod nav_bar;
mod user_card;

pub use address_book::AddressBook;
pub use document_panel::DocumentPanel;
pub use form_field::FormField;
pub use nav_bar::NavBar;
pub use user_card::UserCard;
