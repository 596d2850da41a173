//! Server-rendered pages. Every renderer is a plain function returning markup;
//! the only stateful piece is [`home::HomeView`].

pub mod article;
pub mod card;
pub mod category_nav;
pub mod footer;
pub mod grid;
pub mod header;
pub mod hero;
pub mod home;
pub mod html;
pub mod layout;
pub mod search;

pub use home::{HomeView, ViewState};
