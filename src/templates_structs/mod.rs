// Template context structures for askama templates and JSON responses.

mod api;
mod deck;

pub use self::api::{DeckStateResponse, InputRequest, InputResponse};
pub use self::deck::{DeckPageTemplate, NavLink};
