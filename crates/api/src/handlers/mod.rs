pub mod productions;
pub mod users;
pub mod viewings;
