pub mod chat;
pub mod reset;
