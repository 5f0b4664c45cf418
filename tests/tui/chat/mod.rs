pub mod input_tests;
pub mod message_tests;
pub mod scroll_tests;
pub mod send_tests;
