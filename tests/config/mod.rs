pub mod loading_tests;
pub mod parsing_tests;
pub mod provider_tests;
