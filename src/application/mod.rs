pub mod assistant;
pub mod backend;
pub mod extraction;
pub mod report;

pub use assistant::Assistant;
pub use backend::{BackendClient, BackendError};
pub use extraction::{BatchRequest, ExtractionError, Resort};
