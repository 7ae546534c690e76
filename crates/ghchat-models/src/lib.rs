// Models module - data structures for API communication
pub mod types;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use types::Message;
pub use requests::ChatRequest;
pub use responses::{ChatResponse, Choice, Usage};
