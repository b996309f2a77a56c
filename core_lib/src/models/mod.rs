pub mod contact;
pub mod request;

pub use contact::{ContactFormData, ContactRejection, ContactRequest, ContactSubmission};
pub use request::ApiResponse;
