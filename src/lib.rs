pub mod constants;
pub mod errors;
pub mod stage_fields;

pub use constants::*;
pub use errors::ConventionsError;

// Re-export the record keys alongside their typed form
pub use stage_fields::*;
