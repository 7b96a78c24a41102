pub mod contact_validator;
pub mod error;
pub mod models;
pub mod seed;

#[cfg(test)]
mod tests;

pub use contact_validator::ContactValidator;
pub use error::{CoreError, Result};
pub use models::contact_message::ContactMessage;
pub use models::project::Project;
pub use seed::{SEED_PROJECT_COUNT, seed_projects};

// Contact form constraints
pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_MESSAGE_LENGTH: usize = 10;
pub const MAX_MESSAGE_LENGTH: usize = 2000;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_EMAIL_LOCAL_PART_LENGTH: usize = 64;
