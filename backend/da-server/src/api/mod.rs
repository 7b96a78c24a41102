pub mod contact;
pub mod diagnostics;
pub mod error;
pub mod projects;
