pub mod diagnostics;
pub mod diagnostics_response;
