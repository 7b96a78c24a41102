mod diagnostics;
mod error;
