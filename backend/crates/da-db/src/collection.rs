use std::fmt;

/// Logical collections the API reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Project,
    ContactMessage,
}

impl Collection {
    /// Name of the backing collection in the database
    pub fn name(self) -> &'static str {
        match self {
            Collection::Project => "project",
            Collection::ContactMessage => "contactmessage",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
