use std::fmt;

/// One input of the employee form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Id,
    Name,
    Email,
    Status,
}

impl Field {
    /// Inputs in display order
    pub const ALL: [Field; 4] = [Field::Id, Field::Name, Field::Email, Field::Status];

    /// Key used in error maps and payloads
    pub fn key(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Status => "status",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Name => "Name",
            Self::Email => "Email Address",
            Self::Status => "Status",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Id => "Enter ID",
            Self::Name => "Enter Name",
            Self::Email => "Enter Email",
            Self::Status => "Select Status",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
