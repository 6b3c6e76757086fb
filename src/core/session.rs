//! The acting user for a lifecycle call.

/// User name that bypasses ownership checks (patches, maintenance).
pub const ADMINISTRATOR: &str = "Administrator";

/// Identity the lifecycle stamps onto new records and checks writes against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    user: String,
}

impl Session {
    /// Creates a session for the given user.
    #[must_use]
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }

    /// Session used by patches and other maintenance code.
    #[must_use]
    pub fn administrator() -> Self {
        Self::new(ADMINISTRATOR)
    }

    /// The acting user.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Whether this is the maintenance session.
    #[must_use]
    pub fn is_administrator(&self) -> bool {
        self.user == ADMINISTRATOR
    }

    /// Whether this session may modify a record owned by `owner`.
    #[must_use]
    pub fn can_write(&self, owner: &str) -> bool {
        self.is_administrator() || self.user == owner
    }
}
