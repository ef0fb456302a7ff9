//! Worker update builder.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerUpdate {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position_id: Option<String>,
}

pub struct WorkerUpdateBuilder(WorkerUpdate);

impl WorkerUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(WorkerUpdate::default())
    }

    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.0.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.0.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.0.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.0.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn position_id(mut self, position_id: impl Into<String>) -> Self {
        self.0.position_id = Some(position_id.into());
        self
    }

    #[must_use]
    pub fn build(self) -> WorkerUpdate {
        self.0
    }
}

impl Default for WorkerUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
