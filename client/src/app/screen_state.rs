//! Loading status shared by every screen.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenState {
    #[default]
    Idle,
    /// Work in progress, with an optional progress line
    Loading(Option<String>),
    Loaded,
    Error(String),
}

impl ScreenState {
    pub fn loading(message: impl Into<String>) -> Self {
        Self::Loading(Some(message.into()))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    /// Progress or error text, if the state carries any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Loading(message) => message.as_deref(),
            Self::Error(message) => Some(message),
            Self::Idle | Self::Loaded => None,
        }
    }
}
