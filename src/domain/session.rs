/// Sign-in state of the current browser session.
///
/// The flag lives in the signed session cookie and is never sent to the
/// remote service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated { email: String },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    /// Where the console root should send this session.
    pub fn landing_path(&self) -> &'static str {
        match self {
            SessionState::Anonymous => "/login",
            SessionState::Authenticated { .. } => "/dashboard",
        }
    }
}

impl From<Option<String>> for SessionState {
    fn from(identity: Option<String>) -> Self {
        match identity {
            Some(email) if !email.is_empty() => SessionState::Authenticated { email },
            _ => SessionState::Anonymous,
        }
    }
}
