use crate::shared::errors::ApiResult;

/// Lifecycle of one asynchronous user action
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    /// Carries the message shown to the user
    Failed(String),
}

impl ActionStatus {
    /// Status matching the outcome of a remote call
    pub fn settle<T>(result: &ApiResult<T>) -> Self {
        match result {
            Ok(_) => ActionStatus::Succeeded,
            Err(e) => ActionStatus::Failed(e.user_message()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ActionStatus::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ActionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ApiError;

    #[test]
    fn test_settle() {
        assert_eq!(ActionStatus::settle(&Ok::<(), ApiError>(())), ActionStatus::Succeeded);

        let failed = ActionStatus::settle::<()>(&Err(ApiError::Network("refused".into())));
        assert!(!failed.is_pending());
        assert_eq!(failed.error(), Some("The summary service could not be reached."));
    }

    #[test]
    fn test_default_is_idle() {
        assert_eq!(ActionStatus::default(), ActionStatus::Idle);
        assert!(ActionStatus::Pending.is_pending());
        assert_eq!(ActionStatus::Succeeded.error(), None);
    }
}
