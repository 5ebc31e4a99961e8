/// Visibility of a modal together with the content it was opened with.
/// Closing drops the content, so nothing survives to the next opening.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<T> {
    Closed,
    Open(T),
}

impl<T> ModalState<T> {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn open(&mut self, content: T) {
        *self = ModalState::Open(content);
    }

    /// Close the modal, handing back what it held
    pub fn close(&mut self) -> Option<T> {
        match std::mem::replace(self, ModalState::Closed) {
            ModalState::Open(content) => Some(content),
            ModalState::Closed => None,
        }
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            ModalState::Open(content) => Some(content),
            ModalState::Closed => None,
        }
    }

    pub fn content_mut(&mut self) -> Option<&mut T> {
        match self {
            ModalState::Open(content) => Some(content),
            ModalState::Closed => None,
        }
    }
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        ModalState::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_cycle() {
        let mut modal = ModalState::default();
        assert!(!modal.is_open());
        assert_eq!(modal.close(), None);

        modal.open("draft".to_string());
        assert!(modal.is_open());
        if let Some(text) = modal.content_mut() {
            text.push_str(" v2");
        }
        assert_eq!(modal.content().map(String::as_str), Some("draft v2"));

        assert_eq!(modal.close(), Some("draft v2".to_string()));
        assert!(!modal.is_open());
        assert_eq!(modal.content(), None);
    }
}
