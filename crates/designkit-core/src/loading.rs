//! Loading overlay state.
//!
//! A single visible flag and optional message. There is no stacking or
//! reference counting: the latest `show` wins and one `hide` clears it.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub visible: bool,
    pub message: Option<String>,
}

impl LoadingState {
    pub fn show(&mut self, message: Option<String>) {
        self.visible = true;
        self.message = message;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.message = None;
    }

    /// Message to display while visible.
    pub fn display_message(&self) -> Option<&str> {
        if self.visible {
            self.message.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let state = LoadingState::default();
        assert!(!state.visible);
        assert_eq!(state.display_message(), None);
    }

    #[test]
    fn latest_show_wins() {
        let mut state = LoadingState::default();
        state.show(Some("A".into()));
        state.show(Some("B".into()));
        assert!(state.visible);
        assert_eq!(state.display_message(), Some("B"));
    }

    #[test]
    fn show_without_message_clears_previous_message() {
        let mut state = LoadingState::default();
        state.show(Some("saving".into()));
        state.show(None);
        assert!(state.visible);
        assert_eq!(state.message, None);
    }

    #[test]
    fn single_hide_clears_everything() {
        let mut state = LoadingState::default();
        state.show(Some("A".into()));
        state.show(Some("B".into()));
        state.hide();
        assert_eq!(state, LoadingState::default());
    }
}
