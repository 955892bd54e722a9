use crate::config::{self, Timings};
use crate::schedule::{Scheduled, Task};

#[derive(Clone, Debug, PartialEq, Eq)]
enum State {
    Idle,
    Confirmed { original_label: String },
}

/// The "notify me" button: flips to a confirmation look on click and back
/// once the restore timer fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotifyButton {
    state: State,
    label: Option<String>,
}

impl Default for NotifyButton {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifyButton {
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            label: None,
        }
    }

    /// Handles an activation. Returns the restore timer to schedule, or
    /// `None` when the button is mid-cycle and the click is ignored.
    pub fn click(&mut self, current_label: &str, timings: &Timings) -> Option<Scheduled> {
        if !self.is_click_enabled() {
            return None;
        }

        self.state = State::Confirmed {
            original_label: current_label.to_string(),
        };
        self.label = Some(config::CONFIRMED_LABEL.to_string());

        Some(Scheduled::new(timings.reset_delay_ms, Task::RestoreButton))
    }

    pub fn restore(&mut self) {
        if let State::Confirmed { original_label } = std::mem::replace(&mut self.state, State::Idle) {
            self.label = Some(original_label);
        }
    }

    /// Label to show, `None` until the script has touched it.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Background override; `None` means the stylesheet default.
    pub fn background(&self) -> Option<&'static str> {
        self.is_confirmed().then_some(config::CONFIRMED_BACKGROUND)
    }

    pub fn shadow(&self) -> Option<&'static str> {
        self.is_confirmed().then_some(config::CONFIRMED_SHADOW)
    }

    pub fn pointer_events(&self) -> &'static str {
        if self.is_confirmed() {
            "none"
        } else {
            "auto"
        }
    }

    pub fn is_click_enabled(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.state, State::Confirmed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_untouched() {
        let button = NotifyButton::new();
        assert!(button.is_click_enabled());
        assert_eq!(button.label(), None);
        assert_eq!(button.background(), None);
        assert_eq!(button.shadow(), None);
        assert_eq!(button.pointer_events(), "auto");
    }

    #[test]
    fn click_confirms_and_asks_for_restore_timer() {
        let mut button = NotifyButton::new();
        let scheduled = button.click("Notify Me", &Timings::DEFAULT);

        assert_eq!(scheduled, Some(Scheduled::new(5_000, Task::RestoreButton)));
        assert_eq!(button.label(), Some(config::CONFIRMED_LABEL));
        assert_eq!(button.background(), Some(config::CONFIRMED_BACKGROUND));
        assert_eq!(button.shadow(), Some(config::CONFIRMED_SHADOW));
        assert_eq!(button.pointer_events(), "none");
        assert!(!button.is_click_enabled());
    }

    #[test]
    fn second_click_while_confirmed_is_ignored() {
        let mut button = NotifyButton::new();
        button.click("Notify Me", &Timings::DEFAULT);
        let before = button.clone();

        // The label now reads the confirmation; it must not be captured as the original.
        assert_eq!(button.click(config::CONFIRMED_LABEL, &Timings::DEFAULT), None);
        assert_eq!(button, before);

        button.restore();
        assert_eq!(button.label(), Some("Notify Me"));
    }

    #[test]
    fn restore_clears_overrides() {
        let mut button = NotifyButton::new();
        button.click("Get early access", &Timings::DEFAULT);
        button.restore();

        assert_eq!(button.label(), Some("Get early access"));
        assert_eq!(button.background(), None);
        assert_eq!(button.shadow(), None);
        assert_eq!(button.pointer_events(), "auto");
        assert!(button.is_click_enabled());
    }

    #[test]
    fn restore_when_idle_does_nothing() {
        let mut button = NotifyButton::new();
        button.restore();
        assert_eq!(button, NotifyButton::new());
    }

    #[test]
    fn can_cycle_again_after_restore() {
        let mut button = NotifyButton::new();
        button.click("Notify Me", &Timings::DEFAULT);
        button.restore();
        assert!(button.click("Notify Me", &Timings::DEFAULT).is_some());
    }
}
