// Mock contact form: nothing is sent anywhere, the submit button just shows a
// confirmation for a few seconds and the form is cleared.

pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
pub const CONFIRM_MS: u32 = 3000;

const SENT_LABEL: &str = "Message Sent!";
const SENT_BACKGROUND: &str = "linear-gradient(135deg, #00ff88, #00d4ff)";
const IDLE_BACKGROUND: &str = "linear-gradient(135deg, #00d4ff, #ff00ff)";

/// What the submit button should display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonLook {
    pub label: String,
    pub background: &'static str,
}

#[derive(Clone, Debug)]
pub struct SubmitButton {
    label: String,
    // Bumped per submit so only the latest confirmation's timer restores
    generation: u32,
    confirming: bool,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> SubmitButton {
        SubmitButton {
            label: label.into(),
            generation: 0,
            confirming: false,
        }
    }

    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    /// Switches to the confirmation; returns the look and the token to pass
    /// to `settle` once `CONFIRM_MS` has elapsed.
    pub fn submit(&mut self) -> (ButtonLook, u32) {
        self.generation = self.generation.wrapping_add(1);
        self.confirming = true;
        let look = ButtonLook {
            label: SENT_LABEL.to_owned(),
            background: SENT_BACKGROUND,
        };
        (look, self.generation)
    }

    /// Restores the original label, unless a later submit has restarted the
    /// confirmation.
    pub fn settle(&mut self, token: u32) -> Option<ButtonLook> {
        if !self.confirming || token != self.generation {
            return None;
        }
        self.confirming = false;
        Some(ButtonLook {
            label: self.label.clone(),
            background: IDLE_BACKGROUND,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_confirms_then_restores_label() {
        let mut button = SubmitButton::new("Send Message");
        let (look, token) = button.submit();
        assert_eq!(look.label, "Message Sent!");
        assert_eq!(look.background, "linear-gradient(135deg, #00ff88, #00d4ff)");
        assert!(button.is_confirming());

        let restored = button.settle(token).unwrap();
        assert_eq!(restored.label, "Send Message");
        assert_eq!(restored.background, "linear-gradient(135deg, #00d4ff, #ff00ff)");
        assert!(!button.is_confirming());
    }

    #[test]
    fn resubmitting_keeps_the_original_label_and_latest_timer() {
        let mut button = SubmitButton::new("Send Message");
        let (_, first) = button.submit();
        let (_, second) = button.submit();

        assert_eq!(button.settle(first), None);
        assert!(button.is_confirming());
        assert_eq!(button.settle(second).unwrap().label, "Send Message");
    }

    #[test]
    fn settling_twice_is_harmless() {
        let mut button = SubmitButton::new("Go");
        let (_, token) = button.submit();
        assert!(button.settle(token).is_some());
        assert!(button.settle(token).is_none());
    }
}
