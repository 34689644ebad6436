//! Waitlist form state.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::util::signup::MessageKind;

/// Message shown under the signup form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub kind: MessageKind,
    /// Set while the 300 ms fade-out runs.
    pub fading: bool,
    /// Bumped per message so a stale auto-hide timer leaves newer text alone.
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupState {
    pub email: String,
    pub busy: bool,
    pub message: Option<FormMessage>,
    /// Brief scale-up of the submit button after a successful signup.
    pub celebrating: bool,
    next_seq: u64,
}

impl SignupState {
    /// Replace the current message; returns its sequence number.
    pub fn show(&mut self, text: impl Into<String>, kind: MessageKind) -> u64 {
        self.next_seq += 1;
        self.message = Some(FormMessage {
            text: text.into(),
            kind,
            fading: false,
            seq: self.next_seq,
        });
        self.next_seq
    }

    /// Start fading message `seq` if it is still the one on screen.
    pub fn begin_hide(&mut self, seq: u64) -> bool {
        match self.message.as_mut() {
            Some(message) if message.seq == seq => {
                message.fading = true;
                true
            }
            _ => false,
        }
    }

    /// Remove message `seq` if it is still the one on screen.
    pub fn clear(&mut self, seq: u64) {
        if self.message.as_ref().is_some_and(|m| m.seq == seq) {
            self.message = None;
        }
    }

    /// Typing dismisses an error but leaves success copy in place.
    pub fn clear_error(&mut self) {
        if self.message.as_ref().is_some_and(|m| m.kind == MessageKind::Error) {
            self.message = None;
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.busy { "Submitting email..." } else { "Join waitlist" }
    }

    /// Class list for the message element.
    #[must_use]
    pub fn message_class(&self) -> String {
        match &self.message {
            Some(message) if message.fading => format!("form-message {} fading", message.kind.class()),
            Some(message) => format!("form-message {}", message.kind.class()),
            None => "form-message".to_owned(),
        }
    }
}
