use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::core::exchange::ExchangeOutcome;
use crate::core::message::Message;

/// Why a submit did not start an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// The pending input is empty or whitespace only.
    BlankInput,
    /// Another exchange has not resolved yet.
    ExchangeInFlight,
}

/// An accepted submit: the text to send and the id its resolution must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub exchange_id: u64,
    pub text: String,
}

/// Message log, pending input and in-flight flag of the conversation view.
///
/// Only the transition methods below mutate it. `revision` increases on every
/// change to what the log renders, including the typing placeholder.
#[derive(Debug, Default)]
pub struct ConversationState {
    messages: VecDeque<Message>,
    pending_input: String,
    in_flight: Option<u64>,
    next_exchange_id: u64,
    revision: u64,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &VecDeque<Message> {
        &self.messages
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn awaiting_response(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight_exchange(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the pending input with the field's current contents.
    pub fn edit_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    pub fn submit(&mut self) -> Result<Submission, SubmitRejection> {
        if self.pending_input.trim().is_empty() {
            return Err(SubmitRejection::BlankInput);
        }
        if self.in_flight.is_some() {
            return Err(SubmitRejection::ExchangeInFlight);
        }

        let text = std::mem::take(&mut self.pending_input);
        self.messages.push_back(Message::user(text.clone()));

        self.next_exchange_id += 1;
        let exchange_id = self.next_exchange_id;
        self.in_flight = Some(exchange_id);
        self.revision += 1;

        Ok(Submission { exchange_id, text })
    }

    /// Applies the outcome of exchange `exchange_id`. Returns false when the id
    /// is not the one in flight, in which case nothing changes.
    pub fn resolve(&mut self, exchange_id: u64, outcome: ExchangeOutcome) -> bool {
        if self.in_flight != Some(exchange_id) {
            debug!(exchange_id, in_flight = ?self.in_flight, "ignoring stale exchange outcome");
            return false;
        }

        let reply = match outcome {
            Ok(text) => Message::bot(text),
            Err(err) => {
                warn!(exchange_id, error = %err, "exchange failed");
                Message::exchange_error()
            }
        };
        self.messages.push_back(reply);
        self.in_flight = None;
        self.revision += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::exchange::ExchangeError;
    use crate::core::message::{Sender, EXCHANGE_ERROR_TEXT};

    fn submitted(text: &str) -> (ConversationState, Submission) {
        let mut state = ConversationState::new();
        state.edit_input(text);
        let submission = state.submit().expect("submit accepted");
        (state, submission)
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = ConversationState::new();
        assert!(state.messages().is_empty());
        assert_eq!(state.pending_input(), "");
        assert!(!state.awaiting_response());
    }

    #[test]
    fn submit_appends_user_message_and_clears_input() {
        for text in ["Hola", "  padded  ", "multi\nline"] {
            let (state, submission) = submitted(text);
            assert_eq!(state.messages().len(), 1);
            assert_eq!(state.messages()[0], Message::user(text));
            assert_eq!(state.pending_input(), "");
            assert!(state.awaiting_response());
            assert_eq!(submission.text, text);
        }
    }

    #[test]
    fn blank_input_is_a_no_op() {
        for text in ["", " ", "\t\n  "] {
            let mut state = ConversationState::new();
            state.edit_input(text);
            let revision = state.revision();
            assert_eq!(state.submit(), Err(SubmitRejection::BlankInput));
            assert!(state.messages().is_empty());
            assert!(!state.awaiting_response());
            assert_eq!(state.pending_input(), text);
            assert_eq!(state.revision(), revision);
        }
    }

    #[test]
    fn second_submit_while_awaiting_is_rejected() {
        let (mut state, _) = submitted("first");
        state.edit_input("second");
        assert_eq!(state.submit(), Err(SubmitRejection::ExchangeInFlight));
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.pending_input(), "second");
        assert!(state.awaiting_response());
    }

    #[test]
    fn successful_resolution_appends_reply_and_goes_idle() {
        let (mut state, submission) = submitted("Hola");
        assert!(state.resolve(
            submission.exchange_id,
            Ok("¡Hola! ¿En qué puedo ayudarte?".to_string())
        ));
        assert_eq!(
            state.messages().iter().cloned().collect::<Vec<_>>(),
            vec![
                Message::user("Hola"),
                Message::bot("¡Hola! ¿En qué puedo ayudarte?")
            ]
        );
        assert!(!state.awaiting_response());
    }

    #[test]
    fn failed_resolution_appends_generic_error() {
        let (mut state, submission) = submitted("test");
        assert!(state.resolve(
            submission.exchange_id,
            Err(ExchangeError::MalformedResponse)
        ));
        let last = state.messages().back().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, EXCHANGE_ERROR_TEXT);
        assert!(!state.awaiting_response());
    }

    #[test]
    fn stale_resolution_is_ignored() {
        let (mut state, submission) = submitted("one");
        assert!(!state.resolve(submission.exchange_id + 1, Ok("late".into())));
        assert_eq!(state.messages().len(), 1);
        assert!(state.awaiting_response());

        assert!(state.resolve(submission.exchange_id, Ok("ok".into())));
        assert!(!state.resolve(submission.exchange_id, Ok("again".into())));
        assert_eq!(state.messages().len(), 2);
    }

    #[test]
    fn exchange_ids_increase_and_resubmit_works_after_resolution() {
        let (mut state, first) = submitted("one");
        state.resolve(first.exchange_id, Ok("a".into()));
        state.edit_input("two");
        let second = state.submit().unwrap();
        assert!(second.exchange_id > first.exchange_id);
        assert_eq!(state.messages().len(), 3);
    }

    #[test]
    fn revision_tracks_log_changes_only() {
        let mut state = ConversationState::new();
        let start = state.revision();
        state.edit_input("typing");
        assert_eq!(state.revision(), start);
        let submission = state.submit().unwrap();
        let after_submit = state.revision();
        assert!(after_submit > start);
        state.resolve(submission.exchange_id, Ok("done".into()));
        assert!(state.revision() > after_submit);
    }
}
