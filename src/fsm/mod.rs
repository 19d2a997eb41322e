//! Labeled finite-state machine.
//!
//! A [`StateMachine`] holds the current [`LabeledState`] and a registry of
//! transition actions keyed by the ordered pair of state names. Moving to a
//! state runs the matching action (if any), updates the current state and
//! then runs the new state's entry action.
//!
//! # Key Concepts
//!
//! - **Labeled states**: a name plus an entry action run on every entry
//! - **Transition actions**: side effects keyed by `(from, to)`, last write wins
//! - **Permissive transitions**: unregistered pairs are allowed and skip the action
//! - **History**: completed moves are recorded in memory, the most recent
//!   [`DEFAULT_HISTORY_CAPACITY`] by default
//!
//! Actions may fail with a caller-chosen error type `E`. Errors are returned
//! unchanged; states built with [`LabeledState::new`] use `Infallible`.

mod builder;
mod error;
mod history;
mod machine;
mod state;

pub use builder::StateMachineBuilder;
pub use error::BuildError;
pub use history::{TransitionHistory, TransitionRecord, DEFAULT_HISTORY_CAPACITY};
pub use machine::{StateMachine, TransitionKey};
pub use state::LabeledState;
