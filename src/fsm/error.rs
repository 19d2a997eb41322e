//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError<E> {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Entry action of initial state '{state}' failed")]
    EntryFailed {
        state: String,
        #[source]
        source: E,
    },
}
