//! Support modules for calendar list BDD tests.

pub(crate) mod state;

pub(crate) use state::ListState;
