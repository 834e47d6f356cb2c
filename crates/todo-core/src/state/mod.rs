//! State Layer
//!
//! `TodoState` holds the collections and id counters; `TodoController` is the
//! only way to mutate them and notifies observers after every change.

mod clock;
mod todo_state;
mod controller;

pub use clock::{Clock, LocalClock, DISPLAY_FORMAT};
pub use todo_state::{IdCounters, TodoState};
pub use controller::{StateChange, StateObserver, TodoController};
