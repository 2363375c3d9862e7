//! Accept loop handing each connection to its own handler task.

pub mod listener;
