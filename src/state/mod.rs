//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `login`, `ui`, ...) so components
//! depend on small focused models. None of it is global: the controller
//! creates the initial values and the app holds them in signals.

pub mod bindings;
pub mod login;
pub mod session;
pub mod settings;
pub mod ui;
