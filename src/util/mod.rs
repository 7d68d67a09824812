//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Each browser API sits behind a trait with an in-memory twin, so the
//! session and login logic runs unchanged in host-side tests.

pub mod cookie;
pub mod dom;
pub mod navigation;
pub mod storage;
pub mod theme;
