//! Client-side UI state.
//!
//! DESIGN
//! ======
//! Plain structs with synchronous mutators. Pages wrap them in `RwSignal`s;
//! keeping them signal-free lets tests drive them directly.

pub mod field;
pub mod landing;
pub mod modal;
