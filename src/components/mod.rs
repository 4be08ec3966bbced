//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (spinner) and the route guard while
//! reading session state from the Leptos context provider.

pub mod protected_route;
pub mod spinner;
