//! Client-side observable state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` and `ui` are provided as `RwSignal`s from `App` and change only
//! through their reducers. `variables` is drawer-local and lives in a signal
//! owned by the edit-variables drawer.

pub mod auth;
pub mod ui;
pub mod variables;
