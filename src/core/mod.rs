//! # Core Application Logic
//!
//! Client-side game logic. It knows nothing about ratatui or reqwest; the
//! backend is only visible through the `GameBackend` trait object held by
//! [`state::App`].
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (App)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • screen() (view)      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  Backend   │
//!            │  Adapter   │            │  (api)     │
//!            │ (ratatui)  │            │ (reqwest)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all client state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`view`]: Which panels are visible for a given `App`
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod state;
pub mod view;
