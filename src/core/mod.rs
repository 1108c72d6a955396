//! # Core Browsing Logic
//!
//! This module contains the catalog browser's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • navigation (stack)   │
//!                    │  • filter (facets)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │ ScreenSnapshot
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  --snapshot│
//!     │  Adapter   │                          │   (JSON)   │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigation`]: `Screen`, `NavigationState` and the controller that moves between them
//! - [`filter`]: the facet filter engine (`apply`, `aggregate`)
//! - [`catalog`]: record types and the sample catalog
//! - [`state`]: the `App` struct and read-only `ScreenSnapshot`s
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: `~/.ours/config.toml` loading and resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod navigation;
pub mod state;
