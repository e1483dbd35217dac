//! # Core Application Logic
//!
//! The list edit engine and everything around it that is not terminal I/O.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ListState (snapshot) │
//!                    │  • Command (keys)       │
//!                    │  • update() (engine)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │   other    │
//!            │  Adapter   │            │  adapters  │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ListState`, `Item`, `Caret`, the snapshot the engine works on
//! - [`action`]: `Command` and `update()`, the list edit engine
//! - [`key`] / [`keymap`]: normalized key combinations and their bindings
//! - [`native`]: host-default editing inside one item
//! - [`normalize`]: plain-text post-condition
//! - [`history`]: undo/redo snapshots
//! - [`session`]: runs keys through all of the above
//! - [`config`]: settings and their override hierarchy

pub mod action;
pub mod config;
pub mod history;
pub mod key;
pub mod keymap;
pub mod native;
pub mod normalize;
pub mod session;
pub mod state;

pub use action::{Change, Command, Outcome, Transition, update};
pub use key::{Key, KeyCombo, Modifiers};
pub use state::{Caret, Item, ListState};
