//! # TUI Components
//!
//! UI building blocks for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name, progress and status message
//!
//! ### Stateful Components
//!
//! - `Checklist`: the scrollable item list. Persistent scroll and layout
//!   state lives in `ChecklistState`, owned by `TuiState`; the component is
//!   rebuilt each frame around a borrow of it and of the current `ListState`.
//!
//! Components receive external data as props instead of reaching into the
//! session, so each one can be rendered against a `TestBackend` on its own.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top status bar)
//! └── checklist/       (item rows, wrapping, caret placement)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod checklist;
pub use checklist::{Checklist, ChecklistState, RowHit};
