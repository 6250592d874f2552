// Library interface for wordle-board
// This allows integration tests to access internal modules

pub mod actions;
pub mod app;
pub mod board;
pub mod cli;
pub mod error;
pub mod logging;
pub mod solver;
pub mod store;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use actions::{Activation, BoardActions, Focusable, PanelControl, Severity};
pub use board::{BoardState, CellMark, WordRestrictions};
pub use error::{ActionError, StoreError};
pub use store::{BoardSettings, PuzzleStore};
pub use wordbank::{WordBank, load_wordbank_from_file, load_wordbank_from_str};
