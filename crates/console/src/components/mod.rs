//! The three views of the console.

mod session_gate;
mod user_directory;
mod user_editor;

pub use session_gate::{LoginOutcome, SessionGate};
pub use user_directory::{DirectoryState, PageRequest, UserDirectory};
pub use user_editor::UserEditor;
