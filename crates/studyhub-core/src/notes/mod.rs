mod directory;
mod links;

pub use directory::{default_semesters, NotesDirectory, Semester};
pub use links::{ensure_web_url, Clipboard, LinkOpener, SystemBrowser, SystemClipboard};
