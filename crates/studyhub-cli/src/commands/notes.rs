use clap::Subcommand;
use studyhub_core::{Config, NotesDirectory, SystemBrowser, SystemClipboard};

use crate::render;

#[derive(Subcommand)]
pub enum NotesAction {
    /// List semesters and their Drive folders
    List,
    /// Open a semester's Drive folder in the default browser
    Open {
        /// Semester id
        semester: u8,
    },
    /// Copy a semester's Drive folder link to the clipboard
    Copy {
        /// Semester id
        semester: u8,
    },
}

pub fn run(action: NotesAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let notes = NotesDirectory::new(config.notes.semesters.clone());

    match action {
        NotesAction::List => {
            println!("{}", render::render_semester_list(notes.semesters()));
        }
        NotesAction::Open { semester } => {
            notes.open_link(semester, &SystemBrowser)?;
            println!("opened semester {semester} folder");
        }
        NotesAction::Copy { semester } => {
            notes.copy_link(semester, &mut SystemClipboard::new())?;
            println!("copied semester {semester} link");
        }
    }
    Ok(())
}
