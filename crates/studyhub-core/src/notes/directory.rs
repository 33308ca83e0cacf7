//! Semester notes directory.
//!
//! The semester list is fixed for the life of the directory. The only
//! mutable state is which semesters are expanded.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use super::links::{Clipboard, LinkOpener};
use crate::clock::{Clock, SystemClock};
use crate::error::LinkError;
use crate::events::Event;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub id: u8,
    pub name: String,
    pub drive_link: Url,
}

/// Eight semesters pointing at placeholder Drive folders.
pub fn default_semesters() -> Vec<Semester> {
    (1..=8)
        .filter_map(|n| {
            let link = format!("https://drive.google.com/drive/folders/placeholder-semester-{n}");
            Some(Semester {
                id: n,
                name: format!("Semester {n}"),
                drive_link: Url::parse(&link).ok()?,
            })
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct NotesDirectory<C: Clock = SystemClock> {
    clock: C,
    semesters: Vec<Semester>,
    expanded: BTreeSet<u8>,
}

impl Default for NotesDirectory<SystemClock> {
    fn default() -> Self {
        Self::new(default_semesters())
    }
}

impl NotesDirectory<SystemClock> {
    pub fn new(semesters: Vec<Semester>) -> Self {
        Self::with_clock(SystemClock, semesters)
    }
}

impl<C: Clock> NotesDirectory<C> {
    pub fn with_clock(clock: C, semesters: Vec<Semester>) -> Self {
        Self {
            clock,
            semesters,
            expanded: BTreeSet::new(),
        }
    }

    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    pub fn semester(&self, id: u8) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id == id)
    }

    pub fn is_expanded(&self, id: u8) -> bool {
        self.expanded.contains(&id)
    }

    pub fn expanded(&self) -> &BTreeSet<u8> {
        &self.expanded
    }

    /// Flip the expanded flag of a listed semester. Unknown ids are ignored.
    pub fn toggle(&mut self, id: u8) -> Option<Event> {
        if self.semester(id).is_none() {
            debug!(semester_id = id, "toggle ignored: unknown semester");
            return None;
        }
        let expanded = if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        };
        Some(Event::SemesterToggled {
            semester_id: id,
            expanded,
            at: self.clock.now(),
        })
    }

    /// Put the semester's Drive link on the clipboard.
    pub fn copy_link(&self, id: u8, clipboard: &mut impl Clipboard) -> Result<(), LinkError> {
        let semester = self.semester(id).ok_or(LinkError::UnknownSemester(id))?;
        clipboard.write_text(semester.drive_link.as_str())?;
        info!(semester_id = id, "drive link copied");
        Ok(())
    }

    /// Ask the host to show the semester's Drive folder.
    pub fn open_link(&self, id: u8, opener: &impl LinkOpener) -> Result<(), LinkError> {
        let semester = self.semester(id).ok_or(LinkError::UnknownSemester(id))?;
        opener.open(&semester.drive_link)?;
        info!(semester_id = id, "drive link opened");
        Ok(())
    }
}
