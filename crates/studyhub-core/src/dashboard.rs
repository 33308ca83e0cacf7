//! All four views behind one owner.

use crate::clock::{Clock, SystemClock};
use crate::deadline::DeadlineEngine;
use crate::gpa::GpaEngine;
use crate::notes::{NotesDirectory, Semester};
use crate::shell::{Shell, View};
use crate::storage::Config;

/// Views never touch each other's state; the dashboard only holds them
/// side by side so a front end can own a single value. Every part reads
/// time from its own handle of the same clock.
#[derive(Debug)]
pub struct Dashboard<C: Clock = SystemClock> {
    pub shell: Shell<C>,
    pub gpa: GpaEngine<C>,
    pub deadlines: DeadlineEngine<C>,
    pub notes: NotesDirectory<C>,
}

impl Dashboard<SystemClock> {
    pub fn from_config(config: &Config) -> Self {
        Self::with_clock(
            SystemClock,
            config.notes.semesters.clone(),
            config.shell.default_view,
        )
    }
}

impl<C: Clock + Clone> Dashboard<C> {
    pub fn with_clock(clock: C, semesters: Vec<Semester>, initial: View) -> Self {
        Self {
            shell: Shell::with_clock(clock.clone(), initial),
            gpa: GpaEngine::with_clock(clock.clone()),
            notes: NotesDirectory::with_clock(clock.clone(), semesters),
            deadlines: DeadlineEngine::with_clock(clock),
        }
    }
}

impl<C: Clock> Dashboard<C> {
    pub fn active_view(&self) -> View {
        self.shell.active_view()
    }
}
