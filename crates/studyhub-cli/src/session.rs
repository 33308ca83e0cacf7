//! Line-oriented command handling for the interactive shell.
//!
//! A [`Session`] owns the dashboard and the two host effects. Each input
//! line is parsed with clap, applied, and answered with text to print.
//! Invalid input is explained to the user; the engines themselves stay
//! silent and unchanged.

use clap::{Parser, Subcommand};
use studyhub_core::deadline::parse_due;
use studyhub_core::gpa::parse_subject;
use studyhub_core::{
    Clipboard, Clock, Dashboard, Event, LinkOpener, RecordId, SubjectUpdate, View,
};
use tracing::debug;

use crate::render;

#[derive(Parser, Debug)]
#[command(
    name = "studyhub",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
struct Line {
    #[command(subcommand)]
    command: LineCommand,
}

#[derive(Subcommand, Debug)]
enum LineCommand {
    /// Switch view: home, deadlines, gpa or notes
    View { view: String },
    /// Toggle the compact navigation menu
    Menu,
    /// Follow a home card by number
    Open { card: usize },
    /// GPA calculator
    Gpa {
        #[command(subcommand)]
        action: GpaLine,
    },
    /// Deadline tracker
    Due {
        #[command(subcommand)]
        action: DueLine,
    },
    /// Notes directory
    Notes {
        #[command(subcommand)]
        action: NotesLine,
    },
    /// Redraw the active view
    Show,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
enum GpaLine {
    /// Add a subject
    Add {
        name: String,
        credits: String,
        grade: String,
    },
    /// Change one field of a subject
    Set {
        id: String,
        field: String,
        value: String,
    },
    /// Delete a subject
    Rm { id: String },
}

#[derive(Subcommand, Debug)]
enum DueLine {
    /// Add an assignment (date as YYYY-MM-DD)
    Add {
        subject: String,
        title: String,
        date: String,
    },
    /// Replace all fields of an assignment
    Replace {
        id: String,
        subject: String,
        title: String,
        date: String,
    },
    /// Delete an assignment
    Rm { id: String },
}

#[derive(Subcommand, Debug)]
enum NotesLine {
    /// Expand or collapse a semester
    Toggle { semester: u8 },
    /// Open a semester's folder in the browser
    Open { semester: u8 },
    /// Copy a semester's folder link
    Copy { semester: u8 },
}

/// What the event loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Print(String),
    Quit,
}

pub struct Session<C: Clock, K: Clipboard, O: LinkOpener> {
    pub dash: Dashboard<C>,
    clipboard: K,
    opener: O,
}

impl<C: Clock, K: Clipboard, O: LinkOpener> Session<C, K, O> {
    pub fn new(dash: Dashboard<C>, clipboard: K, opener: O) -> Self {
        Self {
            dash,
            clipboard,
            opener,
        }
    }

    pub fn render(&self) -> String {
        render::render_view(&self.dash)
    }

    /// Apply one line of user input.
    pub fn handle(&mut self, input: &str) -> Step {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Step::Print(String::new());
        }
        let Some(words) = shlex::split(trimmed) else {
            return Step::Print("error: unbalanced quotes".to_string());
        };
        let line = match Line::try_parse_from(words) {
            Ok(line) => line,
            Err(e) => return Step::Print(e.to_string().trim_end().to_string()),
        };
        debug!(?line, "shell command");

        match self.apply(line.command) {
            Ok(Some(text)) => Step::Print(text),
            Ok(None) => Step::Quit,
            Err(message) => Step::Print(format!("error: {message}")),
        }
    }

    /// Redraw after the deadline timer recomputed, when the deadline
    /// view is showing.
    pub fn after_tick(&self) -> Option<String> {
        (self.dash.active_view() == View::Deadlines).then(|| self.render())
    }

    fn apply(&mut self, command: LineCommand) -> Result<Option<String>, String> {
        let event = match command {
            LineCommand::Quit => return Ok(None),
            LineCommand::Show => return Ok(Some(self.render())),
            LineCommand::Menu => {
                let open = self.dash.shell.toggle_menu();
                let tabs: Vec<&str> = View::ALL.iter().map(|v| v.id()).collect();
                return Ok(Some(if open {
                    format!("menu: {}", tabs.join(" | "))
                } else {
                    "menu closed".to_string()
                }));
            }
            LineCommand::View { view } => {
                let view: View = view.parse().map_err(|e| format!("{e}"))?;
                Some(self.dash.shell.set_active_view(view))
            }
            LineCommand::Open { card } => {
                let event = self.dash.shell.open_card(card);
                if event.is_none() {
                    return Err(format!("no home card {card}"));
                }
                event
            }
            LineCommand::Gpa { action } => self.apply_gpa(action)?,
            LineCommand::Due { action } => self.apply_due(action)?,
            LineCommand::Notes { action } => match action {
                NotesLine::Toggle { semester } => {
                    let event = self.dash.notes.toggle(semester);
                    if event.is_none() {
                        return Err(format!("no semester {semester}"));
                    }
                    event
                }
                NotesLine::Open { semester } => {
                    self.dash
                        .notes
                        .open_link(semester, &self.opener)
                        .map_err(|e| e.to_string())?;
                    return Ok(Some(format!("opened semester {semester} folder")));
                }
                NotesLine::Copy { semester } => {
                    self.dash
                        .notes
                        .copy_link(semester, &mut self.clipboard)
                        .map_err(|e| e.to_string())?;
                    return Ok(Some(format!("copied semester {semester} link")));
                }
            },
        };

        Ok(Some(match event {
            Some(event) => format!("{}\n\n{}", render::describe(&event), self.render()),
            None => "nothing changed".to_string(),
        }))
    }

    fn apply_gpa(&mut self, action: GpaLine) -> Result<Option<Event>, String> {
        let gpa = &mut self.dash.gpa;
        Ok(match action {
            GpaLine::Add {
                name,
                credits,
                grade,
            } => {
                let (name, credits, grade) =
                    parse_subject(&name, &credits, &grade).map_err(|e| e.to_string())?;
                gpa.add_subject(&name, credits, grade)
            }
            GpaLine::Set { id, field, value } => {
                let id = resolve(&id, |p| gpa.resolve_prefix(p), "subject")?;
                let update = SubjectUpdate::parse(&field, &value).map_err(|e| e.to_string())?;
                gpa.update_subject(id, update)
            }
            GpaLine::Rm { id } => {
                let id = resolve(&id, |p| gpa.resolve_prefix(p), "subject")?;
                gpa.delete_subject(id)
            }
        })
    }

    fn apply_due(&mut self, action: DueLine) -> Result<Option<Event>, String> {
        let deadlines = &mut self.dash.deadlines;
        Ok(match action {
            DueLine::Add {
                subject,
                title,
                date,
            } => {
                let due = parse_due(&date).map_err(|e| e.to_string())?;
                deadlines.add_assignment(&subject, &title, due)
            }
            DueLine::Replace {
                id,
                subject,
                title,
                date,
            } => {
                let id = resolve(&id, |p| deadlines.resolve_prefix(p), "assignment")?;
                let due = parse_due(&date).map_err(|e| e.to_string())?;
                deadlines.replace_assignment(id, &subject, &title, due)
            }
            DueLine::Rm { id } => {
                let id = resolve(&id, |p| deadlines.resolve_prefix(p), "assignment")?;
                deadlines.delete_assignment(id)
            }
        })
    }
}

fn resolve(
    raw: &str,
    lookup: impl Fn(&str) -> Option<RecordId>,
    kind: &str,
) -> Result<RecordId, String> {
    lookup(raw).ok_or_else(|| format!("no unique {kind} matches '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::cell::RefCell;
    use studyhub_core::notes::default_semesters;
    use studyhub_core::{LinkError, ManualClock};
    use url::Url;

    #[derive(Default)]
    struct FakeClipboard(Option<String>);

    impl Clipboard for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), LinkError> {
            self.0 = Some(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeOpener(RefCell<Vec<String>>);

    impl LinkOpener for FakeOpener {
        fn open(&self, url: &Url) -> Result<(), LinkError> {
            self.0.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn session() -> Session<ManualClock, FakeClipboard, FakeOpener> {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 2, 3, 9, 0, 0).unwrap());
        let dash = Dashboard::with_clock(clock, default_semesters(), View::Home);
        Session::new(dash, FakeClipboard::default(), FakeOpener::default())
    }

    fn text(step: Step) -> String {
        match step {
            Step::Print(s) => s,
            Step::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn gpa_flow_with_quoted_names() {
        let mut s = session();
        s.handle("view gpa");
        let out = text(s.handle("gpa add \"Linear Algebra\" 4 A"));
        assert!(out.contains("added subject Linear Algebra"));
        let out = text(s.handle("gpa add Physics 3 B"));
        assert!(out.contains("CGPA: 7.14 (Very Good)"));

        let id = s.dash.gpa.subjects()[0].id().short();
        let out = text(s.handle(&format!("gpa set {id} grade O")));
        assert!(out.contains("updated grade"));
        assert_eq!(s.dash.gpa.subjects()[0].grade_points(), 10);
    }

    #[test]
    fn invalid_input_is_explained_and_ignored() {
        let mut s = session();
        let out = text(s.handle("gpa add Math 4 Z"));
        assert!(out.starts_with("error: unknown grade"));
        let out = text(s.handle("gpa add Math zero A"));
        assert!(out.contains("credits must be a positive integer"));
        let out = text(s.handle("due add Math Quiz tomorrow"));
        assert!(out.contains("invalid due date"));
        assert!(s.dash.gpa.subjects().is_empty());
        assert!(s.dash.deadlines.assignments().is_empty());

        let out = text(s.handle("gpa rm deadbeef"));
        assert!(out.contains("no unique subject"));
    }

    #[test]
    fn deadline_flow_and_tick_redraw() {
        let mut s = session();
        s.handle("view deadlines");
        let out = text(s.handle("due add Math \"Problem set\" 2025-02-06"));
        assert!(out.contains("urgent"));
        assert!(s.after_tick().is_some());

        s.handle("view home");
        assert!(s.after_tick().is_none());

        let id = s.dash.deadlines.assignments()[0].id().short();
        text(s.handle(&format!("due rm {id}")));
        assert!(s.dash.deadlines.assignments().is_empty());
    }

    #[test]
    fn notes_effects_go_through_fakes() {
        let mut s = session();
        let out = text(s.handle("notes copy 4"));
        assert_eq!(out, "copied semester 4 link");
        assert_eq!(
            s.clipboard.0.as_deref(),
            Some("https://drive.google.com/drive/folders/placeholder-semester-4")
        );

        text(s.handle("notes open 2"));
        assert_eq!(s.opener.0.borrow().len(), 1);

        let out = text(s.handle("notes open 12"));
        assert!(out.contains("no semester with id 12"));

        text(s.handle("notes toggle 3"));
        assert!(s.dash.notes.is_expanded(3));
    }

    #[test]
    fn navigation_commands() {
        let mut s = session();
        assert!(text(s.handle("menu")).starts_with("menu: home"));
        assert!(s.dash.shell.menu_open());
        text(s.handle("open 1"));
        assert_eq!(s.dash.active_view(), View::Deadlines);
        assert!(!s.dash.shell.menu_open());
        assert!(text(s.handle("open 7")).contains("no home card 7"));
        assert!(text(s.handle("view settings")).contains("unknown view"));
        assert_eq!(s.handle("quit"), Step::Quit);
        assert_eq!(s.handle("exit"), Step::Quit);
        assert_eq!(s.handle("   "), Step::Print(String::new()));
        assert!(text(s.handle("help")).contains("notes"));
    }
}
