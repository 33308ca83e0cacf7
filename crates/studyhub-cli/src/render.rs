//! Plain-text rendering of the dashboard views.
//!
//! Rendering only reads engine state; nothing here mutates it.

use std::fmt::Write;

use studyhub_core::deadline::DeadlineEngine;
use studyhub_core::{
    Assignment, Clock, Dashboard, Event, GpaEngine, Grade, NotesDirectory, Semester, Shell, View,
    HOME_CARDS,
};

pub fn render_header<C: Clock>(shell: &Shell<C>) -> String {
    let tabs: Vec<String> = View::ALL
        .iter()
        .map(|v| {
            if *v == shell.active_view() {
                format!("[{}]", v.label())
            } else {
                v.label().to_string()
            }
        })
        .collect();
    format!("StudyHub | {}", tabs.join("  "))
}

pub fn render_view<C: Clock>(dash: &Dashboard<C>) -> String {
    let body = match dash.active_view() {
        View::Home => render_home(),
        View::Deadlines => render_deadlines(&dash.deadlines),
        View::Gpa => render_gpa(&dash.gpa),
        View::Notes => render_notes(&dash.notes),
    };
    format!("{}\n\n{}", render_header(&dash.shell), body)
}

pub fn render_home() -> String {
    let mut out = String::from("Welcome to StudyHub\n");
    for (i, card) in HOME_CARDS.iter().enumerate() {
        let _ = write!(out, "\n  {}. {}\n     {}\n", i + 1, card.title, card.description);
    }
    out.push_str("\nType `open <n>` to jump to a tool.");
    out
}

pub fn render_gpa<C: Clock>(engine: &GpaEngine<C>) -> String {
    let mut out = String::from("GPA Calculator (10-point scale)\n");
    let grades: Vec<String> = Grade::ALL.iter().map(|g| g.option_label()).collect();
    let _ = writeln!(out, "Grades: {}\n", grades.join(", "));

    if engine.subjects().is_empty() {
        out.push_str("No subjects added yet. Add subjects to calculate your CGPA.");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<10} {:<20} {:>7} {:>5} {:>6} {:>6}",
        "ID", "Subject", "Credits", "Grade", "Points", "Total"
    );
    for s in engine.subjects() {
        let _ = writeln!(
            out,
            "{:<10} {:<20} {:>7} {:>5} {:>6} {:>6}",
            s.id().short(),
            s.name(),
            s.credits(),
            s.grade(),
            s.grade_points(),
            s.total_points()
        );
    }

    let summary = engine.summary();
    let _ = write!(
        out,
        "\nTotal credits: {}\nCGPA: {} ({})",
        summary.total_credits,
        summary.cgpa_display(),
        summary.classification.label()
    );
    out
}

/// "3 days remaining" or "Overdue, past due".
pub fn countdown(assignment: &Assignment) -> String {
    let days = assignment.days_left();
    if days < 0 {
        "Overdue, past due".to_string()
    } else if days == 1 {
        "1 day remaining".to_string()
    } else {
        format!("{days} days remaining")
    }
}

pub fn render_deadlines<C: Clock>(engine: &DeadlineEngine<C>) -> String {
    let mut out = String::from("Deadline Tracker\n\n");
    let view = engine.sorted_view();
    if view.is_empty() {
        out.push_str("No assignments yet. Add one to get started!");
        return out;
    }

    for a in view {
        let marker = if a.priority().needs_attention() { "!" } else { " " };
        let _ = writeln!(
            out,
            "{} {:<10} {:<9} {} / {}  (due {})  {}",
            marker,
            a.id().short(),
            a.priority().label(),
            a.subject(),
            a.title(),
            a.due_date().format("%Y-%m-%d"),
            countdown(a)
        );
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn render_notes<C: Clock>(notes: &NotesDirectory<C>) -> String {
    let mut out = String::from("Notes Sharing\n\n");
    if notes.semesters().is_empty() {
        out.push_str("No semesters configured.");
        return out;
    }
    for semester in notes.semesters() {
        let open = notes.is_expanded(semester.id);
        let _ = writeln!(
            out,
            "{} {}. {}",
            if open { "v" } else { ">" },
            semester.id,
            semester.name
        );
        if open {
            let _ = writeln!(out, "     {}", semester.drive_link);
        }
    }
    out.truncate(out.trim_end().len());
    out
}

/// Every semester with its link, regardless of expansion.
pub fn render_semester_list(semesters: &[Semester]) -> String {
    let mut out = String::from("Notes Sharing\n\n");
    if semesters.is_empty() {
        out.push_str("No semesters configured.");
        return out;
    }
    for semester in semesters {
        let _ = writeln!(out, "{}. {}\n     {}", semester.id, semester.name, semester.drive_link);
    }
    out.truncate(out.trim_end().len());
    out
}

/// One-line status for an accepted change.
pub fn describe(event: &Event) -> String {
    match event {
        Event::SubjectAdded { id, name, grade_points, .. } => {
            format!("added subject {name} ({}, {grade_points} points)", id.short())
        }
        Event::SubjectUpdated { id, field, .. } => {
            format!("updated {field} of subject {}", id.short())
        }
        Event::SubjectDeleted { id, .. } => format!("deleted subject {}", id.short()),
        Event::AssignmentAdded { id, title, days_left, .. } => {
            format!("added assignment {title} ({}, {days_left} days left)", id.short())
        }
        Event::AssignmentReplaced { id, days_left, .. } => {
            format!("replaced assignment {} ({days_left} days left)", id.short())
        }
        Event::AssignmentDeleted { id, .. } => format!("deleted assignment {}", id.short()),
        Event::DeadlinesRecomputed { count, .. } => format!("recomputed {count} deadlines"),
        Event::SemesterToggled { semester_id, expanded, .. } => format!(
            "semester {semester_id} {}",
            if *expanded { "expanded" } else { "collapsed" }
        ),
        Event::ViewChanged { to, .. } => format!("switched to {}", to.label()),
    }
}
