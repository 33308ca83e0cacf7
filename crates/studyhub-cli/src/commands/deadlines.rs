//! One-shot deadline report.

use chrono::{DateTime, Utc};
use clap::Args;
use studyhub_core::deadline::{parse_due, DeadlineEngine};
use studyhub_core::{Clock, ManualClock, SystemClock, ValidationError};

use crate::render;

#[derive(Args)]
pub struct DeadlinesArgs {
    /// Assignment as SUBJECT:TITLE:DATE (repeatable), e.g. "Math:Quiz 2:2025-03-15"
    #[arg(long = "assignment", value_name = "SUBJECT:TITLE:DATE")]
    assignments: Vec<String>,
    /// Evaluate against this instant (RFC 3339) instead of the current time
    #[arg(long)]
    now: Option<String>,
    /// Print JSON instead of a list
    #[arg(long)]
    json: bool,
}

/// Split `SUBJECT:TITLE:DATE`. The date keeps any colons of an RFC 3339 time.
fn parse_spec(spec: &str) -> Result<(String, String, DateTime<Utc>), ValidationError> {
    let mut parts = spec.splitn(3, ':');
    let subject = parts.next().unwrap_or_default().trim();
    let title = parts.next().unwrap_or_default().trim();
    let date = parts.next().unwrap_or_default();
    if subject.is_empty() {
        return Err(ValidationError::EmptyField { field: "subject" });
    }
    if title.is_empty() {
        return Err(ValidationError::EmptyField { field: "title" });
    }
    Ok((subject.to_string(), title.to_string(), parse_due(date)?))
}

pub fn run(args: DeadlinesArgs) -> Result<(), Box<dyn std::error::Error>> {
    match &args.now {
        Some(raw) => {
            let now = DateTime::parse_from_rfc3339(raw)
                .map_err(|_| ValidationError::InvalidDate(raw.clone()))?
                .with_timezone(&Utc);
            report(DeadlineEngine::with_clock(ManualClock::new(now)), &args)
        }
        None => report(DeadlineEngine::with_clock(SystemClock), &args),
    }
}

fn report<C: Clock>(
    mut engine: DeadlineEngine<C>,
    args: &DeadlinesArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    for spec in &args.assignments {
        let (subject, title, due) =
            parse_spec(spec).map_err(|e| format!("assignment '{spec}': {e}"))?;
        engine.add_assignment(&subject, &title, due);
    }

    if args.json {
        let rows: Vec<serde_json::Value> = engine
            .sorted_view()
            .into_iter()
            .map(|a| {
                serde_json::json!({
                    "id": a.id(),
                    "subject": a.subject(),
                    "title": a.title(),
                    "due": a.due(),
                    "days_left": a.days_left(),
                    "priority": a.priority(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", render::render_deadlines(&engine));
    }
    Ok(())
}
