//! One-shot CGPA report.

use clap::Args;
use studyhub_core::gpa::parse_subject;
use studyhub_core::{GpaEngine, Grade, ValidationError};

use crate::render;

#[derive(Args)]
pub struct GpaArgs {
    /// Subject as NAME:CREDITS:GRADE (repeatable), e.g. "Math:4:A+"
    #[arg(long = "subject", value_name = "NAME:CREDITS:GRADE")]
    subjects: Vec<String>,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Split `NAME:CREDITS:GRADE`. The name may itself contain colons.
fn parse_spec(spec: &str) -> Result<(String, u32, Grade), ValidationError> {
    let mut parts = spec.rsplitn(3, ':');
    let grade = parts.next().unwrap_or_default();
    let credits = parts.next().unwrap_or_default();
    let name = parts.next().unwrap_or_default();
    parse_subject(name, credits, grade)
}

pub fn run(args: GpaArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = GpaEngine::new();
    for spec in &args.subjects {
        let (name, credits, grade) =
            parse_spec(spec).map_err(|e| format!("subject '{spec}': {e}"))?;
        engine.add_subject(&name, credits, grade);
    }

    if args.json {
        let out = serde_json::json!({
            "subjects": engine.subjects(),
            "summary": engine.summary(),
            "cgpa_display": engine.summary().cgpa_display(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", render::render_gpa(&engine));
    }
    Ok(())
}
