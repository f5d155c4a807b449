use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;

use couplecheck::report;
use couplecheck::{PartnerRecord, Response};

#[derive(Deserialize)]
struct PartnerFile {
    name: String,
    responses: Vec<Response>,
}

fn load_partner(path: &str) -> Result<PartnerRecord> {
    let data = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let file: PartnerFile =
        serde_json::from_str(&data).with_context(|| format!("Invalid partner file: {}", path))?;
    Ok(PartnerRecord::new(file.name, file.responses))
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: compatibility_report <partner_a.json> <partner_b.json>");
        eprintln!();
        eprintln!("Partner files look like:");
        eprintln!("  {{ \"name\": \"Jordan\", \"responses\": [");
        eprintln!("      {{ \"question_id\": 1, \"importance\": 4, \"flexibility\": 2 }}, ... ] }}");
        bail!("expected exactly two partner files");
    }

    println!("🔍 Loading partner responses...");
    let partner_a = load_partner(&args[1])?;
    let partner_b = load_partner(&args[2])?;
    println!(
        "✅ Loaded {} ({} responses) and {} ({} responses)",
        partner_a.name,
        partner_a.responses.len(),
        partner_b.name,
        partner_b.responses.len()
    );

    println!();
    print!("{}", report::compatibility_report(&partner_a, &partner_b));
    Ok(())
}
