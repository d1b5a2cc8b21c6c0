use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use posture_core::{Encounter, EncounterConfig};
use posture_session::render_tick;

pub fn run(roster_path: &Path, ticks: u64, verbose: bool, json: bool) -> Result<(), String> {
    let roster = super::load_roster(roster_path)?;
    let mut encounter = Encounter::new(roster, EncounterConfig::default())
        .map_err(|e| format!("failed to start encounter: {e}"))?;

    // Turn order as (tick, participant) in the order turns were taken.
    let mut order = Vec::new();

    for _ in 0..ticks {
        let report = encounter.advance_tick();
        if verbose && !json {
            println!("{}", render_tick(&report, encounter.participants()));
        }
        if let Some(id) = report.next_actor {
            encounter
                .act(&id)
                .map_err(|e| format!("simulation error: {e}"))?;
            if verbose && !json {
                println!("{}", format!("{id} acts.").dimmed());
            }
            order.push((report.tick, id));
        }
        if verbose && !json {
            println!();
        }
    }

    if json {
        let out = serde_json::to_string_pretty(encounter.log().events())
            .map_err(|e| format!("failed to serialize log: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {} {}",
        "Simulation".bold(),
        roster_path.display(),
        format!("({ticks} ticks)").dimmed()
    );
    println!("  {} turns taken", order.len());
    println!();

    if !order.is_empty() {
        println!("  {}", "Turn Order".bold().underline());
        for (tick, id) in &order {
            let tick_label = format!("[tick {tick:>3}]").dimmed();
            println!("  {tick_label} {id}");
        }
        println!();
    }

    println!("  {}", "Participants".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Turns", "Posture/turn", "Posture now"]);
    for p in encounter.participants() {
        let turns = order.iter().filter(|(_, id)| id == p.id()).count();
        table.add_row(vec![
            p.id().to_string(),
            turns.to_string(),
            format!("{:.2}", p.increment()),
            format!("{:.2}", p.readiness()),
        ]);
    }
    println!("{table}");

    Ok(())
}
