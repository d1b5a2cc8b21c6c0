use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use posture_core::{EncounterConfig, ParticipantStore};

pub fn run(roster_path: &Path) -> Result<(), String> {
    let roster = super::load_roster(roster_path)?;
    let threshold = EncounterConfig::default().act_threshold;
    let store = ParticipantStore::from_roster(roster);

    println!(
        "  {} {} ({} participants)",
        "Roster".bold(),
        roster_path.display(),
        store.len()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Name",
        "Footwork",
        "Agility",
        "Skill",
        "Stamina",
        "Posture/turn",
        "First turn",
        "Other",
    ]);

    for p in store.iter() {
        let attrs = p.attributes();
        let first_turn = match p.ticks_to_reach(threshold) {
            Some(ticks) => format!("turn {ticks}"),
            None => "never".to_string(),
        };
        let stamina = if attrs.is_fatigued() {
            format!("{} (tired)", attrs.stamina)
        } else {
            attrs.stamina.to_string()
        };
        let other = attrs
            .extra
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            p.id().to_string(),
            attrs.footwork.to_string(),
            attrs.agility.to_string(),
            attrs.skill.to_string(),
            stamina,
            format!("{:.2}", p.increment()),
            first_turn,
            other,
        ]);
    }

    println!("{table}");

    let stalled: Vec<_> = store
        .iter()
        .filter(|p| p.increment() <= 0.0)
        .map(|p| p.id().to_string())
        .collect();
    if !stalled.is_empty() {
        println!();
        println!(
            "  {}  {} will never reach a turn on their own",
            "WARN".yellow().bold(),
            stalled.join(", ")
        );
    }

    Ok(())
}
