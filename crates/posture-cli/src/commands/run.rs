use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use posture_core::EncounterConfig;
use posture_session::{Command, EncounterSession, parse_command};

pub fn run(roster_path: &Path, max_events: usize) -> Result<(), String> {
    let roster = super::load_roster(roster_path)?;
    let count = roster.len();
    let config = EncounterConfig::default().with_max_events(max_events);

    let mut session = EncounterSession::new(roster, config)
        .map_err(|e| format!("failed to start encounter: {e}"))?;

    println!("  {} encounter with {count} participants", "Starting".bold());
    println!("  Press Enter to advance a turn, or type a name to react.");
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
                continue;
            }
        };
        let quit = command == Command::Quit;

        match session.execute(command) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if quit {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
