//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `rvm_core` linkage against the demo roster.
//! - Print a filtered roster and a sample adjustment proposal.

use chrono::{Duration, Local};
use clap::Parser;
use rvm_core::{
    init_logging, load_demo_data, parse_classification, parse_objective, parse_status,
    AdjustmentEvent, AdjustmentType, Classification, LoggingConfig, Objective, Participant,
    ParticipationStatus, ProgramAdjuster,
};
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rvm")]
#[command(about = "Roster and program adjustment demo for the midweek meeting")]
struct Args {
    /// Only list participants with this status (active|absent|substitute).
    #[arg(long, value_parser = parse_status)]
    status: Option<ParticipationStatus>,

    /// Only list participants holding this objective.
    #[arg(long, value_parser = parse_objective)]
    objective: Option<Objective>,

    #[arg(long, value_parser = parse_classification)]
    classification: Option<Classification>,

    /// Print the permissions granted to each listed participant.
    #[arg(long)]
    permissions: bool,

    /// Absolute directory for rotating log files. Logging is off when unset.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    if let Some(log_dir) = &args.log_dir {
        init_logging(&LoggingConfig::with_default_level(log_dir)?)?;
    }

    println!("rvm_core {}", rvm_core::core_version());

    let registry = load_demo_data();
    let mut roster = match args.status {
        Some(status) => registry.list_by_status(status),
        None => registry.list_all(),
    };
    if let Some(objective) = args.objective {
        roster.retain(|p| p.has_objective(objective));
    }
    if let Some(classification) = args.classification {
        roster.retain(|p| p.classification == classification);
    }
    print_roster(&roster, args.permissions);

    let all = registry.list_all();
    let today = Local::now().date_naive();
    let mut events = vec![
        AdjustmentEvent::new(
            AdjustmentType::PeriodicEvent,
            "Circuit overseer visit",
            today + Duration::days(14),
        )
        .with_recurrence("semiannual"),
        AdjustmentEvent::new(
            AdjustmentType::SpecialDemand,
            "Hall maintenance",
            today + Duration::days(7),
        ),
    ];
    if let [absent, substitute, ..] = all.as_slice() {
        events.push(
            AdjustmentEvent::new(AdjustmentType::Absence, "Travel", today + Duration::days(1))
                .with_participant(absent.participant_id()),
        );
        events.push(
            AdjustmentEvent::new(
                AdjustmentType::Substitution,
                "Planned substitution",
                today + Duration::days(3),
            )
            .with_participant(absent.participant_id())
            .with_substitute(substitute.participant_id()),
        );
    }

    let actions = ProgramAdjuster::new(&registry).propose_adjustments_at(&events, today)?;
    println!();
    for action in actions {
        println!("[p{}] {}", action.priority, action.message);
    }

    Ok(())
}

fn print_roster(roster: &[&Participant], with_permissions: bool) {
    println!();
    println!("{:<20} {:<22} status", "name", "classification");
    for participant in roster {
        println!(
            "{:<20} {:<22} {}",
            participant.full_name,
            participant.classification.label(),
            participant.status.label()
        );
        if with_permissions {
            for permission in &participant.permissions {
                println!("    {:<24} {}", permission.as_str(), permission.description());
            }
        }
    }
}
