//! Roster command: list or seed shift types and routines.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use shiftcal_roster::Roster;

use crate::cli::{RosterAction, RosterArgs};
use crate::config::ShiftcalConfig;
use crate::render::NONE_MARK;

fn hhmm(minutes: Option<u32>) -> String {
    match minutes {
        Some(m) => format!("{:02}:{:02}", m / 60, m % 60),
        None => NONE_MARK.to_string(),
    }
}

/// Run a roster action.
pub fn run(args: RosterArgs, config: &ShiftcalConfig) -> Result<()> {
    let _cmd = info_span!("roster").entered();
    let path = &config.store.roster;
    let mut roster = Roster::load(path)
        .with_context(|| format!("failed to load roster: {}", path.display()))?;

    match args.action.unwrap_or(RosterAction::Show) {
        RosterAction::Seed => {
            if roster.seed_defaults_if_empty() {
                roster
                    .save(path)
                    .with_context(|| format!("failed to save roster: {}", path.display()))?;
                info!(path = %path.display(), "roster seeded");
                println!("기본 근무 유형과 루틴을 추가했어요");
            } else {
                println!("이미 근무 유형이 있어요");
            }
        }
        RosterAction::Show => {
            for t in roster.shift_types() {
                println!(
                    "{}\t{}\t{}-{}",
                    t.id,
                    t.name,
                    hhmm(t.default_start_minutes),
                    hhmm(t.default_end_minutes)
                );
            }
            for r in roster.routines() {
                let active = if r.is_active { "*" } else { " " };
                match roster.routine_cycle(r.id) {
                    Ok(cycle) => println!("{active} {}\t{}\t{cycle}", r.id, r.name),
                    Err(e) => {
                        warn!(routine = r.id, error = %e, "routine cannot be expanded");
                        println!("{active} {}\t{}\t{NONE_MARK}", r.id, r.name);
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hhmm_formats_minutes() {
        assert_eq!(hhmm(Some(9 * 60)), "09:00");
        assert_eq!(hhmm(Some(21 * 60 + 5)), "21:05");
        assert_eq!(hhmm(None), NONE_MARK);
    }
}
