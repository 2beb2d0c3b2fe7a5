//! Settings commands: work cycle, default start times, history, workplaces.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use shiftcal_calendar::{NaiveDate, YearMonth};
use shiftcal_settings::SettingsStore;

use crate::cli::{CycleArgs, TimesArgs, WorkplaceAction, WorkplaceArgs};
use crate::config::ShiftcalConfig;
use crate::render::NONE_MARK;

/// Loads the settings file for a command that writes it back.
///
/// Unlike [`SettingsStore::open`], a file that exists but does not load is
/// an error, so the user's values are never replaced by defaults.
fn load_for_update(config: &ShiftcalConfig) -> Result<SettingsStore> {
    let path = &config.store.settings;
    SettingsStore::load_or_default(path).with_context(|| {
        format!(
            "settings not changed; fix or remove {} first",
            path.display()
        )
    })
}

fn save(store: &SettingsStore) -> Result<()> {
    store
        .save()
        .with_context(|| format!("failed to save settings: {}", store.path().display()))
}

/// Show the work cycle, or store a new one.
pub fn run_cycle(args: CycleArgs, config: &ShiftcalConfig) -> Result<()> {
    let _cmd = info_span!("cycle").entered();

    match args.csv {
        Some(csv) => {
            let mut store = load_for_update(config)?;
            let cycle = store.set_cycle(&csv);
            save(&store)?;
            info!(cycle = %cycle, "work cycle saved");
            println!("저장됨: {cycle}");
        }
        None => println!("현재: {}", SettingsStore::open(&config.store.settings).cycle()),
    }
    Ok(())
}

/// Store default start times and record them for a month.
pub fn run_times(args: TimesArgs, config: &ShiftcalConfig, today: NaiveDate) -> Result<()> {
    let _cmd = info_span!("times").entered();
    let mut store = load_for_update(config)?;

    let month = args.month.unwrap_or_else(|| YearMonth::of(today));
    let times = store
        .set_default_times(&args.day, &args.night, month)
        .context("start times not saved")?;
    save(&store)?;
    info!(%month, %times, "default start times saved");
    println!("{month}: 주 {} / 야 {}", args.day.trim(), args.night.trim());
    Ok(())
}

/// List recorded start times, newest month first.
pub fn run_history(config: &ShiftcalConfig) -> Result<()> {
    let _cmd = info_span!("history").entered();
    let store = SettingsStore::open(&config.store.settings);

    for (month, times) in store.history().newest_first() {
        let day = times.day.map_or_else(|| NONE_MARK.to_string(), |t| t.to_string());
        let night = times
            .night
            .map_or_else(|| NONE_MARK.to_string(), |t| t.to_string());
        println!("{month}\t주 {day} / 야 {night}");
    }
    Ok(())
}

fn save_workplaces(store: &SettingsStore) -> Result<()> {
    save(store)?;
    info!(current = store.workplaces().current(), "workplaces saved");
    Ok(())
}

/// List, toggle, select or replace workplaces.
pub fn run_workplace(args: WorkplaceArgs, config: &ShiftcalConfig) -> Result<()> {
    let _cmd = info_span!("workplace").entered();

    match args.action.unwrap_or(WorkplaceAction::List) {
        WorkplaceAction::List => {
            let store = SettingsStore::open(&config.store.settings);
            let workplaces = store.workplaces();
            for name in workplaces.names() {
                let marker = if name == workplaces.current() { "*" } else { " " };
                println!("{marker} {name}");
            }
            Ok(())
        }
        WorkplaceAction::Toggle => {
            let mut store = load_for_update(config)?;
            let current = store.workplaces_mut().toggle().to_string();
            println!("근무지: {current}");
            save_workplaces(&store)
        }
        WorkplaceAction::Select { name } => {
            let mut store = load_for_update(config)?;
            store.workplaces_mut().select(name.trim())?;
            println!("근무지: {}", store.workplaces().current());
            save_workplaces(&store)
        }
        WorkplaceAction::Set { csv } => {
            let mut store = load_for_update(config)?;
            if !store.workplaces_mut().apply_csv(&csv) {
                bail!("workplace list must contain at least one name");
            }
            println!("근무지 목록: {}", store.workplaces().to_csv());
            save_workplaces(&store)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_at(path: &std::path::Path) -> ShiftcalConfig {
        let mut config = ShiftcalConfig::default();
        config.store.settings = path.to_path_buf();
        config
    }

    #[test]
    fn write_commands_leave_broken_file_alone() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("settings.toml");
        let original = "work_cycle = \"D,N\"\nunknown_key = 1\n";
        std::fs::write(&path, original).unwrap();
        let config = config_at(&path);

        let err = run_cycle(
            CycleArgs {
                csv: Some("A,B".to_string()),
            },
            &config,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("settings not changed"));

        let toggle = WorkplaceArgs {
            action: Some(WorkplaceAction::Toggle),
        };
        assert!(run_workplace(toggle, &config).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn write_commands_create_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("settings.toml");
        let config = config_at(&path);

        run_cycle(
            CycleArgs {
                csv: Some("A,B".to_string()),
            },
            &config,
        )
        .unwrap();
        let store = SettingsStore::load(&path).unwrap();
        assert_eq!(store.cycle().to_csv(), "A,B");
    }
}
