use anyhow::Result;
use crossterm::style::Stylize;
use inquire::error::InquireError;
use inquire::validator::Validation;
use inquire::{CustomType, Select, Text};
use rand::Rng;

use crate::session::ClassSession;
use crate::theme::ThemeMode;

use super::render::print_groups;

const HOME_START: &str = "Start a new class";
const HOME_THEME: &str = "Toggle light/dark theme";
const HOME_QUIT: &str = "Quit";

const RESULTS_SHUFFLE: &str = "Shuffle again";
const RESULTS_RENAME: &str = "Rename a group";
const RESULTS_ADD: &str = "Add more students";
const RESULTS_HOME: &str = "Start over";
const RESULTS_QUIT: &str = "Quit";

/// What the results screen hands back to the class flow
enum Results {
    AddMore,
    Home,
    Quit,
}

/// Run the prompt-driven session: home menu, roster entry, results screen.
///
/// Esc or Ctrl-C on any prompt backs out of the current screen; neither is
/// an error.
pub fn run(theme: ThemeMode) -> Result<()> {
    let mut session = ClassSession::with_theme(theme);
    let mut rng = rand::thread_rng();

    loop {
        let palette = session.theme().palette();
        println!();
        println!("{}", "Let's group some students!".with(palette.primary).bold());

        let choice = match Select::new(
            "What would you like to do?",
            vec![HOME_START, HOME_THEME, HOME_QUIT],
        )
        .prompt()
        {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        match choice {
            HOME_START => {
                session.reset();
                if let Exit::Quit = class_flow(&mut session, &mut rng)? {
                    return Ok(());
                }
            }
            HOME_THEME => session.toggle_theme(),
            _ => return Ok(()),
        }
    }
}

/// Outcome of one pass through roster entry and results
enum Exit {
    Home,
    Quit,
}

fn class_flow<R: Rng>(session: &mut ClassSession, rng: &mut R) -> Result<Exit> {
    loop {
        if !collect_roster(session)? {
            return Ok(Exit::Home);
        }
        if !prompt_group_count(session)? {
            return Ok(Exit::Home);
        }
        if !session.can_generate() {
            return Ok(Exit::Home);
        }
        match results_screen(session, rng)? {
            Results::AddMore => continue,
            Results::Home => return Ok(Exit::Home),
            Results::Quit => return Ok(Exit::Quit),
        }
    }
}

/// Roster-entry screen. Returns false when the user backs out or the roster
/// is still too small to group.
fn collect_roster(session: &mut ClassSession) -> Result<bool> {
    let palette = session.theme().palette();
    println!();
    println!("{}", "Add Students".with(palette.text).bold());

    loop {
        // TODO: prompt for level/leader once weighted grouping lands
        let name = match Text::new("Student name:")
            .with_help_message("Leave blank when you're done")
            .prompt()
        {
            Ok(name) => name,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(false);
            }
            Err(err) => return Err(err.into()),
        };

        if name.trim().is_empty() {
            break;
        }

        if session.add_student(&name).is_some() {
            let count = session.roster().len();
            let plural = if count == 1 { "" } else { "s" };
            println!(
                "  {}",
                format!("✓ {count} student{plural} on the roster").with(palette.success)
            );
        }
    }

    if session.roster().len() < 2 {
        println!(
            "  {}",
            "At least two students are needed to make groups.".with(palette.secondary)
        );
        return Ok(false);
    }

    Ok(true)
}

/// Group-count prompt. The validator enforces the same bounds the entry
/// screen's guard applies, so an invalid count can never be submitted.
fn prompt_group_count(session: &mut ClassSession) -> Result<bool> {
    let roster_len = session.roster().len();

    let count = match CustomType::<usize>::new("How many groups?")
        .with_error_message("Please enter a number")
        .with_validator(move |count: &usize| {
            if *count < 1 {
                Ok(Validation::Invalid("At least one group is required".into()))
            } else if *count > roster_len {
                Ok(Validation::Invalid(
                    format!("There are only {roster_len} students on the roster").into(),
                ))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()
    {
        Ok(count) => count,
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            return Ok(false);
        }
        Err(err) => return Err(err.into()),
    };

    session.set_group_count(count);
    Ok(true)
}

/// Results screen: generate on entry, then offer reshuffle/rename/navigation
fn results_screen<R: Rng>(session: &mut ClassSession, rng: &mut R) -> Result<Results> {
    session.generate(rng)?;

    loop {
        let palette = session.theme().palette();
        println!();
        println!("{}", "Your Groups".with(palette.text).bold());
        print_groups(session.groups(), palette);

        let choice = match Select::new(
            "Next:",
            vec![
                RESULTS_SHUFFLE,
                RESULTS_RENAME,
                RESULTS_ADD,
                RESULTS_HOME,
                RESULTS_QUIT,
            ],
        )
        .prompt()
        {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                session.clear_groups();
                return Ok(Results::Home);
            }
            Err(err) => return Err(err.into()),
        };

        match choice {
            RESULTS_SHUFFLE => {
                session.generate(rng)?;
                println!("  {}", "Shuffled!".with(palette.accent));
            }
            RESULTS_RENAME => rename_group(session)?,
            RESULTS_ADD => {
                session.clear_groups();
                return Ok(Results::AddMore);
            }
            RESULTS_HOME => {
                session.reset();
                return Ok(Results::Home);
            }
            _ => return Ok(Results::Quit),
        }
    }
}

/// Pick a group, then read its new name. Backing out leaves names untouched.
fn rename_group(session: &mut ClassSession) -> Result<()> {
    let names: Vec<String> = session
        .groups()
        .iter()
        .map(|g| g.name().to_string())
        .collect();

    let selected = match Select::new("Which group?", names).raw_prompt() {
        Ok(option) => option,
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let name = match Text::new("New group name:").prompt() {
        Ok(name) => name,
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    session.rename_group(selected.index, &name);
    Ok(())
}
