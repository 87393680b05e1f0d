//! The interactive command loop run during the ConsoleWork phase.

use super::{Session, SessionError};
use crate::actions::{
    Action, ActionKind, ActionOutcome, Category, ParamKind, SearchQuery, WatchKind, create_action,
};
use crate::cli::console::Console;
use crate::cli::locale::Locale;
use crate::cli::params::{parse_date_param, parse_id_param, parse_keywords_param};

/// Token that ends the loop.
pub const EXIT_COMMAND: &str = "0";

/// Builds the menu: `"<n> <label>"` per action numbered from 1, then the exit line.
pub fn build_menu(actions: &[ActionKind], locale: Locale) -> String {
    let mut menu = String::new();
    for (index, kind) in actions.iter().enumerate() {
        menu.push_str(&format!("{} {}\n", index + 1, locale.action_label(*kind)));
    }
    menu.push_str(&format!("{EXIT_COMMAND} {}\n", locale.exit_label()));
    menu
}

/// Maps a menu token to the action registered under that number.
pub fn resolve_command(actions: &[ActionKind], token: &str) -> Result<ActionKind, SessionError> {
    token
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| actions.get(index).copied())
        .ok_or_else(|| SessionError::UnknownCommand {
            token: token.trim().to_string(),
        })
}

/// Runs commands until the exit token or end of input.
pub(super) fn run_command_loop<C: Console>(
    session: &mut Session,
    console: &mut C,
) -> Result<(), SessionError> {
    let locale = session.locale();
    let menu = build_menu(session.actions(), locale);

    loop {
        let Some(token) = console.read_command(&menu)? else {
            log::debug!("input closed at menu");
            break;
        };
        if token.trim() == EXIT_COMMAND {
            break;
        }

        match run_command(session, console, &token) {
            Ok(()) => {}
            Err(SessionError::InputClosed) => {
                log::debug!("input closed while reading parameters");
                break;
            }
            Err(err) if err.is_recoverable() => {
                log::info!("recovered from: {err}");
                console.print_message(&locale.error(&err))?;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn run_command<C: Console>(
    session: &mut Session,
    console: &mut C,
    token: &str,
) -> Result<(), SessionError> {
    let locale = session.locale();
    let kind = resolve_command(session.actions(), token)?;
    session.select(kind);

    let action = read_action(kind, console, locale)?;
    match session.execute(action)? {
        ActionOutcome::Listing(items) if items.is_empty() => {
            console.print_message(locale.nothing_found())?;
        }
        ActionOutcome::Listing(items) => console.print_results(&items)?,
        ActionOutcome::Created(id) => console.print_message(&locale.created(id))?,
    }
    Ok(())
}

/// Prompts for exactly the parameters `kind` requires and builds the action.
pub fn read_action<C: Console>(
    kind: ActionKind,
    console: &mut C,
    locale: Locale,
) -> Result<Action, SessionError> {
    match kind.category() {
        Category::Watch(WatchKind::All) => Ok(Action::WatchAll),
        Category::Watch(WatchKind::Names) => Ok(Action::WatchNames),
        Category::Search(param) => {
            let line = console
                .read_line(locale.param_prompt(param))?
                .ok_or(SessionError::InputClosed)?;
            let query = match param {
                ParamKind::Id => SearchQuery::Id(parse_id_param(&line)?),
                ParamKind::Name => SearchQuery::Name(line),
                ParamKind::Date => SearchQuery::Date(parse_date_param(&line)?),
                ParamKind::Keywords => SearchQuery::Keywords(parse_keywords_param(&line)),
            };
            Ok(Action::Search(query))
        }
        Category::Create => {
            let name = console
                .read_line(locale.note_name_prompt())?
                .ok_or(SessionError::InputClosed)?;
            let text = console.read_text(locale.note_text_prompt())?;
            Ok(create_action(name, text, console.now()))
        }
    }
}
