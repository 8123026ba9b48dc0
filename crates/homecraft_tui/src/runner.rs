//! TUI runner - main loop and terminal lifecycle.
//!
//! The reference panel fetch runs on a background task; the main loop
//! stays synchronous and drains the result through a oneshot channel.

use crate::{App, AppMode, Event, EventHandler, TuiError, TuiErrorKind, TuiResult};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use homecraft_error::HomecraftResult;
use homecraft_pokeapi::{PokedexClient, PokedexError, ReferenceData};
use homecraft_store::Catalog;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::sync::oneshot;

/// Run the catalog TUI.
///
/// The terminal is restored even when the loop fails, so a persist error
/// mid-session does not strand the user in raw mode on the alternate
/// screen.
///
/// # Arguments
///
/// * `catalog` - Open catalog to browse and edit
/// * `client` - PokeAPI client for the reference panel
pub async fn run_tui(catalog: &mut Catalog, client: PokedexClient) -> HomecraftResult<()> {
    // Kick off the reference fetch; the panel settles whenever it lands.
    let (tx, mut rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = tx.send(client.reference_data().await);
    });

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, catalog, &mut rx);
    let restored = restore_terminal(&mut terminal);

    result?;
    restored?;
    Ok(())
}

/// Put the terminal in raw mode on the alternate screen.
fn setup_terminal() -> TuiResult<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enter alternate screen: {}",
            e
        )))
    })?;

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })
}

/// Return the terminal to its pre-session state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> TuiResult<()> {
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to leave alternate screen: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })
}

/// Draw and dispatch until the user quits.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    catalog: &mut Catalog,
    rx: &mut oneshot::Receiver<Result<ReferenceData, PokedexError>>,
) -> HomecraftResult<()> {
    let mut app = App::new();
    let events = EventHandler::new(250);

    while !app.should_quit {
        terminal
            .draw(|f| crate::ui::draw(f, &app, catalog))
            .map_err(|e| {
                TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e)))
            })?;

        poll_reference(&mut app, rx);
        handle_event(&mut app, catalog, events.next()?)?;
    }

    Ok(())
}

/// Drain the reference fetch once it completes.
///
/// A dropped sender settles the panel empty, same as a fetch error.
fn poll_reference(app: &mut App, rx: &mut oneshot::Receiver<Result<ReferenceData, PokedexError>>) {
    if !app.reference.loading {
        return;
    }
    match rx.try_recv() {
        Ok(Ok(data)) => app.reference.settle(Some(data)),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Reference data fetch failed");
            app.reference.settle(None);
        }
        Err(oneshot::error::TryRecvError::Empty) => {}
        Err(oneshot::error::TryRecvError::Closed) => app.reference.settle(None),
    }
}

/// Handle a single event.
///
/// Ticks and resizes carry no state change of their own; the next draw
/// picks up whatever the fetch or the new dimensions imply.
fn handle_event(app: &mut App, catalog: &mut Catalog, event: Event) -> HomecraftResult<()> {
    match event {
        Event::Key(key) => {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.quit();
                return Ok(());
            }
            match app.mode {
                AppMode::Browse => handle_browse_key(app, catalog, key)?,
                AppMode::Search => handle_search_key(app, catalog, key),
                AppMode::Form => handle_form_key(app, catalog, key)?,
                AppMode::ConfirmDelete => handle_confirm_key(app, catalog, key)?,
            }
        }
        Event::Tick | Event::Resize(..) => {}
    }

    Ok(())
}

fn handle_browse_key(app: &mut App, catalog: &mut Catalog, key: KeyEvent) -> HomecraftResult<()> {
    let visible_len = app.visible_products(catalog).len();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(visible_len),
        KeyCode::Char('a') => app.open_add_form(catalog)?,
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_form(catalog)?,
        KeyCode::Char('d') => app.request_delete(catalog),
        KeyCode::Char('/') => {
            app.mode = AppMode::Search;
            app.status_message = "Type to filter, Esc to finish".to_string();
        }
        _ => {}
    }
    Ok(())
}

fn handle_search_key(app: &mut App, catalog: &Catalog, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.mode = AppMode::Browse;
            app.status_message = "Press a to add, / to search".to_string();
        }
        KeyCode::Backspace => {
            app.search_query.pop();
            let visible_len = app.visible_products(catalog).len();
            app.clamp_cursor(visible_len);
        }
        KeyCode::Char(c) => {
            app.search_query.push(c);
            let visible_len = app.visible_products(catalog).len();
            app.clamp_cursor(visible_len);
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, catalog: &mut Catalog, key: KeyEvent) -> HomecraftResult<()> {
    match key.code {
        KeyCode::Esc => app.cancel_form(catalog)?,
        KeyCode::Enter => app.submit_form(catalog)?,
        KeyCode::Tab => {
            if let Some(form) = &mut app.form {
                form.next_field();
            }
        }
        KeyCode::BackTab => {
            if let Some(form) = &mut app.form {
                form.previous_field();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = &mut app.form {
                form.focused_buffer().pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = &mut app.form {
                form.focused_buffer().push(c);
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_key(app: &mut App, catalog: &mut Catalog, key: KeyEvent) -> HomecraftResult<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete(catalog)?,
        KeyCode::Char('n') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use homecraft_store::FileBlobStore;
    use tempfile::TempDir;

    fn open_catalog(dir: &TempDir) -> Catalog {
        let store = FileBlobStore::new(dir.path()).unwrap();
        Catalog::open(Box::new(store), "products").unwrap()
    }

    #[test]
    fn test_resize_event_reaches_dispatch() {
        let dir = TempDir::new().unwrap();
        let mut catalog = open_catalog(&dir);
        let mut app = App::new();

        handle_event(&mut app, &mut catalog, Event::Resize(120, 40)).unwrap();

        assert_eq!(app.mode, AppMode::Browse);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_key_sets_quit_flag() {
        let dir = TempDir::new().unwrap();
        let mut catalog = open_catalog(&dir);
        let mut app = App::new();

        let quit = Event::Key(KeyEvent::from(KeyCode::Char('q')));
        handle_event(&mut app, &mut catalog, quit).unwrap();

        assert!(app.should_quit);
    }

    #[test]
    fn test_slash_enters_search_mode() {
        let dir = TempDir::new().unwrap();
        let mut catalog = open_catalog(&dir);
        let mut app = App::new();

        let slash = Event::Key(KeyEvent::from(KeyCode::Char('/')));
        handle_event(&mut app, &mut catalog, slash).unwrap();

        assert_eq!(app.mode, AppMode::Search);
    }
}
