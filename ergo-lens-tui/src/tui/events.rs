use crate::tui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = !app.show_help;
            return;
        }
        KeyCode::Tab => {
            app.cycle_focus();
            return;
        }
        KeyCode::Char('r') => {
            app.reset_filters();
            return;
        }
        KeyCode::Esc => {
            if app.show_help {
                app.show_help = false;
            } else {
                app.focus = Focus::Selectors;
            }
            return;
        }
        _ => {}
    }
    match app.focus {
        Focus::Selectors => handle_selectors(app, key),
        Focus::Chart => handle_chart(app, key),
    }
}

fn handle_selectors(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.selector_down(),
        KeyCode::Char('k') | KeyCode::Up => app.selector_up(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => app.cycle_value(1),
        KeyCode::Char('h') | KeyCode::Left => app.cycle_value(-1),
        KeyCode::Char('[') => {
            app.sidebar_width = app.sidebar_width.saturating_sub(1).max(18);
        }
        KeyCode::Char(']') => {
            app.sidebar_width = (app.sidebar_width + 1).min(40);
        }
        _ => {}
    }
}

fn handle_chart(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.bin_left(),
        KeyCode::Char('l') | KeyCode::Right => app.bin_right(),
        _ => {}
    }
}
