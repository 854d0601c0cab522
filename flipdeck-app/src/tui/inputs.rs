use crossterm::event::{Event, KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy)]
pub enum Action {
    Quit,
    Next,
    Previous,
    Flip,
    AddCard,
    None,
}

pub fn map_event(ev: Event) -> Action {
    if let Event::Key(KeyEvent { code, .. }) = ev {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Right | KeyCode::Char('n') => Action::Next,
            KeyCode::Left | KeyCode::Char('p') => Action::Previous,
            KeyCode::Char(' ') | KeyCode::Enter => Action::Flip,
            KeyCode::Char('a') => Action::AddCard,
            _ => Action::None,
        }
    } else {
        Action::None
    }
}
