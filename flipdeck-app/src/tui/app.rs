use crate::tui::{
    inputs::{map_event, Action},
    views::{self, Pane},
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flipdeck_core::{DeckStore, StudySession};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::Arc;

enum Mode {
    Study,
    AddQuestion { buf: String },
    AddAnswer { question: String, buf: String },
}

pub struct TuiApp {
    session: StudySession,
    mode: Mode,
    notice: Option<String>,
}

impl TuiApp {
    pub fn new(store: Arc<dyn DeckStore>) -> Self {
        Self {
            session: StudySession::open(store),
            mode: Mode::Study,
            notice: None,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.mainloop(&mut terminal);

        disable_raw_mode().ok();
        let mut out: Stdout = std::io::stdout();
        execute!(out, LeaveAlternateScreen).ok();
        terminal.show_cursor().ok();

        res
    }

    fn mainloop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| {
                let pane = match &self.mode {
                    Mode::Study => Pane::Card {
                        view: self.session.current_view(),
                    },
                    Mode::AddQuestion { buf } => Pane::Input {
                        label: "Question",
                        buf,
                    },
                    Mode::AddAnswer { buf, .. } => Pane::Input {
                        label: "Answer",
                        buf,
                    },
                };
                views::draw_ui(
                    f,
                    f.size(),
                    pane,
                    self.session.progress(),
                    self.notice.as_deref(),
                );
            })?;

            if event::poll(std::time::Duration::from_millis(100))? {
                let ev = event::read()?;
                if matches!(self.mode, Mode::Study) {
                    match map_event(ev) {
                        Action::Quit => break,
                        Action::Next => {
                            self.notice = None;
                            self.session.next();
                        }
                        Action::Previous => {
                            self.notice = None;
                            self.session.previous();
                        }
                        Action::Flip => {
                            self.notice = None;
                            self.session.flip();
                        }
                        Action::AddCard => {
                            self.notice = None;
                            self.mode = Mode::AddQuestion { buf: String::new() };
                        }
                        Action::None => {}
                    }
                } else {
                    self.handle_input(ev);
                }
            }
        }
        Ok(())
    }

    // Text entry for the two add-card prompts. Esc drops back to study
    // mode without adding anything.
    fn handle_input(&mut self, ev: Event) {
        let Event::Key(KeyEvent { code, .. }) = ev else {
            return;
        };
        match std::mem::replace(&mut self.mode, Mode::Study) {
            Mode::Study => {}
            Mode::AddQuestion { mut buf } => match code {
                KeyCode::Esc => {}
                KeyCode::Enter => {
                    self.mode = Mode::AddAnswer {
                        question: buf,
                        buf: String::new(),
                    };
                }
                KeyCode::Backspace => {
                    buf.pop();
                    self.mode = Mode::AddQuestion { buf };
                }
                KeyCode::Char(c) => {
                    buf.push(c);
                    self.mode = Mode::AddQuestion { buf };
                }
                _ => self.mode = Mode::AddQuestion { buf },
            },
            Mode::AddAnswer { question, mut buf } => match code {
                KeyCode::Esc => {}
                KeyCode::Enter => {
                    if let Err(e) = self.session.add_card(&question, &buf) {
                        self.notice = Some(e.to_string());
                    }
                }
                KeyCode::Backspace => {
                    buf.pop();
                    self.mode = Mode::AddAnswer { question, buf };
                }
                KeyCode::Char(c) => {
                    buf.push(c);
                    self.mode = Mode::AddAnswer { question, buf };
                }
                _ => self.mode = Mode::AddAnswer { question, buf },
            },
        }
    }
}
