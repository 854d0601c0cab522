use ratatui::style::Stylize;
use ratatui::style::{Color, Style};

pub fn title_style() -> Style { Style::default().fg(Color::Cyan).bold() }
pub fn gauge_style() -> Style { Style::default().fg(Color::Green) }
pub fn footer_style() -> Style { Style::default().fg(Color::Gray) }
pub fn notice_style() -> Style { Style::default().fg(Color::Red).bold() }
pub fn cursor_style() -> Style { Style::default().fg(Color::DarkGray) }
