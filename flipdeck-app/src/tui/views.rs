use crate::tui::theme::*;
use flipdeck_core::{CardView, Progress};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

pub enum Pane<'a> {
    Card { view: CardView },
    Input { label: &'a str, buf: &'a str },
}

pub fn draw_ui(f: &mut Frame, area: Rect, pane: Pane, progress: Progress, notice: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    match pane {
        Pane::Card { view } => draw_card(f, chunks[0], &view),
        Pane::Input { label, buf } => draw_input(f, chunks[0], label, buf),
    }
    draw_progress(f, chunks[1], progress);

    if let Some(msg) = notice {
        let p = Paragraph::new(msg).style(notice_style());
        f.render_widget(p, chunks[2]);
    }

    let foot = Paragraph::new(Line::from(vec![
        Span::raw(" ←/p previous  "),
        Span::raw(" →/n next  "),
        Span::raw(" space flip  "),
        Span::raw(" a add card  "),
        Span::raw(" q quit "),
    ]))
    .style(footer_style());
    f.render_widget(foot, chunks[3]);
}

fn draw_card(f: &mut Frame, area: Rect, view: &CardView) {
    let (tag, text, title) = if view.showing_front {
        ("Q: ", view.question.as_str(), "Question")
    } else {
        ("A: ", view.answer.as_str(), "Answer")
    };
    let body = Paragraph::new(Line::from(vec![
        Span::styled(tag, title_style()),
        Span::raw(text),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(format!("{title}  {}", view.position))
            .borders(Borders::ALL),
    );
    f.render_widget(body, area);
}

fn draw_input(f: &mut Frame, area: Rect, label: &str, buf: &str) {
    let body = Paragraph::new(Line::from(vec![
        Span::raw(buf),
        Span::styled("_", cursor_style()),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(format!("New card: {label} (enter confirms, esc cancels)"))
            .borders(Borders::ALL),
    );
    f.render_widget(body, area);
}

fn draw_progress(f: &mut Frame, area: Rect, progress: Progress) {
    let gauge = Gauge::default()
        .block(Block::default().title("Progress").borders(Borders::ALL))
        .gauge_style(gauge_style())
        .percent(progress.percent as u16)
        .label(progress.to_string());
    f.render_widget(gauge, area);
}
