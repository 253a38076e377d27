//! Rendering of the display projection.

use letterloan::{LetterSlot, SessionView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws one frame from the current projection.
pub fn draw(frame: &mut Frame, view: &SessionView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, rows[0], view);
    render_rack(frame, rows[1], view);
    render_clocks(frame, rows[2], view);
    render_controls(frame, rows[3], view);
}

fn render_header(frame: &mut Frame, area: Rect, view: &SessionView) {
    let mut spans = vec![Span::styled(
        view.phase_title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(score) = view.total_score {
        spans.push(Span::raw("    score "));
        spans.push(Span::styled(
            score.to_string(),
            Style::default().fg(if score < 0 { Color::Red } else { Color::Green }),
        ));
    }
    if let Some(word_score) = view.current_word_score {
        spans.push(Span::raw(format!("    word worth {word_score}")));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_rack(frame: &mut Frame, area: Rect, view: &SessionView) {
    let content = match &view.letter_slots {
        Some(slots) => Line::from(
            slots
                .iter()
                .flat_map(|slot| [render_slot(*slot), Span::raw(" ")])
                .collect::<Vec<_>>(),
        ),
        None => Line::from(Span::styled(
            "press 1 to start a session",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let rack = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("word"));
    frame.render_widget(rack, center_rect(area, 60, area.height.min(5)));
}

fn render_slot(slot: LetterSlot) -> Span<'static> {
    match slot {
        LetterSlot::Unrevealed => Span::styled("▁", Style::default().fg(Color::DarkGray)),
        LetterSlot::Pending { borrowed: true } => Span::styled(
            "?",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        LetterSlot::Pending { borrowed: false } => {
            Span::styled("?", Style::default().fg(Color::Cyan))
        }
        LetterSlot::Filled { ch, borrowed } => Span::styled(
            ch.to_string(),
            Style::default()
                .fg(if borrowed { Color::Yellow } else { Color::White })
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn render_clocks(frame: &mut Frame, area: Rect, view: &SessionView) {
    let style = if view.is_critical_time {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = Vec::new();
    if let Some(global) = &view.remaining_time_text {
        spans.push(Span::raw("session "));
        spans.push(Span::styled(global.clone(), style));
    }
    if let Some(question) = &view.question_time_text {
        spans.push(Span::raw("    answer "));
        spans.push(Span::styled(question.clone(), style));
    }

    let clocks = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(clocks, area);
}

fn render_controls(frame: &mut Frame, area: Rect, view: &SessionView) {
    let controls = [
        ("1 start", view.availability.start),
        ("2 borrow", view.availability.borrow),
        ("space answer", view.availability.answer),
        ("3 correct", view.availability.correct),
        ("4 next", view.availability.next),
        ("0 reset", view.availability.reset),
        ("esc quit", true),
    ];

    let mut spans = Vec::new();
    for (label, enabled) in controls {
        let style = if enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Centers a fixed-size rect inside the given area.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
