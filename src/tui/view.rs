use crate::shared::DisplayState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::grid;

const HELP: &str = "space play/stop   [ ] tempo   g genre   p part   esc quit";

pub fn render(frame: &mut Frame, area: Rect, state: &DisplayState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // lcd screen
            Constraint::Min(12),   // step grid
            Constraint::Length(1), // key help
        ])
        .split(area);

    draw_screen(frame, sections[0], state);
    grid::draw_step_grid(frame, sections[1], &state.leds);
    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        sections[2],
    );
}

fn draw_screen(frame: &mut Frame, area: Rect, state: &DisplayState) {
    let status_style = if state.playing {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let step = state
        .playing_step
        .map(|s| format!("step {:>2}", s + 1))
        .unwrap_or_default();

    let lines = vec![
        Line::from(vec![
            Span::styled(state.genre.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("  /  {}", state.part)),
        ]),
        Line::from(format!("{} bpm   swing {:.2}", state.bpm, state.swing)),
        Line::from(vec![
            Span::styled(state.display_text.clone(), status_style),
            Span::raw(format!("  {step}")),
        ]),
    ];
    let screen = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" mozart "));
    frame.render_widget(screen, area);
}
