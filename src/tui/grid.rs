use crate::shared::{LedState, STEPS_PER_BAR};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const COLS: usize = 4;
const ROWS: usize = 4;

// one cell per 16th, a bar reads left to right, top to bottom
pub fn draw_step_grid(frame: &mut Frame, area: Rect, leds: &[LedState; STEPS_PER_BAR]) {
    let row_constraints = [Constraint::Percentage(25); ROWS];
    let col_constraints = [Constraint::Percentage(25); COLS];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row_idx, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);

        for (col_idx, cell_area) in cols.iter().enumerate() {
            let step = row_idx * COLS + col_idx;
            let style = led_style(leds[step]);
            let cell = Paragraph::new(format!("{}", step + 1))
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(style));
            frame.render_widget(cell, *cell_area);
        }
    }
}

fn led_style(led: LedState) -> Style {
    match led {
        LedState::OnHigh => Style::default().fg(Color::LightMagenta).bg(Color::Magenta),
        LedState::OnMedium => Style::default().fg(Color::Magenta),
        LedState::Off => Style::default().fg(Color::DarkGray),
    }
}
