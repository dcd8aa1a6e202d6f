use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{CELL_HEIGHT, CELL_WIDTH, Grid, Position, Snapshot, Status};
use crate::metrics::GameMetrics;

const HEAD: &str = "■ ";
const BODY: &str = "□ ";
const FOOD: &str = "● ";
const EMPTY: &str = "· ";

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(snapshot, metrics);
        frame.render_widget(stats, chunks[0]);

        let grid = Grid::new(snapshot.grid_size);
        let board_area = centered_rect(
            grid.screen_extent(CELL_WIDTH),
            grid.screen_extent(CELL_HEIGHT),
            chunks[1],
        );
        self.render_board(frame, board_area, &grid, snapshot);

        match snapshot.status {
            Status::Running => {}
            Status::Idle => {
                let popup = centered_rect(32, 8, board_area);
                frame.render_widget(Clear, popup);
                frame.render_widget(self.render_start_prompt(), popup);
            }
            Status::GameOver => {
                let popup = centered_rect(32, 8, board_area);
                frame.render_widget(Clear, popup);
                frame.render_widget(self.render_game_over(snapshot), popup);
            }
        }

        let controls = self.render_controls(snapshot.status);
        frame.render_widget(controls, chunks[2]);
    }

    /// Paint the board: empty cells first, then food, body and head on top
    fn render_board(&self, frame: &mut Frame, area: Rect, grid: &Grid, snapshot: &Snapshot) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake ");
        let inner = block.inner(area);

        // Only the cells that fit on screen
        let columns = grid.size().min(usize::from(inner.width / CELL_WIDTH));
        let rows = grid.size().min(usize::from(inner.height / CELL_HEIGHT));
        let empty_row = EMPTY.repeat(columns);
        let lines: Vec<Line> = (0..rows)
            .map(|_| Line::styled(empty_row.clone(), Style::default().fg(Color::DarkGray)))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);

        let buffer = frame.buffer_mut();
        let mut paint = |pos: Position, glyph: &str, style: Style| {
            let (dx, dy) = grid.cell_origin(pos, CELL_WIDTH, CELL_HEIGHT);
            if dx.saturating_add(CELL_WIDTH) <= inner.width
                && dy.saturating_add(CELL_HEIGHT) <= inner.height
            {
                buffer.set_string(inner.x + dx, inner.y + dy, glyph, style);
            }
        };

        paint(
            snapshot.food,
            FOOD,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        );
        for segment in snapshot.snake.iter().skip(1) {
            paint(*segment, BODY, Style::default().fg(Color::Green));
        }
        paint(
            snapshot.head(),
            HEAD,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.snake.len().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}ms", snapshot.tick_interval_ms),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start_prompt(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_game_over(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let text = vec![
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Space", Style::default().fg(Color::Green)),
                Span::styled(" to play again", Style::default().fg(Color::Gray)),
            ]),
            Line::from(vec![
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, status: Status) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
        ];
        if status == Status::Running {
            spans.push(Span::styled("P", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(" to stop | "));
        } else {
            spans.push(Span::styled("Space", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(" to start | "));
        }
        spans.push(Span::styled("Q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" to quit"));

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rect centred in `area`, shrunk to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
