//! Stateless UI rendering for the 9x9 wallpaper display.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use wallpaper_tictactoe::{CellValue, DisplayCoord, MacroCoord, Player, decompose};

use super::app::App;

/// Terminal columns per display cell.
const CELL_WIDTH: u16 = 3;
/// Width of the grid: nine cells plus two sub-board separators.
const GRID_WIDTH: u16 = 9 * CELL_WIDTH + 2;
/// Height of the grid: nine rows plus two separator lines.
const GRID_HEIGHT: u16 = 9 + 2;

const HELP: &str = "arrows/hjkl move | enter play | m or 1-4 mode | r reset | q quit";

/// Renders the title, the display grid and the status area.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title_area, board_area, status_area] = split(frame.area());

    let title = Paragraph::new(format!(
        "Wallpaper Tic-Tac-Toe - {}",
        app.game().mode().label()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    draw_board(frame, board_area, app);

    let status = Paragraph::new(vec![
        Line::from(app.status_message().as_str()),
        Line::from(Span::styled(HELP, Style::default().fg(Color::DarkGray))),
    ])
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

fn split(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(GRID_HEIGHT + 2),
        Constraint::Length(4),
    ])
    .areas(area)
}

/// The bordered box holding the grid, centered in the board region.
fn board_outer(area: Rect) -> Rect {
    let [board_area] = Layout::vertical([Constraint::Length(GRID_HEIGHT + 2)])
        .flex(Flex::Center)
        .areas(area);
    let [board_area] = Layout::horizontal([Constraint::Length(GRID_WIDTH + 2)])
        .flex(Flex::Center)
        .areas(board_area);
    board_area
}

/// Region inside the grid border for a frame of size `area`.
pub fn board_inner(area: Rect) -> Rect {
    let [_, board_area, _] = split(area);
    board_outer(board_area).inner(Margin::new(1, 1))
}

/// Display cell under the terminal position `(x, y)`, if any.
///
/// Separators and anything outside `inner` map to `None`.
pub fn cell_at(inner: Rect, x: u16, y: u16) -> Option<DisplayCoord> {
    let rel_x = x.checked_sub(inner.x)?;
    let rel_y = y.checked_sub(inner.y)?;
    if rel_x >= GRID_WIDTH.min(inner.width) || rel_y >= GRID_HEIGHT.min(inner.height) {
        return None;
    }

    // Each sub-board column block is 9 cells wide plus one separator.
    let block_x = rel_x / (3 * CELL_WIDTH + 1);
    let within_x = rel_x % (3 * CELL_WIDTH + 1);
    let block_y = rel_y / 4;
    let within_y = rel_y % 4;
    if within_x == 3 * CELL_WIDTH || within_y == 3 {
        return None;
    }

    DisplayCoord::try_new(
        (block_x * 3 + within_x / CELL_WIDTH) as u8,
        (block_y * 3 + within_y) as u8,
    )
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let grid = game.grid();
    let echoes = game.echoes_of_last_move();
    let win_line = game.winning_line();
    let separator_style = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(GRID_HEIGHT as usize);
    for gy in 0..9u8 {
        if gy > 0 && gy % 3 == 0 {
            let rule = ["─".repeat(9), "─".repeat(9), "─".repeat(9)].join("┼");
            lines.push(Line::from(Span::styled(rule, separator_style)));
        }

        let mut spans = Vec::with_capacity(11);
        for gx in 0..9u8 {
            if gx > 0 && gx % 3 == 0 {
                spans.push(Span::styled("│", separator_style));
            }
            let display = DisplayCoord::new(gx, gy);
            let highlight = Highlight {
                active: game.is_active(display),
                center: decompose(display).0 == MacroCoord::CENTER,
                echo: echoes.contains(&display),
                winning: win_line.is_some_and(|line| line.contains(&display)),
                cursor: *app.cursor() == display,
            };
            spans.push(cell_span(grid.get(display), highlight, *app.show_inactive()));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(game.mode().label())
            .border_style(separator_style),
    );
    frame.render_widget(board, board_outer(area));
}

#[derive(Debug, Clone, Copy)]
struct Highlight {
    active: bool,
    center: bool,
    echo: bool,
    winning: bool,
    cursor: bool,
}

fn cell_span(value: CellValue, highlight: Highlight, show_inactive: bool) -> Span<'static> {
    let (text, mut style) = match value {
        CellValue::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        CellValue::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        CellValue::Empty if highlight.active => ("   ", Style::default().fg(Color::DarkGray)),
        CellValue::Empty if show_inactive => (
            " · ",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ),
        CellValue::Empty => ("   ", Style::default()),
    };

    if highlight.center {
        style = style.bg(Color::Indexed(236));
    }
    if highlight.echo {
        style = style.fg(Color::Yellow);
    }
    if highlight.winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if highlight.cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }
    Span::styled(text, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use wallpaper_tictactoe::Mode;

    fn inner() -> Rect {
        Rect::new(10, 5, GRID_WIDTH, GRID_HEIGHT)
    }

    #[test]
    fn test_cell_at_corners() {
        assert_eq!(cell_at(inner(), 10, 5), Some(DisplayCoord::new(0, 0)));
        assert_eq!(cell_at(inner(), 12, 5), Some(DisplayCoord::new(0, 0)));
        assert_eq!(cell_at(inner(), 13, 5), Some(DisplayCoord::new(1, 0)));
        assert_eq!(
            cell_at(inner(), 10 + GRID_WIDTH - 1, 5 + GRID_HEIGHT - 1),
            Some(DisplayCoord::new(8, 8))
        );
    }

    #[test]
    fn test_cell_at_skips_separators() {
        // Column 19 and row 8 are the first vertical and horizontal rules.
        assert_eq!(cell_at(inner(), 19, 5), None);
        assert_eq!(cell_at(inner(), 20, 5), Some(DisplayCoord::new(3, 0)));
        assert_eq!(cell_at(inner(), 10, 8), None);
        assert_eq!(cell_at(inner(), 10, 9), Some(DisplayCoord::new(0, 3)));
    }

    #[test]
    fn test_cell_at_outside() {
        assert_eq!(cell_at(inner(), 9, 5), None);
        assert_eq!(cell_at(inner(), 10, 4), None);
        assert_eq!(cell_at(inner(), 10 + GRID_WIDTH, 5), None);
        assert_eq!(cell_at(inner(), 10, 5 + GRID_HEIGHT), None);
    }

    #[test]
    fn test_board_inner_fits_grid() {
        let area = Rect::new(0, 0, 80, 30);
        let inner = board_inner(area);
        assert_eq!(inner.width, GRID_WIDTH);
        assert_eq!(inner.height, GRID_HEIGHT);
    }

    #[test]
    fn test_drawn_mark_lands_under_mapped_cell() {
        let mut app = App::new(Mode::Torus, true);
        app.handle_click(DisplayCoord::new(4, 4));

        let area = Rect::new(0, 0, 60, 24);
        let mut terminal = Terminal::new(TestBackend::new(area.width, area.height))
            .expect("test terminal");
        terminal.draw(|frame| draw(frame, &app)).expect("draw");

        let inner = board_inner(area);
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Torus"));

        // Every echo of the center cell shows the mark in its middle column.
        let mut marks = 0;
        for y in inner.y..inner.y + inner.height {
            for x in inner.x..inner.x + inner.width {
                if buffer[(x, y)].symbol() == "X" {
                    let display = cell_at(inner, x, y).expect("mark inside a cell");
                    assert_eq!(display.gx % 3, 1);
                    assert_eq!(display.gy % 3, 1);
                    marks += 1;
                }
            }
        }
        assert_eq!(marks, 9);
    }
}
