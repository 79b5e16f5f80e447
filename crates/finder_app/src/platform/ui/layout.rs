use ratatui::layout::{Constraint, Layout, Rect};

use super::constants::*;

pub struct ScreenAreas {
    pub title: Rect,
    pub location: Rect,
    pub input: Rect,
    pub results: Rect,
    pub status: Rect,
}

/// Splits the screen into a centered content column.
pub fn split_screen(area: Rect) -> ScreenAreas {
    let width = area.width.min(CONTENT_MAX_WIDTH);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };
    let [title, location, input, _, results, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .horizontal_margin(1)
    .areas(column);

    ScreenAreas {
        title,
        location,
        input,
        results,
        status,
    }
}

/// Grid columns for a viewport of the given width: one, two or three.
pub fn grid_columns(viewport_width: u16) -> u16 {
    if viewport_width >= THREE_COLUMN_MIN_WIDTH {
        3
    } else if viewport_width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Poster box for a card of the given width, as `(width, height)` cells.
///
/// Terminal cells are about twice as tall as wide, so a 2:3 poster needs
/// three rows for every four columns. Tall posters are capped and narrowed
/// to keep the ratio.
pub fn poster_size(card_width: u16) -> (u16, u16) {
    let rows = (u32::from(card_width) * 3).div_ceil(4).max(3);
    if rows <= u32::from(MAX_POSTER_ROWS) {
        return (card_width, rows as u16);
    }
    let width = (u32::from(MAX_POSTER_ROWS) * 4 / 3).min(u32::from(card_width));
    (width as u16, MAX_POSTER_ROWS)
}

/// Poster plus a title line and a subtitle line.
pub fn card_height(card_width: u16) -> u16 {
    poster_size(card_width).1 + 2
}

pub fn card_width(area_width: u16, columns: u16) -> u16 {
    let columns = columns.max(1);
    let gaps = GRID_GAP * (columns - 1);
    (area_width.saturating_sub(gaps) / columns).max(1)
}

pub fn total_rows(count: usize, columns: u16) -> usize {
    count.div_ceil(usize::from(columns.max(1)))
}

/// Places cards row by row, starting at grid row `first_row`, while rows fit
/// in `area`. The first visible row is always placed, clipped if needed.
pub fn grid_cells(area: Rect, count: usize, columns: u16, first_row: usize) -> Vec<(usize, Rect)> {
    let columns = columns.max(1);
    let width = card_width(area.width, columns);
    let height = card_height(width);
    let first_row = first_row.min(total_rows(count, columns).saturating_sub(1));

    let mut cells = Vec::new();
    let mut y = area.y;
    for row in first_row..total_rows(count, columns) {
        if row > first_row && y + height > area.bottom() {
            break;
        }
        for column in 0..columns {
            let index = row * usize::from(columns) + usize::from(column);
            if index >= count {
                break;
            }
            let cell = Rect {
                x: area.x + column * (width + GRID_GAP),
                y,
                width,
                height,
            };
            cells.push((index, cell.intersection(area)));
        }
        y = y.saturating_add(height + 1);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_viewport_breakpoints() {
        assert_eq!(grid_columns(40), 1);
        assert_eq!(grid_columns(59), 1);
        assert_eq!(grid_columns(60), 2);
        assert_eq!(grid_columns(99), 2);
        assert_eq!(grid_columns(100), 3);
        assert_eq!(grid_columns(300), 3);
    }

    #[test]
    fn posters_keep_two_by_three_ratio() {
        assert_eq!(poster_size(12), (12, 9));
        assert_eq!(poster_size(16), (16, 12));
        // Capped: 12 rows need 16 columns.
        assert_eq!(poster_size(37), (16, 12));
        assert_eq!(card_height(37), 14);
    }

    #[test]
    fn cells_fill_rows_in_api_order() {
        let area = Rect::new(0, 0, 116, 40);
        let cells = grid_cells(area, 6, 3, 0);
        let indices: Vec<usize> = cells.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(cells[0].1.y, cells[2].1.y);
        assert!(cells[3].1.y > cells[0].1.y);
        assert!(cells[1].1.x > cells[0].1.x);
    }

    #[test]
    fn rows_that_do_not_fit_are_skipped_and_scroll_moves_the_window() {
        let area = Rect::new(0, 0, 40, 20);
        let cells = grid_cells(area, 3, 1, 0);
        assert_eq!(cells.len(), 1);

        let scrolled = grid_cells(area, 3, 1, 2);
        assert_eq!(scrolled.len(), 1);
        assert_eq!(scrolled[0].0, 2);

        let clamped = grid_cells(area, 3, 1, 10);
        assert_eq!(clamped[0].0, 2);
    }
}
