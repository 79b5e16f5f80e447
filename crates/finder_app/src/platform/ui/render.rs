use finder_core::{AppViewModel, MovieCard, RequestStatus, ResultsView};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout::{grid_cells, grid_columns, poster_size, split_screen};

/// Screen state that is not part of the core view model.
pub struct Chrome<'a> {
    /// Current address bar contents.
    pub location: &'a str,
    pub cursor_column: u16,
    pub scroll_rows: usize,
}

pub fn draw(frame: &mut Frame, view: &AppViewModel, chrome: &Chrome<'_>) {
    let viewport = frame.area();
    let areas = split_screen(viewport);

    frame.render_widget(
        Paragraph::new(Line::from(TITLE.bold()).centered()),
        areas.title,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("\u{2302} ", Style::new().fg(MUTED)),
            Span::styled(chrome.location, Style::new().fg(MUTED).underlined()),
        ])),
        areas.location,
    );
    draw_search_box(frame, view, chrome, areas.input);

    let columns = grid_columns(viewport.width);
    match &view.results {
        ResultsView::Prompt => draw_notice(frame, PROMPT_TEXT, areas.results),
        ResultsView::Skeleton { placeholders } => {
            draw_skeleton(frame, *placeholders, columns, view.pulse, areas.results)
        }
        ResultsView::Failed => draw_notice(frame, ERROR_TEXT, areas.results),
        ResultsView::Rejected { message } => draw_notice(frame, message, areas.results),
        ResultsView::Grid { cards, .. } => {
            for (index, cell) in grid_cells(areas.results, cards.len(), columns, chrome.scroll_rows) {
                draw_card(frame, &cards[index], cell);
            }
        }
    }

    frame.render_widget(
        Paragraph::new(status_text(view)).style(Style::new().fg(MUTED)),
        areas.status,
    );
}

fn draw_search_box(frame: &mut Frame, view: &AppViewModel, chrome: &Chrome<'_>, area: Rect) {
    let block = Block::bordered()
        .border_style(Style::new().fg(ACCENT))
        .title_top(Line::from(format!(" {SEARCH_GLYPH} ")).right_aligned());
    let content = if view.search.is_empty() {
        Line::from(INPUT_PLACEHOLDER.fg(MUTED))
    } else {
        Line::from(view.search.as_str())
    };
    frame.render_widget(Paragraph::new(content).block(block), area);

    let max_column = area.width.saturating_sub(3);
    frame.set_cursor_position(Position::new(
        area.x + 1 + chrome.cursor_column.min(max_column),
        area.y + 1,
    ));
}

fn draw_notice(frame: &mut Frame, text: &str, area: Rect) {
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
}

fn draw_skeleton(frame: &mut Frame, placeholders: usize, columns: u16, pulse: bool, area: Rect) {
    let shade = Style::new().bg(if pulse { SKELETON_PULSE } else { SKELETON });
    for (_, cell) in grid_cells(area, placeholders, columns, 0) {
        let (poster_width, poster_height) = poster_size(cell.width);
        let poster = Rect {
            width: poster_width,
            height: poster_height,
            ..cell
        };
        let title = Rect {
            y: poster.bottom(),
            width: cell.width * 3 / 4,
            height: 1,
            ..cell
        };
        let subtitle = Rect {
            y: title.bottom(),
            width: cell.width / 2,
            height: 1,
            ..cell
        };
        for part in [poster, title, subtitle] {
            frame.render_widget(Block::new().style(shade), part.intersection(area));
        }
    }
}

fn draw_card(frame: &mut Frame, card: &MovieCard, cell: Rect) {
    let (poster_width, poster_height) = poster_size(cell.width);
    let poster = Rect {
        width: poster_width,
        height: poster_height,
        ..cell
    }
    .intersection(cell);
    // Posters are passed through unmodified; the terminal shows the URL.
    frame.render_widget(
        Paragraph::new(card.poster_url.as_str())
            .style(Style::new().fg(MUTED))
            .wrap(Wrap { trim: true })
            .block(Block::bordered().border_style(Style::new().fg(MUTED))),
        poster,
    );

    let text = Rect {
        y: poster.bottom(),
        height: cell.bottom().saturating_sub(poster.bottom()),
        ..cell
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(card.title.as_str().bold()),
            Line::from(card.subtitle.as_str().fg(MUTED)),
        ]),
        text,
    );
}

fn status_text(view: &AppViewModel) -> String {
    let state = match view.status {
        RequestStatus::Idle => "idle",
        RequestStatus::Debouncing => "waiting for typing to pause",
        RequestStatus::Loading => "loading",
        RequestStatus::Failed => "failed",
        RequestStatus::Loaded => "done",
    };
    let mut text = format!("search: {:?} | {state}", view.debounced);
    if let ResultsView::Grid {
        cards,
        total_results,
    } = &view.results
    {
        match total_results {
            Some(total) => text.push_str(&format!(" | {} of {} results", cards.len(), total)),
            None => text.push_str(&format!(" | {} results", cards.len())),
        }
    }
    text.push_str(" | Esc to quit");
    text
}
