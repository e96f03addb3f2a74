use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const MAX_CONTENT_WIDTH: u16 = 76;
pub const KEYPAD_COLUMNS: usize = 5;
/// Bordered keypad: three key rows with a blank line between them.
pub const KEYPAD_HEIGHT: u16 = 7;

pub struct GameLayout {
    pub header: Rect,
    pub timer: Rect,
    pub hint: Rect,
    pub slots: Rect,
    pub keypad: Rect,
    pub powerups: Rect,
    pub footer: Rect,
}

impl GameLayout {
    pub fn new(area: Rect) -> Self {
        let column = content_column(area, MAX_CONTENT_WIDTH);
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
                Constraint::Length(KEYPAD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(column);

        Self {
            header: vertical[0],
            timer: vertical[1],
            hint: vertical[2],
            slots: vertical[3],
            keypad: vertical[4],
            powerups: vertical[5],
            footer: vertical[6],
        }
    }
}

/// Horizontally centred column no wider than `max_width`.
pub fn content_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let left = area.x + (area.width - width) / 2;
    Rect::new(left, area.y, width, area.height)
}

/// Cell for key `index` inside the keypad's inner area.
pub fn keypad_cell(inner: Rect, index: usize, columns: usize) -> Rect {
    let columns = columns.max(1);
    let cell_w = inner.width / columns as u16;
    let col = (index % columns) as u16;
    let row = (index / columns) as u16;
    let x = inner.x + col * cell_w;
    let y = inner.y + row * 2;
    let height = if y < inner.y + inner.height { 1 } else { 0 };
    Rect::new(x, y.min(inner.y + inner.height), cell_w, height)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 40;
    const MIN_POPUP_HEIGHT: u16 = 9;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
