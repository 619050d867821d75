use ratatui::layout::{Constraint, Flex, Layout, Rect};

const MIN_POPUP_WIDTH: u16 = 40;
const MIN_POPUP_HEIGHT: u16 = 16;

/// Rectangle of `percent_x` by `percent_y` of `area`, centered in it.
///
/// Small terminals get at least the minimum popup size when it fits.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = percent_of(area.width, percent_x)
        .max(MIN_POPUP_WIDTH)
        .min(area.width);
    let height = percent_of(area.height, percent_y)
        .max(MIN_POPUP_HEIGHT)
        .min(area.height);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

fn percent_of(length: u16, percent: u16) -> u16 {
    let scaled = u32::from(length) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(length)
}
