use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::panel::{Panel, PanelType};

const HEADER_HEIGHT: u16 = 4;
const STATUS_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 3;
const MAX_CONTENT_WIDTH: u16 = 100;

#[derive(Default)]
pub struct LayoutState {
    cached_panels: Vec<Panel>,
}

impl LayoutState {
    pub fn calculate_layout(&mut self, area: Rect) -> &[Panel] {
        let content = Self::content_column(area);

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(STATUS_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(content);

        self.cached_panels = vec![
            Panel {
                panel_type: PanelType::Header,
                rect: main_layout[0],
            },
            Panel {
                panel_type: PanelType::Body,
                rect: main_layout[1],
            },
            Panel {
                panel_type: PanelType::StatusLine,
                rect: main_layout[2],
            },
            Panel {
                panel_type: PanelType::Footer,
                rect: main_layout[3],
            },
        ];

        &self.cached_panels
    }

    pub fn get_panels(&self) -> &[Panel] {
        &self.cached_panels
    }

    // Centered column so wide terminals keep a readable line length.
    fn content_column(area: Rect) -> Rect {
        if area.width <= MAX_CONTENT_WIDTH {
            return area;
        }
        let margin = (area.width - MAX_CONTENT_WIDTH) / 2;
        Rect {
            x: area.x + margin,
            width: MAX_CONTENT_WIDTH,
            ..area
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
