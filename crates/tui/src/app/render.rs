use super::*;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const TITLE: &str = "Google Marketing APIs Authorization";
const SUBTITLE: &str =
    "OAuth code generator for Google Analytics, Search Console, and Google Ads";

/// The request an operator sends to the backend by hand. Display only.
pub fn api_request_example(endpoint: &str, code: &str) -> String {
    let body = serde_json::to_string_pretty(&serde_json::json!({ "code": code }))
        .unwrap_or_else(|_| format!("{{\n  \"code\": {:?}\n}}", code));
    format!(
        "PUT {endpoint}\nContent-Type: application/json\nAuthorization: Bearer YOUR_AUTH_TOKEN\n\n{body}"
    )
}

/// Bordered box height for `code` wrapped at `width` columns.
pub(super) fn code_box_height(code: &str, width: u16) -> u16 {
    let inner_width = usize::from(width.saturating_sub(2).max(1));
    let lines = code.chars().count().div_ceil(inner_width).max(1);
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        self.layout.calculate_layout(area);
        let panels = self.layout.get_panels().to_vec();

        for panel in panels {
            match panel.panel_type {
                PanelType::Header => self.render_header(frame, panel.rect),
                PanelType::Body => match self.screen() {
                    Screen::Connect => self.render_connect(frame, panel.rect),
                    Screen::CodeDisplay => self.render_code(frame, panel.rect),
                },
                PanelType::StatusLine => self.render_status_line(frame, panel.rect),
                PanelType::Footer => self.render_footer(frame, panel.rect),
            }
        }

        if self.show_help {
            self.render_help(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::DarkGray))),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_connect(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(""),
            Line::from(
                "  Connect with your Google account and authorize access to your Google marketing data.",
            ),
            Line::from(""),
            Line::from(Span::styled(
                "  Permissions Requested:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        lines.extend(
            Scope::REQUESTED
                .iter()
                .map(|scope| Line::from(format!("    • {}", scope.label()))),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                " [Enter] Connect with Google ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Connect "));
        frame.render_widget(paragraph, area);
    }

    fn render_code(&self, frame: &mut Frame, area: Rect) {
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(code_box_height(&self.auth_code, area.width)),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(area);

        let instructions = Paragraph::new(Line::from(vec![
            Span::styled(
                "Authorization Code Generated. ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("Use this code in your POST request to: "),
            Span::styled(
                self.config.backend.endpoint.as_str(),
                Style::default().fg(Color::Cyan),
            ),
        ]))
        .wrap(Wrap { trim: false });
        frame.render_widget(instructions, sections[0]);

        let code = Paragraph::new(self.auth_code.as_str())
            .style(Style::default().fg(Color::Green))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Your authorization code "),
            );
        frame.render_widget(code, sections[1]);

        let copy_label = if self.copied {
            Span::styled(
                " [c] ✓ Copied! ",
                Style::default().fg(Color::Black).bg(Color::Green),
            )
        } else {
            Span::styled(
                " [c] Copy Code ",
                Style::default().fg(Color::Black).bg(Color::Blue),
            )
        };
        let buttons = Paragraph::new(Line::from(vec![
            copy_label,
            Span::raw("   "),
            Span::styled(
                " [r] Start Over ",
                Style::default().fg(Color::Black).bg(Color::Gray),
            ),
        ]));
        frame.render_widget(buttons, sections[2]);

        let example = Paragraph::new(api_request_example(
            &self.config.backend.endpoint,
            &self.auth_code,
        ))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" API Request Example "),
        );
        frame.render_widget(example, sections[3]);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref error) = self.last_error {
            let status = Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red));
            frame.render_widget(status, area);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Paragraph::new(format!(" {}", self.location)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.keybinds.footer_hint(!self.auth_code.is_empty())),
        );
        frame.render_widget(footer, area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(self.keybinds.help_text()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help - Press ? to close "),
            ),
            popup_area,
        );
    }
}
