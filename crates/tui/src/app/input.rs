use super::*;

impl App {
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Resize(_, _) => Ok(false),
            _ => Ok(false),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return Ok(true);
        }

        if key.code == KeyCode::Char('?') {
            self.show_help = !self.show_help;
            return Ok(false);
        }

        if self.show_help {
            if key.code == KeyCode::Esc {
                self.show_help = false;
            }
            return Ok(false);
        }

        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return Ok(true);
        }

        match (self.screen(), key.code) {
            (Screen::Connect, KeyCode::Enter | KeyCode::Char('c')) => self.connect(),
            (Screen::CodeDisplay, KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y')) => {
                self.copy_code()
            }
            (Screen::CodeDisplay, KeyCode::Char('r') | KeyCode::Backspace) => self.reset(),
            _ => {}
        }

        Ok(false)
    }
}
