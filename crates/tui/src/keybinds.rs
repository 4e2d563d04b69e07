pub struct Keybinds;

impl Default for Keybinds {
    fn default() -> Self {
        Self
    }
}

impl Keybinds {
    pub fn help_text(&self) -> String {
        r#"Keyboard Shortcuts:

Connect screen:
  Enter / c     Open Google consent page

Code screen:
  Enter / c / y Copy code to clipboard
  r / Backspace Start over

General:
  ?             Toggle this help
  q / Esc       Quit
  Ctrl + C      Quit

The code arrives automatically when the redirect URI
points at this machine. Otherwise relaunch with
  authcode --location '<redirected URL>'
"#
        .to_string()
    }

    pub fn footer_hint(&self, has_code: bool) -> &'static str {
        if has_code {
            " [c] Copy  [r] Start Over  [?] Help  [q] Quit "
        } else {
            " [Enter] Connect  [?] Help  [q] Quit "
        }
    }
}
