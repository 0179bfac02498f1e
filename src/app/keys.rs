// Key dispatch.
// - An open notice swallows everything except quit until dismissed.
// - Rename mode edits the header draft; every focus-moving chord commits.
// - Everything else edits the active script buffer.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_notice();
            }
            return;
        }

        if self.show_keybinds {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                self.hide_keybinds();
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('a') => self.attach(),
                KeyCode::Char('e') => self.execute(),
                KeyCode::Char('t') => self.add_tab(),
                KeyCode::Char('w') => self.delete_active_tab(),
                KeyCode::Char('n') => self.select_next_tab(),
                KeyCode::Char('p') => self.select_previous_tab(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::F(1) => self.toggle_keybinds(),
            KeyCode::F(2) => {
                if self.rename.is_some() {
                    self.commit_rename();
                } else {
                    self.begin_rename();
                }
            }
            KeyCode::F(5) => self.execute(),
            _ if self.rename.is_some() => self.handle_rename_key(key.code),
            _ => self.handle_editor_key(key.code),
        }
    }

    fn handle_rename_key(&mut self, code: KeyCode) {
        match code {
            // Enter commits; Esc is treated as leaving the header, which
            // also commits and locks it back to read-only.
            KeyCode::Enter | KeyCode::Esc => self.commit_rename(),
            KeyCode::Backspace => self.rename_backspace(),
            KeyCode::Left => self.rename_move_cursor_left(),
            KeyCode::Right => self.rename_move_cursor_right(),
            KeyCode::Char(ch) => self.rename_insert_char(ch),
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, code: KeyCode) {
        let Some(tab) = self.active_tab_mut() else {
            return;
        };

        match code {
            KeyCode::Char(ch) => tab.buffer.insert_char(ch),
            KeyCode::Enter => tab.buffer.insert_newline(),
            KeyCode::Tab => {
                for _ in 0..4 {
                    tab.buffer.insert_char(' ');
                }
            }
            KeyCode::Backspace => tab.buffer.backspace(),
            KeyCode::Delete => tab.buffer.delete_forward(),
            KeyCode::Left => tab.buffer.move_left(),
            KeyCode::Right => tab.buffer.move_right(),
            KeyCode::Up => tab.buffer.move_up(),
            KeyCode::Down => tab.buffer.move_down(),
            KeyCode::Home => tab.buffer.move_line_start(),
            KeyCode::End => tab.buffer.move_line_end(),
            _ => {}
        }
    }
}
