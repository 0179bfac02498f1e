// Tab collection management.
// - Enforces the tab cap and the delete-to-zero floor.
// - Handles cyclic tab selection.
// - Implements header rename: begin, draft editing, commit.
use crate::model::{MAX_TABS, Notice, Rename, ScriptTab, byte_index_for_char};

use super::App;

impl App {
    pub fn add_tab(&mut self) {
        self.commit_rename();

        if self.tabs.len() >= MAX_TABS {
            self.raise_notice(Notice::warning(
                "Limit Reached",
                format!("You can only have up to {MAX_TABS} tabs."),
            ));
            return;
        }

        let title = format!("Tab {}", self.tabs.len() + 1);
        self.tabs.push(ScriptTab::new(title));
        self.selected = self.tabs.len() - 1;
        self.status_message = format!("Opened {}.", self.tabs[self.selected].title);
    }

    // Unconditional: no confirmation and no minimum tab floor.
    pub fn delete_active_tab(&mut self) {
        self.rename = None;

        if self.tabs.is_empty() {
            self.status_message = "No tabs to delete.".to_string();
            return;
        }

        let removed = self.tabs.remove(self.selected);
        if self.selected >= self.tabs.len() {
            self.selected = self.tabs.len().saturating_sub(1);
        }
        self.status_message = if self.tabs.is_empty() {
            format!("Closed {}. Ctrl+t opens a new tab.", removed.title)
        } else {
            format!("Closed {}.", removed.title)
        };
    }

    pub fn select_next_tab(&mut self) {
        self.commit_rename();
        if self.tabs.len() > 1 {
            self.selected = (self.selected + 1) % self.tabs.len();
        }
    }

    pub fn select_previous_tab(&mut self) {
        self.commit_rename();
        if self.tabs.len() > 1 {
            self.selected = if self.selected == 0 {
                self.tabs.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    pub fn begin_rename(&mut self) {
        let Some(tab) = self.active_tab() else {
            self.status_message = "No tab to rename.".to_string();
            return;
        };
        self.rename = Some(Rename::from_title(&tab.title));
    }

    /// Writes the draft back verbatim; the header accepts any text,
    /// including an empty or duplicate title.
    pub fn commit_rename(&mut self) {
        let Some(rename) = self.rename.take() else {
            return;
        };
        if let Some(tab) = self.tabs.get_mut(self.selected) {
            tab.title = rename.draft;
        }
    }

    pub fn rename_insert_char(&mut self, ch: char) {
        let Some(rename) = self.rename.as_mut() else {
            return;
        };
        let byte_index = byte_index_for_char(&rename.draft, rename.cursor);
        rename.draft.insert(byte_index, ch);
        rename.cursor += 1;
    }

    pub fn rename_backspace(&mut self) {
        let Some(rename) = self.rename.as_mut() else {
            return;
        };
        if rename.cursor == 0 {
            return;
        }
        let remove_char_index = rename.cursor - 1;
        let start = byte_index_for_char(&rename.draft, remove_char_index);
        let end = byte_index_for_char(&rename.draft, remove_char_index + 1);
        rename.draft.replace_range(start..end, "");
        rename.cursor -= 1;
    }

    pub fn rename_move_cursor_left(&mut self) {
        if let Some(rename) = self.rename.as_mut() {
            rename.cursor = rename.cursor.saturating_sub(1);
        }
    }

    pub fn rename_move_cursor_right(&mut self) {
        if let Some(rename) = self.rename.as_mut() {
            let max = rename.draft.chars().count();
            rename.cursor = (rename.cursor + 1).min(max);
        }
    }
}
