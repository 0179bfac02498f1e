// Shared data model used across state, input handling, and rendering.
// - Defines the script tab and its line-based text buffer.
// - Defines rename-draft state and modal notices.
// - Keeps common types decoupled from module-specific logic.

/// Hard cap on concurrently open tabs.
pub const MAX_TABS: usize = 4;

#[derive(Debug, Clone)]
pub struct ScriptTab {
    pub title: String,
    pub buffer: ScriptBuffer,
}

impl ScriptTab {
    pub fn new(title: String) -> Self {
        Self {
            title,
            buffer: ScriptBuffer::new(),
        }
    }
}

/// In-progress header rename for the selected tab. Dropped on commit.
#[derive(Debug, Clone)]
pub struct Rename {
    pub draft: String,
    pub cursor: usize,
}

impl Rename {
    pub fn from_title(title: &str) -> Self {
        Self {
            draft: title.to_string(),
            cursor: title.chars().count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// Modal notice shown over the whole screen until dismissed.
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind: NoticeKind::Warning,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Multi-line text buffer with a char-indexed cursor.
///
/// Invariants: `lines` always holds at least one line, `row` points at an
/// existing line, and `col` never exceeds that line's char count.
#[derive(Debug, Clone)]
pub struct ScriptBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl ScriptBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    pub fn insert_char(&mut self, ch: char) {
        let line = &mut self.lines[self.row];
        let byte_index = byte_index_for_char(line, self.col);
        line.insert(byte_index, ch);
        self.col += 1;
    }

    pub fn insert_newline(&mut self) {
        let line = &mut self.lines[self.row];
        let byte_index = byte_index_for_char(line, self.col);
        let rest = line.split_off(byte_index);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    pub fn backspace(&mut self) {
        if self.col > 0 {
            let line = &mut self.lines[self.row];
            let start = byte_index_for_char(line, self.col - 1);
            let end = byte_index_for_char(line, self.col);
            line.replace_range(start..end, "");
            self.col -= 1;
        } else if self.row > 0 {
            let removed = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_char_count(self.row);
            self.lines[self.row].push_str(&removed);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.col < self.line_char_count(self.row) {
            let line = &mut self.lines[self.row];
            let start = byte_index_for_char(line, self.col);
            let end = byte_index_for_char(line, self.col + 1);
            line.replace_range(start..end, "");
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_char_count(self.row);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_char_count(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_char_count(self.row));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_char_count(self.row));
        }
    }

    pub fn move_line_start(&mut self) {
        self.col = 0;
    }

    pub fn move_line_end(&mut self) {
        self.col = self.line_char_count(self.row);
    }

    fn line_char_count(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }
}

impl Default for ScriptBuffer {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn byte_index_for_char(input: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }

    input
        .char_indices()
        .nth(char_index)
        .map(|(index, _)| index)
        .unwrap_or(input.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_from(text: &str) -> ScriptBuffer {
        let mut buffer = ScriptBuffer::new();
        for ch in text.chars() {
            if ch == '\n' {
                buffer.insert_newline();
            } else {
                buffer.insert_char(ch);
            }
        }
        buffer
    }

    #[test]
    fn insert_and_text_round_trip() {
        let buffer = buffer_from("print(1)\nprint(2)");
        assert_eq!(buffer.text(), "print(1)\nprint(2)");
        assert_eq!(buffer.lines().len(), 2);
        assert_eq!(buffer.cursor(), (1, 8));
    }

    #[test]
    fn newline_splits_line_at_cursor() {
        let mut buffer = buffer_from("abcd");
        buffer.move_left();
        buffer.move_left();
        buffer.insert_newline();
        assert_eq!(buffer.text(), "ab\ncd");
        assert_eq!(buffer.cursor(), (1, 0));
    }

    #[test]
    fn backspace_at_line_start_joins_lines() {
        let mut buffer = buffer_from("ab\ncd");
        buffer.move_line_start();
        buffer.backspace();
        assert_eq!(buffer.text(), "abcd");
        assert_eq!(buffer.cursor(), (0, 2));
    }

    #[test]
    fn delete_forward_at_line_end_joins_lines() {
        let mut buffer = buffer_from("ab\ncd");
        buffer.move_up();
        buffer.move_line_end();
        buffer.delete_forward();
        assert_eq!(buffer.text(), "abcd");
    }

    #[test]
    fn moving_between_lines_clamps_column() {
        let mut buffer = buffer_from("longer line\nab");
        buffer.move_up();
        let (row, col) = buffer.cursor();
        assert_eq!(row, 0);
        assert!(col <= "longer line".chars().count());
        buffer.move_down();
        assert_eq!(buffer.cursor(), (1, 2));
    }

    #[test]
    fn multibyte_chars_edit_on_char_boundaries() {
        let mut buffer = buffer_from("héllo");
        buffer.backspace();
        buffer.backspace();
        buffer.backspace();
        buffer.backspace();
        assert_eq!(buffer.text(), "h");
    }

    #[test]
    fn blank_detection_ignores_whitespace() {
        assert!(ScriptBuffer::new().is_blank());
        assert!(buffer_from("   \n\t  \n").is_blank());
        assert!(!buffer_from("  x  ").is_blank());
    }
}
