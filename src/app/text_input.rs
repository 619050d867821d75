/// Single-line editable text with a character-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    content: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a character at the cursor
    pub fn insert(&mut self, character: char) {
        let at = byte_index(&self.content, self.cursor);
        self.content.insert(at, character);
        self.cursor += 1;
    }

    /// Removes the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
    }

    /// Removes the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            self.remove_at_cursor();
        }
    }

    fn remove_at_cursor(&mut self) {
        let start = byte_index(&self.content, self.cursor);
        let end = byte_index(&self.content, self.cursor + 1);
        self.content.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }
}

fn byte_index(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map_or(value.len(), |(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new();
        text.chars().for_each(|c| input.insert(c));
        input
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut input = typed("Jo");
        input.move_left();
        input.insert('h');
        assert_eq!(input.content(), "Jho");
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = typed("Great!");
        input.backspace();
        assert_eq!(input.content(), "Great");
        input.move_to_start();
        input.delete();
        assert_eq!(input.content(), "reat");
        input.move_to_start();
        input.backspace();
        assert_eq!(input.content(), "reat");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = typed("crème");
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.content(), "crme");
        assert_eq!(input.char_count(), 4);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut input = typed("ab");
        input.move_right();
        assert_eq!(input.cursor_position(), 2);
        input.clear();
        input.move_left();
        assert_eq!(input.cursor_position(), 0);
        assert!(input.is_empty());
    }
}
