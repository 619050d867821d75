/// Cursor movement shared by the selectable lists (dish menu, command palette)
pub trait Navigable {
    fn item_count(&self) -> usize;

    fn selected_index(&self) -> usize;

    fn set_selected_index(&mut self, index: usize);

    /// Moves down one row, wrapping to the top
    fn next_item(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.set_selected_index((self.selected_index() + 1) % count);
        }
    }

    /// Moves up one row, wrapping to the bottom
    fn previous_item(&mut self) {
        let count = self.item_count();
        if count > 0 {
            let current = self.selected_index().min(count - 1);
            self.set_selected_index((count + current - 1) % count);
        }
    }

    /// Pulls the cursor back inside the list after it shrank
    fn clamp_selection(&mut self) {
        let count = self.item_count();
        if self.selected_index() >= count {
            self.set_selected_index(count.saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rows {
        count: usize,
        selected: usize,
    }

    impl Navigable for Rows {
        fn item_count(&self) -> usize {
            self.count
        }

        fn selected_index(&self) -> usize {
            self.selected
        }

        fn set_selected_index(&mut self, index: usize) {
            self.selected = index;
        }
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut rows = Rows { count: 3, selected: 0 };
        rows.previous_item();
        assert_eq!(rows.selected, 2);
        rows.next_item();
        assert_eq!(rows.selected, 0);
    }

    #[test]
    fn test_empty_list_is_a_no_op() {
        let mut rows = Rows { count: 0, selected: 0 };
        rows.next_item();
        rows.previous_item();
        assert_eq!(rows.selected, 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut rows = Rows { count: 2, selected: 5 };
        rows.clamp_selection();
        assert_eq!(rows.selected, 1);
    }
}
