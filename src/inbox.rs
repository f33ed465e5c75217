//! Read/unread bookkeeping for the top bar menus

/// Anything that can sit in an inbox
pub trait InboxItem {
    fn id(&self) -> u32;
    fn is_read(&self) -> bool;
    fn mark_read(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inbox<T> {
    items: Vec<T>,
}

impl<T: InboxItem> Inbox<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_read()).count()
    }

    /// Mark `id` read and hand back a copy for the detail view
    pub fn open(&mut self, id: u32) -> Option<T>
    where
        T: Clone,
    {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        item.mark_read();
        Some(item.clone())
    }

    pub fn mark_all_read(&mut self) {
        self.items.iter_mut().for_each(|item| item.mark_read());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{inbox_messages, inbox_notifications};

    #[test]
    fn stock_inboxes_start_with_unread_items() {
        assert_eq!(Inbox::new(inbox_messages()).unread_count(), 1);
        assert_eq!(Inbox::new(inbox_notifications()).unread_count(), 2);
    }

    #[test]
    fn opening_marks_read_once() {
        let mut inbox = Inbox::new(inbox_notifications());
        let opened = inbox.open(1).unwrap();
        assert!(opened.is_read());
        assert_eq!(inbox.unread_count(), 1);

        inbox.open(1);
        assert_eq!(inbox.unread_count(), 1);
        assert!(inbox.open(99).is_none());

        inbox.mark_all_read();
        assert_eq!(inbox.unread_count(), 0);
    }
}
