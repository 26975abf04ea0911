use slab::Slab;

// The same cursor-sequence semantics without raw pointers: nodes live in a
// slab arena and every link is an arena key. Slab keys survive cloning, so
// a derived clone keeps its cursor without any rebuilding.
#[derive(Clone)]
pub struct ArenaSequence<T> {
    arena: Slab<ArenaNode<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    cursor: Option<usize>,
    precursor: Option<usize>,
}

#[derive(Clone)]
struct ArenaNode<T> {
    element: T,
    next: Option<usize>,
}

impl<T> Default for ArenaSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArenaSequence<T> {
    pub fn new() -> Self {
        Self {
            arena: Slab::new(),
            head: None,
            tail: None,
            cursor: None,
            precursor: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn start(&mut self) {
        self.precursor = None;
        self.cursor = self.head;
    }

    pub fn is_item(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn current(&self) -> Option<&T> {
        self.cursor.map(move |at| &self.arena[at].element)
    }

    pub fn advance(&mut self) -> bool {
        match self.cursor {
            Some(at) => {
                self.precursor = self.cursor;
                self.cursor = self.arena[at].next;
                true
            }
            None => false,
        }
    }

    pub fn insert(&mut self, element: T) {
        match (self.cursor, self.precursor) {
            (Some(_), Some(before)) => {
                let next = self.arena[before].next;
                let node = self.arena.insert(ArenaNode { element, next });
                self.arena[before].next = Some(node);
                self.cursor = Some(node);
            }
            _ => {
                let next = self.head;
                let node = self.arena.insert(ArenaNode { element, next });
                self.head = Some(node);
                self.precursor = None;
                self.cursor = self.head;
                if self.tail.is_none() {
                    self.tail = self.head;
                }
            }
        }
    }

    pub fn attach(&mut self, element: T) {
        match (self.cursor, self.tail) {
            (Some(at), _) => {
                let next = self.arena[at].next;
                let node = self.arena.insert(ArenaNode { element, next });
                self.arena[at].next = Some(node);
                self.precursor = Some(at);
                self.cursor = Some(node);
                if self.tail == Some(at) {
                    self.tail = Some(node);
                }
            }
            (None, Some(tail)) => {
                let node = self.arena.insert(ArenaNode { element, next: None });
                self.arena[tail].next = Some(node);
                self.precursor = Some(tail);
                self.tail = Some(node);
                self.cursor = Some(node);
            }
            (None, None) => {
                let node = self.arena.insert(ArenaNode { element, next: None });
                self.head = Some(node);
                self.tail = Some(node);
                self.precursor = None;
                self.cursor = Some(node);
            }
        }
    }

    pub fn remove_current(&mut self) -> Option<T> {
        let at = self.cursor?;
        let next = self.arena[at].next;
        match self.precursor {
            None => self.head = next,
            Some(before) => self.arena[before].next = next,
        }
        if self.tail == Some(at) {
            self.tail = self.precursor;
        }
        self.cursor = next;
        Some(self.arena.remove(at).element)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut elements = Vec::new();
        let mut link = self.head;
        while let Some(at) = link {
            elements.push(self.arena[at].element.clone());
            link = self.arena[at].next;
        }
        elements
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::ArenaSequence;

    #[test]
    fn arena_insert_attach_scan_remove() {
        let mut seq = ArenaSequence::new();
        seq.insert(5);
        assert_eq!(seq.current(), Some(&5));

        seq.attach(7);
        assert_eq!(seq.current(), Some(&7));
        assert_eq!(seq.to_vec(), vec![5, 7]);

        seq.start();
        assert!(seq.advance());
        assert_eq!(seq.current(), Some(&7));

        assert_eq!(seq.remove_current(), Some(7));
        assert!(!seq.is_item());
        assert_eq!(seq.to_vec(), vec![5]);
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn arena_insert_before_a_middle_item() {
        let mut seq = ArenaSequence::new();
        for element in &[1, 2, 3] {
            seq.attach(*element);
        }
        seq.start();
        assert!(seq.advance());
        assert_eq!(seq.current(), Some(&2));

        seq.insert(9);
        assert_eq!(seq.current(), Some(&9));
        assert_eq!(seq.to_vec(), vec![1, 9, 2, 3]);
    }

    #[test]
    fn arena_removing_the_last_item_keeps_appends_working() {
        let mut seq = ArenaSequence::new();
        for element in &[1, 2, 3] {
            seq.attach(*element);
        }
        assert_eq!(seq.remove_current(), Some(3));
        assert!(!seq.is_item());

        seq.attach(4);
        assert_eq!(seq.to_vec(), vec![1, 2, 4]);
    }

    #[test]
    fn arena_clone_keeps_the_cursor() {
        let mut seq = ArenaSequence::new();
        for element in &[1, 2, 3] {
            seq.attach(*element);
        }
        seq.start();
        assert!(seq.advance());

        let mut copy = seq.clone();
        assert_eq!(copy.current(), Some(&2));

        assert_eq!(copy.remove_current(), Some(2));
        assert_eq!(copy.to_vec(), vec![1, 3]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }
}
