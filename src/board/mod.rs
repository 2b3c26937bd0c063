//! The board: an ordered, in-memory collection of ideas
//!
//! The board owns the id allocator and the display order. It lives as a plain
//! value inside the TUI application; there is no global store and nothing
//! here persists across runs.

mod idea;

use chrono::{DateTime, Utc};

pub use idea::{Idea, IdeaId, PLACEHOLDER_CONTENT, PLACEHOLDER_TITLE};

/// Orderings the board can be rearranged into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    /// Lexicographic by title, A first
    TitleAsc,
    /// Least recently active first
    UpdatedAsc,
    /// Most recently active first
    UpdatedDesc,
}

impl SortCriterion {
    /// Short label for the status bar
    pub fn label(&self) -> &'static str {
        match self {
            SortCriterion::TitleAsc => "title ↑",
            SortCriterion::UpdatedAsc => "updated ↑",
            SortCriterion::UpdatedDesc => "updated ↓",
        }
    }
}

/// Ordered idea store with add, remove, update, and sort operations
#[derive(Debug, Default)]
pub struct Board {
    ideas: Vec<Idea>,
    /// Next id to allocate. Never decremented, so ids are never reused
    /// within a session.
    next_id: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh placeholder idea and return its id
    pub fn add(&mut self) -> IdeaId {
        self.add_at(Utc::now())
    }

    /// Append a fresh placeholder idea created at `created_at`.
    ///
    /// Seeded boards use this to spread creation times out; interactive
    /// adds go through [`Board::add`].
    pub fn add_at(&mut self, created_at: DateTime<Utc>) -> IdeaId {
        let id = IdeaId(self.next_id);
        self.next_id += 1;
        self.ideas.push(Idea::new(id, created_at));
        tracing::debug!("idea {} added ({} on board)", id, self.ideas.len());
        id
    }

    /// Remove the idea with `id`, preserving the relative order of the rest.
    ///
    /// Returns whether anything was removed; an unknown id is a no-op.
    pub fn remove(&mut self, id: IdeaId) -> bool {
        match self.ideas.iter().position(|idea| idea.id == id) {
            Some(index) => {
                self.ideas.remove(index);
                tracing::debug!("idea {} removed ({} on board)", id, self.ideas.len());
                true
            }
            None => {
                tracing::debug!("remove for unknown idea {} ignored", id);
                false
            }
        }
    }

    /// Replace the stored idea matching `idea.id` with the given value.
    /// The stored creation time survives the replacement; it is set once at
    /// allocation and an edit cannot move it.
    ///
    /// Returns whether a replacement happened; an unknown id is a no-op and
    /// the board keeps its current contents.
    pub fn update(&mut self, mut idea: Idea) -> bool {
        match self.ideas.iter_mut().find(|existing| existing.id == idea.id) {
            Some(slot) => {
                idea.created_at = slot.created_at;
                *slot = idea;
                true
            }
            None => {
                tracing::debug!("update for unknown idea {} ignored", idea.id);
                false
            }
        }
    }

    /// Reorder the whole board in place.
    ///
    /// `sort_by` is stable, so ideas that compare equal keep their previous
    /// relative order and re-sorting by the same criterion changes nothing.
    pub fn sort(&mut self, criterion: SortCriterion) {
        match criterion {
            SortCriterion::TitleAsc => self.ideas.sort_by(|a, b| a.title.cmp(&b.title)),
            SortCriterion::UpdatedAsc => self
                .ideas
                .sort_by(|a, b| a.last_activity().cmp(&b.last_activity())),
            SortCriterion::UpdatedDesc => self
                .ideas
                .sort_by(|a, b| b.last_activity().cmp(&a.last_activity())),
        }
        tracing::debug!("board sorted: {}", criterion.label());
    }

    /// Ideas in current display order
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    /// Look up an idea by id
    pub fn get(&self, id: IdeaId) -> Option<&Idea> {
        self.ideas.iter().find(|idea| idea.id == id)
    }

    /// Current display position of an idea, if it is still on the board
    pub fn position(&self, id: IdeaId) -> Option<usize> {
        self.ideas.iter().position(|idea| idea.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    /// Replace an idea's text the way a committed edit would
    fn commit_edit(board: &mut Board, id: IdeaId, title: &str, content: &str, minutes_later: i64) {
        let mut idea = board.get(id).expect("idea exists").clone();
        idea.title = title.to_string();
        idea.content = content.to_string();
        idea.content_length = content.chars().count();
        idea.updated_at = Some(idea.created_at + Duration::minutes(minutes_later));
        assert!(board.update(idea));
    }

    #[test]
    fn test_add_appends_placeholder_idea() {
        let mut board = Board::new();
        assert!(board.is_empty());

        let id = board.add();
        assert_eq!(board.len(), 1);

        let idea = board.get(id).unwrap();
        assert_eq!(idea.title, PLACEHOLDER_TITLE);
        assert_eq!(idea.content, PLACEHOLDER_CONTENT);
        assert_eq!(idea.content_length, 0);
        assert!(idea.updated_at.is_none());
    }

    #[test]
    fn test_add_allocates_distinct_ids() {
        let mut board = Board::new();
        let a = board.add();
        let b = board.add();
        let c = board.add();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut board = Board::new();
        let a = board.add();
        board.remove(a);
        let b = board.add();
        assert_ne!(a, b);
    }

    #[test]
    fn test_n_adds_then_remove_leaves_n_minus_one() {
        let mut board = Board::new();
        let ids: Vec<_> = (0..5).map(|_| board.add()).collect();
        assert_eq!(board.len(), 5);

        assert!(board.remove(ids[2]));
        assert_eq!(board.len(), 4);
        assert!(board.get(ids[2]).is_none());
        // The others are untouched and keep their order
        let remaining: Vec<_> = board.ideas().iter().map(|i| i.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[1], ids[3], ids[4]]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut board = Board::new();
        board.add();
        board.add();
        let before: Vec<_> = board.ideas().to_vec();

        assert!(!board.remove(IdeaId(999)));
        assert_eq!(board.ideas(), &before[..]);
    }

    #[test]
    fn test_update_replaces_matching_idea() {
        let mut board = Board::new();
        let id = board.add();
        board.add();

        commit_edit(&mut board, id, "Groceries", "milk, eggs", 5);

        let idea = board.get(id).unwrap();
        assert_eq!(idea.title, "Groceries");
        assert_eq!(idea.content, "milk, eggs");
        assert_eq!(idea.content_length, 10);
        assert!(idea.updated_at.is_some());
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut board = Board::new();
        let id = board.add();
        let before = board.get(id).unwrap().clone();

        let mut stray = before.clone();
        stray.id = IdeaId(999);
        stray.title = "Stray".to_string();

        assert!(!board.update(stray));
        assert_eq!(board.get(id).unwrap(), &before);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_update_keeps_stored_creation_time() {
        let mut board = Board::new();
        let id = board.add();
        let created = board.get(id).unwrap().created_at;

        // A caller cannot smuggle a new creation time through an edit
        let mut edited = board.get(id).unwrap().clone();
        edited.title = "Edited".to_string();
        edited.created_at = created + Duration::hours(3);
        assert!(board.update(edited));

        let stored = board.get(id).unwrap();
        assert_eq!(stored.created_at, created);
        assert_eq!(stored.title, "Edited");
    }

    #[test]
    fn test_sort_by_title() {
        let mut board = Board::new();
        let a = board.add();
        let b = board.add();
        let c = board.add();
        commit_edit(&mut board, a, "Cherry", "", 1);
        commit_edit(&mut board, b, "Apple", "", 2);
        commit_edit(&mut board, c, "Banana", "", 3);

        board.sort(SortCriterion::TitleAsc);

        let titles: Vec<_> = board.ideas().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut board = Board::new();
        let a = board.add();
        let b = board.add();
        commit_edit(&mut board, a, "Zebra", "", 1);
        commit_edit(&mut board, b, "Aardvark", "", 2);

        board.sort(SortCriterion::TitleAsc);
        let once: Vec<_> = board.ideas().to_vec();
        board.sort(SortCriterion::TitleAsc);
        assert_eq!(board.ideas(), &once[..]);
    }

    #[test]
    fn test_updated_sorts_reverse_each_other() {
        let mut board = Board::new();
        let a = board.add();
        let b = board.add();
        let c = board.add();
        commit_edit(&mut board, a, "First", "", 30);
        commit_edit(&mut board, b, "Second", "", 10);
        commit_edit(&mut board, c, "Third", "", 20);

        board.sort(SortCriterion::UpdatedAsc);
        let ascending: Vec<_> = board.ideas().iter().map(|i| i.id).collect();

        board.sort(SortCriterion::UpdatedDesc);
        let descending: Vec<_> = board.ideas().iter().map(|i| i.id).collect();

        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn test_sort_falls_back_to_created_at_when_never_updated() {
        let mut board = Board::new();
        let a = board.add();
        // b predates a by an hour, so it sorts first despite being added later
        let b = board.add_at(Utc::now() - Duration::hours(1));

        board.sort(SortCriterion::UpdatedAsc);
        let order: Vec<_> = board.ideas().iter().map(|i| i.id).collect();
        assert_eq!(order, vec![b, a]);
    }

    #[test]
    fn test_sort_ties_keep_prior_order() {
        let mut board = Board::new();
        let a = board.add();
        let b = board.add();
        let c = board.add();
        // Same title everywhere: a stable sort must not shuffle anything
        commit_edit(&mut board, a, "Same", "one", 1);
        commit_edit(&mut board, b, "Same", "two", 2);
        commit_edit(&mut board, c, "Same", "three", 3);

        board.sort(SortCriterion::TitleAsc);
        let order: Vec<_> = board.ideas().iter().map(|i| i.id).collect();
        assert_eq!(order, vec![a, b, c]);
    }

    #[test]
    fn test_position_tracks_sort() {
        let mut board = Board::new();
        let a = board.add();
        let b = board.add();
        commit_edit(&mut board, a, "Zulu", "", 1);
        commit_edit(&mut board, b, "Alpha", "", 2);

        assert_eq!(board.position(a), Some(0));
        board.sort(SortCriterion::TitleAsc);
        assert_eq!(board.position(a), Some(1));
        assert_eq!(board.position(b), Some(0));
    }

    #[test]
    fn test_empty_board_sort_is_noop() {
        let mut board = Board::new();
        board.sort(SortCriterion::UpdatedDesc);
        assert!(board.is_empty());
    }

    #[test]
    fn test_fresh_ideas_sort_by_creation_time() {
        let mut board = Board::new();
        // Pin distinct creation instants; two adds can land in the same tick
        let base = Utc::now();
        let a = board.add_at(base);
        let b = board.add_at(base + Duration::seconds(1));

        board.sort(SortCriterion::UpdatedDesc);
        let order: Vec<_> = board.ideas().iter().map(|i| i.id).collect();
        assert_eq!(order, vec![b, a]);
    }
}
