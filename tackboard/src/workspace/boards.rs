//! Boards → lists → cards

use crate::error::{Result, TackboardError};
use crate::store::{Catalog, Entry, OrderedStore, Record};
use crate::types::{Board, BoardId, Card, CardId, EntityKind, List, ListId};
use serde::Serialize;

/// A board with its lists, each with its cards, in order
#[derive(Debug, Serialize)]
pub struct BoardView<'a> {
    #[serde(flatten)]
    pub board: Record<'a, Board>,
    pub lists: Vec<ListView<'a>>,
}

/// A list with its cards, in order
#[derive(Debug, Serialize)]
pub struct ListView<'a> {
    #[serde(flatten)]
    pub list: &'a Entry<List>,
    pub cards: Vec<&'a Entry<Card>>,
}

/// What a board deletion took with it
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BoardRemoval {
    pub lists: usize,
    pub cards: usize,
}

/// The two-level board hierarchy. A list is ordered within its board and
/// is itself the container its cards are ordered in.
#[derive(Debug, Default)]
pub struct BoardTree {
    boards: Catalog<Board>,
    lists: OrderedStore<List>,
    cards: OrderedStore<Card>,
}

impl BoardTree {
    pub fn new() -> Self {
        Self::default()
    }

    // Boards

    pub fn add_board(&mut self, board: Board) -> BoardId {
        let id = self.boards.insert(board);
        self.lists.open(id);
        id
    }

    pub fn board(&self, id: BoardId) -> Result<Record<'_, Board>> {
        self.boards.record(id)
    }

    pub fn board_mut(&mut self, id: BoardId) -> Result<&mut Board> {
        self.boards.get_mut(id)
    }

    pub fn boards(&self) -> Vec<Record<'_, Board>> {
        self.boards.records().collect()
    }

    /// Nested snapshot of one board
    pub fn view(&self, id: BoardId) -> Result<BoardView<'_>> {
        let board = self.boards.record(id)?;
        let lists = self
            .lists
            .children(id)?
            .into_iter()
            .map(|list| {
                Ok(ListView {
                    cards: self.cards.children(list.id)?,
                    list,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(BoardView { board, lists })
    }

    /// Delete a board, its lists and their cards
    pub fn delete_board(&mut self, id: BoardId) -> Result<BoardRemoval> {
        if !self.boards.contains(id) {
            return Err(TackboardError::not_found(EntityKind::Board, id.get()));
        }

        let mut removal = BoardRemoval::default();
        for list in self.lists.close(id)? {
            removal.lists += 1;
            removal.cards += self.cards.close(list.id)?.len();
        }
        self.boards.remove(id)?;

        tracing::debug!(?id, lists = removal.lists, cards = removal.cards, "board removed");
        Ok(removal)
    }

    // Lists

    pub fn add_list(&mut self, board: BoardId, list: List) -> Result<&Entry<List>> {
        let id = self.lists.insert(board, list)?.id;
        self.cards.open(id);
        self.lists.get(id)
    }

    pub fn list(&self, id: ListId) -> Result<&Entry<List>> {
        self.lists.get(id)
    }

    pub fn list_mut(&mut self, id: ListId) -> Result<&mut List> {
        self.lists.record_mut(id)
    }

    pub fn lists(&self, board: BoardId) -> Result<Vec<&Entry<List>>> {
        self.lists.children(board)
    }

    pub fn move_list(&mut self, id: ListId, board: BoardId, position: usize) -> Result<&Entry<List>> {
        self.lists.move_to(id, board, position)
    }

    /// Delete a list and its cards, closing the gap on its board.
    /// Returns the removed list and the number of cards it held.
    pub fn delete_list(&mut self, id: ListId) -> Result<(Entry<List>, usize)> {
        self.lists.get(id)?;
        let cards = self.cards.close(id)?.len();
        let list = self.lists.remove(id)?;
        Ok((list, cards))
    }

    // Cards

    pub fn add_card(&mut self, list: ListId, card: Card) -> Result<&Entry<Card>> {
        self.cards.insert(list, card)
    }

    pub fn card(&self, id: CardId) -> Result<&Entry<Card>> {
        self.cards.get(id)
    }

    pub fn card_mut(&mut self, id: CardId) -> Result<&mut Card> {
        self.cards.record_mut(id)
    }

    pub fn cards(&self, list: ListId) -> Result<Vec<&Entry<Card>>> {
        self.cards.children(list)
    }

    pub fn move_card(&mut self, id: CardId, list: ListId, position: usize) -> Result<&Entry<Card>> {
        self.cards.move_to(id, list, position)
    }

    pub fn delete_card(&mut self, id: CardId) -> Result<Entry<Card>> {
        self.cards.remove(id)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> (BoardTree, BoardId) {
        let mut tree = BoardTree::new();
        let board = tree.add_board(Board::new("Sprint"));
        (tree, board)
    }

    #[test]
    fn test_lists_are_ordered_on_board() {
        let (mut tree, board) = tree();
        tree.add_list(board, List::new("Todo")).unwrap();
        let doing = tree.add_list(board, List::new("Doing")).unwrap().id;
        tree.add_list(board, List::new("Done")).unwrap();

        tree.move_list(doing, board, 0).unwrap();

        let titles: Vec<_> = tree
            .lists(board)
            .unwrap()
            .iter()
            .map(|l| (l.record.title.as_str(), l.position))
            .collect();
        assert_eq!(titles, vec![("Doing", 0), ("Todo", 1), ("Done", 2)]);
    }

    #[test]
    fn test_delete_list_reindexes_board_and_drops_cards() {
        let (mut tree, board) = tree();
        let a = tree.add_list(board, List::new("A")).unwrap().id;
        let b = tree.add_list(board, List::new("B")).unwrap().id;
        tree.add_list(board, List::new("C")).unwrap();
        tree.add_card(b, Card::new("one")).unwrap();
        tree.add_card(b, Card::new("two")).unwrap();
        tree.add_card(a, Card::new("kept")).unwrap();

        let (removed, cards) = tree.delete_list(b).unwrap();
        assert_eq!(removed.record.title, "B");
        assert_eq!(cards, 2);
        assert_eq!(tree.card_count(), 1);

        let positions: Vec<_> = tree.lists(board).unwrap().iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![0, 1]);
        assert!(tree.cards(b).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_board_cascades() {
        let (mut tree, board) = tree();
        let other = tree.add_board(Board::new("Other"));
        let a = tree.add_list(board, List::new("A")).unwrap().id;
        let b = tree.add_list(board, List::new("B")).unwrap().id;
        let c = tree.add_list(other, List::new("C")).unwrap().id;
        tree.add_card(a, Card::new("1")).unwrap();
        tree.add_card(b, Card::new("2")).unwrap();
        tree.add_card(b, Card::new("3")).unwrap();
        tree.add_card(c, Card::new("4")).unwrap();

        let removal = tree.delete_board(board).unwrap();
        assert_eq!(removal, BoardRemoval { lists: 2, cards: 3 });
        assert_eq!(tree.card_count(), 1);
        assert!(tree.board(board).unwrap_err().is_not_found());
        assert!(tree.list(a).unwrap_err().is_not_found());
        assert!(tree.delete_board(board).unwrap_err().is_not_found());

        let fresh = tree.add_board(Board::new("Fresh"));
        assert_eq!(fresh.get(), 3);
    }

    #[test]
    fn test_move_card_between_lists() {
        let (mut tree, board) = tree();
        let l1 = tree.add_list(board, List::new("L1")).unwrap().id;
        let l2 = tree.add_list(board, List::new("L2")).unwrap().id;
        tree.add_card(l1, Card::new("A")).unwrap();
        let b = tree.add_card(l1, Card::new("B")).unwrap().id;
        tree.add_card(l1, Card::new("C")).unwrap();

        let moved = tree.move_card(b, l2, 0).unwrap();
        assert_eq!((moved.container, moved.position), (l2, 0));

        let l1_cards: Vec<_> = tree
            .cards(l1)
            .unwrap()
            .iter()
            .map(|c| (c.record.title.as_str(), c.position))
            .collect();
        assert_eq!(l1_cards, vec![("A", 0), ("C", 1)]);
    }

    #[test]
    fn test_view_nests_lists_and_cards() {
        let (mut tree, board) = tree();
        let todo = tree.add_list(board, List::new("Todo")).unwrap().id;
        tree.add_list(board, List::new("Done")).unwrap();
        tree.add_card(todo, Card::new("Write docs")).unwrap();

        let json = serde_json::to_value(tree.view(board).unwrap()).unwrap();
        assert_eq!(json["title"], "Sprint");
        assert_eq!(json["lists"][0]["title"], "Todo");
        assert_eq!(json["lists"][0]["board_id"], 1);
        assert_eq!(json["lists"][0]["cards"][0]["title"], "Write docs");
        assert_eq!(json["lists"][0]["cards"][0]["list_id"], todo.get());
        assert_eq!(json["lists"][1]["cards"], serde_json::json!([]));
    }
}
