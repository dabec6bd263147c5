//! Move driver for the board engine.
//!
//! `Game` owns a [`Board`] and implements the commit-or-revert swap protocol
//! plus the cascade resolution loop: clear matched tiles, scroll columns,
//! refill blanks, and rescan until the board is quiescent. After every
//! settled cascade it reshuffles the board if no legal move remains.

use crate::engine::{Board, BoardError, Indexes, Moves};

/// Manages the progression of a match-3 session over a single board.
///
/// # Examples
/// ```
/// use match3_engine::game::Game;
/// let mut game = Game::new_with_seed(8, 8, 42).unwrap();
/// // Reject a non-adjacent pair; the board is left untouched.
/// assert!(!game.try_move(0, 2));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Creates a game over a freshly generated board seeded from entropy.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Game { board: Board::new_generated(width, height)? })
    }

    /// Creates a game over a deterministically generated board.
    pub fn new_with_seed(width: usize, height: usize, seed: u64) -> Result<Self, BoardError> {
        Ok(Game { board: Board::new_generated_with_seed(width, height, seed)? })
    }

    /// Creates a game over an explicitly constructed board.
    pub fn from_board(board: Board) -> Self {
        Game { board }
    }

    /// Read-only access to the current board state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every legal match-producing swap on the current board.
    pub fn hints(&self) -> Moves {
        self.board.find_moves(true).1
    }

    /// Attempts a player swap of two cells, committing it only when it
    /// produces a match.
    ///
    /// The swap is applied tentatively; if no qualifying run passes through
    /// either endpoint it is reverted and `false` is returned, leaving the
    /// board exactly as before. On success the full cascade is resolved and,
    /// should the settled board have no legal move left, the board is
    /// reshuffled into a playable state before returning `true`.
    ///
    /// Out-of-range indices, equal indices, non-adjacent pairs and
    /// identical-kind pairs are all rejected with `false`.
    pub fn try_move(&mut self, lhs: usize, rhs: usize) -> bool {
        if !self.board.try_swap(lhs, rhs) {
            return false;
        }

        let (_, mut matches) = self.board.matches_at(lhs, true);
        let (_, more) = self.board.matches_at(rhs, true);
        matches.extend(more);

        if matches.is_empty() {
            // Revert the tentative swap.
            self.board.try_swap(rhs, lhs);
            return false;
        }

        self.resolve(matches);

        if !self.board.has_any_move() {
            self.board.shuffle();
        }

        true
    }

    /// Runs the clear/scroll/fill/rescan cascade until no new matches
    /// appear.
    ///
    /// Each iteration clears the current match set, compacts the affected
    /// columns, refills the blanks and rescans only the affected indices;
    /// any fresh matches feed the next iteration. Termination is natural:
    /// every round consumes matched tiles from a finite grid, so no depth
    /// counter is needed.
    pub fn resolve(&mut self, initial: Indexes) {
        let mut matches = initial;

        while !matches.is_empty() {
            self.board.clear_matches(&matches);
            let affected = self.board.scroll(&matches);
            self.board.fill_blanks(&affected);

            matches = Indexes::new();
            for &index in &affected {
                let (_, found) = self.board.matches_at(index, true);
                matches.extend(found);
            }
        }
    }
}
