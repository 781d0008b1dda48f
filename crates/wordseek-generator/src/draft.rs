use wordseek_core::{Letter, LetterGrid, Position, Word};

use crate::Placement;

/// A grid under construction, where cells may still be empty.
#[derive(Debug, Clone)]
pub(crate) struct DraftGrid {
    size: usize,
    cells: Vec<Option<Letter>>,
}

impl DraftGrid {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row() * self.size + pos.col()
    }

    /// Returns `true` if `word` can be written along `placement`.
    ///
    /// Every cell must be inside the grid and either empty or already holding
    /// the letter the word needs there.
    pub(crate) fn fits(&self, word: &Word, placement: &Placement) -> bool {
        placement.len() == word.len()
            && placement.fits_within(self.size)
            && placement
                .positions()
                .zip(word.letters())
                .all(|(pos, letter)| {
                    self.cells[self.index(pos)].is_none_or(|existing| existing == letter)
                })
    }

    /// Writes `word` along `placement`, returning how many cells were shared
    /// with earlier words.
    ///
    /// The caller must have checked [`DraftGrid::fits`].
    pub(crate) fn write(&mut self, word: &Word, placement: &Placement) -> usize {
        debug_assert!(self.fits(word, placement));
        let mut shared = 0;
        for (pos, letter) in placement.positions().zip(word.letters()) {
            let index = self.index(pos);
            if self.cells[index].is_some() {
                shared += 1;
            }
            self.cells[index] = Some(letter);
        }
        shared
    }

    /// Returns the number of cells still empty.
    pub(crate) fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Completes the grid, asking `fill` for a letter for every empty cell in
    /// row-major order.
    pub(crate) fn fill_with<F>(self, mut fill: F) -> LetterGrid
    where
        F: FnMut() -> Letter,
    {
        LetterGrid::from_fn(self.size, |pos| {
            self.cells[self.index(pos)].unwrap_or_else(&mut fill)
        })
    }
}

#[cfg(test)]
mod tests {
    use wordseek_core::Direction;

    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn test_fits_on_empty_grid_requires_bounds() {
        let draft = DraftGrid::new(4);
        let inside = Placement::new(Position::new(0, 0), Direction::Right, 4);
        let outside = Placement::new(Position::new(0, 1), Direction::Right, 4);
        assert!(draft.fits(&word("LION"), &inside));
        assert!(!draft.fits(&word("LION"), &outside));
    }

    #[test]
    fn test_crossing_requires_matching_letter() {
        let mut draft = DraftGrid::new(5);
        let cat = Placement::new(Position::new(0, 0), Direction::Right, 3);
        assert_eq!(draft.write(&word("CAT"), &cat), 0);

        // "ANT" going down shares the A at (0, 1).
        let ant = Placement::new(Position::new(0, 1), Direction::Down, 3);
        assert!(draft.fits(&word("ANT"), &ant));
        assert_eq!(draft.write(&word("ANT"), &ant), 1);

        // "OWL" going down would need an O where the A is.
        let owl = Placement::new(Position::new(0, 1), Direction::Down, 3);
        assert!(!draft.fits(&word("OWL"), &owl));

        assert_eq!(draft.empty_count(), 25 - 5);
    }

    #[test]
    fn test_fill_keeps_written_letters() {
        let mut draft = DraftGrid::new(3);
        let placement = Placement::new(Position::new(2, 0), Direction::UpRight, 3);
        draft.write(&word("ZIP"), &placement);

        let grid = draft.fill_with(|| Letter::A);
        assert_eq!(grid.to_string(), "A A P\nA I A\nZ A A");
    }
}
