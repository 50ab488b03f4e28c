use crate::*;

/// First frontier cell that one of its revealed neighbors settles on its own:
/// a neighbor with no mines left to place makes it safe, a neighbor with
/// exactly as many mines left as hidden cells makes it a mine.
pub(super) fn find_trivial(board: &Board) -> Option<Hint> {
    let grid = board.grid();

    board.frontier().iter().find_map(|&cell| {
        let mut safe = false;
        let mut mine = false;

        for clue in grid.revealed_neighbors(cell) {
            let deficit = grid.mine_deficit(clue);
            safe |= deficit == 0;
            mine |= deficit == i16::from(grid.count_adjacent_hidden(clue));
        }

        match (safe, mine) {
            (true, _) => Some(Hint::new(cell, HintKind::Safe)),
            (false, true) => Some(Hint::new(cell, HintKind::Mine)),
            (false, false) => None,
        }
    })
}
