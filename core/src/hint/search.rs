use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashMap;
use ndarray::Array2;
use smallvec::SmallVec;

use crate::*;

/// Outcomes tallied for one cell across the leaves its search reached.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Tally {
    total: u32,
    safe: u32,
}

/// Mutable state shared by every visit of one search. Each visit undoes its
/// own changes to `delta`, `slots` and the path before returning.
struct SearchContext<'a> {
    grid: &'a Grid,
    max_depth: usize,
    /// Mines tentatively placed around each revealed cell, as a negative offset.
    delta: Array2<i16>,
    /// Hidden neighbors of each revealed cell not yet decided on the path.
    slots: Array2<i16>,
    on_path: Array2<bool>,
    path: Vec<Coord2>,
    visited: Array2<bool>,
    tallies: BTreeMap<Coord2, Tally>,
}

impl<'a> SearchContext<'a> {
    fn new(grid: &'a Grid, max_depth: usize) -> Self {
        let shape = grid.size().to_nd_index();
        let slots = Array2::from_shape_fn((shape[0], shape[1]), |(x, y)| {
            i16::from(grid.count_adjacent_hidden((x as Coord, y as Coord)))
        });
        Self {
            grid,
            max_depth,
            delta: Array2::zeros(shape),
            slots,
            on_path: Array2::default(shape),
            path: Vec::new(),
            visited: Array2::default(shape),
            tallies: BTreeMap::new(),
        }
    }

    fn is_visited(&self, coords: Coord2) -> bool {
        self.visited[coords.to_nd_index()]
    }

    fn record(&mut self, coords: Coord2, safe: bool) {
        let tally = self.tallies.entry(coords).or_default();
        tally.total += 1;
        tally.safe += u32::from(safe);
    }

    /// Decides `node` as a mine and as safe where each is still consistent,
    /// following one nearest undecided cell deeper in each branch. Returns
    /// whether any branch reached a leaf.
    fn visit(&mut self, node: Coord2, depth: usize) -> bool {
        if depth > self.max_depth {
            return true;
        }

        let grid = self.grid;
        self.on_path[node.to_nd_index()] = true;
        self.path.push(node);
        self.visited[node.to_nd_index()] = true;

        let clues: SmallVec<[Coord2; 8]> = grid.revealed_neighbors(node).collect();
        let next = self.next_candidate();

        let mut trivial_safe = false;
        let mut trivial_mine = false;
        let mut can_be_mine = true;
        let mut can_be_safe = true;

        for &clue in &clues {
            let idx = clue.to_nd_index();
            let deficit = grid.mine_deficit(clue) + self.delta[idx];
            trivial_safe |= deficit == 0;
            trivial_mine |= deficit == self.slots[idx] && self.slots[idx] == 1;

            self.slots[idx] -= 1;
            can_be_mine &= deficit >= 1;
            can_be_safe &= deficit <= self.slots[idx];
        }

        let mut reached_leaf = false;
        let mut at_tail = true;

        if can_be_mine {
            for &clue in &clues {
                self.delta[clue.to_nd_index()] -= 1;
            }
            if let Some(next) = next {
                at_tail = false;
                if self.visit(next, depth + 1) {
                    reached_leaf = true;
                    self.record(node, false);
                }
            }
            for &clue in &clues {
                self.delta[clue.to_nd_index()] += 1;
            }
        }

        if can_be_safe {
            if let Some(next) = next {
                at_tail = false;
                if self.visit(next, depth + 1) {
                    reached_leaf = true;
                    self.record(node, true);
                }
            }
        }

        for &clue in &clues {
            self.slots[clue.to_nd_index()] += 1;
        }
        self.path.pop();
        self.on_path[node.to_nd_index()] = false;

        if at_tail && (trivial_mine ^ trivial_safe) {
            reached_leaf = true;
            self.record(node, trivial_safe);
        }

        reached_leaf
    }

    /// Nearest hidden cell, off the path, that shares a revealed neighbor with
    /// some cell on the path. Distance is Manhattan to the closest path cell;
    /// ties go to the smaller coordinates.
    fn next_candidate(&self) -> Option<Coord2> {
        let grid = self.grid;
        let mut distances: HashMap<Coord2, u16> = HashMap::new();

        for &cell in &self.path {
            for clue in grid.revealed_neighbors(cell) {
                for candidate in grid.hidden_neighbors(clue) {
                    if self.on_path[candidate.to_nd_index()] {
                        continue;
                    }
                    let distance = manhattan(cell, candidate);
                    distances
                        .entry(candidate)
                        .and_modify(|d| *d = (*d).min(distance))
                        .or_insert(distance);
                }
            }
        }

        distances
            .into_iter()
            .min_by_key(|&(coords, distance)| (distance, coords))
            .map(|(coords, _)| coords)
    }
}

/// Searches each connected part of the frontier in turn. The first cell whose
/// tallied outcomes all agree is returned as certain; otherwise the cells with
/// the best safe-to-total ratio seen so far, compared exactly.
pub(super) fn search(board: &Board, config: SolverConfig) -> Vec<Hint> {
    let mut ctx = SearchContext::new(board.grid(), config.max_depth);
    // best (safe, total) ratio seen so far
    let mut best = (0u64, 1u64);
    let mut hints: Vec<Hint> = Vec::new();

    for &start in board.frontier() {
        if ctx.is_visited(start) {
            continue;
        }

        ctx.visit(start, 0);

        for (coords, tally) in core::mem::take(&mut ctx.tallies) {
            if tally.safe == tally.total {
                return vec![Hint::new(coords, HintKind::Safe)];
            }
            if tally.safe == 0 {
                return vec![Hint::new(coords, HintKind::Mine)];
            }

            let (safe, total) = (u64::from(tally.safe), u64::from(tally.total));
            let lhs = safe * best.1;
            let rhs = best.0 * total;
            if lhs > rhs {
                best = (safe, total);
                hints.clear();
                hints.push(Hint::new(coords, HintKind::HighProbability));
            } else if lhs == rhs && !hints.iter().any(|hint| hint.coords() == coords) {
                hints.push(Hint::new(coords, HintKind::HighProbability));
            }
        }
    }

    hints
}
