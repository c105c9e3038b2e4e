//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The search owns no state between calls. It borrows the caller's position,
//! walks the tree with `apply`/`undo`, and hands the position back exactly as
//! it found it. Root moves are shuffled so that equal scores are broken
//! unpredictably.

mod constants;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sync::StopFlag;

use super::{Move, Position};
pub use constants::{CHECKMATE, DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH, STALEMATE};
use constants::ROOT_WINDOW;

/// Limits for one search call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchLimits {
    /// Plies to search below the root
    pub depth: u32,
}

impl SearchLimits {
    /// Search exactly `depth` plies
    #[must_use]
    pub fn depth(depth: u32) -> Self {
        SearchLimits { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

/// Outcome of a search
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// The best root move, if any root move was fully searched
    pub best_move: Option<Move>,
    /// Score of `best_move` from the side to move's point of view
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
}

struct SearchContext<'a> {
    position: &'a mut Position,
    stop: &'a StopFlag,
    nodes: u64,
}

impl SearchContext<'_> {
    /// Negamax over `moves`, which must be the legal moves of the current
    /// position. Returns the node score for the side to move and the move
    /// that achieved it.
    fn negamax(
        &mut self,
        moves: &[Move],
        depth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;
        let turn = self.position.side_to_move().sign();
        if depth == 0 || moves.is_empty() {
            return (turn * self.position.evaluate(), None);
        }

        let mut best_score = -CHECKMATE;
        let mut best_move = None;
        for mv in moves {
            if self.stop.is_stopped() {
                break;
            }

            self.position.apply(mv);
            let replies = self.position.get_legal_moves();
            let (child, _) = self.negamax(&replies, depth - 1, -beta, -alpha);
            self.position.undo();

            // A child cut short by a stop request has no trustworthy score
            if self.stop.is_stopped() {
                break;
            }

            let score = -child;
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(*mv);
            }
            if best_score > alpha {
                alpha = best_score;
            }
            if alpha >= beta {
                break;
            }
        }

        (best_score, best_move)
    }

    fn root(&mut self, moves: &[Move], depth: u32) -> (i32, Option<Move>) {
        let mut alpha = -ROOT_WINDOW;
        let mut best_score = -CHECKMATE;
        let mut best_move = None;

        for mv in moves {
            if self.stop.is_stopped() {
                break;
            }

            self.position.apply(mv);
            let replies = self.position.get_legal_moves();
            let (child, _) = self.negamax(&replies, depth - 1, -ROOT_WINDOW, -alpha);
            self.position.undo();

            if self.stop.is_stopped() {
                break;
            }

            let score = -child;
            debug!("root move {} scored {}", mv, score);
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(*mv);
            }
            alpha = alpha.max(best_score);
        }

        (best_score, best_move)
    }
}

/// Search `position` to `depth` plies and return the best of `legal_moves`.
///
/// `legal_moves` must be the list just generated for `position`. The depth
/// is searched as given; only [`GameConfig`](crate::GameConfig) caps it.
/// Returns `None` only if the list is empty.
pub fn find_best_move(position: &mut Position, legal_moves: &[Move], depth: u32) -> Option<Move> {
    let stop = StopFlag::new();
    search(position, legal_moves, SearchLimits::depth(depth), &stop).best_move
}

/// Search with a caller-owned stop flag, shuffling root moves with the thread RNG.
pub fn search(
    position: &mut Position,
    legal_moves: &[Move],
    limits: SearchLimits,
    stop: &StopFlag,
) -> SearchResult {
    search_with_rng(position, legal_moves, limits, stop, &mut rand::thread_rng())
}

/// Search with an explicit RNG for the root shuffle, so results can be reproduced.
///
/// The stop flag is polled between sibling moves at every node. A stopped
/// search returns the best root move whose subtree was searched completely.
pub fn search_with_rng<R: Rng + ?Sized>(
    position: &mut Position,
    legal_moves: &[Move],
    limits: SearchLimits,
    stop: &StopFlag,
    rng: &mut R,
) -> SearchResult {
    let mut root_moves = legal_moves.to_vec();
    root_moves.shuffle(rng);
    let root_scratch = position.scratch.clone();

    let mut ctx = SearchContext {
        position,
        stop,
        nodes: 0,
    };

    let (score, best_move) = if root_moves.is_empty() || limits.depth == 0 {
        // Nothing to search below the root: pick the first shuffled move
        let turn = ctx.position.side_to_move().sign();
        (turn * ctx.position.evaluate(), root_moves.first().copied())
    } else {
        ctx.root(&root_moves, limits.depth)
    };

    ctx.position.scratch = root_scratch;

    match best_move {
        Some(mv) => debug!(
            "depth {} best {} score {} nodes {}",
            limits.depth, mv, score, ctx.nodes
        ),
        None => debug!("depth {} found no move", limits.depth),
    }

    SearchResult {
        best_move,
        score,
        nodes: ctx.nodes,
    }
}

/// A uniformly random move from `legal_moves`, or `None` if it is empty.
#[must_use]
pub fn find_random_move(legal_moves: &[Move]) -> Option<Move> {
    legal_moves.choose(&mut rand::thread_rng()).copied()
}

/// Plain negamax score of `position` to `depth` plies, without pruning.
///
/// Visits every node, so it is only practical at small depths. Useful as a
/// reference for the alpha-beta search, which must agree with it at the root.
pub fn negamax_score(position: &mut Position, depth: u32) -> i32 {
    let moves = position.get_legal_moves();
    negamax_plain(position, &moves, depth)
}

fn negamax_plain(position: &mut Position, moves: &[Move], depth: u32) -> i32 {
    let turn = position.side_to_move().sign();
    if depth == 0 || moves.is_empty() {
        return turn * position.evaluate();
    }

    let mut best = -CHECKMATE;
    for mv in moves {
        position.apply(mv);
        let replies = position.get_legal_moves();
        let score = -negamax_plain(position, &replies, depth - 1);
        position.undo();
        best = best.max(score);
    }
    best
}
