//! Game session: one position, its legal moves, and the move log.

use log::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::job::SearchJob;
use crate::board::{find_random_move, search, Color, Move, MoveList, Position, SearchResult, Square};
use crate::sync::StopFlag;

/// Where the game stands after the last move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

/// Everything a display layer needs to know about a move just played.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    pub mv: Move,
    /// Log notation, e.g. `Nxf3+`
    pub notation: String,
    pub is_capture: bool,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
    /// The side now to move is in check
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
}

/// Drives one game on behalf of a presentation or transport layer.
///
/// The session owns the position and keeps the legal-move list in step
/// with it. Human moves are matched against that list by their squares;
/// engine moves come from a synchronous search or from a [`SearchJob`] the
/// session owns until its move is played or it is cancelled.
pub struct GameSession {
    config: GameConfig,
    position: Position,
    legal_moves: MoveList,
    move_log: Vec<Move>,
    search: Option<SearchJob>,
}

impl GameSession {
    /// Start a game from the standard initial position.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::from_position(config, Position::new())
    }

    /// Start a game from an arbitrary position, e.g. one built from FEN.
    #[must_use]
    pub fn from_position(config: GameConfig, mut position: Position) -> Self {
        let config = config.with_depth(config.depth);
        let legal_moves = position.get_legal_moves();
        debug!(
            "new session: white human {}, black human {}, depth {}",
            config.white_human, config.black_human, config.depth
        );
        GameSession {
            config,
            position,
            legal_moves,
            move_log: Vec::new(),
            search: None,
        }
    }

    /// Back to the initial position, keeping the configuration.
    ///
    /// An outstanding background search is cancelled and its move discarded.
    pub fn reset(&mut self) {
        self.cancel_engine_search();
        *self = GameSession::new(self.config);
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Legal moves for the side to move
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// Moves played so far, annotated for display
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// True while a background search is outstanding
    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.search.is_some()
    }

    /// Destinations of the legal moves of the piece on `from`.
    ///
    /// Empty unless that piece belongs to the side to move.
    #[must_use]
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        match self.position.piece_at(from) {
            Some((color, _)) if color == self.position.side_to_move() => self
                .legal_moves
                .iter()
                .filter(|m| m.from() == from)
                .map(|m| m.to())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Play the legal move from `from` to `to`, if there is one.
    ///
    /// Returns `None` and leaves the game untouched when the move is not
    /// legal, the game is over, or a background search is outstanding.
    pub fn try_move(&mut self, from: Square, to: Square) -> Option<MoveOutcome> {
        if self.is_thinking() {
            return None;
        }
        let mv = self
            .legal_moves
            .iter()
            .find(|m| m.connects(from, to))
            .copied()?;
        Some(self.play(mv))
    }

    /// Take back the last ply. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.is_thinking() || self.move_log.is_empty() {
            return false;
        }
        self.position.undo();
        self.move_log.pop();
        self.legal_moves = self.position.get_legal_moves();
        debug!("undo, {} plies remain", self.move_log.len());
        true
    }

    /// Whether the side to move is played by the engine and the game goes on.
    #[must_use]
    pub fn is_engine_turn(&self) -> bool {
        self.status() == GameStatus::Ongoing
            && !self.config.is_human(self.position.side_to_move())
    }

    /// Search on the calling thread and play the chosen move.
    pub fn play_engine_move(&mut self) -> Option<MoveOutcome> {
        if self.is_thinking() || self.legal_moves.is_empty() {
            return None;
        }
        let stop = StopFlag::new();
        let result = search(
            &mut self.position,
            &self.legal_moves,
            self.config.limits(),
            &stop,
        );
        self.play_search_result(result)
    }

    /// Start a background search for the side to move.
    ///
    /// Returns false if a search is already outstanding, the game is over,
    /// or the worker thread could not be started.
    pub fn start_engine_search(&mut self) -> bool {
        if self.is_thinking() || self.legal_moves.is_empty() {
            return false;
        }
        match SearchJob::spawn(self.position.clone(), self.config.limits()) {
            Ok(job) => {
                self.search = Some(job);
                true
            }
            Err(err) => {
                warn!("could not start search thread: {}", err);
                false
            }
        }
    }

    /// Play the background search's move if the worker is done, without blocking.
    ///
    /// Returns `None` while the search is still running or when none is outstanding.
    pub fn poll_engine_search(&mut self) -> Option<MoveOutcome> {
        if !self.search.as_ref()?.is_finished() {
            return None;
        }
        self.finish_engine_search()
    }

    /// Wait for the background search and play its move.
    pub fn finish_engine_search(&mut self) -> Option<MoveOutcome> {
        let result = self.search.take()?.wait();
        self.play_search_result(result)
    }

    /// Stop the background search, if any, and discard its result.
    pub fn cancel_engine_search(&mut self) {
        if let Some(job) = self.search.take() {
            job.cancel();
            let _ = job.wait();
            debug!("search cancelled");
        }
    }

    fn play_search_result(&mut self, result: SearchResult) -> Option<MoveOutcome> {
        let chosen = result
            .best_move
            .and_then(|best| self.legal_moves.iter().find(|m| **m == best).copied());
        let mv = match chosen {
            Some(mv) => {
                info!("engine plays {} (score {}, {} nodes)", mv, result.score, result.nodes);
                mv
            }
            None => {
                let mv = find_random_move(&self.legal_moves)?;
                info!("engine found no move, playing random {}", mv);
                mv
            }
        };
        Some(self.play(mv))
    }

    fn play(&mut self, mv: Move) -> MoveOutcome {
        self.position.apply(&mv);
        self.legal_moves = self.position.get_legal_moves();

        let check = self.position.in_check();
        let checkmate = self.position.is_checkmate();
        let stalemate = self.position.is_stalemate();
        let mut logged = mv;
        logged.annotate(check, checkmate, stalemate);
        self.move_log.push(logged);

        let outcome = MoveOutcome {
            mv: logged,
            notation: logged.notation(),
            is_capture: logged.is_capture(),
            is_promotion: logged.is_promotion(),
            is_en_passant: logged.is_en_passant(),
            is_castle: logged.is_castle(),
            check,
            checkmate,
            stalemate,
        };
        info!("{} played {}", mv.moved().0, outcome.notation);
        if let Some(message) = self.game_over_message() {
            info!("game over: {}", message);
        }
        outcome
    }

    /// Checkmate or stalemate, judged from the current legal-move list.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if !self.legal_moves.is_empty() {
            return GameStatus::Ongoing;
        }
        if self.position.in_check() {
            GameStatus::Checkmate {
                winner: self.position.side_to_move().opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// "White wins by checkmate", "Draw by stalemate", or `None` while the game goes on.
    #[must_use]
    pub fn game_over_message(&self) -> Option<String> {
        match self.status() {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate { winner } => Some(format!("{winner} wins by checkmate")),
            GameStatus::Stalemate => Some("Draw by stalemate".to_string()),
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        if let Some(job) = &self.search {
            job.cancel();
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new(GameConfig::default())
    }
}
