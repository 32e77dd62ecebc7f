use log::{debug, info};
use rand::Rng;

use super::board::{Outcome, StandardBoard};
use super::player::{Player, PlayerId};
use crate::error::MoveError;

/// Settings for a single game.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pick the starting player at random; otherwise player one starts.
    pub random_first_player: bool,
    /// Seed for the starting-player draw. Unset means seeded from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            random_first_player: true,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(PlayerId),
    Draw,
}

/// One game between two players: owns the board and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: StandardBoard,
    players: [Player; 2],
    current: PlayerId,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Start a game with a randomly chosen first player
    pub fn new<R: Rng + ?Sized>(one: Player, two: Player, rng: &mut R) -> Self {
        let first = if rng.random_bool(0.5) {
            PlayerId::One
        } else {
            PlayerId::Two
        };
        Self::with_first(one, two, first)
    }

    /// Start a game where `first` moves first
    pub fn with_first(one: Player, two: Player, first: PlayerId) -> Self {
        let state = GameState {
            board: StandardBoard::new(),
            players: [one, two],
            current: first,
            outcome: None,
        };
        info!(
            "new game: {} ({}) vs {} ({}), {} starts",
            state.players[0].name,
            state.players[0].marker,
            state.players[1].name,
            state.players[1].marker,
            state.current_player().name
        );
        state
    }

    pub fn board(&self) -> &StandardBoard {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Player to move, or the player who made the final move once the game
    /// is over.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.outcome {
            Some(GameOutcome::Winner(id)) => Some(self.player(id)),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play a raw move token (a 1-based column number) for the current player.
    pub fn play(&mut self, token: &str) -> Result<Option<GameOutcome>, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let column = self.board.parse_move(token)?;
        self.drop_piece(column)
    }

    /// Play a 0-based column for the current player.
    pub fn play_column(&mut self, column: usize) -> Result<Option<GameOutcome>, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        self.board.check_column(column)?;
        self.drop_piece(column)
    }

    fn drop_piece(&mut self, column: usize) -> Result<Option<GameOutcome>, MoveError> {
        let marker = self.current_player().marker;
        let (row, col) = self
            .board
            .apply_move(column, marker)
            .ok_or(MoveError::ColumnFull(column + 1))?;
        debug!(
            "{} ({}) dropped into column {}, landed on row {}",
            self.current_player().name,
            marker,
            col + 1,
            row + 1
        );

        self.outcome = match self.board.result() {
            Some(Outcome::Win(_)) => Some(GameOutcome::Winner(self.current)),
            Some(Outcome::Draw) => Some(GameOutcome::Draw),
            None => None,
        };

        match self.outcome {
            Some(GameOutcome::Winner(id)) => info!("{} wins", self.player(id).name),
            Some(GameOutcome::Draw) => info!("game drawn"),
            None => self.current = self.current.other(),
        }

        Ok(self.outcome)
    }
}
