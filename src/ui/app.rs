use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{
    validate_name, GameConfig, GameOutcome, GameState, MarkerPool, Player, PlayerId, COLS,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for a key press before redrawing.
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { tick_rate_ms: 100 }
    }
}

/// What the setup screens are currently asking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum SetupStep {
    Name,
    Marker { name: String },
}

/// Name and marker entry for both seats.
#[derive(Debug, Clone)]
pub(super) struct Setup {
    pub(super) seat: PlayerId,
    pub(super) step: SetupStep,
    pub(super) pool: MarkerPool,
    pub(super) first: Option<Player>,
}

impl Setup {
    fn new() -> Self {
        Setup {
            seat: PlayerId::One,
            step: SetupStep::Name,
            pool: MarkerPool::new(),
            first: None,
        }
    }
}

pub(super) enum Screen {
    Setup(Setup),
    /// A game in progress, or finished and waiting on the replay prompt.
    Playing(GameState),
}

pub struct App {
    screen: Screen,
    input: String,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    max_name_length: usize,
    game_config: GameConfig,
    tick_rate: Duration,
    rng: StdRng,
}

impl App {
    pub fn new(config: &AppConfig, rng: StdRng) -> Self {
        App {
            screen: Screen::Setup(Setup::new()),
            input: String::new(),
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
            max_name_length: config.players.max_name_length,
            game_config: config.game.clone(),
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            rng,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        let finished = matches!(&self.screen, Screen::Playing(state) if state.is_terminal());
        match self.screen {
            Screen::Setup(_) => self.handle_setup_key(key),
            Screen::Playing(_) if finished => self.handle_replay_key(key),
            Screen::Playing(_) => self.handle_game_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                self.message = None;
                self.input.push(c);
            }
            KeyCode::Enter => self.submit_setup(),
            _ => {}
        }
    }

    fn submit_setup(&mut self) {
        let input = std::mem::take(&mut self.input);
        let Screen::Setup(setup) = &mut self.screen else {
            return;
        };

        match std::mem::replace(&mut setup.step, SetupStep::Name) {
            SetupStep::Name => match validate_name(&input, self.max_name_length) {
                Ok(()) => {
                    setup.step = SetupStep::Marker { name: input };
                    self.message = None;
                }
                Err(err) => {
                    log::debug!("rejected name: {err}");
                    self.message = Some("Invalid Name!".to_string());
                }
            },
            SetupStep::Marker { name } => match setup.pool.pick(&input) {
                Ok(marker) => {
                    let player = Player::new(name, marker);
                    self.message = None;
                    if let Some(first) = setup.first.take() {
                        self.start_game(first, player);
                    } else {
                        setup.first = Some(player);
                        setup.seat = setup.seat.other();
                    }
                }
                Err(err) => {
                    log::debug!("rejected marker: {err}");
                    setup.step = SetupStep::Marker { name };
                    self.message = Some("Invalid Marker!".to_string());
                }
            },
        }
    }

    fn start_game(&mut self, one: Player, two: Player) {
        let state = if self.game_config.random_first_player {
            GameState::new(one, two, &mut self.rng)
        } else {
            GameState::with_first(one, two, PlayerId::One)
        };
        self.selected_column = COLS / 2;
        self.screen = Screen::Playing(state);
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let column = self.selected_column;
                self.play(|state| state.play_column(column));
            }
            KeyCode::Char(c) => {
                let token = c.to_string();
                self.play(|state| state.play(&token));
            }
            _ => {}
        }
    }

    /// Run one move against the current game and report the result
    fn play<F>(&mut self, mv: F)
    where
        F: FnOnce(&mut GameState) -> Result<Option<GameOutcome>, MoveError>,
    {
        let Screen::Playing(state) = &mut self.screen else {
            return;
        };

        match mv(state) {
            Ok(Some(GameOutcome::Winner(_))) => {
                let winner = state.current_player();
                self.message = Some(format!("{} ({}) Won!", winner.name, winner.marker));
            }
            Ok(Some(GameOutcome::Draw)) => {
                self.message = Some("It's a Draw!".to_string());
            }
            Ok(None) => {}
            Err(err) => {
                self.message = Some(format!("Invalid Move! {err}"));
            }
        }
    }

    fn handle_replay_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                log::info!("starting a new game");
                self.screen = Screen::Setup(Setup::new());
                self.input.clear();
                self.message = None;
            }
            _ => self.should_quit = true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.screen,
            &self.input,
            self.selected_column,
            &self.message,
            self.max_name_length,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Marker};
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let mut config = AppConfig::default();
        config.game.random_first_player = false;
        App::new(&config, StdRng::seed_from_u64(1))
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        app.handle_key(KeyEvent::from(KeyCode::Enter));
    }

    fn set_up_players(app: &mut App) {
        type_line(app, "Alice");
        type_line(app, "red");
        type_line(app, "Bob");
        type_line(app, "yellow");
    }

    fn game(app: &App) -> &GameState {
        match &app.screen {
            Screen::Playing(state) => state,
            Screen::Setup(_) => panic!("still in setup"),
        }
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 32)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_setup_creates_game() {
        let mut app = app();
        set_up_players(&mut app);

        let state = game(&app);
        assert_eq!(state.players()[0], Player::new("Alice", Marker::Red));
        assert_eq!(state.players()[1], Player::new("Bob", Marker::Yellow));
        assert_eq!(state.current(), PlayerId::One);
    }

    #[test]
    fn test_invalid_name_is_reported() {
        let mut app = app();
        type_line(&mut app, "bad;name");
        assert_eq!(app.message.as_deref(), Some("Invalid Name!"));
        assert!(matches!(
            &app.screen,
            Screen::Setup(Setup { step: SetupStep::Name, .. })
        ));
    }

    #[test]
    fn test_second_player_cannot_reuse_marker() {
        let mut app = app();
        type_line(&mut app, "Alice");
        type_line(&mut app, "red");
        type_line(&mut app, "Bob");
        type_line(&mut app, "Red");
        assert_eq!(app.message.as_deref(), Some("Invalid Marker!"));

        type_line(&mut app, "blue");
        assert_eq!(game(&app).players()[1].marker, Marker::Blue);
    }

    #[test]
    fn test_typed_column_drops_piece() {
        let mut app = app();
        set_up_players(&mut app);

        app.handle_key(KeyEvent::from(KeyCode::Char('2')));
        assert_eq!(game(&app).board().get(5, 1), Cell::Occupied(Marker::Red));

        app.handle_key(KeyEvent::from(KeyCode::Char('9')));
        assert!(app.message.as_deref().unwrap().starts_with("Invalid Move!"));
        assert_eq!(game(&app).current(), PlayerId::Two);
    }

    #[test]
    fn test_selector_drops_piece() {
        let mut app = app();
        set_up_players(&mut app);

        app.handle_key(KeyEvent::from(KeyCode::Left));
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(game(&app).board().get(5, 2), Cell::Occupied(Marker::Red));

        for _ in 0..10 {
            app.handle_key(KeyEvent::from(KeyCode::Right));
        }
        assert_eq!(app.selected_column, COLS - 1);
    }

    #[test]
    fn test_win_then_replay() {
        let mut app = app();
        set_up_players(&mut app);

        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            app.handle_key(KeyEvent::from(KeyCode::Char(key)));
        }
        assert!(game(&app).is_terminal());
        assert_eq!(app.message.as_deref(), Some("Alice (Red) Won!"));
        assert!(screen_text(&app).contains("Play again?"));

        app.handle_key(KeyEvent::from(KeyCode::Char('y')));
        assert!(matches!(app.screen, Screen::Setup(_)));
        assert!(!app.should_quit());
    }

    #[test]
    fn test_other_key_after_game_quits() {
        let mut app = app();
        set_up_players(&mut app);
        for key in ['1', '2', '1', '2', '1', '2', '1'] {
            app.handle_key(KeyEvent::from(KeyCode::Char(key)));
        }
        assert!(game(&app).is_terminal());

        app.handle_key(KeyEvent::from(KeyCode::Char('n')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_render_setup_and_board() {
        let mut app = app();
        assert!(screen_text(&app).contains("Enter player 1 name"));

        set_up_players(&mut app);
        let text = screen_text(&app);
        assert!(text.contains("Alice"));
        assert!(text.contains("Enter a column number (1-7)"));
    }
}
