use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::Backend, Terminal};
use tracing::info;

use crate::ai::{Agent, Robot};
use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::game::{ActionKind, Board, Coord, ReadCursor, Side, TurnEngine, ROWS};

use super::game_view::{self, ViewState};

/// Human vs robot session. The app is the presentation reader of the action
/// log: it replays entries onto its own display board at animation pace, so
/// its cursor may trail the engine's log.
pub struct App {
    engine: TurnEngine,
    robot: Robot,
    human: Side,
    initial: Board,
    display: Board,
    cursor: ReadCursor,
    animation: Duration,
    since_step: Duration,
    selector: Coord,
    picked: Option<Coord>,
    my_turn: bool,
    winner: Option<Side>,
    message: Option<String>,
    rng: StdRng,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let initial = config.board.initial_board()?;
        let mut engine = TurnEngine::new(initial, config.board.first_mover);
        let (mut robot, rng) = match config.robot.seed {
            Some(seed) => (
                Robot::with_seed(Side::Black, seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (Robot::new(Side::Black), StdRng::from_os_rng()),
        };
        robot.attach(&mut engine);

        let mut app = App {
            engine,
            robot,
            human: Side::White,
            initial,
            display: initial,
            cursor: ReadCursor::new(),
            animation: Duration::from_millis(config.ui.animation_ms),
            since_step: Duration::ZERO,
            selector: Coord::new(0, ROWS as i32 - 1),
            picked: None,
            my_turn: false,
            winner: None,
            message: None,
            rng,
            should_quit: false,
        };
        app.restart();
        Ok(app)
    }

    /// New game with the robot on a random side.
    pub fn restart(&mut self) {
        let robot_side = if self.rng.random_bool(0.5) {
            Side::White
        } else {
            Side::Black
        };
        self.start_game(robot_side.other());
    }

    pub fn start_game(&mut self, human: Side) {
        self.human = human;
        self.robot.reset(human.other());
        self.display = self.initial;
        self.picked = None;
        self.my_turn = false;
        self.winner = None;
        self.since_step = Duration::ZERO;
        self.engine.ready();
        info!(human = human.name(), "new game");
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut last_frame = Instant::now();
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            let now = Instant::now();
            self.tick(now - last_frame);
            last_frame = now;
        }
        Ok(())
    }

    /// Advance the engine, let the robot react, and replay pending actions.
    pub fn tick(&mut self, dt: Duration) {
        self.engine.update(dt);
        self.robot.poll(&mut self.engine);
        self.since_step += dt;
        self.replay();
    }

    /// Process log entries until one needs animation time.
    fn replay(&mut self) {
        loop {
            let action = self.cursor.peek(self.engine.log());
            let animated = matches!(action.kind, ActionKind::Moved | ActionKind::Killed);
            if animated && self.since_step < self.animation {
                return;
            }

            match action.kind {
                ActionKind::None => return,
                ActionKind::Ready => {
                    self.display = self.initial;
                }
                ActionKind::Start => {
                    self.message = Some(format!("You play {}", self.human.name()));
                }
                ActionKind::Moved => {
                    if let (Some(source), Some(target)) = (action.source, action.target) {
                        self.display.swap(source, target);
                    }
                    self.since_step = Duration::ZERO;
                }
                ActionKind::Killed => {
                    if let Some(target) = action.target {
                        self.display.clear(target);
                    }
                    self.since_step = Duration::ZERO;
                }
                ActionKind::Standby => {
                    self.my_turn = action.color != self.human.to_piece();
                    self.message = Some(if self.my_turn {
                        "Your move".to_string()
                    } else {
                        "Waiting for the robot...".to_string()
                    });
                }
                ActionKind::GameOver => {
                    self.my_turn = false;
                    self.winner = action.color.side();
                    self.message = Some(if self.winner == Some(self.human) {
                        "You win! Press 'r' to play again.".to_string()
                    } else {
                        "You lose! Press 'r' to play again.".to_string()
                    });
                }
            }
            self.cursor.advance();
        }
    }

    /// Input is accepted only on the human's turn once the screen has
    /// caught up with the log.
    fn can_act(&mut self) -> bool {
        self.my_turn && self.cursor.lag(self.engine.log()) == 0
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => self.move_selector(-1, 0),
            KeyCode::Right => self.move_selector(1, 0),
            KeyCode::Up => self.move_selector(0, -1),
            KeyCode::Down => self.move_selector(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select();
            }
            KeyCode::Char('r') => {
                self.restart();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn move_selector(&mut self, dcol: i32, drow: i32) {
        let next = self.selector.offset(dcol, drow);
        if Board::in_bounds(next) {
            self.selector = next;
        }
    }

    /// First press picks one of the human's pieces, second press submits
    /// the slide to the selected cell.
    fn select(&mut self) {
        if self.winner.is_some() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if !self.can_act() {
            self.message = Some("Not your turn yet".to_string());
            return;
        }

        match self.picked {
            Some(source) if source == self.selector => {
                self.picked = None;
            }
            Some(source) => {
                self.engine.submit_move(source, self.selector);
                self.picked = None;
            }
            None => {
                if self.display.color_at(self.selector) == self.human.to_piece() {
                    self.picked = Some(self.selector);
                } else {
                    self.message = Some("Pick one of your pieces".to_string());
                }
            }
        }
    }

    pub fn display_board(&self) -> &Board {
        &self.display
    }

    pub fn human(&self) -> Side {
        self.human
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let view = ViewState {
            board: &self.display,
            selector: self.selector,
            picked: self.picked,
            human: self.human,
            my_turn: self.my_turn,
            winner: self.winner,
            elapsed: self.engine.elapsed(),
            message: &self.message,
        };
        game_view::render(frame, &view);
    }
}
