//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the rules of the falling-block puzzle: the piece
//! catalog, the board, collision checks, the state machine, the gravity
//! scheduler and the input mapper. It has **no dependencies** on UI,
//! networking, or I/O, making it:
//!
//! - **Deterministic**: Same piece source produces identical games
//! - **Testable**: Every transition is a plain method or a pure function
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`pieces`]: Occupancy matrices, colors and clockwise rotation
//! - [`board`]: Variable-size grid with placement and line clearing
//! - [`collision`]: The single move-validity predicate
//! - [`game_state`]: Explicit state machine with a pure `next` transition
//! - [`scheduler`]: Level-driven drop interval and elapsed-time accumulator
//! - [`input_mapper`]: Gating of player intents
//! - [`observer`]: Hooks for out-of-core collaborators
//! - [`game`]: The facade a host owns
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: Each spawn picks one of the seven kinds uniformly
//! - **Plain rotation**: 90° clockwise, rejected if it collides (no wall kicks)
//! - **Immediate lock**: A piece locks on the first gravity step it cannot fall
//! - **Scoring**: `lines × 100 × level`, level rises every 10 lines
//! - **Game over**: A piece that locks with its anchor on the top row ends the game
//!
//! # Example
//!
//! ```
//! use basetris_core::{Game, GameConfig, NoopObserver, ScriptedSource};
//! use basetris_core::types::{Intent, PieceKind};
//!
//! let mut game = Game::with_parts(
//!     GameConfig::default(),
//!     ScriptedSource::repeat(PieceKind::I),
//!     NoopObserver,
//! );
//! game.start();
//!
//! assert_eq!(game.snapshot().active.x, 3);
//! game.handle_intent(Intent::HardDrop);
//!
//! let snap = game.snapshot();
//! assert_eq!(&snap.row(19)[3..7], &[1, 1, 1, 1]);
//! ```
//!
//! # Timing
//!
//! Call [`Game::tick`] every frame with the elapsed milliseconds. Gravity
//! fires once per `max(50, 1000 × 0.92^(level-1))` ms while the game runs.

pub mod board;
pub mod collision;
pub mod config;
pub mod game;
pub mod game_state;
pub mod input_mapper;
pub mod observer;
pub mod pieces;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod snapshot;

pub use basetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearResult};
pub use collision::is_valid_move;
pub use config::GameConfig;
pub use game::Game;
pub use game_state::{Event, GameState, Phase, StepReport};
pub use observer::{GameObserver, NoopObserver, Notification, RecordingObserver};
pub use pieces::{base_shape, piece_style, Piece, PieceStyle, Shape};
pub use rng::{PieceSource, ScriptedSource, SimpleRng, UniformSource};
pub use scheduler::{drop_interval_ms, TickScheduler};
pub use scoring::{calculate_lock, level_for_lines, line_clear_points};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
