//! # backgammon-engine: Backgammon Rules Engine Core
//!
//! A deterministic two-player backgammon engine. Tracks the board, dice,
//! turns and the doubling cube, validates and applies checker moves, and
//! records games for replay. Rendering, networking and AI are left to
//! front ends built on top of [`game::Game`].
//!
//! ## Core Modules
//!
//! - [`player`] - Colors, direction of travel and participants
//! - [`checker`] - A single checker and where it stands
//! - [`dice`] - Seeded dice and the pool of unused die values
//! - [`board`] - Points, bar and bear-off trays with their primitives
//! - [`rules`] - Move legality, bear-off and bar entry rules
//! - [`cube`] - Doubling cube offers, acceptance and declines
//! - [`game`] - The game state machine
//! - [`snapshot`] - Save and restore of the complete game state
//! - [`logger`] - Move history and JSONL game records
//! - [`config`] - Engine configuration from TOML and environment
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use backgammon_engine::errors::GameError;
//! use backgammon_engine::game::Game;
//! use backgammon_engine::player::Color;
//!
//! let mut game = Game::new_with_seed("Alice", "Bob", 7)?;
//! game.start_game();
//!
//! // 3-1: make the 20 point
//! game.apply_roll(3, 1)?;
//! assert!(game.make_move(17, 20)?);
//! assert!(game.make_move(19, 20)?);
//!
//! assert_eq!(game.current_player().color(), Color::Black);
//! # Ok::<(), GameError>(())
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Dice driven by the same seed produce the same rolls:
//!
//! ```rust
//! use backgammon_engine::game::Game;
//!
//! let mut a = Game::new_with_seed("A", "B", 42).unwrap();
//! let mut b = Game::new_with_seed("A", "B", 42).unwrap();
//! a.start_game();
//! b.start_game();
//! assert_eq!(a.roll_dice().unwrap(), b.roll_dice().unwrap());
//! ```

pub mod board;
pub mod checker;
pub mod config;
pub mod cube;
pub mod dice;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
pub mod snapshot;
