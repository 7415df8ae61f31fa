//! Torus Snake - classic snake on a wrap-around grid
//!
//! This library provides:
//! - Core game logic (game module): grid arithmetic, snake state, food
//!   placement, and tick orchestration
//! - TUI rendering (render module)
//! - Keyboard input mapping (input module)
//! - Session metrics (metrics module)
//! - The interactive session loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
