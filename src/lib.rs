//! # Game Script Bridge
//!
//! Lua scripting bridge for a 2D game engine.
//!
//! ## Features
//!
//! - **Image Handles**: `game.newImage()` returns a script-owned sprite with texture, transform and sub-rectangle
//! - **Dialogue**: `game.showText` pushes lines to the dialogue box
//! - **Console**: scripts write colored lines, execute commands and hook new console commands
//! - **Game Time**: `time.date()` and `time.hour()` read the in-game calendar
//!
//! ## Architecture Design
//!
//! The binding layer owns no engine state. Every collaborator is reached through a
//! trait object held in [`scripting::EngineServices`]:
//! - **Texture loading**: [`resources::TextureLoader`]
//! - **Draw list**: [`render::DrawableRegistry`]
//! - **Dialogue box**: [`ui::DialogueBox`]
//! - **Console**: [`console::Console`]
//! - **Clock**: [`time::Clock`]
//!
//! ### Example
//!
//! ```no_run
//! use game_script_bridge::config::EngineConfig;
//! use game_script_bridge::scripting::{ScriptHost, StandaloneServices};
//!
//! let standalone = StandaloneServices::from_config(&EngineConfig::default());
//! let host = ScriptHost::new(standalone.services()).unwrap();
//! host.exec("intro", r#"game.showText("Welcome!", "Guide")"#).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Errors, logging and shared macros
//! - [`config`]: Configuration loading
//! - [`scripting`]: Lua namespaces and the script host

/// Errors, logging initialization and shared macros
pub mod core;
/// Configuration system
pub mod config;
/// In-game command console
pub mod console;
/// Sprites and the per-frame draw list
pub mod render;
/// Texture loading and caching
pub mod resources;
/// Lua bindings for game, console and time
pub mod scripting;
/// In-game calendar
pub mod time;
/// Dialogue box
pub mod ui;
