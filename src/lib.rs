// Library exports for the fieldsnake Battlesnake bot
// This allows the replay tool and integration tests to use the core engine

pub mod board;
pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod engine;
pub mod field;
pub mod replay;
pub mod space;
pub mod types;
