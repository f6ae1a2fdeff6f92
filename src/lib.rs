pub mod ai;
pub mod assets;
pub mod audio;
pub mod collision;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod motion;
pub mod save;
pub mod timer;
pub mod vector;
