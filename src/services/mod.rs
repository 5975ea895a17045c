pub mod game_controller;
pub mod session_manager;
