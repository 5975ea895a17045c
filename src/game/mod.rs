pub mod board;
pub mod board_is_full;
pub mod dice;
pub mod get_legal_moves;
pub mod simulate_game;
