//! Crate root module declarations for the Hazel Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, the move value
//! object, legal move generation, and the notation/FEN/rendering utilities)
//! so host programs, tests, and external tooling can import stable module
//! paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen;
    pub mod notation;
    pub mod render_game_state;
}
