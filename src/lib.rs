//! Crate root module declarations for the tile_chess rules engine.
//!
//! Exposes the tile board collaborator, the polymorphic piece rules with the
//! pawn's en-passant protocol, and setup/diagnostic utilities so binaries,
//! tests and benchmarks can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod move_journal;
    pub mod tile_board;
}

pub mod pieces {
    pub mod bishop;
    pub mod king;
    pub mod knight;
    pub mod pawn;
    pub mod piece;
    pub mod queen;
    pub mod rook;
}

pub mod utils {
    pub mod algebraic;
    pub mod layout_parser;
    pub mod random_playout;
    pub mod render_tile_board;
}
