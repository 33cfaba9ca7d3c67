use std::env;
use std::process::ExitCode;

use tile_chess::game_state::chess_types::Team;
use tile_chess::game_state::tile_board::TileBoard;
use tile_chess::utils::layout_parser::generate_layout;
use tile_chess::utils::random_playout::play_random_game;
use tile_chess::utils::render_tile_board::render_tile_board;

const DEFAULT_PLIES: usize = 40;

fn main() -> ExitCode {
    let plies = match env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("usage: tile_chess [plies]  (got '{arg}')");
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_PLIES,
    };

    let mut board = TileBoard::starting_position();
    println!("{}\n", render_tile_board(&board));

    let mut rng = rand::rng();
    if let Err(err) = play_random_game(&mut board, Team::White, plies, &mut rng) {
        eprintln!("random game aborted: {err}");
        return ExitCode::FAILURE;
    }

    print!("{}", board.journal().to_text());
    println!("\n{}", render_tile_board(&board));
    println!("layout {}", generate_layout(&board));
    ExitCode::SUCCESS
}
