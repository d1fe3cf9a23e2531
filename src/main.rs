use std::io::{self, BufRead, Write};
use std::time::Instant;

use plywood::board::Board;
use plywood::search::Search;
use plywood::uci::command::{parse_go_params, parse_uci_command, UciCommand};
use plywood::uci::parse_position_command;
use plywood::uci::time::allocate_time;

fn main() {
    plywood::init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut board = Board::new();
    let mut search = Search::new();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(cmd) = parse_uci_command(&line) else {
            continue;
        };

        match cmd {
            UciCommand::Uci => {
                println!("id name Plywood {}", env!("CARGO_PKG_VERSION"));
                println!("id author the Plywood developers");
                println!("uciok");
            }
            UciCommand::IsReady => {
                println!("readyok");
            }
            UciCommand::UciNewGame => {
                board = Board::new();
            }
            UciCommand::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                parse_position_command(&mut board, &parts);
            }
            UciCommand::Go(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let params = parse_go_params(&parts);
                let budget = allocate_time(&params, board.white_to_move());
                println!(
                    "info string search started with a time limit of {}ms",
                    budget.as_millis()
                );
                match search.find_best_move(&board, budget) {
                    Some(best_move) => println!("bestmove {best_move}"),
                    None => println!("bestmove 0000"),
                }
            }
            UciCommand::Perft(depth) => {
                let start = Instant::now();
                let nodes = board.perft(depth);
                println!(
                    "info string perft depth {depth} nodes {nodes} time {}ms",
                    start.elapsed().as_millis()
                );
            }
            UciCommand::Quit => break,
            UciCommand::Unknown(text) => {
                println!("info string unknown command: {text}");
            }
        }

        stdout.flush().unwrap();
    }
}
