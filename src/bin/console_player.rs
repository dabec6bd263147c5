use clap::Parser;
use match3_engine::game::Game;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board width in cells (must exceed 2)
    #[clap(long, default_value_t = 7)]
    width: usize,

    /// Board height in cells (must exceed 2)
    #[clap(long, default_value_t = 10)]
    height: usize,

    /// Optional seed for reproducible boards
    #[clap(long)]
    seed: Option<u64>,
}

fn print_hints(game: &Game) {
    let hints = game.hints();
    println!("{} possible move(s):", hints.len());
    for hint in &hints {
        let a = game.board().cells()[hint.first_index()];
        let b = game.board().cells()[hint.second_index()];
        println!("  ({} {}) <-> ({} {})", a.x, a.y, b.x, b.y);
    }
}

fn main() {
    let args = Args::parse();

    let game = match args.seed {
        Some(seed) => Game::new_with_seed(args.width, args.height, seed),
        None => Game::new(args.width, args.height),
    };
    let mut game = match game {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Failed to create board: {}", e);
            std::process::exit(1);
        }
    };

    println!("Welcome to Match-3!");

    loop {
        println!("---------------------");
        println!("{}", game.board());
        print_hints(&game);

        print!("Enter your move (x1 y1 x2 y2), or 'q' to quit: ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        let coords: Vec<usize> = trimmed_input
            .split_whitespace()
            .filter_map(|part| part.parse().ok())
            .collect();

        if coords.len() != 4 {
            println!("Invalid input format. Use 'x1 y1 x2 y2' or 'q'.");
            continue;
        }

        let (x1, y1, x2, y2) = (coords[0], coords[1], coords[2], coords[3]);
        if x1 >= args.width || x2 >= args.width || y1 >= args.height || y2 >= args.height {
            println!(
                "Invalid coordinates: x must be below {}, y below {}.",
                args.width, args.height
            );
            continue;
        }

        let lhs = game.board().index_of(x1, y1);
        let rhs = game.board().index_of(x2, y2);

        if game.try_move(lhs, rhs) {
            println!("Move processed.");
        } else {
            println!(
                "Wrong move: ({} {}) <-> ({} {}) is not adjacent or creates no match.",
                x1, y1, x2, y2
            );
        }
    }
}
