use anyhow::Context;
use clap::{arg, command, Command};
use hotseat_chess::chess_board::perft::{perft, pseudo_moves};
use hotseat_chess::chess_board::{ChessBoard, Color, INITIAL_POSITION};
use hotseat_chess::game::Game;
use hotseat_chess::ui::TerminalSession;
use std::io;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = command!()
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .arg(
            arg!(
            -f --fen <FEN> "Start position"
                    )
            .global(true)
            .default_value(INITIAL_POSITION),
        )
        .subcommand(Command::new("play").about("Play a game in the terminal"))
        .subcommand(
            Command::new("perft").about("Count move sequences from the start position").arg(
                arg!(
                -x --depth <d> "depth"
                        )
                .default_value("3")
                .value_parser(clap::value_parser!(u8)),
            ),
        );
    #[cfg(feature = "ui")]
    let cli = cli.subcommand(Command::new("window").about("Play a game in a window"));
    let matches = cli.get_matches();

    init_logging(matches.get_flag("debug"))?;

    let fen = matches
        .get_one::<String>("fen")
        .map(String::as_str)
        .unwrap_or(INITIAL_POSITION);
    let (board, turn) = ChessBoard::from_fen(fen).with_context(|| format!("cannot start from `{}`", fen))?;
    info!(%fen, %turn, "starting position");

    match matches.subcommand() {
        Some(("perft", arg_matches)) => {
            let depth = arg_matches.get_one::<u8>("depth").copied().unwrap_or(3);
            run_perft(&board, turn, depth);
            Ok(())
        }
        #[cfg(feature = "ui")]
        Some(("window", _)) => {
            hotseat_chess::ui::setup_ui(Game::from_board(board, turn)).context("window front end failed")
        }
        Some(("play", _)) | None => play_in_terminal(Game::from_board(board, turn)),
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

fn init_logging(debug: bool) -> anyhow::Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("cannot install the log subscriber")
}

fn play_in_terminal(mut game: Game) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    TerminalSession::new(stdin.lock(), stdout.lock())
        .run(&mut game)
        .context("terminal session failed")
}

#[derive(Tabled)]
struct PerftRow {
    #[tabled(rename = "move")]
    mv: String,
    nodes: u64,
}

fn run_perft(board: &ChessBoard, turn: Color, depth: u8) {
    println!("Perft test for {} with depth {}", board.to_fen(turn), depth);
    if depth == 0 {
        println!("\nNodes searched: 1");
        return;
    }

    let mut rows = Vec::new();
    for (from, to) in pseudo_moves(board, turn) {
        let mut new_board = board.clone();
        new_board.make_move(from, to);
        rows.push(PerftRow {
            mv: format!("{}{}", from.as_algebraic(), to.as_algebraic()),
            nodes: perft(&new_board, turn.opposite(), depth - 1),
        });
    }
    rows.sort_by(|a, b| a.mv.cmp(&b.mv));

    let num_nodes: u64 = rows.iter().map(|row| row.nodes).sum();
    println!("{}", Table::new(rows).with(Style::modern()));
    println!("\nNodes searched: {}", num_nodes);
}
