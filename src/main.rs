use anyhow::{Context, Result, bail};
use fianchetto_core::{Board, STARTING_FEN, divide};
use fianchetto_engine::{Difficulty, NoBook, SearchConfig, SearchHooks, SearchResult};
use fianchetto_game::{Game, Status};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: fianchetto [--fen <FEN>] [--level easy|medium|hard] [--threads <n>] [--selfplay | --perft <depth>]";

/// Command-line options.
#[derive(Debug, PartialEq)]
struct Options {
    fen: String,
    level: Difficulty,
    threads: Option<usize>,
    selfplay: bool,
    perft: Option<u32>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            fen: STARTING_FEN.to_string(),
            level: Difficulty::default(),
            threads: None,
            selfplay: false,
            perft: None,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = parse_args(std::env::args().skip(1))?;
    let board: Board = options
        .fen
        .parse()
        .with_context(|| format!("invalid --fen \"{}\"", options.fen))?;

    if let Some(depth) = options.perft {
        run_perft(board, depth);
        return Ok(());
    }

    let mut config = SearchConfig::from(options.level);
    if let Some(threads) = options.threads {
        config = config.with_threads(threads);
    }
    info!(level = %options.level, threads = config.threads, "fianchetto starting");

    let mut game = Game::from_board(board);
    let hooks = SearchHooks::new().on_progress(|progress| debug!(%progress, "root move done"));

    if !options.selfplay {
        println!("{}", game.board().pretty());
        match game.engine_move(config, &NoBook, &hooks) {
            Some(result) => println!("{}", describe(&result)),
            None => println!("no move: {}", game.status()),
        }
        return Ok(());
    }

    loop {
        let Some(result) = game.engine_move(config, &NoBook, &hooks) else {
            break;
        };
        println!("{:>3}. {}", game.ply() + 1, describe(&result));
        let status = game
            .play(result.best_move)
            .with_context(|| format!("engine produced an unplayable move {}", result.best_move))?;
        if status != Status::Ongoing {
            break;
        }
    }
    println!("{}", game.board().pretty());
    println!("{}  result: {}", game.board(), game.status());
    Ok(())
}

fn describe(result: &SearchResult) -> String {
    if result.from_book {
        format!("{} (book)", result.best_move)
    } else {
        format!(
            "{} score {} depth {} nodes {} in {} ms",
            result.best_move,
            result.score,
            result.depth,
            result.nodes,
            result.elapsed.as_millis()
        )
    }
}

fn run_perft(mut board: Board, depth: u32) {
    let mut total = 0;
    for (mv, count) in divide(&mut board, depth) {
        println!("{mv}: {count}");
        total += count;
    }
    println!("\nNodes searched: {total}");
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options> {
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--fen" => options.fen = value(&mut args, "--fen")?,
            "--level" => {
                let text = value(&mut args, "--level")?;
                options.level = text.parse().with_context(|| format!("invalid --level \"{text}\""))?;
            }
            "--threads" => {
                let text = value(&mut args, "--threads")?;
                let threads: usize = text.parse().with_context(|| format!("invalid --threads \"{text}\""))?;
                options.threads = Some(threads);
            }
            "--selfplay" => options.selfplay = true,
            "--perft" => {
                let text = value(&mut args, "--perft")?;
                options.perft = Some(text.parse().with_context(|| format!("invalid --perft depth \"{text}\""))?);
            }
            "-h" | "--help" => bail!(USAGE),
            other => bail!("unknown argument \"{other}\"\n{USAGE}"),
        }
    }
    if options.selfplay && options.perft.is_some() {
        bail!("--selfplay and --perft cannot be combined");
    }
    Ok(options)
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().with_context(|| format!("{flag} needs a value"))
}
