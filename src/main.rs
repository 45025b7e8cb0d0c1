mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};

use snake_game::entities::Direction;
use snake_game::{Command, GameConfig, GameSession, TickScheduler};

#[derive(Parser)]
#[command(name = "snake_game")]
#[command(version, about = "Snake with power-ups and particle effects, in the terminal")]
struct Cli {
    /// JSON file with tuning values (intervals, scoring, power-ups)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base game tick interval in milliseconds
    #[arg(long)]
    speed: Option<u64>,

    /// Where to write the log (default: <tmp>/snake_game.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to a file: stderr belongs to the alternate screen while playing.
fn init_logger(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("snake_game.log"));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(speed) = cli.speed {
        config.base_interval_ms = speed;
        config.validate().context("Invalid --speed")?;
    }
    Ok(config)
}

// ── Input ─────────────────────────────────────────────────────────────────────

enum Input {
    Game(Command),
    Quit,
}

fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Input::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Some(Input::Quit),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Turn(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Turn(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Command::Turn(Direction::Right)
        }
        KeyCode::Char(' ') => Command::TogglePause,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        _ => return None,
    };
    Some(Input::Game(command))
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Both clocks share this thread: block on input until the next deadline,
/// then fire whatever is due and redraw after every animation frame.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut GameSession,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let mut scheduler = TickScheduler::start(Instant::now());

    loop {
        let wait = scheduler.time_until_next(Instant::now());
        let mut redraw = false;
        match rx.recv_timeout(wait) {
            Ok(Event::Key(key)) => match map_key(key) {
                Some(Input::Quit) => return Ok(()),
                Some(Input::Game(command)) => {
                    log::debug!("command {:?}", command);
                    session.handle(command);
                    redraw = true;
                }
                None => {}
            },
            Ok(Event::Resize(..)) => redraw = true,
            Ok(_) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                log::warn!("input thread stopped");
                return Ok(());
            }
        }

        let fired = scheduler.run_due(Instant::now(), session);
        if fired.animation || redraw {
            let size = terminal::size().context("Failed to read terminal size")?;
            display::render(out, &session.snapshot(), size)
                .context("Failed to draw frame")?;
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_file.clone())?;
    let config = load_config(&cli)?;
    log::info!("starting with {:?}", config);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    let result = run(&mut out, config);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("{:#}", err);
    }
    log::info!("bye");
    result
}

fn run<W: Write>(out: &mut W, config: GameConfig) -> Result<()> {
    out.execute(terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped, program exiting
                }
            }
            Err(err) => {
                log::warn!("event read failed: {}", err);
                break;
            }
        }
    });

    let mut session = GameSession::new(config);
    game_loop(out, &mut session, &rx)
}
