mod input;
mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::InputBuffer;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use skyward::constants::TICK_INTERVAL_MS;
use skyward::game::{snapshot, tick, GameSession, SessionConfig};
use skyward::physics::BirdBody;
use std::fs::File;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

const LOG_FILE: &str = "skyward.log";

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse().ok()) {
                    Some(value) => seed = Some(value),
                    None => {
                        eprintln!("--seed requires a number");
                        std::process::exit(1);
                    }
                }
            }
            "--version" | "-v" => {
                println!("skyward {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyward - terminal obstacle-avoidance game\n");
                println!("Usage: skyward [options]\n");
                println!("Options:");
                println!("  --seed N   Fixed obstacle course seed");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Keys: Space/Up flap, Esc/P pause, Q quit");
                println!("Set RUST_LOG=debug to write {}", LOG_FILE);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'skyward --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    init_logging()?;

    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut rng);

    // Cleanup terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

/// Logging goes to a file; stderr would draw over the alternate screen.
fn init_logging() -> io::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create(LOG_FILE)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    rng: &mut ChaCha8Rng,
) -> io::Result<()> {
    let config = SessionConfig::default();
    let mut session = GameSession::new(config);
    let mut bird = BirdBody::new(&config);
    let mut input = InputBuffer::new();
    let mut output = snapshot(&session);

    let tick_duration = Duration::from_millis(TICK_INTERVAL_MS);
    let dt = TICK_INTERVAL_MS as f64 / 1000.0;
    let mut last_tick = Instant::now();

    info!("session started");

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &config, &output, &bird))?;

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                input.push(&key);
            }
        }

        if input.quit_requested() {
            break;
        }

        if last_tick.elapsed() >= tick_duration {
            // Overlap is judged on last frame's positions, before the core moves anything
            let overlap = bird.overlaps_any(&output.obstacles);
            output = tick(&mut session, input.take(), overlap, rng);
            bird.apply_all(&output.physics);
            bird.step(dt);
            last_tick = Instant::now();
        }
    }

    info!(
        "session closed after {} ticks, score {}",
        session.tick_count, session.score.counter
    );
    Ok(())
}
