//! Endless Splits entry point
//!
//! Headless driver: runs the simulation through the fixed timestep with a
//! synthetic frame clock, replays a short key script, and prints the final
//! snapshot as JSON.
//!
//! Usage: `endless-splits [settings.json] [frames]`

use std::path::Path;
use std::process::ExitCode;

use endless_splits::Settings;
use endless_splits::input::{Command, CommandOutcome, Key};
use endless_splits::renderer::{LineStyle, line_list};
use endless_splits::sim::SimState;
use endless_splits::timestep::FixedTimestep;

/// Frames simulated when no count is given (about ten seconds at 60 Hz)
const DEFAULT_FRAMES: u32 = 600;

/// Frame times cycled by the synthetic clock, roughly 60 Hz with jitter
const FRAME_TIMES_MS: [u32; 3] = [16, 17, 17];

/// Key presses replayed at the given frame numbers
const KEY_SCRIPT: &[(u32, Key)] = &[
    (120, Key::C),
    (180, Key::Up),
    (240, Key::LeftCtrl),
    (300, Key::Right),
    (360, Key::Space),
    (390, Key::Space),
    (420, Key::Down),
    (480, Key::LeftCtrl),
    (540, Key::C),
];

/// Simulation plus the driver-side state around it
struct Harness {
    state: SimState,
    clock: FixedTimestep,
    style: LineStyle,
    paused: bool,
    quit: bool,
    steps: u64,
}

impl Harness {
    fn new(settings: &Settings) -> Self {
        Self {
            state: SimState::from_settings(settings),
            clock: FixedTimestep::from_settings(settings),
            style: LineStyle::default(),
            paused: false,
            quit: false,
            steps: 0,
        }
    }

    fn handle_key(&mut self, key: Key) {
        if let CommandOutcome::Driver(command) = key.command().apply(&mut self.state) {
            match command {
                Command::TogglePause => {
                    self.paused = !self.paused;
                    log::info!("Paused: {}", self.paused);
                }
                Command::Quit => self.quit = true,
                _ => {}
            }
        }
    }

    /// One frame: run the owed steps, then build the draw list
    fn frame(&mut self, elapsed_ms: u32) -> usize {
        let state = &mut self.state;
        let ran = self.clock.update(elapsed_ms, self.paused, || state.advance());
        self.steps += u64::from(ran);
        line_list(&self.state, &self.style).len()
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Endless Splits (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let frames = match args.next().map(|s| s.parse::<u32>()) {
        Some(Ok(frames)) => frames,
        Some(Err(e)) => {
            log::error!("Invalid frame count: {}", e);
            return ExitCode::FAILURE;
        }
        None => DEFAULT_FRAMES,
    };

    let mut harness = Harness::new(&settings);
    log::info!("Simulation initialized with seed: {}", harness.state.seed);
    harness.state.report();

    let mut vertices = 0;
    for frame in 0..frames {
        for &(_, key) in KEY_SCRIPT.iter().filter(|(at, _)| *at == frame) {
            harness.handle_key(key);
        }
        if harness.quit {
            break;
        }
        let elapsed = FRAME_TIMES_MS[frame as usize % FRAME_TIMES_MS.len()];
        vertices = harness.frame(elapsed);
    }

    log::info!(
        "Ran {} steps, {} regenerations, {} vertices in last frame",
        harness.steps,
        harness.state.regenerations,
        vertices
    );
    harness.state.count_lines();

    match serde_json::to_string_pretty(&harness.state.snapshot()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Could not serialize snapshot: {}", e);
            ExitCode::FAILURE
        }
    }
}
