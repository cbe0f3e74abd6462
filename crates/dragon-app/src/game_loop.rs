//! Game loop thread: runs the simulation engine at 60Hz and publishes
//! snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. The latest snapshot is stored in shared
//! state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use dragon_core::constants::TICK_RATE;
use dragon_core::state::GameStateSnapshot;
use dragon_sim::engine::{SimConfig, SimulationEngine};

use crate::autopilot;
use crate::state::{GameLoopCommand, LoopConfig, LoopHandles};

/// Nominal duration of one tick in real-time mode.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// The thread's result is the number of ticks it ran.
pub fn spawn_game_loop(
    config: LoopConfig,
    sim_config: SimConfig,
) -> io::Result<(LoopHandles, JoinHandle<u64>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let handle = std::thread::Builder::new()
        .name("dragon-game-loop".into())
        .spawn(move || run_game_loop(config, sim_config, cmd_rx, &shared))?;

    Ok((
        LoopHandles {
            command_tx: cmd_tx,
            latest_snapshot,
        },
        handle,
    ))
}

/// The game loop. Runs until Shutdown, channel disconnect, Quit, or the
/// frame limit.
fn run_game_loop(
    config: LoopConfig,
    sim_config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> u64 {
    let mut engine = SimulationEngine::new(sim_config);
    let mut next_tick_time = Instant::now();
    let mut frames = 0u64;
    log::info!(
        "game loop started (realtime: {}, autopilot: {})",
        config.realtime,
        config.autopilot
    );

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    log::info!("game loop shut down after {frames} frames");
                    return frames;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return frames,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();
        frames += 1;

        // 3. Let the autopilot react to what it sees
        if config.autopilot {
            engine.queue_commands(autopilot::decide(&snapshot));
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if engine.quit_requested() {
            log::info!("quit requested after {frames} frames");
            return frames;
        }
        if config.max_frames.is_some_and(|max| frames >= max) {
            log::info!("frame limit reached");
            return frames;
        }

        // 5. Sleep until next tick
        if config.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind, reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }
}
