//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no rendering or input dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;

use dragon_core::commands::PlayerCommand;
use dragon_core::components::{Enemy, GhostTower, Tower};
use dragon_core::constants::*;
use dragon_core::enums::GamePhase;
use dragon_core::events::SimEvent;
use dragon_core::state::{GameStateSnapshot, TowerView};
use dragon_core::types::{SimTime, Vec2};

use crate::camera::Camera;
use crate::economy::{escalated_tower_cost, Economy};
use crate::error::CommandError;
use crate::path::{PathGenerator, PathGrowth};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Seconds of simulated time per tick.
    pub dt: f64,
    /// Output size in pixels, used for the initial camera.
    pub screen_size: Vec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: DT,
            screen_size: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: SimConfig,
    phase: GamePhase,
    economy: Economy,
    path: PathGenerator,
    growth: PathGrowth,
    camera: Camera,
    ghost: GhostTower,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
    quit_requested: bool,
    lost_on_wave: Option<u32>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            camera: Camera::new(config.screen_size),
            config,
            phase: GamePhase::default(),
            economy: Economy::default(),
            path: PathGenerator::default(),
            growth: PathGrowth::ready_at(1),
            ghost: world_setup::initial_ghost_tower(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            quit_requested: false,
            lost_on_wave: None,
        };
        engine.reset();
        engine
    }

    /// Rebuild every piece of game state from the initial constants.
    ///
    /// Queued commands and the quit flag survive a reset.
    fn reset(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.phase = GamePhase::Idle;
        self.economy = Economy::default();
        self.ghost = world_setup::initial_ghost_tower();
        self.camera = Camera::new(self.config.screen_size);
        self.path = PathGenerator::default();
        self.events.clear();
        self.lost_on_wave = None;

        let mut setup_events = Vec::new();
        for _ in 0..INITIAL_PATH_SEGMENTS {
            systems::path_growth::grow_segment(
                &mut self.path,
                &mut self.camera,
                &mut self.ghost,
                0,
                &mut setup_events,
            );
        }
        self.growth = PathGrowth::ready_at(self.path.len());
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance(self.config.dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.economy,
            &self.path,
            self.growth.ready,
            &self.camera,
            &self.ghost,
            self.lost_on_wave,
            events,
        )
    }

    /// Apply a command immediately, reporting why it was refused if it was.
    pub fn apply_command(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        match command {
            PlayerCommand::StartWave => self.start_wave(),
            PlayerCommand::ToggleTowerPlacementCursor => {
                self.ensure_not_over()?;
                self.ghost.visible = !self.ghost.visible;
                Ok(())
            }
            PlayerCommand::MoveCursor { x, y } => {
                self.ghost.position = Vec2::new(x, y);
                Ok(())
            }
            PlayerCommand::PlaceTower { x, y } => self.place_tower(Vec2::new(x, y)),
            PlayerCommand::Reset => {
                if self.phase != GamePhase::GameOver {
                    return Err(CommandError::GameNotOver);
                }
                self.reset();
                log::info!("game reset");
                Ok(())
            }
            PlayerCommand::Quit => {
                self.quit_requested = true;
                Ok(())
            }
        }
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Seconds of simulated time per tick.
    pub fn dt(&self) -> f64 {
        self.config.dt
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn waypoints(&self) -> &[Vec2] {
        self.path.waypoints()
    }

    pub fn ghost(&self) -> &GhostTower {
        &self.ghost
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// False while the path is regrowing after a round.
    pub fn path_ready(&self) -> bool {
        self.growth.ready
    }

    /// Whether a `Quit` command has been processed.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The first tower whose position lies within the hover radius of `pos`.
    pub fn tower_at(&self, pos: Vec2) -> Option<TowerView> {
        self.world
            .query::<&Tower>()
            .iter()
            .find(|(_, tower)| tower.position.distance(pos) <= TOWER_HOVER_RADIUS)
            .map(|(_, tower)| systems::snapshot::tower_view(tower))
    }

    /// Spawn an enemy at an arbitrary point on the path (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, position: Vec2, next_waypoint: usize, health: i32) -> hecs::Entity {
        let entity = world_setup::spawn_enemy(&mut self.world, position, health);
        if let Ok(mut enemy) = self.world.get::<&mut Enemy>(entity) {
            enemy.next_waypoint = next_waypoint;
        }
        entity
    }

    /// Spawn a tower from the current template without paying for it (for testing).
    #[cfg(test)]
    pub fn spawn_test_tower(&mut self, position: Vec2) -> hecs::Entity {
        world_setup::spawn_tower(&mut self.world, &self.ghost, position)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.apply_command(command.clone()) {
                log::debug!("rejected {command:?}: {err}");
            }
        }
    }

    fn ensure_not_over(&self) -> Result<(), CommandError> {
        if self.phase == GamePhase::GameOver {
            return Err(CommandError::GameOver);
        }
        Ok(())
    }

    fn enemies_on_field(&self) -> bool {
        self.world.query::<&Enemy>().iter().next().is_some()
    }

    fn start_wave(&mut self) -> Result<(), CommandError> {
        self.ensure_not_over()?;
        if self.phase == GamePhase::WaveInProgress
            || self.economy.enemies_remaining > 0
            || self.enemies_on_field()
        {
            return Err(CommandError::WaveActive);
        }
        if !self.growth.ready {
            return Err(CommandError::PathGrowing);
        }

        self.economy.begin_wave();
        self.ghost.cost = escalated_tower_cost(self.ghost.cost);
        self.phase = GamePhase::WaveInProgress;
        log::info!(
            "wave {} started: {} enemies, health {}, speed {:.1}",
            self.economy.wave,
            self.economy.enemies_per_wave,
            self.economy.enemy_health,
            self.economy.enemy_speed
        );
        self.events.push(SimEvent::WaveStarted {
            wave: self.economy.wave,
            enemies: self.economy.enemies_per_wave,
        });
        Ok(())
    }

    fn place_tower(&mut self, position: Vec2) -> Result<(), CommandError> {
        self.ensure_not_over()?;
        self.ghost.position = position;
        if !self.ghost.visible {
            self.ghost.visible = true;
            return Err(CommandError::CursorHidden);
        }
        if !self.growth.ready {
            return Err(CommandError::PathGrowing);
        }
        if self.economy.credits < self.ghost.cost {
            return Err(CommandError::InsufficientCredits {
                credits: self.economy.credits,
                cost: self.ghost.cost,
            });
        }

        world_setup::spawn_tower(&mut self.world, &self.ghost, position);
        self.economy.credits -= self.ghost.cost;
        log::debug!(
            "tower placed at ({:.1}, {:.1}) for {} credits",
            position.x,
            position.y,
            self.ghost.cost
        );
        self.events.push(SimEvent::TowerPlaced {
            x: position.x,
            y: position.y,
            cost: self.ghost.cost,
        });
        Ok(())
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.config.dt;

        // 1. Wave spawning
        let start = self.path.start();
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.economy,
            start,
            dt,
            &mut self.events,
        );
        // 2. Path regrowth
        systems::path_growth::run(
            &mut self.path,
            &mut self.growth,
            &mut self.camera,
            &mut self.ghost,
            self.economy.wave,
            dt,
            &mut self.events,
        );
        // 3. Enemy movement, kills and leaks
        let lives_exhausted = systems::enemies::run(
            &mut self.world,
            self.path.waypoints(),
            &mut self.economy,
            dt,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        if lives_exhausted && self.phase != GamePhase::GameOver {
            self.phase = GamePhase::GameOver;
            self.lost_on_wave = Some(self.economy.wave);
            log::info!("game over on wave {}", self.economy.wave);
            self.events.push(SimEvent::GameOver {
                wave: self.economy.wave,
            });
        }
        // 4. Towers: fire, validate range, reacquire
        systems::towers::run(&mut self.world, dt, &mut self.events);
        // 5. Projectiles
        systems::projectiles::run(
            &mut self.world,
            self.economy.projectile_speed,
            dt,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 6. Wave completion
        self.check_wave_complete();
    }

    fn check_wave_complete(&mut self) {
        if self.phase != GamePhase::WaveInProgress
            || self.economy.enemies_remaining > 0
            || self.economy.lives == 0
            || self.enemies_on_field()
        {
            return;
        }

        let awarded = self.economy.complete_wave();
        self.growth = PathGrowth::begin(self.path.len());
        self.phase = GamePhase::Idle;
        log::info!(
            "wave {} cleared: +{} credits, path growing to {} waypoints",
            self.economy.wave,
            awarded,
            self.growth.target_len
        );
        self.events.push(SimEvent::WaveCleared {
            wave: self.economy.wave,
            credits_awarded: awarded,
        });
    }
}
