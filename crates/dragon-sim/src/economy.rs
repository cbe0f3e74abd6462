//! Wave and economy counters, and the escalation applied at each wave start.
//!
//! Stored in `SimulationEngine`, not as ECS entities.

use dragon_core::constants::*;

#[derive(Debug, Clone)]
pub struct Economy {
    pub lives: u32,
    pub credits: u32,
    /// Current wave number; 0 before the first wave.
    pub wave: u32,
    pub enemies_per_wave: u32,
    /// Enemies of the current wave not yet spawned.
    pub enemies_remaining: u32,

    // --- Escalating enemy stats ---
    pub enemy_speed: f64,
    pub projectile_speed: f64,
    pub enemy_health: i32,
    pub enemy_bounty: u32,

    // --- Spawn timing ---
    pub spawn_interval_secs: f64,
    pub spawn_timer_secs: f64,
}

impl Default for Economy {
    fn default() -> Self {
        Self {
            lives: INITIAL_LIVES,
            credits: INITIAL_CREDITS,
            wave: 0,
            enemies_per_wave: 0,
            enemies_remaining: 0,
            enemy_speed: INITIAL_ENEMY_SPEED,
            projectile_speed: INITIAL_PROJECTILE_SPEED,
            enemy_health: INITIAL_ENEMY_HEALTH,
            enemy_bounty: INITIAL_ENEMY_BOUNTY,
            spawn_interval_secs: 0.0,
            spawn_timer_secs: 0.0,
        }
    }
}

impl Economy {
    /// Advance to the next wave and escalate difficulty.
    pub fn begin_wave(&mut self) {
        self.wave += 1;
        self.enemies_per_wave += self.wave;
        self.spawn_interval_secs = WAVE_SPAWN_WINDOW / self.enemies_per_wave as f64;
        self.enemy_speed *= ENEMY_SPEED_GROWTH;
        self.projectile_speed = self.enemy_speed * PROJECTILE_SPEED_RATIO;

        if self.wave % 2 == 1 {
            self.enemy_health += 1;
        }
        if self.wave % 4 == 1 {
            self.enemy_bounty += 1;
        }

        self.enemies_remaining = self.enemies_per_wave;
        self.spawn_timer_secs = 0.0;
    }

    /// Pay out the end-of-round reward. Returns the credits awarded.
    pub fn complete_wave(&mut self) -> u32 {
        self.credits += self.wave;
        self.wave
    }

    /// Lose one life. Returns true when this leak used up the last one.
    pub fn leak(&mut self) -> bool {
        if self.lives == 0 {
            return false;
        }
        self.lives -= 1;
        self.lives == 0
    }
}

/// Tower price after a wave start.
pub fn escalated_tower_cost(cost: u32) -> u32 {
    (TOWER_COST_GROWTH * cost as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_wave_escalation() {
        let mut economy = Economy::default();
        economy.begin_wave();
        assert_eq!(economy.wave, 1);
        assert_eq!(economy.enemies_per_wave, 1);
        assert_eq!(economy.enemies_remaining, 1);
        assert!((economy.spawn_interval_secs - 10.0).abs() < 1e-12);
        assert!((economy.enemy_speed - 27.0).abs() < 1e-9);
        assert!((economy.projectile_speed - 81.0).abs() < 1e-9);
        assert_eq!(economy.enemy_health, 2);
        assert_eq!(economy.enemy_bounty, 2);
    }

    #[test]
    fn test_health_and_bounty_schedule() {
        let mut economy = Economy::default();
        let mut health = Vec::new();
        let mut bounty = Vec::new();
        for _ in 0..8 {
            economy.begin_wave();
            health.push(economy.enemy_health);
            bounty.push(economy.enemy_bounty);
        }
        assert_eq!(health, vec![2, 2, 3, 3, 4, 4, 5, 5]);
        assert_eq!(bounty, vec![2, 2, 2, 2, 3, 3, 3, 3]);
        // 1 + 2 + ... + 8
        assert_eq!(economy.enemies_per_wave, 36);
    }

    #[test]
    fn test_enemy_speed_compounds() {
        let mut economy = Economy::default();
        economy.begin_wave();
        economy.begin_wave();
        economy.begin_wave();
        let expected = INITIAL_ENEMY_SPEED * 1.8 * 1.8 * 1.8;
        assert!((economy.enemy_speed - expected).abs() < 1e-9);
        assert!((economy.projectile_speed - expected * 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_complete_wave_awards_wave_number() {
        let mut economy = Economy::default();
        economy.begin_wave();
        economy.begin_wave();
        assert_eq!(economy.complete_wave(), 2);
        assert_eq!(economy.credits, INITIAL_CREDITS + 2);
    }

    #[test]
    fn test_leak_clamps_at_zero() {
        let mut economy = Economy {
            lives: 2,
            ..Default::default()
        };
        assert!(!economy.leak());
        assert!(economy.leak());
        assert_eq!(economy.lives, 0);
        // Further leaks neither underflow nor re-trigger game over.
        assert!(!economy.leak());
        assert_eq!(economy.lives, 0);
    }

    #[test]
    fn test_tower_cost_rounds_down() {
        assert_eq!(escalated_tower_cost(2), 3);
        assert_eq!(escalated_tower_cost(3), 4);
        assert_eq!(escalated_tower_cost(4), 6);
        assert_eq!(escalated_tower_cost(9), 13);
    }
}
