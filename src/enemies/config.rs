//! Immutable per-enemy configuration and the built-in archetype presets.

use serde::Deserialize;

use super::error::ConfigError;

fn default_hit_range_multiplier() -> f32 {
    1.3
}

fn default_turn_debounce() -> f32 {
    0.4
}

fn default_removal_delay() -> f32 {
    1.5
}

fn default_attack_variants() -> u8 {
    1
}

/// Optional behaviors toggled per archetype.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Can burst toward a distant target.
    #[serde(default)]
    pub can_dash: bool,
    /// Hits may interrupt the enemy with hit-stun.
    #[serde(default)]
    pub can_stun: bool,
    /// Spawns asleep until a target comes into detection range.
    #[serde(default)]
    pub starts_dormant: bool,
    /// Deals damage by touching targets instead of attacking.
    #[serde(default)]
    pub contact_damage_only: bool,
}

/// Phases of a melee attack, in seconds from the attack start.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct AttackTiming {
    /// Length of the windup with movement suppressed.
    pub windup: f32,
    /// When the hit test happens, measured from the attack start.
    pub hit_delay: f32,
    /// Pause after the windup before the cooldown is armed.
    pub recovery: f32,
}

impl Default for AttackTiming {
    fn default() -> Self {
        Self {
            windup: 0.3,
            hit_delay: 0.3,
            recovery: 0.5,
        }
    }
}

/// Velocity applied when a hit pushes the enemy back.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Knockback {
    pub horizontal: f32,
    pub vertical: f32,
}

/// How far ahead the environment probes look.
///
/// A zero `depth` skips the ground check (fliers); a zero `wall` skips the wall check.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ProbeReach {
    /// Horizontal distance in front of the body where ground is checked.
    pub ahead: f32,
    /// How far below the body's center, at that point, ground must be found.
    pub depth: f32,
    /// Horizontal reach of the wall check.
    pub wall: f32,
}

impl Default for ProbeReach {
    fn default() -> Self {
        Self {
            ahead: 0.5,
            depth: 1.0,
            wall: 0.5,
        }
    }
}

/// Dash tuning, only used with [`Capabilities::can_dash`].
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DashTuning {
    pub speed: f32,
    pub duration: f32,
    pub cooldown: f32,
}

impl Default for DashTuning {
    fn default() -> Self {
        Self {
            speed: 8.0,
            duration: 0.4,
            cooldown: 4.0,
        }
    }
}

/// Everything a behavior engine needs to know about its enemy.
///
/// Validated once by [`EnemyConfig::validate`]; engines never see an invalid config.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct EnemyConfig {
    pub patrol_speed: f32,
    pub chase_speed: f32,
    /// Half-width of the patrol band around the spawn point.
    pub patrol_range: f32,

    pub detection_range: f32,
    pub attack_range: f32,
    #[serde(default)]
    pub contact_range: f32,

    pub max_health: i32,
    #[serde(default)]
    pub attack_damage: i32,
    #[serde(default)]
    pub contact_damage: i32,
    #[serde(default)]
    pub attack_cooldown: f32,
    #[serde(default)]
    pub contact_cooldown: f32,
    #[serde(default)]
    pub hit_stun_duration: f32,
    /// Chance that a surviving hit stuns, when the enemy can be stunned.
    #[serde(default)]
    pub stun_chance: f32,

    #[serde(default)]
    pub capabilities: Capabilities,
    #[serde(default)]
    pub attack: AttackTiming,
    #[serde(default = "default_hit_range_multiplier")]
    pub hit_range_multiplier: f32,
    #[serde(default = "default_attack_variants")]
    pub attack_variants: u8,
    #[serde(default)]
    pub dash: DashTuning,
    #[serde(default)]
    pub knockback: Knockback,
    #[serde(default)]
    pub probe: ProbeReach,
    #[serde(default = "default_turn_debounce")]
    pub turn_debounce: f32,
    /// Seconds between death and the removal request.
    #[serde(default = "default_removal_delay")]
    pub removal_delay: f32,
}

impl EnemyConfig {
    /// Reject configurations that would make runtime behavior undefined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("patrol_speed", self.patrol_speed),
            ("chase_speed", self.chase_speed),
            ("patrol_range", self.patrol_range),
            ("detection_range", self.detection_range),
            ("attack_range", self.attack_range),
            ("contact_range", self.contact_range),
            ("attack_cooldown", self.attack_cooldown),
            ("contact_cooldown", self.contact_cooldown),
            ("hit_stun_duration", self.hit_stun_duration),
            ("attack.windup", self.attack.windup),
            ("attack.hit_delay", self.attack.hit_delay),
            ("attack.recovery", self.attack.recovery),
            ("dash.speed", self.dash.speed),
            ("dash.duration", self.dash.duration),
            ("dash.cooldown", self.dash.cooldown),
            ("probe.ahead", self.probe.ahead),
            ("probe.depth", self.probe.depth),
            ("probe.wall", self.probe.wall),
            ("turn_debounce", self.turn_debounce),
            ("removal_delay", self.removal_delay),
        ];
        for (field, value) in non_negative {
            // Also catches NaN.
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.attack_range > self.detection_range {
            return Err(ConfigError::AttackBeyondDetection {
                attack: self.attack_range,
                detection: self.detection_range,
            });
        }
        if !(0.0..=1.0).contains(&self.stun_chance) {
            return Err(ConfigError::Probability {
                field: "stun_chance",
                value: self.stun_chance,
            });
        }
        if self.max_health <= 0 {
            return Err(ConfigError::NonPositiveHealth(self.max_health));
        }
        if self.attack.hit_delay > self.attack.windup {
            return Err(ConfigError::HitAfterWindup {
                hit_delay: self.attack.hit_delay,
                windup: self.attack.windup,
            });
        }
        if !(self.hit_range_multiplier >= 1.0) {
            return Err(ConfigError::HitRangeMultiplier(self.hit_range_multiplier));
        }
        if self.attack_variants == 0 {
            return Err(ConfigError::NoAttackVariants);
        }
        Ok(())
    }

    /// Reach of the hit test, including slop.
    pub fn hit_range(&self) -> f32 {
        self.attack_range * self.hit_range_multiplier
    }
}

/// The enemy kinds shipped with the game.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Archetype {
    /// Ground brute that is staggered by every hit.
    Boar,
    /// Ground melee unit with two swings.
    Skeleton,
    /// Dashing boss that only sometimes flinches.
    SkeletonBoss,
    /// Contact-damage crawler.
    Slime,
    /// Hangs asleep until something comes close.
    Bat,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Archetype::Boar,
        Archetype::Skeleton,
        Archetype::SkeletonBoss,
        Archetype::Slime,
        Archetype::Bat,
    ];

    /// Registry key, matching the data file stem.
    pub fn key(self) -> &'static str {
        match self {
            Archetype::Boar => "boar",
            Archetype::Skeleton => "skeleton",
            Archetype::SkeletonBoss => "skeleton_boss",
            Archetype::Slime => "slime",
            Archetype::Bat => "bat",
        }
    }

    pub fn config(self) -> EnemyConfig {
        match self {
            Archetype::Boar => EnemyConfig {
                patrol_speed: 2.0,
                chase_speed: 5.0,
                patrol_range: 3.0,
                detection_range: 8.0,
                attack_range: 1.2,
                contact_range: 0.0,
                max_health: 80,
                attack_damage: 15,
                contact_damage: 0,
                attack_cooldown: 1.2,
                contact_cooldown: 0.0,
                hit_stun_duration: 0.3,
                stun_chance: 1.0,
                capabilities: Capabilities {
                    can_stun: true,
                    ..Default::default()
                },
                attack: AttackTiming::default(),
                hit_range_multiplier: 1.3,
                attack_variants: 1,
                dash: DashTuning::default(),
                knockback: Knockback {
                    horizontal: 3.0,
                    vertical: 2.0,
                },
                probe: ProbeReach {
                    ahead: 0.25,
                    depth: 0.8,
                    wall: 0.6,
                },
                turn_debounce: 0.4,
                removal_delay: 1.5,
            },
            Archetype::Skeleton => EnemyConfig {
                patrol_speed: 2.0,
                chase_speed: 2.0,
                patrol_range: 3.0,
                detection_range: 5.0,
                attack_range: 1.0,
                contact_range: 0.0,
                max_health: 3,
                attack_damage: 1,
                contact_damage: 0,
                attack_cooldown: 1.0,
                contact_cooldown: 0.0,
                hit_stun_duration: 0.0,
                stun_chance: 0.0,
                capabilities: Capabilities::default(),
                attack: AttackTiming {
                    windup: 0.4,
                    hit_delay: 0.3,
                    recovery: 0.4,
                },
                hit_range_multiplier: 1.2,
                attack_variants: 2,
                dash: DashTuning::default(),
                knockback: Knockback::default(),
                probe: ProbeReach {
                    ahead: 0.5,
                    depth: 1.0,
                    wall: 0.5,
                },
                turn_debounce: 0.5,
                removal_delay: 1.0,
            },
            Archetype::SkeletonBoss => EnemyConfig {
                patrol_speed: 2.0,
                chase_speed: 2.0,
                patrol_range: 3.0,
                detection_range: 7.0,
                attack_range: 1.2,
                contact_range: 0.0,
                max_health: 10,
                attack_damage: 2,
                contact_damage: 0,
                attack_cooldown: 1.5,
                contact_cooldown: 0.0,
                hit_stun_duration: 1.5,
                stun_chance: 1.0 / 3.0,
                capabilities: Capabilities {
                    can_dash: true,
                    can_stun: true,
                    ..Default::default()
                },
                attack: AttackTiming {
                    windup: 0.4,
                    hit_delay: 0.35,
                    recovery: 0.5,
                },
                hit_range_multiplier: 1.3,
                attack_variants: 2,
                dash: DashTuning {
                    speed: 8.0,
                    duration: 0.4,
                    cooldown: 4.0,
                },
                knockback: Knockback {
                    horizontal: 1.0,
                    vertical: 0.0,
                },
                probe: ProbeReach {
                    ahead: 0.6,
                    depth: 1.3,
                    wall: 0.7,
                },
                turn_debounce: 0.8,
                removal_delay: 1.5,
            },
            Archetype::Slime => EnemyConfig {
                patrol_speed: 1.5,
                chase_speed: 3.5,
                patrol_range: 4.0,
                detection_range: 6.0,
                attack_range: 0.6,
                contact_range: 0.6,
                max_health: 40,
                attack_damage: 0,
                contact_damage: 10,
                attack_cooldown: 0.0,
                contact_cooldown: 0.8,
                hit_stun_duration: 0.0,
                stun_chance: 0.0,
                capabilities: Capabilities {
                    contact_damage_only: true,
                    ..Default::default()
                },
                attack: AttackTiming::default(),
                hit_range_multiplier: 1.0,
                attack_variants: 1,
                dash: DashTuning::default(),
                knockback: Knockback {
                    horizontal: 2.0,
                    vertical: 1.5,
                },
                probe: ProbeReach {
                    ahead: 0.2,
                    depth: 0.6,
                    wall: 0.45,
                },
                turn_debounce: 0.4,
                removal_delay: 1.2,
            },
            Archetype::Bat => EnemyConfig {
                patrol_speed: 2.0,
                chase_speed: 2.0,
                patrol_range: 3.0,
                detection_range: 6.0,
                attack_range: 1.5,
                contact_range: 0.0,
                max_health: 1,
                attack_damage: 1,
                contact_damage: 0,
                attack_cooldown: 1.0,
                contact_cooldown: 0.0,
                hit_stun_duration: 0.0,
                stun_chance: 0.0,
                capabilities: Capabilities {
                    starts_dormant: true,
                    ..Default::default()
                },
                attack: AttackTiming {
                    windup: 0.25,
                    hit_delay: 0.2,
                    recovery: 0.3,
                },
                hit_range_multiplier: 1.0,
                attack_variants: 1,
                dash: DashTuning::default(),
                knockback: Knockback::default(),
                probe: ProbeReach {
                    ahead: 0.0,
                    depth: 0.0,
                    wall: 0.5,
                },
                turn_debounce: 0.4,
                removal_delay: 1.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for archetype in Archetype::ALL {
            assert_eq!(archetype.config().validate(), Ok(()), "{archetype:?}");
        }
    }

    #[test]
    fn rejects_negative_speed() {
        let mut config = Archetype::Boar.config();
        config.chase_speed = -1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "chase_speed",
                value: -1.0
            })
        );
    }

    #[test]
    fn rejects_nan_range() {
        let mut config = Archetype::Boar.config();
        config.patrol_range = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "patrol_range",
                ..
            })
        ));
    }

    #[test]
    fn rejects_attack_range_beyond_detection() {
        let mut config = Archetype::Boar.config();
        config.attack_range = 9.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::AttackBeyondDetection {
                attack: 9.0,
                detection: 8.0
            })
        );
    }

    #[test]
    fn rejects_bad_stun_chance_and_health() {
        let mut config = Archetype::SkeletonBoss.config();
        config.stun_chance = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::Probability { .. })));

        let mut config = Archetype::SkeletonBoss.config();
        config.max_health = 0;
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveHealth(0)));
    }

    #[test]
    fn rejects_hit_after_windup() {
        let mut config = Archetype::Skeleton.config();
        config.attack.hit_delay = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::HitAfterWindup { .. })));
    }

    #[test]
    fn hit_range_includes_slop() {
        let config = Archetype::Boar.config();
        assert!((config.hit_range() - 1.56).abs() < 1e-5);
    }

    #[test]
    fn parses_minimal_ron_with_defaults() {
        let source = r#"(
            patrol_speed: 1.0,
            chase_speed: 2.0,
            patrol_range: 2.0,
            detection_range: 4.0,
            attack_range: 1.0,
            max_health: 5,
            capabilities: (can_stun: true),
        )"#;
        let config: EnemyConfig = ron::from_str(source).expect("parse");
        assert!(config.capabilities.can_stun);
        assert!(!config.capabilities.can_dash);
        assert_eq!(config.turn_debounce, 0.4);
        assert_eq!(config.attack_variants, 1);
        assert_eq!(config.attack, AttackTiming::default());
        assert_eq!(config.validate(), Ok(()));
    }
}
