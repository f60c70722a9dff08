//! Error types for enemy configuration and definition loading.

use thiserror::Error;

/// Reasons an [`EnemyConfig`](super::EnemyConfig) is rejected at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A range, speed, or duration is negative (or not a number).
    #[error("'{field}' must be a non-negative number, got {value}")]
    Negative { field: &'static str, value: f32 },

    /// The attack could start from further away than the enemy can see.
    #[error("attack range {attack} exceeds detection range {detection}")]
    AttackBeyondDetection { attack: f32, detection: f32 },

    /// A probability outside `[0, 1]`.
    #[error("'{field}' must be a probability in [0, 1], got {value}")]
    Probability { field: &'static str, value: f32 },

    /// Enemies must spawn alive.
    #[error("max health must be positive, got {0}")]
    NonPositiveHealth(i32),

    /// The hit lands after the windup has already ended.
    #[error("hit delay {hit_delay} is longer than the windup {windup}")]
    HitAfterWindup { hit_delay: f32, windup: f32 },

    /// The hit range slop factor shrinks the attack.
    #[error("hit range multiplier must be at least 1, got {0}")]
    HitRangeMultiplier(f32),

    /// At least one attack animation variant is required.
    #[error("attack variants must be at least 1")]
    NoAttackVariants,
}

/// Errors that can occur when loading enemy definition files.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// The file parsed but describes an unusable enemy.
    #[error("Invalid definition in '{path}': {source}")]
    Invalid {
        path: String,
        #[source]
        source: ConfigError,
    },
}
