//! Enemy data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::config::{Archetype, EnemyConfig};
use super::error::DataLoadError;

/// Directory scanned for enemy definition files.
pub const ENEMY_DATA_DIR: &str = "assets/data/enemies";

fn default_gravity_scale() -> f32 {
    3.0
}

/// Collider configuration for an enemy type (a vertical capsule).
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ColliderConfig {
    pub half_height: f32,
    pub radius: f32,
}

impl Default for ColliderConfig {
    fn default() -> Self {
        Self {
            half_height: 0.5,
            radius: 0.3,
        }
    }
}

/// Enemy definition loaded from a RON file.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct EnemyDefinition {
    pub name: String,
    pub config: EnemyConfig,
    #[serde(default)]
    pub collider: ColliderConfig,
    /// Zero for fliers.
    #[serde(default = "default_gravity_scale")]
    pub gravity_scale: f32,
}

impl EnemyDefinition {
    /// Built-in definition for one of the shipped archetypes.
    pub fn preset(archetype: Archetype) -> Self {
        let (name, collider, gravity_scale) = match archetype {
            Archetype::Boar => ("Boar", (0.15, 0.3), 3.0),
            Archetype::Skeleton => ("Skeleton", (0.4, 0.3), 3.0),
            Archetype::SkeletonBoss => ("Skeleton Lord", (0.6, 0.4), 3.0),
            Archetype::Slime => ("Slime", (0.05, 0.3), 3.0),
            Archetype::Bat => ("Bat", (0.05, 0.2), 0.0),
        };
        Self {
            name: name.to_string(),
            config: archetype.config(),
            collider: ColliderConfig {
                half_height: collider.0,
                radius: collider.1,
            },
            gravity_scale,
        }
    }
}

/// Parse and validate one definition. `path` is only used for error messages.
pub fn parse_definition(path: &str, contents: &str) -> Result<EnemyDefinition, DataLoadError> {
    let definition: EnemyDefinition =
        ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
    definition
        .config
        .validate()
        .map_err(|source| DataLoadError::Invalid {
            path: path.to_string(),
            source,
        })?;
    Ok(definition)
}

/// Read, parse, and validate one definition file.
pub fn read_definition(path: &Path) -> Result<EnemyDefinition, DataLoadError> {
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;
    parse_definition(&display, &contents)
}

/// Resource holding all known enemy definitions, keyed by type name.
#[derive(Resource)]
pub struct EnemyRegistry {
    pub definitions: HashMap<String, EnemyDefinition>,
}

impl Default for EnemyRegistry {
    fn default() -> Self {
        Self::with_presets()
    }
}

impl EnemyRegistry {
    /// A registry containing only the built-in archetypes.
    pub fn with_presets() -> Self {
        let definitions = Archetype::ALL
            .into_iter()
            .map(|archetype| {
                (
                    archetype.key().to_string(),
                    EnemyDefinition::preset(archetype),
                )
            })
            .collect();
        Self { definitions }
    }

    /// Get an enemy definition by type name.
    pub fn get(&self, enemy_type: &str) -> Option<&EnemyDefinition> {
        self.definitions.get(enemy_type)
    }

    /// Load every `.ron` file in `dir`, overriding definitions with the same
    /// file stem. Returns how many files were accepted.
    ///
    /// Files that fail to read, parse, or validate are logged and skipped.
    pub fn load_dir(&mut self, dir: &Path) -> usize {
        let Ok(entries) = fs::read_dir(dir) else {
            warn!("Failed to read enemy definitions directory {:?}", dir);
            return 0;
        };

        let mut loaded = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "ron") {
                continue;
            }
            let Some(enemy_type) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let enemy_type = enemy_type.to_string();

            match read_definition(&path) {
                Ok(definition) => {
                    info!("Loaded enemy definition: {} ({})", definition.name, enemy_type);
                    self.definitions.insert(enemy_type, definition);
                    loaded += 1;
                }
                Err(e) => error!("Rejected enemy definition: {}", e),
            }
        }
        loaded
    }
}

/// Load all enemy definitions from the assets/data/enemies/ directory.
pub fn load_enemy_definitions(mut registry: ResMut<EnemyRegistry>) {
    let enemies_dir = Path::new(ENEMY_DATA_DIR);

    if !enemies_dir.exists() {
        warn!(
            "Enemy definitions directory not found: {:?}, using built-in presets",
            enemies_dir
        );
        return;
    }

    let loaded = registry.load_dir(enemies_dir);
    info!(
        "Loaded {} enemy definition files ({} types known)",
        loaded,
        registry.definitions.len()
    );
}
