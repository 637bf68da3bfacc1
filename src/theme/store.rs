// SPDX-License-Identifier: MPL-2.0
//! Single source of truth for the active theme variant.
//!
//! The store owns the selection, persists it synchronously on every change,
//! and pushes the derived [`ColorScheme`] through a [`ThemeApplier`] so the
//! store itself stays testable without a rendering surface.

use super::{ColorScheme, ThemeVariant};
use crate::config;
use std::path::PathBuf;

/// Rendering-surface seam for theme side effects.
///
/// Implementations must be idempotent: re-applying the active variant is safe.
pub trait ThemeApplier {
    fn apply(&mut self, variant: ThemeVariant, scheme: &ColorScheme);
}

/// Production applier: records the active variant and scheme for the view
/// tree to read. Replacing the recorded values with the same ones is a no-op,
/// which satisfies the idempotency requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneColors {
    pub variant: ThemeVariant,
    pub scheme: ColorScheme,
}

impl SceneColors {
    #[must_use]
    pub fn new(variant: ThemeVariant) -> Self {
        Self {
            variant,
            scheme: variant.scheme(),
        }
    }
}

impl ThemeApplier for SceneColors {
    fn apply(&mut self, variant: ThemeVariant, scheme: &ColorScheme) {
        self.variant = variant;
        self.scheme = *scheme;
    }
}

/// Holds the active [`ThemeVariant`], persisting every mutation.
#[derive(Debug)]
pub struct ThemeStore {
    current: ThemeVariant,
    /// Config directory override; `None` uses the standard resolution chain.
    config_dir: Option<PathBuf>,
}

impl ThemeStore {
    /// Creates a store from an already-validated startup variant.
    #[must_use]
    pub fn new(initial: ThemeVariant) -> Self {
        Self {
            current: initial,
            config_dir: None,
        }
    }

    /// Creates a store that persists into `config_dir` (for tests).
    #[must_use]
    pub fn with_config_dir(initial: ThemeVariant, config_dir: PathBuf) -> Self {
        Self {
            current: initial,
            config_dir: Some(config_dir),
        }
    }

    /// Reads the persisted selection, falling back to the default variant when
    /// the stored value is absent or invalid.
    #[must_use]
    pub fn load(config_dir: Option<PathBuf>) -> Self {
        let (cfg, _warning) = config::load_with_override(config_dir.clone());
        Self {
            current: cfg.general.theme,
            config_dir,
        }
    }

    /// Returns the active variant.
    #[must_use]
    pub fn variant(&self) -> ThemeVariant {
        self.current
    }

    /// Returns the active variant's color scheme.
    #[must_use]
    pub fn scheme(&self) -> ColorScheme {
        self.current.scheme()
    }

    /// Stores `next`, writes it to disk, then applies it to the surface.
    ///
    /// A persistence failure is logged and otherwise ignored: the in-memory
    /// state and the applied scheme still change.
    pub fn set(&mut self, next: ThemeVariant, applier: &mut dyn ThemeApplier) {
        self.current = next;
        self.persist();
        applier.apply(next, &next.scheme());
    }

    /// Advances to the next variant in the fixed cycle order.
    pub fn cycle(&mut self, applier: &mut dyn ThemeApplier) -> ThemeVariant {
        let next = self.current.next();
        self.set(next, applier);
        next
    }

    /// Write-through of the current selection, preserving unrelated settings.
    fn persist(&self) {
        let (mut cfg, _warning) = config::load_with_override(self.config_dir.clone());
        cfg.general.theme = self.current;

        if let Err(error) = config::save_with_override(&cfg, self.config_dir.clone()) {
            eprintln!("Failed to save theme selection: {:?}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Test applier that records every application.
    #[derive(Default)]
    struct RecordingApplier {
        applied: Vec<(ThemeVariant, ColorScheme)>,
    }

    impl ThemeApplier for RecordingApplier {
        fn apply(&mut self, variant: ThemeVariant, scheme: &ColorScheme) {
            self.applied.push((variant, *scheme));
        }
    }

    #[test]
    fn set_then_get_round_trips_all_variants() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut store =
            ThemeStore::with_config_dir(ThemeVariant::Light, temp_dir.path().to_path_buf());
        let mut applier = RecordingApplier::default();

        for variant in ThemeVariant::ALL {
            store.set(variant, &mut applier);
            assert_eq!(store.variant(), variant);
        }
        assert_eq!(applier.applied.len(), 3);
    }

    #[test]
    fn cycle_three_times_returns_to_start() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut applier = RecordingApplier::default();

        for start in ThemeVariant::ALL {
            let mut store = ThemeStore::with_config_dir(start, temp_dir.path().to_path_buf());
            store.cycle(&mut applier);
            store.cycle(&mut applier);
            store.cycle(&mut applier);
            assert_eq!(store.variant(), start);
        }
    }

    #[test]
    fn set_persists_selection_across_load() {
        let temp_dir = tempdir().expect("create temp dir");
        let dir = temp_dir.path().to_path_buf();
        let mut applier = RecordingApplier::default();

        let mut store = ThemeStore::with_config_dir(ThemeVariant::Light, dir.clone());
        store.set(ThemeVariant::Gradient, &mut applier);

        let reloaded = ThemeStore::load(Some(dir));
        assert_eq!(reloaded.variant(), ThemeVariant::Gradient);
    }

    #[test]
    fn load_defaults_to_light_when_nothing_is_persisted() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = ThemeStore::load(Some(temp_dir.path().to_path_buf()));
        assert_eq!(store.variant(), ThemeVariant::Light);
    }

    #[test]
    fn load_defaults_to_light_on_invalid_persisted_value() {
        let temp_dir = tempdir().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join("settings.toml"),
            "[general]\ntheme = \"neon\"\n",
        )
        .expect("write config");

        let store = ThemeStore::load(Some(temp_dir.path().to_path_buf()));
        assert_eq!(store.variant(), ThemeVariant::Light);
    }

    #[test]
    fn set_survives_unwritable_storage() {
        // Point persistence at a path that cannot be created (a file in the
        // way of the directory). The in-memory state and the applier effect
        // must still land.
        let temp_dir = tempdir().expect("create temp dir");
        let blocked = temp_dir.path().join("blocked");
        std::fs::write(&blocked, "not a directory").expect("write blocker");

        let mut store =
            ThemeStore::with_config_dir(ThemeVariant::Light, blocked.join("settings-dir"));
        let mut applier = RecordingApplier::default();

        store.set(ThemeVariant::Dark, &mut applier);

        assert_eq!(store.variant(), ThemeVariant::Dark);
        assert_eq!(applier.applied.len(), 1);
        assert_eq!(applier.applied[0].0, ThemeVariant::Dark);
    }

    #[test]
    fn reapplying_the_same_variant_is_idempotent() {
        let mut surface = SceneColors::new(ThemeVariant::Dark);
        let before = surface.clone();

        surface.apply(ThemeVariant::Dark, &ThemeVariant::Dark.scheme());
        assert_eq!(surface, before);
    }

    #[test]
    fn scene_colors_tracks_applied_scheme() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut store =
            ThemeStore::with_config_dir(ThemeVariant::Light, temp_dir.path().to_path_buf());
        let mut surface = SceneColors::new(store.variant());

        store.set(ThemeVariant::Gradient, &mut surface);

        assert_eq!(surface.variant, ThemeVariant::Gradient);
        assert_eq!(surface.scheme, ThemeVariant::Gradient.scheme());
    }
}
