// SPDX-License-Identifier: MPL-2.0
//! Runtime editor settings resolved from [`Config`].
//!
//! Every value read from the config file is clamped to its documented range
//! here, so the engines can take their settings as given.

use crate::config::{self, Config};
use crate::domain::editing::HistoryCapacity;
use crate::state::ViewportSettings;
use std::time::Duration;

/// Handle and click tunables, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSettings {
    pub handle_size: f32,
    pub handle_border: f32,
    pub outline_width: f32,
    pub rotate_handle_offset: f32,
    /// Pointer travel at or below which a drag counts as a click.
    pub click_threshold: f32,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            handle_size: config::DEFAULT_HANDLE_SIZE,
            handle_border: config::DEFAULT_HANDLE_BORDER,
            outline_width: config::DEFAULT_OUTLINE_WIDTH,
            rotate_handle_offset: config::DEFAULT_ROTATE_HANDLE_OFFSET,
            click_threshold: config::DEFAULT_CLICK_THRESHOLD,
        }
    }
}

impl InteractionSettings {
    /// Handle hit radius in screen pixels (half the handle plus its border).
    #[must_use]
    pub fn handle_hit_radius(&self) -> f32 {
        self.handle_size / 2.0 + self.handle_border
    }
}

/// Everything the editor state machine is configured with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorSettings {
    pub history_capacity: HistoryCapacity,
    pub viewport: ViewportSettings,
    pub interaction: InteractionSettings,
    /// Delay between a layout change and the re-fit it triggers.
    pub layout_settle: Duration,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_capacity: HistoryCapacity::default(),
            viewport: ViewportSettings::default(),
            interaction: InteractionSettings::default(),
            layout_settle: Duration::from_millis(config::DEFAULT_LAYOUT_SETTLE_MS),
        }
    }
}

impl From<&Config> for EditorSettings {
    fn from(config: &Config) -> Self {
        let history_capacity = config
            .history
            .capacity
            .map_or_else(HistoryCapacity::default, HistoryCapacity::new);

        let viewport = &config.viewport;
        let viewport_settings = ViewportSettings {
            fit_padding: clamp_or(
                viewport.fit_padding,
                config::MIN_FIT_PADDING,
                config::MAX_FIT_PADDING,
                config::DEFAULT_FIT_PADDING,
            ),
            wheel_zoom_factor: clamp_or(
                viewport.wheel_zoom_factor,
                config::MIN_WHEEL_ZOOM_FACTOR,
                config::MAX_WHEEL_ZOOM_FACTOR,
                config::DEFAULT_WHEEL_ZOOM_FACTOR,
            ),
            zoom_step: clamp_or(
                viewport.zoom_step,
                config::MIN_ZOOM_STEP,
                config::MAX_ZOOM_STEP,
                config::DEFAULT_ZOOM_STEP,
            ),
        };
        let layout_settle = Duration::from_millis(
            viewport
                .layout_settle_ms
                .unwrap_or(config::DEFAULT_LAYOUT_SETTLE_MS)
                .min(config::MAX_LAYOUT_SETTLE_MS),
        );

        let interaction = &config.interaction;
        let defaults = InteractionSettings::default();
        let size = |value: Option<f32>, fallback: f32| {
            clamp_or(value, 0.0, config::MAX_INTERACTION_SIZE, fallback)
        };
        let interaction_settings = InteractionSettings {
            handle_size: size(interaction.handle_size, defaults.handle_size),
            handle_border: size(interaction.handle_border, defaults.handle_border),
            outline_width: size(interaction.outline_width, defaults.outline_width),
            rotate_handle_offset: size(
                interaction.rotate_handle_offset,
                defaults.rotate_handle_offset,
            ),
            click_threshold: size(interaction.click_threshold, defaults.click_threshold),
        };

        Self {
            history_capacity,
            viewport: viewport_settings,
            interaction: interaction_settings,
            layout_settle,
        }
    }
}

/// Clamps a configured value, falling back to `default` when unset or NaN.
fn clamp_or(value: Option<f32>, min: f32, max: f32, default: f32) -> f32 {
    match value {
        Some(v) if !v.is_nan() => v.clamp(min, max),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HistoryConfig, InteractionConfig, ViewportConfig};

    #[test]
    fn default_config_yields_default_settings() {
        let settings = EditorSettings::from(&Config::default());
        assert_eq!(settings, EditorSettings::default());
        assert_eq!(settings.history_capacity.value(), 21);
        assert_eq!(settings.layout_settle, Duration::from_millis(300));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            history: HistoryConfig { capacity: Some(1) },
            viewport: ViewportConfig {
                fit_padding: Some(-5.0),
                wheel_zoom_factor: Some(9.0),
                zoom_step: Some(f32::NAN),
                layout_settle_ms: Some(60_000),
            },
            interaction: InteractionConfig {
                handle_size: Some(500.0),
                click_threshold: Some(-1.0),
                ..InteractionConfig::default()
            },
        };
        let settings = EditorSettings::from(&config);

        assert_eq!(settings.history_capacity.value(), 2);
        assert_eq!(settings.viewport.fit_padding, 0.0);
        assert_eq!(settings.viewport.wheel_zoom_factor, config::MAX_WHEEL_ZOOM_FACTOR);
        assert_eq!(settings.viewport.zoom_step, config::DEFAULT_ZOOM_STEP);
        assert_eq!(
            settings.layout_settle,
            Duration::from_millis(config::MAX_LAYOUT_SETTLE_MS)
        );
        assert_eq!(settings.interaction.handle_size, config::MAX_INTERACTION_SIZE);
        assert_eq!(settings.interaction.click_threshold, 0.0);
        assert_eq!(settings.interaction.handle_border, config::DEFAULT_HANDLE_BORDER);
    }

    #[test]
    fn hit_radius_includes_border() {
        assert_eq!(InteractionSettings::default().handle_hit_radius(), 6.0);
    }
}
