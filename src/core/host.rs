/// Preview host — stands in for the deck application.
/// Drives one action through ready/tick on a fixed interval, saves its media
/// as PNG and logs its labels.
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::path::PathBuf;
use tokio::time::{self, Duration};
use tracing::{debug, info};

use crate::actions::{Action, MemorySurface};
use crate::config::LabelPosition;
use crate::plugin::ClocksPlugin;
use crate::services::time_source::TimeSource;

#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Action id or suffix, e.g. `AnalogClock`
    pub action_id: String,
    /// Ticks to run after ready; 0 runs until ctrl-c
    pub ticks: u64,
    pub interval: Duration,
    /// Where analog media is written; `None` skips saving
    pub output_path: Option<PathBuf>,
    pub time_source: TimeSource,
    /// Host settings dictionary handed to the action before it is shown
    pub settings: Option<serde_json::Value>,
}

pub struct PreviewHost {
    config: HostConfig,
    action: Box<dyn Action>,
    surface: MemorySurface,
    saved_media: u64,
}

impl PreviewHost {
    pub fn new(plugin: &ClocksPlugin, config: HostConfig) -> Result<Self> {
        let action = plugin
            .create_action(&config.action_id)
            .with_context(|| format!("Cannot start preview for '{}'", config.action_id))?;

        let schema = action.config_schema(plugin.locale());
        debug!(
            "Action '{}' settings schema: {}",
            config.action_id,
            serde_json::to_string(&schema).unwrap_or_default()
        );

        Ok(Self {
            config,
            action,
            surface: MemorySurface::new(),
            saved_media: 0,
        })
    }

    pub fn surface(&self) -> &MemorySurface {
        &self.surface
    }

    /// First draw. Applies configured settings if present, which redraws.
    pub fn ready(&mut self, now: NaiveDateTime) -> Result<()> {
        match &self.config.settings {
            Some(settings) => self
                .action
                .apply_settings(settings, now, &mut self.surface)
                .context("Action rejected settings")?,
            None => self.action.on_ready(now, &mut self.surface),
        }
        self.publish()
    }

    pub fn tick(&mut self, now: NaiveDateTime) -> Result<()> {
        self.action.on_tick(now, &mut self.surface);
        self.publish()
    }

    /// Main tick loop
    pub async fn run(&mut self) -> Result<()> {
        let mut interval = time::interval(self.config.interval);
        let mut ticks: u64 = 0;

        info!(
            "Starting preview of '{}' every {:?} ({} ticks)",
            self.config.action_id,
            self.config.interval,
            if self.config.ticks == 0 {
                "unlimited".to_string()
            } else {
                self.config.ticks.to_string()
            }
        );

        // First interval tick completes immediately
        interval.tick().await;
        self.ready(self.config.time_source.now())?;

        loop {
            if self.config.ticks != 0 && ticks >= self.config.ticks {
                break;
            }

            tokio::select! {
                _ = interval.tick() => {
                    self.tick(self.config.time_source.now())?;
                    ticks += 1;
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted after {} tick(s)", ticks);
                    break;
                }
            }
        }

        Ok(())
    }

    fn publish(&mut self) -> Result<()> {
        if let Some(path) = &self.config.output_path {
            if self.surface.media_updates() != self.saved_media {
                if let Some(media) = self.surface.media() {
                    media
                        .save_png(path)
                        .context("Failed to save PNG output")?;
                    debug!("Saved frame {} to {}", self.surface.media_updates(), path.display());
                }
                self.saved_media = self.surface.media_updates();
            }
        }

        for position in LabelPosition::ALL {
            if let Some(label) = self.surface.label(position) {
                info!(
                    "[{}] '{}' ({}pt)",
                    position.key(),
                    label.text,
                    label.font_size
                );
            }
        }
        Ok(())
    }
}
