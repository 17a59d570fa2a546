use clap::Args;
use scratchwin_core::{
    DEFAULT_BRUSH_RADIUS, DEFAULT_REVEAL_THRESHOLD, DEFAULT_SURFACE_SIZE, RevealConfig,
};
use scratchwin_protocol::DEFAULT_ENDPOINT;
use yew::prelude::*;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct CampaignSettings {
    /// Form endpoint the submission is posted to
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Radius of one scratch mark, in canvas pixels
    #[arg(long, default_value_t = DEFAULT_BRUSH_RADIUS)]
    pub brush_radius: f64,

    /// Share of the cover that must be scratched before it falls away
    #[arg(long, default_value_t = DEFAULT_REVEAL_THRESHOLD)]
    pub threshold: f64,
}

impl CampaignSettings {
    pub(crate) fn reveal_config(&self) -> RevealConfig {
        RevealConfig::new(DEFAULT_SURFACE_SIZE, self.brush_radius, self.threshold)
    }
}

impl Default for CampaignSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            brush_radius: DEFAULT_BRUSH_RADIUS,
            threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_give_default_reveal_config() {
        assert_eq!(
            CampaignSettings::default().reveal_config(),
            RevealConfig::default()
        );
    }

    #[test]
    fn out_of_range_tunables_are_clamped() {
        let settings = CampaignSettings {
            brush_radius: -1.0,
            threshold: 4.0,
            ..Default::default()
        };

        let config = settings.reveal_config();

        assert_eq!(config.brush_radius, DEFAULT_BRUSH_RADIUS);
        assert!(config.threshold < 1.0);
    }
}
