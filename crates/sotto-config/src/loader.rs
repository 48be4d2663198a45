use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if transcription settings are out of range
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_stt_config()
    }

    fn validate_stt_config(&self) -> anyhow::Result<()> {
        if self.stt.model_path.as_os_str().is_empty() {
            anyhow::bail!("stt.model_path must not be empty");
        }

        if self.stt.decode.beam_size == 0 {
            anyhow::bail!("stt.decode.beam_size must be at least 1");
        }

        let threshold = self.stt.decode.vad.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            anyhow::bail!("stt.decode.vad.threshold must be between 0.0 and 1.0");
        }

        Ok(())
    }
}
