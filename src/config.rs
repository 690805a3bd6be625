use serde::{Serialize, Deserialize};
use rand::SeedableRng;
use rand::rngs::StdRng;
use anyhow::{self, Context};
use std::path::Path;
use std::fs;

/// Settings for the random number generator handed to the sampling routines.
/// Can be built in code or parsed from a JSON object such as `{ "seed" : 42 }`.
/// Without a seed, the generator is seeded from system entropy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {

    #[serde(default)]
    pub seed : Option<u64>

}

impl SamplerConfig {

    pub fn seeded(seed : u64) -> Self {
        Self { seed : Some(seed) }
    }

    pub fn from_json(json : &str) -> Result<Self, anyhow::Error> {
        let cfg : SamplerConfig = serde_json::from_str(json)
            .context("Invalid sampler configuration")?;
        log::debug!("Loaded sampler configuration {:?}", cfg);
        Ok(cfg)
    }

    pub fn from_path<P>(path : P) -> Result<Self, anyhow::Error>
    where
        P : AsRef<Path>
    {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Unable to read sampler configuration at {}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String, anyhow::Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy()
        }
    }

}
