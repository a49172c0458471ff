//! Pricing configuration.
//!
//! All tunable constants for the quote engine live here, loaded from the
//! environment once at startup and passed into both components explicitly.
//! Nothing reads the environment mid-request.

use std::collections::HashMap;
use std::env;

use anyhow::{bail, Context};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Story tiers: 1, 2, and 3+ stories.
pub const STORY_TIERS: usize = 3;

/// Tunable pricing constants for the quote engine.
///
/// Loaded once in `main` and shared read-only across requests; per-test
/// overrides just construct one directly.
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    /// Business address travel distance is measured from
    pub origin_address: String,
    /// Jobs farther than this (driving km) are rejected outright
    pub max_service_distance_km: f64,
    /// No travel surcharge at or below this distance
    pub surcharge_threshold_km: f64,
    /// Per-km rate applied beyond the threshold
    pub surcharge_rate_per_km: Decimal,
    /// Base price per story tier (1 / 2 / 3+)
    pub base_rates: [Decimal; STORY_TIERS],
    /// Lowercase material name -> risk/complexity multiplier (>= 1.0)
    pub material_multipliers: HashMap<String, Decimal>,
    /// Ratio between the quoted maximum and minimum
    pub margin_factor: Decimal,
    /// Properties above this square footage get a manual quote
    pub manual_review_sqft: u32,
    /// Bound on the routing provider call
    pub provider_timeout_secs: u64,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        let mut materials = HashMap::new();
        materials.insert("vinyl".to_string(), dec!(1.00));
        materials.insert("aluminum".to_string(), dec!(1.05));
        materials.insert("brick".to_string(), dec!(1.10));
        materials.insert("wood".to_string(), dec!(1.25));
        materials.insert("stucco".to_string(), dec!(1.35));

        Self {
            origin_address: "1200 Riverside Dr, Asheville, NC 28804".to_string(),
            max_service_distance_km: 45.0,
            surcharge_threshold_km: 20.0,
            surcharge_rate_per_km: dec!(2.50),
            base_rates: [dec!(350), dec!(500), dec!(700)],
            material_multipliers: materials,
            margin_factor: dec!(1.15),
            manual_review_sqft: 6000,
            provider_timeout_secs: 10,
        }
    }
}

impl QuoteConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset. Fails startup on unparsable or out-of-range
    /// values; no config error may surface mid-request.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(origin) = env::var("ORIGIN_ADDRESS") {
            config.origin_address = origin;
        }
        if let Some(v) = parse_env::<f64>("MAX_SERVICE_DISTANCE_KM")? {
            config.max_service_distance_km = v;
        }
        if let Some(v) = parse_env::<f64>("SURCHARGE_THRESHOLD_KM")? {
            config.surcharge_threshold_km = v;
        }
        if let Some(v) = parse_env::<Decimal>("SURCHARGE_RATE_PER_KM")? {
            config.surcharge_rate_per_km = v;
        }
        if let Some(v) = parse_env::<Decimal>("MARGIN_FACTOR")? {
            config.margin_factor = v;
        }
        if let Some(v) = parse_env::<u32>("MANUAL_REVIEW_SQFT")? {
            config.manual_review_sqft = v;
        }
        if let Some(v) = parse_env::<u64>("PROVIDER_TIMEOUT_SECS")? {
            config.provider_timeout_secs = v;
        }
        if let Ok(raw) = env::var("BASE_RATES") {
            config.base_rates = parse_base_rates(&raw)?;
        }
        if let Ok(raw) = env::var("MATERIAL_MULTIPLIERS") {
            config.material_multipliers = parse_multipliers(&raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Cheap sanity checks on the numeric constants.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.origin_address.trim().is_empty() {
            bail!("ORIGIN_ADDRESS must not be empty");
        }
        if self.max_service_distance_km <= 0.0 {
            bail!("MAX_SERVICE_DISTANCE_KM must be positive");
        }
        if self.surcharge_threshold_km < 0.0 {
            bail!("SURCHARGE_THRESHOLD_KM must not be negative");
        }
        if self.surcharge_rate_per_km < Decimal::ZERO {
            bail!("SURCHARGE_RATE_PER_KM must not be negative");
        }
        if self.margin_factor < Decimal::ONE {
            bail!("MARGIN_FACTOR must be >= 1.0");
        }
        for rate in &self.base_rates {
            if *rate < Decimal::ZERO {
                bail!("base rates must not be negative");
            }
        }
        for (name, multiplier) in &self.material_multipliers {
            if *multiplier < Decimal::ONE {
                bail!("material multiplier for '{}' must be >= 1.0", name);
            }
        }
        Ok(())
    }

    /// Base price for a story count. Anything at or above the top tier
    /// maps to the 3+ rate; this is a deliberate ceiling, not validation.
    pub fn base_rate_for(&self, story_count: u32) -> Decimal {
        match story_count {
            0 | 1 => self.base_rates[0],
            2 => self.base_rates[1],
            _ => self.base_rates[2],
        }
    }

    /// Multiplier for a material, looked up case-insensitively.
    /// Unrecognized materials are the baseline (1.0), never an error.
    pub fn multiplier_for(&self, material: &str) -> Decimal {
        self.material_multipliers
            .get(&material.trim().to_lowercase())
            .copied()
            .unwrap_or(Decimal::ONE)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> anyhow::Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<T>()
                .with_context(|| format!("invalid value for {}: '{}'", key, raw))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}

/// Parses "350,500,700" into the three story-tier rates.
fn parse_base_rates(raw: &str) -> anyhow::Result<[Decimal; STORY_TIERS]> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != STORY_TIERS {
        bail!("BASE_RATES must have exactly {} entries", STORY_TIERS);
    }
    let mut rates = [Decimal::ZERO; STORY_TIERS];
    for (i, part) in parts.iter().enumerate() {
        rates[i] = part
            .parse::<Decimal>()
            .with_context(|| format!("invalid base rate '{}'", part))?;
    }
    Ok(rates)
}

/// Parses "vinyl=1.00,brick=1.10" into the multiplier table.
fn parse_multipliers(raw: &str) -> anyhow::Result<HashMap<String, Decimal>> {
    let mut multipliers = HashMap::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (name, value) = entry
            .split_once('=')
            .with_context(|| format!("invalid multiplier entry '{}'", entry))?;
        let multiplier = value
            .trim()
            .parse::<Decimal>()
            .with_context(|| format!("invalid multiplier value '{}'", value))?;
        multipliers.insert(name.trim().to_lowercase(), multiplier);
    }
    if multipliers.is_empty() {
        bail!("MATERIAL_MULTIPLIERS must not be empty");
    }
    Ok(multipliers)
}
