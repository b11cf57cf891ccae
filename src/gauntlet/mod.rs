use anyhow::Context;
use regex::Regex;
use std::{path::Path, str::FromStr};

/// Largest delay tried before giving up on finding a safe one.
pub const MAX_DELAY: u64 = 5_000_000;

lazy_static! {
    static ref LAYER: Regex = Regex::new(r"^(\d+)\s*:\s*(\d+)$").unwrap();
}

/// A firewall layer at `depth` whose scanner sweeps `range` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    pub depth: u64,
    pub range: u64,
}

impl Layer {
    /// Picoseconds for the scanner to come back to the top.
    pub fn period(&self) -> u128 {
        2 * u128::from(self.range.saturating_sub(1))
    }

    /// Whether the scanner is at the top when a packet that left at `delay`
    /// reaches this layer.
    pub fn is_active(&self, delay: u64) -> bool {
        let period = self.period();
        period == 0 || (u128::from(delay) + u128::from(self.depth)) % period == 0
    }

    pub fn severity(&self) -> anyhow::Result<u64> {
        self.depth.checked_mul(self.range).ok_or_else(|| {
            anyhow!(
                "Severity of the layer at depth {} with range {} doesn't fit in a u64",
                self.depth,
                self.range
            )
        })
    }
}

impl FromStr for Layer {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let caps = LAYER
            .captures(line.trim())
            .ok_or_else(|| anyhow!("Expected \"depth: range\", got {:?}", line))?;

        let depth = caps[1].parse()?;
        let range = caps[2].parse()?;

        if range == 0 {
            anyhow::bail!("The layer at depth {} has no scanner range", depth);
        }

        Ok(Self { depth, range })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Firewall {
    layers: Vec<Layer>,
}

impl Firewall {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let firewall: Self = crate::util::read_input(path)?.parse()?;
        debug!("Loaded {} Firewall Layers", firewall.layers.len());
        Ok(firewall)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn is_caught(&self, delay: u64) -> bool {
        self.layers.iter().any(|layer| layer.is_active(delay))
    }

    /// Severity of a trip started without any delay.
    pub fn severity(&self) -> anyhow::Result<u64> {
        self.layers
            .iter()
            .filter(|layer| layer.is_active(0))
            .try_fold(0u64, |total, layer| {
                total
                    .checked_add(layer.severity()?)
                    .ok_or_else(|| anyhow!("Trip severity doesn't fit in a u64"))
            })
    }

    pub fn first_safe_delay(&self) -> anyhow::Result<u64> {
        let delay = (0..=MAX_DELAY)
            .find(|&delay| !self.is_caught(delay))
            .ok_or_else(|| anyhow!("No safe delay up to {}", MAX_DELAY))?;
        debug!("First Safe Delay: {}", delay);
        Ok(delay)
    }
}

impl FromStr for Firewall {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let mut layers = vec![];

        for (line_pos, line) in string.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let layer = line
                .parse()
                .with_context(|| format!("Couldn't parse the layer at line {}", line_pos + 1))?;
            layers.push(layer);
        }

        Ok(Self::new(layers))
    }
}
