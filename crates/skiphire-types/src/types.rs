//! Core value types: skip records, band enums, wizard steps

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A skip container available for hire at a location.
///
/// Field names match the remote skips-by-location API. Records are immutable
/// values; everything derived from them (VAT amount, total price) is computed
/// on demand so there is a single source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipRecord {
    /// Unique positive identifier
    pub id: u32,

    /// Container size in cubic yards
    pub size: u32,

    /// Hire period in days
    pub hire_period_days: u32,

    /// Transport cost (absent = not applicable)
    #[serde(default)]
    pub transport_cost: Option<f64>,

    /// Per-tonne disposal cost (absent = not applicable)
    #[serde(default)]
    pub per_tonne_cost: Option<f64>,

    /// Price excluding VAT
    pub price_before_vat: f64,

    /// VAT rate in percentage points (20 means 20%)
    pub vat: f64,

    /// Location postcode tag
    pub postcode: String,

    /// Location area tag
    #[serde(default)]
    pub area: String,

    /// Record must never appear in user-facing listings
    pub forbidden: bool,

    /// Informational only
    pub created_at: NaiveDateTime,

    /// Informational only
    pub updated_at: NaiveDateTime,

    /// Skip may be placed on a public road
    pub allowed_on_road: bool,

    /// Skip accepts heavy waste (soil, concrete, bricks, rubble)
    pub allows_heavy_waste: bool,
}

impl SkipRecord {
    /// VAT amount in pounds
    pub fn vat_amount(&self) -> f64 {
        self.price_before_vat * self.vat / 100.0
    }

    /// Total price including VAT. The only place this formula lives.
    pub fn total_price(&self) -> f64 {
        self.price_before_vat + self.vat_amount()
    }
}

/// Format a price in GBP for display (e.g. 288.0 -> "£288.00")
pub fn format_gbp(price: f64) -> String {
    format!("£{:.2}", price)
}

/// Heavy-waste percentage band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeavyWasteBand {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "up-to-5")]
    UpTo5,
    #[serde(rename = "5-to-20")]
    FiveToTwenty,
    #[serde(rename = "over-20")]
    OverTwenty,
}

impl HeavyWasteBand {
    /// All bands in display order
    pub const ALL: [HeavyWasteBand; 4] = [
        HeavyWasteBand::None,
        HeavyWasteBand::UpTo5,
        HeavyWasteBand::FiveToTwenty,
        HeavyWasteBand::OverTwenty,
    ];

    /// Stable wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            HeavyWasteBand::None => "none",
            HeavyWasteBand::UpTo5 => "up-to-5",
            HeavyWasteBand::FiveToTwenty => "5-to-20",
            HeavyWasteBand::OverTwenty => "over-20",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            HeavyWasteBand::None => "No heavy waste",
            HeavyWasteBand::UpTo5 => "Up to 5%",
            HeavyWasteBand::FiveToTwenty => "5-20%",
            HeavyWasteBand::OverTwenty => "Over 20%",
        }
    }
}

impl std::str::FromStr for HeavyWasteBand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(HeavyWasteBand::None),
            "up-to-5" => Ok(HeavyWasteBand::UpTo5),
            "5-to-20" => Ok(HeavyWasteBand::FiveToTwenty),
            "over-20" => Ok(HeavyWasteBand::OverTwenty),
            other => Err(Error::UnknownBand(other.to_string())),
        }
    }
}

impl std::fmt::Display for HeavyWasteBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Plasterboard disposal band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlasterboardBand {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "0-20")]
    ZeroToTwenty,
    #[serde(rename = "20-40")]
    TwentyToForty,
    #[serde(rename = "40-60")]
    FortyToSixty,
    #[serde(rename = "60-80")]
    SixtyToEighty,
    #[serde(rename = "80-100")]
    EightyToHundred,
    /// Customer disposes of plasterboard themselves
    #[serde(rename = "self-disposal")]
    SelfDisposal,
}

impl PlasterboardBand {
    /// All bands in display order
    pub const ALL: [PlasterboardBand; 7] = [
        PlasterboardBand::None,
        PlasterboardBand::ZeroToTwenty,
        PlasterboardBand::TwentyToForty,
        PlasterboardBand::FortyToSixty,
        PlasterboardBand::SixtyToEighty,
        PlasterboardBand::EightyToHundred,
        PlasterboardBand::SelfDisposal,
    ];

    /// Stable wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            PlasterboardBand::None => "none",
            PlasterboardBand::ZeroToTwenty => "0-20",
            PlasterboardBand::TwentyToForty => "20-40",
            PlasterboardBand::FortyToSixty => "40-60",
            PlasterboardBand::SixtyToEighty => "60-80",
            PlasterboardBand::EightyToHundred => "80-100",
            PlasterboardBand::SelfDisposal => "self-disposal",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            PlasterboardBand::None => "No plasterboard",
            PlasterboardBand::ZeroToTwenty => "Up to 20%",
            PlasterboardBand::TwentyToForty => "Up to 40%",
            PlasterboardBand::FortyToSixty => "Up to 60%",
            PlasterboardBand::SixtyToEighty => "Up to 80%",
            PlasterboardBand::EightyToHundred => "Up to 100%",
            PlasterboardBand::SelfDisposal => "I will dispose of it myself",
        }
    }
}

impl std::str::FromStr for PlasterboardBand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlasterboardBand::ALL
            .iter()
            .find(|band| band.as_str() == s)
            .copied()
            .ok_or_else(|| Error::UnknownBand(s.to_string()))
    }
}

impl std::fmt::Display for PlasterboardBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wizard step. The booking flow only ever moves forward through these
/// (plus one back edge from the heavy-waste detail screen).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    #[default]
    #[serde(rename = "waste-type")]
    WasteType,
    #[serde(rename = "heavy-waste-detail")]
    HeavyWasteDetail,
    #[serde(rename = "skip-selection")]
    SkipSelection,
}

impl Step {
    /// Stable wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::WasteType => "waste-type",
            Step::HeavyWasteDetail => "heavy-waste-detail",
            Step::SkipSelection => "skip-selection",
        }
    }

    /// Screen title shown for this step
    pub fn label(&self) -> &'static str {
        match self {
            Step::WasteType => "Waste Type",
            Step::HeavyWasteDetail => "Heavy Waste Details",
            Step::SkipSelection => "Choose Your Skip Size",
        }
    }
}

impl std::str::FromStr for Step {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waste-type" => Ok(Step::WasteType),
            "heavy-waste-detail" => Ok(Step::HeavyWasteDetail),
            "skip-selection" => Ok(Step::SkipSelection),
            other => Err(Error::UnknownStep(other.to_string())),
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
