//! Pricing table types
//!
//! Defines tiered (bracket) price schedules and the flat no-reply rate.
//! The actual cost evaluation logic is in the `pricing` module.

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// A single tier in a bracket-style price schedule.
///
/// Units falling within `[min, max)` are charged `unit_price` each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    /// Quantity floor where this tier begins
    pub min: f64,
    /// Quantity ceiling where this tier ends (exclusive)
    pub max: f64,
    /// Marginal price per unit inside this tier
    pub unit_price: f64,
}

impl Tier {
    fn validate(&self, index: usize) -> Result<(), TableError> {
        if self.min < 0.0 {
            return Err(TableError::NegativeFloor {
                index,
                min: self.min,
            });
        }
        if self.min >= self.max {
            return Err(TableError::InvertedTier {
                index,
                min: self.min,
                max: self.max,
            });
        }
        if self.unit_price < 0.0 {
            return Err(TableError::NegativePrice {
                index,
                price: self.unit_price,
            });
        }
        Ok(())
    }
}

/// An ordered set of tiers keyed by `min`.
///
/// Tiers are validated and re-sorted ascending by `min` at construction;
/// tables are immutable afterward, so evaluation never needs to sort or
/// re-validate. An empty table is legal and always evaluates to zero cost.
///
/// Tiers are NOT required to tile the quantity domain: overlapping tiers
/// double-count the overlapping range during evaluation. Callers that want
/// the stricter contract can run [`PricingTable::validate_tiling`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tier>", into = "Vec<Tier>")]
pub struct PricingTable {
    tiers: Vec<Tier>,
}

impl PricingTable {
    /// Build a table from tiers in any order.
    pub fn new(mut tiers: Vec<Tier>) -> Result<Self, TableError> {
        for (index, tier) in tiers.iter().enumerate() {
            tier.validate(index)?;
        }
        tiers.sort_by(|a, b| a.min.total_cmp(&b.min));
        Ok(Self { tiers })
    }

    /// Build from `(min, max, unit_price)` triples.
    pub fn from_rows(rows: &[(f64, f64, f64)]) -> Result<Self, TableError> {
        Self::new(
            rows.iter()
                .map(|&(min, max, unit_price)| Tier {
                    min,
                    max,
                    unit_price,
                })
                .collect(),
        )
    }

    /// Tiers in ascending `min` order.
    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Opt-in strict check that tiers tile the domain without overlap:
    /// `tier[i].max == tier[i+1].min` for every adjacent pair.
    ///
    /// Advisory only. Evaluation never calls this, so tables that fail the
    /// check still evaluate with the documented double-counting behavior.
    pub fn validate_tiling(&self) -> Result<(), TableError> {
        for (index, pair) in self.tiers.windows(2).enumerate() {
            let index = index + 1;
            if pair[1].min < pair[0].max {
                return Err(TableError::Overlap { index });
            }
            if pair[1].min > pair[0].max {
                return Err(TableError::Gap { index });
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<Tier>> for PricingTable {
    type Error = TableError;

    fn try_from(tiers: Vec<Tier>) -> Result<Self, TableError> {
        Self::new(tiers)
    }
}

impl From<PricingTable> for Vec<Tier> {
    fn from(table: PricingTable) -> Self {
        table.tiers
    }
}

/// Flat per-unit price for stages without bracket pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatRate {
    pub unit_price: f64,
}

impl FlatRate {
    pub fn new(unit_price: f64) -> Result<Self, TableError> {
        if unit_price < 0.0 {
            return Err(TableError::NegativePrice {
                index: 0,
                price: unit_price,
            });
        }
        Ok(Self { unit_price })
    }

    /// Cost of `quantity` units at the flat rate.
    #[must_use]
    pub fn cost(&self, quantity: f64) -> f64 {
        quantity * self.unit_price
    }
}

/// Price schedules for every charged funnel stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTables {
    /// Flat price per non-responding lead
    pub no_reply: FlatRate,
    /// Bracket schedule for responding leads
    pub leads: PricingTable,
    /// Bracket schedule for qualified leads
    pub qualified: PricingTable,
    /// Bracket schedule for booked meetings
    pub booked: PricingTable,
}

impl StageTables {
    /// The documented reference schedule (R$ values from the POC pricing
    /// agreement). Used by tests, benches, and as the CLI default.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            no_reply: FlatRate { unit_price: 0.20 },
            leads: PricingTable::from_rows(&[
                (0.0, 500.0, 5.00),
                (500.0, 1500.0, 3.80),
                (1500.0, 2000.0, 3.00),
                (2000.0, 3000.0, 2.40),
                (3000.0, 99_999.0, 2.00),
            ])
            .expect("reference leads table is valid"),
            qualified: PricingTable::from_rows(&[
                (0.0, 50.0, 20.00),
                (50.0, 100.0, 15.00),
                (100.0, 150.0, 10.00),
                (150.0, 99_999.0, 5.00),
            ])
            .expect("reference qualified table is valid"),
            booked: PricingTable::from_rows(&[
                (0.0, 20.0, 100.00),
                (20.0, 50.0, 80.00),
                (50.0, 100.0, 60.00),
                (100.0, 99_999.0, 50.00),
            ])
            .expect("reference booked table is valid"),
        }
    }
}
