//! Simulation builder
//!
//! Fluent API for assembling a `SimulationConfig`. Pricing tables can be
//! supplied as `(min, max, unit_price)` rows; table validation errors and
//! out-of-range inputs surface when `build()` is called.
//!
//! # Example
//!
//! ```
//! use prospect_core::config::SimulationBuilder;
//!
//! let config = SimulationBuilder::new()
//!     .total_leads(2500.0)
//!     .response_rate(0.15)
//!     .qualification_rate(0.25)
//!     .booking_rate(0.33)
//!     .minimum_billing(1500.0)
//!     .no_reply_rate(0.20)
//!     .leads_rows(&[(0.0, 500.0, 5.00), (500.0, 99_999.0, 3.80)])
//!     .qualified_rows(&[(0.0, 99_999.0, 15.00)])
//!     .booked_rows(&[(0.0, 99_999.0, 80.00)])
//!     .build()
//!     .unwrap();
//! assert_eq!(config.total_leads, 2500.0);
//! ```

use crate::error::SimulationError;
use crate::model::{FlatRate, FunnelRates, PricingTable, StageTables};

use super::SimulationConfig;

/// Builder for [`SimulationConfig`] with a validating `build()`.
///
/// Starts from the reference schedule, so callers only override what they
/// care about.
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    total_leads: f64,
    rates: FunnelRates,
    minimum_billing: f64,
    no_reply_rate: f64,
    leads_rows: Vec<(f64, f64, f64)>,
    qualified_rows: Vec<(f64, f64, f64)>,
    booked_rows: Vec<(f64, f64, f64)>,
    tables: Option<StageTables>,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    #[must_use]
    pub fn new() -> Self {
        let reference = SimulationConfig::reference();
        Self {
            total_leads: reference.total_leads,
            rates: reference.rates,
            minimum_billing: reference.minimum_billing,
            no_reply_rate: reference.tables.no_reply.unit_price,
            leads_rows: Vec::new(),
            qualified_rows: Vec::new(),
            booked_rows: Vec::new(),
            tables: Some(reference.tables),
        }
    }

    #[must_use]
    pub fn total_leads(mut self, total_leads: f64) -> Self {
        self.total_leads = total_leads;
        self
    }

    #[must_use]
    pub fn response_rate(mut self, rate: f64) -> Self {
        self.rates.response = rate;
        self
    }

    #[must_use]
    pub fn qualification_rate(mut self, rate: f64) -> Self {
        self.rates.qualification = rate;
        self
    }

    #[must_use]
    pub fn booking_rate(mut self, rate: f64) -> Self {
        self.rates.booking = rate;
        self
    }

    #[must_use]
    pub fn rates(mut self, rates: FunnelRates) -> Self {
        self.rates = rates;
        self
    }

    #[must_use]
    pub fn minimum_billing(mut self, minimum_billing: f64) -> Self {
        self.minimum_billing = minimum_billing;
        self
    }

    /// Flat price per non-responding lead.
    #[must_use]
    pub fn no_reply_rate(mut self, unit_price: f64) -> Self {
        self.no_reply_rate = unit_price;
        self.tables = None;
        self
    }

    /// Replace the responding-leads schedule with `(min, max, price)` rows.
    #[must_use]
    pub fn leads_rows(mut self, rows: &[(f64, f64, f64)]) -> Self {
        self.leads_rows = rows.to_vec();
        self.tables = None;
        self
    }

    /// Replace the qualified-leads schedule with `(min, max, price)` rows.
    #[must_use]
    pub fn qualified_rows(mut self, rows: &[(f64, f64, f64)]) -> Self {
        self.qualified_rows = rows.to_vec();
        self.tables = None;
        self
    }

    /// Replace the booked-meetings schedule with `(min, max, price)` rows.
    #[must_use]
    pub fn booked_rows(mut self, rows: &[(f64, f64, f64)]) -> Self {
        self.booked_rows = rows.to_vec();
        self.tables = None;
        self
    }

    /// Supply complete pre-built stage tables, overriding any row edits.
    #[must_use]
    pub fn tables(mut self, tables: StageTables) -> Self {
        self.tables = Some(tables);
        self
    }

    /// Assemble and validate the configuration.
    pub fn build(self) -> Result<SimulationConfig, SimulationError> {
        let tables = match self.tables {
            Some(tables) => tables,
            None => {
                let reference = StageTables::reference();
                StageTables {
                    no_reply: FlatRate::new(self.no_reply_rate)?,
                    leads: if self.leads_rows.is_empty() {
                        reference.leads
                    } else {
                        PricingTable::from_rows(&self.leads_rows)?
                    },
                    qualified: if self.qualified_rows.is_empty() {
                        reference.qualified
                    } else {
                        PricingTable::from_rows(&self.qualified_rows)?
                    },
                    booked: if self.booked_rows.is_empty() {
                        reference.booked
                    } else {
                        PricingTable::from_rows(&self.booked_rows)?
                    },
                }
            }
        };

        let config = SimulationConfig {
            total_leads: self.total_leads,
            rates: self.rates,
            tables,
            minimum_billing: self.minimum_billing,
        };
        config.validate()?;
        Ok(config)
    }
}
