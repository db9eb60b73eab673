//! Integration tests for the prospecting cost engine
//!
//! Tests are organized by topic:
//! - `pricing` - Tiered table validation and bracket evaluation
//! - `funnel` - Funnel propagation
//! - `simulation` - Point simulation, minimum billing, derived metrics
//! - `sweeps` - Volume and grid sensitivity sweeps
//! - `builder` - Builder DSL and config serialization

mod pricing;
mod sweeps;
