//! geolca - Parametric life-cycle impacts of geothermal power plants
//!
//! Estimates life-cycle environmental-impact indicators (climate change,
//! ecotoxicity, resource depletion, ...) for geothermal plant designs from
//! pre-fitted literature regression coefficients. Supply the design
//! parameters an archetype's tables reference; get one value back per
//! impact category.
//!
//! # Example
//!
//! ```rust
//! use geolca::prelude::*;
//!
//! // An engine over in-memory archetype data (production code points a
//! // `CoefficientStore` at the prepared table files instead).
//! let engine = ArchetypeEngine::preloaded([geolca_test::single_term("demo_plant").data()]);
//!
//! let result = engine.evaluate("demo_plant", &Parameters::new()).unwrap();
//! assert_eq!(result.get("climate change"), Some(24.0));
//! ```
//!
//! # Store-backed use
//!
//! ```rust,no_run
//! use geolca::prelude::*;
//! use geolca::{CoefficientStore, StoreConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoreConfig::load("geolca.toml")?;
//! let engine = ArchetypeEngine::new(CoefficientStore::new(config));
//!
//! let parameters = Parameters::new()
//!     .with("operational_CO2_emissions", 77.0)   // g/kWh
//!     .with("operational_CH4_emissions", 0.0)    // g/kWh
//!     .with("producers_capacity", 5.9)           // MW/well
//!     .with("average_depth_of_wells", 2250.0);   // m/well
//!
//! for entry in &engine.evaluate(well_known::CONVENTIONAL_POWER_20, &parameters)? {
//!     println!("{}: {}", entry.category, entry.value);
//! }
//! # Ok(())
//! # }
//! ```

// Data model
pub use geolca_core::{
    well_known, Archetype, ArchetypeData, CoefficientTable, EngineError, ImpactEntry,
    ImpactResult, OperandTable, Parameters, Result, Slot, TableKind, TableSet, ValidRange,
    ValidRanges,
};

// Backing store
pub use geolca_store::{CoefficientStore, ConfigError, StoreConfig};

// Evaluation
pub use geolca_engine::ArchetypeEngine;

pub mod prelude {
    pub use geolca_core::{
        well_known, EngineError, ImpactResult, Parameters, Slot, TableKind,
    };
    pub use geolca_engine::ArchetypeEngine;
}
