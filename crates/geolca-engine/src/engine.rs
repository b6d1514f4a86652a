//! The archetype engine.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use rayon::prelude::*;
use tracing::trace;

use geolca_core::{ArchetypeData, EngineError, ImpactResult, Parameters, Result};
use geolca_store::CoefficientStore;

use crate::{binder, evaluator, validator};

/// Evaluates plant designs against archetype regression models.
///
/// One engine serves any number of archetypes and any number of `evaluate`
/// calls; an archetype's tables are loaded once, on first use, and shared
/// read-only by every later call. The engine exposes no mutating
/// operations and is safe to share across threads.
///
/// # Examples
///
/// ```
/// use geolca_core::Parameters;
/// use geolca_engine::ArchetypeEngine;
///
/// let engine = ArchetypeEngine::preloaded([geolca_test::single_term("demo_plant").data()]);
/// let result = engine.evaluate("demo_plant", &Parameters::new()).unwrap();
/// assert_eq!(result.get("climate change"), Some(24.0));
/// ```
#[derive(Debug)]
pub struct ArchetypeEngine {
    store: Option<CoefficientStore>,
    cache: RwLock<HashMap<String, Arc<ArchetypeData>>>,
}

impl ArchetypeEngine {
    /// Creates an engine backed by a coefficient store.
    pub fn new(store: CoefficientStore) -> Self {
        ArchetypeEngine {
            store: Some(store),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an engine from already-built archetype data, with no backing
    /// store. Evaluating an id not present in `data` fails with
    /// [`EngineError::MissingCoefficientData`].
    pub fn preloaded(data: impl IntoIterator<Item = ArchetypeData>) -> Self {
        let cache = data
            .into_iter()
            .map(|d| (d.archetype().id.clone(), Arc::new(d)))
            .collect();
        ArchetypeEngine {
            store: None,
            cache: RwLock::new(cache),
        }
    }

    /// Evaluates one parameter set against one archetype.
    ///
    /// Orchestrates the whole pipeline: table load (cached per archetype) →
    /// range validation → operand binding → formula evaluation. The result
    /// holds one (category, value) entry per table row, in row order.
    ///
    /// # Errors
    ///
    /// Any of [`EngineError`]'s four variants; a single violation aborts the
    /// call with no partial results.
    pub fn evaluate(&self, archetype_id: &str, parameters: &Parameters) -> Result<ImpactResult> {
        let data = self.archetype_data(archetype_id)?;
        evaluate_with(&data, parameters)
    }

    /// Evaluates many parameter sets against one archetype in parallel,
    /// loading its tables once.
    ///
    /// Results are returned in input order. An invalid parameter set fails
    /// the whole batch, matching the single-call abort semantics.
    pub fn evaluate_many(
        &self,
        archetype_id: &str,
        parameter_sets: &[Parameters],
    ) -> Result<Vec<ImpactResult>> {
        let data = self.archetype_data(archetype_id)?;
        parameter_sets
            .par_iter()
            .map(|parameters| evaluate_with(&data, parameters))
            .collect()
    }

    /// Cached archetype lookup, falling back to the store on first use.
    fn archetype_data(&self, archetype_id: &str) -> Result<Arc<ArchetypeData>> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(data) = cache.get(archetype_id) {
            return Ok(Arc::clone(data));
        }
        drop(cache);

        let store = self
            .store
            .as_ref()
            .ok_or_else(|| EngineError::MissingCoefficientData(archetype_id.to_string()))?;
        let data = Arc::new(store.load(archetype_id)?);

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        // A racing load of the same archetype is harmless; keep the first.
        Ok(Arc::clone(
            cache
                .entry(archetype_id.to_string())
                .or_insert_with(|| data),
        ))
    }
}

/// Validate → bind the six operand tables → evaluate. Pure per call; the
/// shared data is never written.
fn evaluate_with(data: &ArchetypeData, parameters: &Parameters) -> Result<ImpactResult> {
    validator::check_ranges(parameters, data.valid_ranges())?;

    let [x, y, z, u, v, w] = data.operands();
    let x = binder::bind(x, parameters)?;
    let y = binder::bind(y, parameters)?;
    let z = binder::bind(z, parameters)?;
    let u = binder::bind(u, parameters)?;
    let v = binder::bind(v, parameters)?;
    let w = binder::bind(w, parameters)?;

    let result = evaluator::evaluate(
        data.categories(),
        data.alpha(),
        data.beta(),
        data.gamma(),
        &x,
        &y,
        &z,
        &u,
        &v,
        &w,
    );
    trace!(
        archetype = data.archetype().id.as_str(),
        categories = result.len(),
        "impact model evaluated"
    );
    Ok(result)
}
