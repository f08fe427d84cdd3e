//! # sGVI Core
//!
//! Core types, traits and the feature model for road-length weighted
//! aggregation of point scores (sGVI) over boundary regions.
//!
//! This crate provides:
//! - `SamplePoint`, `BoundaryRegion`, `LinearFeature`: the pipeline inputs
//! - `RegionResult`: one output row per boundary region
//! - `Feature` / `FeatureCollection`: geometry + attribute table exchange model
//! - `Error`: error kinds raised by the pipeline
//! - Algorithm traits for consistent API

pub mod error;
pub mod model;
pub mod result;
pub mod vector;

pub use error::{Error, Result};
pub use model::{BoundaryRegion, LinearFeature, SamplePoint, DEFAULT_SCORE_FIELD, ID_FIELD};
pub use result::{attach_results, FailureKind, RegionResult, RegionStatus};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::model::{BoundaryRegion, LinearFeature, SamplePoint};
    pub use crate::result::{FailureKind, RegionResult, RegionStatus};
    pub use crate::vector::{AttributeValue, Feature, FeatureCollection};
    pub use crate::{Algorithm, ParallelAlgorithm};
}

/// Core trait for all algorithms in sGVI.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}

/// Marker trait for algorithms that can be parallelized
pub trait ParallelAlgorithm: Algorithm {
    /// Execute in parallel using available cores
    fn execute_parallel(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;
}
