//! Builder utilities for configuring clustering runs.
//!
//! Exposes fluent configuration for the two schedules; `build()` validates
//! the numeric parameters and hands back a runnable entry point. The cluster
//! count is checked at run time instead, once the denoised point count is
//! known.

use crate::{
    error::{GenieError, Result},
    genie::{Genie, Gic},
};

/// Thresholds used by [`GicBuilder`] unless overridden.
pub const DEFAULT_GIC_THRESHOLDS: [f64; 3] = [0.3, 0.5, 0.7];

fn validate_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(GenieError::InvalidThreshold { got: threshold });
    }
    Ok(())
}

/// Configures and constructs [`Genie`] instances.
///
/// # Examples
/// ```
/// use genie_core::GenieBuilder;
///
/// let genie = GenieBuilder::new()
///     .with_cluster_count(4)
///     .with_gini_threshold(0.5)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(genie.cluster_count(), 4);
/// assert_eq!(genie.gini_threshold(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct GenieBuilder {
    cluster_count: usize,
    gini_threshold: f64,
    noise_leaves: bool,
}

impl Default for GenieBuilder {
    fn default() -> Self {
        Self {
            cluster_count: 2,
            gini_threshold: 0.3,
            noise_leaves: false,
        }
    }
}

impl GenieBuilder {
    /// Creates a builder populated with default parameters: two clusters,
    /// a Gini threshold of 0.3, and no noise-leaf handling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of clusters to produce.
    #[must_use]
    pub fn with_cluster_count(mut self, cluster_count: usize) -> Self {
        self.cluster_count = cluster_count;
        self
    }

    /// Returns the configured cluster count.
    #[must_use]
    #[rustfmt::skip]
    pub fn cluster_count(&self) -> usize { self.cluster_count }

    /// Sets the Gini threshold above which the correction fires.
    ///
    /// A threshold of 1 disables the correction entirely, reducing the
    /// schedule to single linkage on the MST.
    #[must_use]
    pub fn with_gini_threshold(mut self, gini_threshold: f64) -> Self {
        self.gini_threshold = gini_threshold;
        self
    }

    /// Returns the configured Gini threshold.
    #[must_use]
    #[rustfmt::skip]
    pub fn gini_threshold(&self) -> f64 { self.gini_threshold }

    /// Marks MST leaves as noise points, excluding them from clustering.
    #[must_use]
    pub fn with_noise_leaves(mut self, noise_leaves: bool) -> Self {
        self.noise_leaves = noise_leaves;
        self
    }

    /// Returns whether leaves are treated as noise.
    #[must_use]
    #[rustfmt::skip]
    pub fn noise_leaves(&self) -> bool { self.noise_leaves }

    /// Validates the configuration and constructs a [`Genie`] instance.
    ///
    /// # Errors
    /// Returns [`GenieError::InvalidThreshold`] when the Gini threshold is
    /// outside `[0, 1]` or not finite.
    pub fn build(self) -> Result<Genie> {
        validate_threshold(self.gini_threshold)?;
        Ok(Genie::new(
            self.cluster_count,
            self.gini_threshold,
            self.noise_leaves,
        ))
    }
}

/// Configures and constructs [`Gic`] instances.
///
/// # Examples
/// ```
/// use genie_core::GicBuilder;
///
/// let gic = GicBuilder::new()
///     .with_cluster_count(3)
///     .with_add_clusters(5)
///     .with_dimensionality(2.0)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(gic.cluster_count(), 3);
/// assert_eq!(gic.add_clusters(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct GicBuilder {
    cluster_count: usize,
    add_clusters: usize,
    dimensionality: f64,
    thresholds: Vec<f64>,
    noise_leaves: bool,
}

impl Default for GicBuilder {
    fn default() -> Self {
        Self {
            cluster_count: 2,
            add_clusters: 0,
            dimensionality: 1.0,
            thresholds: DEFAULT_GIC_THRESHOLDS.to_vec(),
            noise_leaves: false,
        }
    }
}

impl GicBuilder {
    /// Creates a builder populated with default parameters: two clusters, no
    /// extra over-merge clusters, dimensionality 1, and the thresholds in
    /// [`DEFAULT_GIC_THRESHOLDS`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of clusters to produce.
    #[must_use]
    pub fn with_cluster_count(mut self, cluster_count: usize) -> Self {
        self.cluster_count = cluster_count;
        self
    }

    /// Returns the configured cluster count.
    #[must_use]
    #[rustfmt::skip]
    pub fn cluster_count(&self) -> usize { self.cluster_count }

    /// Sets how many extra clusters the over-merge phase keeps before the
    /// criterion collapses them.
    #[must_use]
    pub fn with_add_clusters(mut self, add_clusters: usize) -> Self {
        self.add_clusters = add_clusters;
        self
    }

    /// Returns the configured number of extra over-merge clusters.
    #[must_use]
    #[rustfmt::skip]
    pub fn add_clusters(&self) -> usize { self.add_clusters }

    /// Sets the intrinsic dimensionality handed to the criterion.
    #[must_use]
    pub fn with_dimensionality(mut self, dimensionality: f64) -> Self {
        self.dimensionality = dimensionality;
        self
    }

    /// Returns the configured dimensionality.
    #[must_use]
    #[rustfmt::skip]
    pub fn dimensionality(&self) -> f64 { self.dimensionality }

    /// Replaces the Gini threshold sequence for the over-merge phase.
    ///
    /// An empty sequence skips the Genie phase entirely: the collapse then
    /// starts from all singletons and the criterion drives every merge.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Vec<f64>) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Returns the configured threshold sequence.
    #[must_use]
    #[rustfmt::skip]
    pub fn thresholds(&self) -> &[f64] { &self.thresholds }

    /// Marks MST leaves as noise points, excluding them from clustering.
    #[must_use]
    pub fn with_noise_leaves(mut self, noise_leaves: bool) -> Self {
        self.noise_leaves = noise_leaves;
        self
    }

    /// Returns whether leaves are treated as noise.
    #[must_use]
    #[rustfmt::skip]
    pub fn noise_leaves(&self) -> bool { self.noise_leaves }

    /// Validates the configuration and constructs a [`Gic`] instance.
    ///
    /// # Errors
    /// Returns [`GenieError::InvalidThreshold`] when any threshold is outside
    /// `[0, 1]` or not finite, and [`GenieError::InvalidDimensionality`] when
    /// the dimensionality is not a positive finite number.
    pub fn build(self) -> Result<Gic> {
        for &threshold in &self.thresholds {
            validate_threshold(threshold)?;
        }
        if !self.dimensionality.is_finite() || self.dimensionality <= 0.0 {
            return Err(GenieError::InvalidDimensionality {
                got: self.dimensionality,
            });
        }
        Ok(Gic::new(
            self.cluster_count,
            self.add_clusters,
            self.dimensionality,
            self.thresholds,
            self.noise_leaves,
        ))
    }
}
