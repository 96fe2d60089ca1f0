//! Tunables of the restrain job type.

/// Definition shared by every restrain job.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RestrainDef {
    /// Take the target captive as part of the job.
    pub make_target_prisoner:       bool,
    /// Lifetime of the `Annoyed` condition.
    pub annoyed_duration_ticks:     u64,
    /// Radius of the disturbance raised on capture, in cells.
    pub clamor_radius:              f32,
    /// Also offer non-violent breaks as targets.
    pub include_distressed_targets: bool,
}

impl Default for RestrainDef {
    fn default() -> Self {
        Self {
            make_target_prisoner:       true,
            annoyed_duration_ticks:     2_500,
            clamor_radius:              10.0,
            include_distressed_targets: false,
        }
    }
}
