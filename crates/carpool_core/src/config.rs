use crate::error::CarpoolError;
use crate::matching::CategoryPolicy;

/// Seats offered by each driver when nothing else is configured.
pub const DEFAULT_MAX_CAPACITY: u32 = 4;

/// Which flavour of the pooling run to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolMode {
    /// Everyone shares one implicit category.
    #[default]
    Base,
    /// Passengers only ride with drivers leaving in the same departure category.
    ByDepartureTime,
}

impl PoolMode {
    pub fn category_policy(self) -> CategoryPolicy {
        match self {
            Self::Base => CategoryPolicy::Ignore,
            Self::ByDepartureTime => CategoryPolicy::MustMatch,
        }
    }

    /// Default grouped-result file name for this mode.
    pub fn output_file_name(self) -> &'static str {
        match self {
            Self::Base => "carpool_groups.csv",
            Self::ByDepartureTime => "carpool_groups_by_time.csv",
        }
    }

    pub fn is_category_aware(self) -> bool {
        matches!(self, Self::ByDepartureTime)
    }
}

/// Parameters for one pooling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Seats per driver, applied uniformly.
    pub max_capacity: u32,
    pub mode: PoolMode,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
            mode: PoolMode::default(),
        }
    }
}

impl PoolConfig {
    pub fn with_max_capacity(mut self, max_capacity: u32) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    pub fn with_mode(mut self, mode: PoolMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), CarpoolError> {
        if self.max_capacity == 0 {
            return Err(CarpoolError::InvalidCapacity(self.max_capacity));
        }
        Ok(())
    }
}
