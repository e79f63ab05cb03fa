use itertools::Itertools;

/// One roll group: every die value in roll order, the values dropped from
/// it in drop order, and the arithmetic applied to the kept sum
#[derive(Debug, Clone)]
pub struct Group {
    values: Vec<u64>,
    dropped: Vec<u64>,
    multiplier: i64,
    modifier: i64,
    total: i64,
}

impl Group {
    pub(crate) fn new(
        values: Vec<u64>,
        dropped: Vec<u64>,
        multiplier: i64,
        modifier: i64,
        total: i64,
    ) -> Self {
        Group {
            values,
            dropped,
            multiplier,
            modifier,
            total,
        }
    }

    /// Die values in the order they were thrown, dropped ones included
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Dropped die values in the order they were discarded
    pub fn dropped(&self) -> &[u64] {
        &self.dropped
    }

    pub fn total(&self) -> i64 {
        self.total
    }
}

impl std::fmt::Display for Group {
    // `(3 5 2 -2) *2 +1 = 17`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}", self.values.iter().format(" "))?;
        for value in &self.dropped {
            write!(f, " -{value}")?;
        }
        write!(f, ")")?;
        if self.multiplier != 1 {
            write!(f, " *{}", self.multiplier)?;
        }
        if self.modifier != 0 {
            write!(f, " {:+}", self.modifier)?;
        }
        write!(f, " = {}", self.total)
    }
}
