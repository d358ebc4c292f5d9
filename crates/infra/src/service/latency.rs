use std::time::Duration;

/// The five service operations, for per-operation latency lookup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// Artificial delay applied before each service operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LatencyPolicy {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl LatencyPolicy {
    /// No delay at all.
    pub const fn zero() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// The same delay for every operation.
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            get: delay,
            create: delay,
            update: delay,
            delete: delay,
        }
    }

    pub fn delay_for(&self, op: Operation) -> Duration {
        match op {
            Operation::List => self.list,
            Operation::Get => self.get,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Default for LatencyPolicy {
    /// Reads are quicker than writes, as on the dashboard's mock API.
    fn default() -> Self {
        Self {
            list: Duration::from_millis(300),
            get: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(350),
            delete: Duration::from_millis(250),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reads_are_faster_than_writes() {
        let p = LatencyPolicy::default();
        assert!(p.get < p.list);
        assert!(p.list < p.create);
        assert_eq!(p.delay_for(Operation::Update), Duration::from_millis(350));
        assert_eq!(p.delay_for(Operation::Delete), Duration::from_millis(250));
    }

    #[test]
    fn zero_policy_is_zero() {
        assert!(LatencyPolicy::zero().is_zero());
        assert!(!LatencyPolicy::default().is_zero());
        assert!(LatencyPolicy::uniform(Duration::ZERO).is_zero());
    }
}
