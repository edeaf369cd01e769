//! Simulated memory bookkeeping.
//!
//! The ledger only records reservations against a fixed capacity. Nothing is
//! actually allocated.

use std::collections::BTreeMap;

use crate::utils::path::is_inside;

/// Reasons an allocation request is refused.
//
// // 内存分配请求被拒绝的原因。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AllocError {
    /// The name already holds a reservation.
    #[error("Memory already allocated for '{0}'.")]
    Duplicate(String),

    /// The requested size is zero or negative.
    #[error("Allocation size must be positive, got {0} KB.")]
    InvalidSize(i64),

    /// The request does not fit in the remaining capacity.
    #[error("Not enough free memory to allocate {requested} KB to '{name}'. Available free memory: {free} KB")]
    CapacityExceeded {
        name: String,
        requested: u64,
        free: u64,
    },
}

/// Snapshot of the ledger returned by [`AllocationLedger::usage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryUsage {
    pub total_kb: u64,
    pub used_kb: u64,
    pub free_kb: u64,
    /// `(name, reserved_kb)` pairs sorted by name.
    pub entries: Vec<(String, u64)>,
}

/// Capacity-bounded map from name to reserved size in KB.
///
/// Invariant: `used_kb` always equals the sum of the entries and never
/// exceeds `total_kb`.
#[derive(Debug, Clone)]
pub struct AllocationLedger {
    total_kb: u64,
    used_kb: u64,
    allocations: BTreeMap<String, u64>,
}

impl AllocationLedger {
    pub fn new(total_kb: u64) -> Self {
        Self {
            total_kb,
            used_kb: 0,
            allocations: BTreeMap::new(),
        }
    }

    pub fn total_kb(&self) -> u64 {
        self.total_kb
    }

    pub fn used_kb(&self) -> u64 {
        self.used_kb
    }

    pub fn free_kb(&self) -> u64 {
        self.total_kb - self.used_kb
    }

    /// Reserves `size_kb` for `name`.
    ///
    /// Checks run in order: duplicate name, non-positive size, capacity.
    /// A refused request leaves the ledger untouched.
    pub fn allocate(&mut self, name: &str, size_kb: i64) -> Result<(), AllocError> {
        if self.allocations.contains_key(name) {
            return Err(AllocError::Duplicate(name.to_string()));
        }
        if size_kb <= 0 {
            return Err(AllocError::InvalidSize(size_kb));
        }
        let requested = size_kb as u64;
        if requested > self.free_kb() {
            return Err(AllocError::CapacityExceeded {
                name: name.to_string(),
                requested,
                free: self.free_kb(),
            });
        }

        self.allocations.insert(name.to_string(), requested);
        self.used_kb += requested;
        Ok(())
    }

    /// Releases the reservation for `name`. Returns the released size, or
    /// `None` when there was nothing to release.
    pub fn deallocate(&mut self, name: &str) -> Option<u64> {
        let size = self.allocations.remove(name)?;
        self.used_kb -= size;
        Some(size)
    }

    /// Releases every reservation for a name inside directory `dir`.
    pub fn release_under(&mut self, dir: &str) -> Vec<(String, u64)> {
        let names: Vec<String> = self
            .allocations
            .keys()
            .filter(|name| is_inside(name, dir))
            .cloned()
            .collect();
        names
            .into_iter()
            .filter_map(|name| self.deallocate(&name).map(|size| (name, size)))
            .collect()
    }

    pub fn has_allocation(&self, name: &str) -> bool {
        self.allocations.contains_key(name)
    }

    pub fn usage(&self) -> MemoryUsage {
        MemoryUsage {
            total_kb: self.total_kb,
            used_kb: self.used_kb,
            free_kb: self.free_kb(),
            entries: self
                .allocations
                .iter()
                .map(|(name, size)| (name.clone(), *size))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_usage() {
        let mut ledger = AllocationLedger::new(1024);
        ledger.allocate("b.txt", 100).unwrap();
        ledger.allocate("a.txt", 24).unwrap();

        let usage = ledger.usage();
        assert_eq!(usage.total_kb, 1024);
        assert_eq!(usage.used_kb, 124);
        assert_eq!(usage.free_kb, 900);
        assert_eq!(
            usage.entries,
            vec![("a.txt".to_string(), 24), ("b.txt".to_string(), 100)]
        );
    }

    #[test]
    fn test_duplicate_allocation_keeps_usage() {
        let mut ledger = AllocationLedger::new(1024);
        ledger.allocate("f", 500).unwrap();
        assert_eq!(
            ledger.allocate("f", 10),
            Err(AllocError::Duplicate("f".to_string()))
        );
        assert_eq!(ledger.used_kb(), 500);
    }

    #[test]
    fn test_over_capacity_is_refused() {
        let mut ledger = AllocationLedger::new(1024);
        ledger.allocate("a", 1000).unwrap();
        let err = ledger.allocate("b", 25).unwrap_err();
        assert_eq!(
            err,
            AllocError::CapacityExceeded {
                name: "b".to_string(),
                requested: 25,
                free: 24
            }
        );
        assert_eq!(ledger.used_kb(), 1000);
        assert!(!ledger.has_allocation("b"));
    }

    #[test]
    fn test_exact_fit_is_allowed() {
        let mut ledger = AllocationLedger::new(8);
        ledger.allocate("a", 8).unwrap();
        assert_eq!(ledger.free_kb(), 0);
        assert!(ledger.allocate("b", 1).is_err());
    }

    #[test]
    fn test_non_positive_sizes() {
        let mut ledger = AllocationLedger::new(8);
        assert_eq!(ledger.allocate("a", 0), Err(AllocError::InvalidSize(0)));
        assert_eq!(ledger.allocate("a", -5), Err(AllocError::InvalidSize(-5)));
        assert_eq!(ledger.used_kb(), 0);
    }

    #[test]
    fn test_deallocate() {
        let mut ledger = AllocationLedger::new(100);
        ledger.allocate("a", 40).unwrap();
        assert_eq!(ledger.deallocate("a"), Some(40));
        assert_eq!(ledger.used_kb(), 0);
        assert_eq!(ledger.deallocate("a"), None);
        assert_eq!(ledger.deallocate("never"), None);
        // 释放后可以重新分配
        ledger.allocate("a", 100).unwrap();
    }

    #[test]
    fn test_release_under_directory() {
        let mut ledger = AllocationLedger::new(100);
        ledger.allocate("docs/a.txt", 10).unwrap();
        ledger.allocate("docs/deep/b.txt", 20).unwrap();
        ledger.allocate("docsx.txt", 30).unwrap();

        let released = ledger.release_under("docs");
        assert_eq!(
            released,
            vec![
                ("docs/a.txt".to_string(), 10),
                ("docs/deep/b.txt".to_string(), 20)
            ]
        );
        assert_eq!(ledger.used_kb(), 30);
        assert!(ledger.has_allocation("docsx.txt"));
    }
}
