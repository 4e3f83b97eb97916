//! Building layout
//!
//! The floor count is fixed when a building is constructed and handed to
//! every component that needs boundary checks.

use serde::{Deserialize, Serialize};

/// A floor number. Valid floors are `1..=floor_count`.
pub type FloorNumber = u32;

/// Bottom floor of every building
pub const GROUND_FLOOR: FloorNumber = 1;

/// The inclusive range of floor numbers served by one building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorRange {
    floor_count: u32,
}

impl FloorRange {
    /// Create a range covering floors `1..=floor_count`, or `None` for zero floors
    pub fn new(floor_count: u32) -> Option<Self> {
        (floor_count >= 1).then_some(Self { floor_count })
    }

    /// Number of floors in the building
    pub fn floor_count(&self) -> u32 {
        self.floor_count
    }

    /// The bottom floor
    pub fn bottom(&self) -> FloorNumber {
        GROUND_FLOOR
    }

    /// The top floor
    pub fn top(&self) -> FloorNumber {
        self.floor_count
    }

    /// Whether `floor` lies inside the building
    pub fn contains(&self, floor: FloorNumber) -> bool {
        (GROUND_FLOOR..=self.floor_count).contains(&floor)
    }

    /// Zero-based storage index for `floor`
    pub fn index_of(&self, floor: FloorNumber) -> Option<usize> {
        self.contains(floor).then(|| (floor - GROUND_FLOOR) as usize)
    }

    /// Iterate every floor number from bottom to top
    pub fn floors(&self) -> impl Iterator<Item = FloorNumber> {
        GROUND_FLOOR..=self.floor_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_floors_rejected() {
        assert!(FloorRange::new(0).is_none());
        assert!(FloorRange::new(1).is_some());
    }

    #[test]
    fn test_bounds() {
        let range = FloorRange::new(5).unwrap();
        assert_eq!(range.bottom(), 1);
        assert_eq!(range.top(), 5);
        assert!(!range.contains(0));
        assert!(range.contains(1));
        assert!(range.contains(5));
        assert!(!range.contains(6));
    }

    #[test]
    fn test_index_of() {
        let range = FloorRange::new(3).unwrap();
        assert_eq!(range.index_of(1), Some(0));
        assert_eq!(range.index_of(3), Some(2));
        assert_eq!(range.index_of(0), None);
        assert_eq!(range.index_of(4), None);
        assert_eq!(range.floors().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
