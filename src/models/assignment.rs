//! Driver/route pairing.

use serde::{Deserialize, Serialize};

/// One matched pair in a solution: a driver, its route, and the exact
/// matrix cost of that pairing.
///
/// # Examples
///
/// ```
/// use u_assign::models::Assignment;
///
/// let a = Assignment::new("D1", "R2", 1.0);
/// assert_eq!(a.driver, "D1");
/// assert_eq!(a.route, "R2");
/// assert_eq!(a.cost, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Driver identifier.
    pub driver: String,
    /// Route identifier.
    pub route: String,
    /// Cost of assigning this driver to this route.
    pub cost: f64,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(driver: impl Into<String>, route: impl Into<String>, cost: f64) -> Self {
        Self {
            driver: driver.into(),
            route: route.into(),
            cost,
        }
    }
}
