use serde::{Deserialize, Serialize};

/// Aggregates computed server-side for the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_bookings: u64,
    pub total_workshops: u64,
    pub slots_filled: u64,
    #[serde(default)]
    pub slots_filled_percentage: f64,
    #[serde(default)]
    pub popular_workshops: Vec<PopularWorkshop>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopularWorkshop {
    pub title: String,
    pub bookings: u64,
}

impl DashboardStats {
    /// Largest booking count among the popular workshops, at least 1 so it
    /// can be used as a chart scale.
    pub fn peak_bookings(&self) -> u64 {
        self.popular_workshops
            .iter()
            .map(|w| w.bookings)
            .max()
            .unwrap_or(0)
            .max(1)
    }
}
