//! Star ratings across the six satisfaction dimensions

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Highest star value. Zero means "not rated".
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RatingDimension {
    OverallSatisfaction,
    StaffInteraction,
    WaitTimes,
    FacilityCleanliness,
    TreatmentQuality,
    Communication,
}

impl RatingDimension {
    /// Display order on the ratings step
    pub const ALL: [RatingDimension; 6] = [
        RatingDimension::OverallSatisfaction,
        RatingDimension::StaffInteraction,
        RatingDimension::WaitTimes,
        RatingDimension::FacilityCleanliness,
        RatingDimension::TreatmentQuality,
        RatingDimension::Communication,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::OverallSatisfaction => "overallSatisfaction",
            Self::StaffInteraction => "staffInteraction",
            Self::WaitTimes => "waitTimes",
            Self::FacilityCleanliness => "facilityCleanliness",
            Self::TreatmentQuality => "treatmentQuality",
            Self::Communication => "communication",
        }
    }
}

impl fmt::Display for RatingDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One score per dimension. Missing keys on the wire read as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Ratings {
    pub overall_satisfaction: u8,
    pub staff_interaction: u8,
    pub wait_times: u8,
    pub facility_cleanliness: u8,
    pub treatment_quality: u8,
    pub communication: u8,
}

impl Ratings {
    pub fn get(&self, dimension: RatingDimension) -> u8 {
        match dimension {
            RatingDimension::OverallSatisfaction => self.overall_satisfaction,
            RatingDimension::StaffInteraction => self.staff_interaction,
            RatingDimension::WaitTimes => self.wait_times,
            RatingDimension::FacilityCleanliness => self.facility_cleanliness,
            RatingDimension::TreatmentQuality => self.treatment_quality,
            RatingDimension::Communication => self.communication,
        }
    }

    pub fn set(&mut self, dimension: RatingDimension, value: u8) {
        let slot = match dimension {
            RatingDimension::OverallSatisfaction => &mut self.overall_satisfaction,
            RatingDimension::StaffInteraction => &mut self.staff_interaction,
            RatingDimension::WaitTimes => &mut self.wait_times,
            RatingDimension::FacilityCleanliness => &mut self.facility_cleanliness,
            RatingDimension::TreatmentQuality => &mut self.treatment_quality,
            RatingDimension::Communication => &mut self.communication,
        };
        *slot = value;
    }

    /// Builder-style `set`
    pub fn with(mut self, dimension: RatingDimension, value: u8) -> Self {
        self.set(dimension, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (RatingDimension, u8)> + '_ {
        RatingDimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// At least one dimension has a score above zero
    pub fn any_rated(&self) -> bool {
        self.iter().any(|(_, v)| v > 0)
    }

    pub fn rated_count(&self) -> usize {
        self.iter().filter(|(_, v)| *v > 0).count()
    }

    /// Dimensions whose score exceeds the five-star scale
    pub fn out_of_range(&self) -> Vec<RatingDimension> {
        self.iter()
            .filter(|(_, v)| *v > MAX_RATING)
            .map(|(d, _)| d)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_is_unrated() {
        let ratings = Ratings::default();
        assert!(!ratings.any_rated());
        assert_eq!(ratings.rated_count(), 0);
    }

    #[test]
    fn test_single_rating_counts() {
        let ratings = Ratings::default().with(RatingDimension::WaitTimes, 1);
        assert!(ratings.any_rated());
        assert_eq!(ratings.get(RatingDimension::WaitTimes), 1);
        assert_eq!(ratings.get(RatingDimension::Communication), 0);
    }

    #[test]
    fn test_missing_keys_default_to_zero() {
        let ratings: Ratings = serde_json::from_str(r#"{"overallSatisfaction":4}"#).unwrap();
        assert_eq!(ratings.overall_satisfaction, 4);
        assert_eq!(ratings.rated_count(), 1);
    }

    #[test]
    fn test_out_of_range_detection() {
        let ratings = Ratings::default()
            .with(RatingDimension::Communication, 7)
            .with(RatingDimension::WaitTimes, 5);
        assert_eq!(ratings.out_of_range(), vec![RatingDimension::Communication]);
    }

    #[test]
    fn test_wire_keys() {
        let json = serde_json::to_value(Ratings::default()).unwrap();
        for dim in RatingDimension::ALL {
            assert!(json.get(dim.key()).is_some(), "missing {}", dim);
        }
    }
}
