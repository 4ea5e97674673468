//! Hospital department catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Department the patient visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Department {
    Emergency,
    Cardiology,
    Orthopedics,
    Radiology,
    Pediatrics,
    Oncology,
    Neurology,
    GeneralMedicine,
    Surgery,
    ObstetricsGynecology,
    Other,
}

impl Department {
    pub const ALL: [Department; 11] = [
        Department::Emergency,
        Department::Cardiology,
        Department::Orthopedics,
        Department::Radiology,
        Department::Pediatrics,
        Department::Oncology,
        Department::Neurology,
        Department::GeneralMedicine,
        Department::Surgery,
        Department::ObstetricsGynecology,
        Department::Other,
    ];

    /// Wire code, e.g. `general-medicine`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Cardiology => "cardiology",
            Self::Orthopedics => "orthopedics",
            Self::Radiology => "radiology",
            Self::Pediatrics => "pediatrics",
            Self::Oncology => "oncology",
            Self::Neurology => "neurology",
            Self::GeneralMedicine => "general-medicine",
            Self::Surgery => "surgery",
            Self::ObstetricsGynecology => "obstetrics-gynecology",
            Self::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Emergency => "Emergency",
            Self::Cardiology => "Cardiology",
            Self::Orthopedics => "Orthopedics",
            Self::Radiology => "Radiology",
            Self::Pediatrics => "Pediatrics",
            Self::Oncology => "Oncology",
            Self::Neurology => "Neurology",
            Self::GeneralMedicine => "General Medicine",
            Self::Surgery => "Surgery",
            Self::ObstetricsGynecology => "Obstetrics Gynecology",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase().replace([' ', '_'], "-");
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == code)
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown department: {0}")]
pub struct UnknownDepartment(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_round_trips_codes() {
        for dept in Department::ALL {
            assert_eq!(dept.as_str().parse::<Department>().unwrap(), dept);
        }
    }

    #[test]
    fn test_lenient_parse() {
        assert_eq!("General Medicine".parse::<Department>().unwrap(), Department::GeneralMedicine);
        assert_eq!("obstetrics_gynecology".parse::<Department>().unwrap(), Department::ObstetricsGynecology);
        assert!("dermatology".parse::<Department>().is_err());
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&Department::GeneralMedicine).unwrap();
        assert_eq!(json, "\"general-medicine\"");
    }
}
