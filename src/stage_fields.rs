use crate::errors::ConventionsError;
use std::fmt;
use std::str::FromStr;

// Record keys for stage descriptions
pub const NAME_KEY: &str = "name"; // arbitrary text descriptor
pub const MASS_PAYLOAD_KEY: &str = "m"; // payload mass, kg
pub const MASS_INITIAL_KEY: &str = "m0"; // initial mass of stage, kg
pub const MASS_FINAL_KEY: &str = "m1"; // final mass of stage, kg
pub const ISP_KEY: &str = "isp"; // specific impulse, s
pub const DELTA_V_DESIRED_KEY: &str = "dVdsrd"; // delta-V desired, m/s
pub const DELTA_V_KEY: &str = "dV"; // delta-V achieved, m/s
pub const MASS_RATIO_KEY: &str = "MR"; // mass ratio
pub const THRUST_PEAK_KEY: &str = "Tpeak"; // peak thrust
pub const THRUST_AVERAGE_KEY: &str = "Tavg"; // average thrust

/// Typed form of the stage record keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StageField {
    Name,
    MassPayload,
    MassInitial,
    MassFinal,
    Isp,
    DeltaVDesired,
    DeltaV,
    MassRatio,
    ThrustPeak,
    ThrustAverage,
}

impl StageField {
    pub const ALL: [StageField; 10] = [
        StageField::Name,
        StageField::MassPayload,
        StageField::MassInitial,
        StageField::MassFinal,
        StageField::Isp,
        StageField::DeltaVDesired,
        StageField::DeltaV,
        StageField::MassRatio,
        StageField::ThrustPeak,
        StageField::ThrustAverage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StageField::Name => NAME_KEY,
            StageField::MassPayload => MASS_PAYLOAD_KEY,
            StageField::MassInitial => MASS_INITIAL_KEY,
            StageField::MassFinal => MASS_FINAL_KEY,
            StageField::Isp => ISP_KEY,
            StageField::DeltaVDesired => DELTA_V_DESIRED_KEY,
            StageField::DeltaV => DELTA_V_KEY,
            StageField::MassRatio => MASS_RATIO_KEY,
            StageField::ThrustPeak => THRUST_PEAK_KEY,
            StageField::ThrustAverage => THRUST_AVERAGE_KEY,
        }
    }

    /// Unit label of the value stored under this key, if it has one.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            StageField::MassPayload | StageField::MassInitial | StageField::MassFinal => {
                Some("kg")
            }
            StageField::Isp => Some("s"),
            StageField::DeltaVDesired | StageField::DeltaV => Some("m/s"),
            // Thrust units are left to the record's producer
            StageField::Name
            | StageField::MassRatio
            | StageField::ThrustPeak
            | StageField::ThrustAverage => None,
        }
    }
}

impl fmt::Display for StageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageField {
    type Err = ConventionsError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        StageField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == key)
            .ok_or_else(|| ConventionsError::UnknownField(key.to_string()))
    }
}
