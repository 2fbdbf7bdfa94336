// SPDX-License-Identifier: Apache-2.0
//! Ramp step identifiers and the correspondence between the two numbering
//! conventions.
//!
//! The design system numbers a hue family `10..=100` in steps of ten, lightest
//! first. The utility framework numbers it `50, 100..=900, 950`. Ten of the
//! eleven framework steps have a fixed design-system counterpart; `950` is
//! filled separately by the remapper.
//!
//! ```text
//!  framework   50  100  200  300  400  500  600  700  800  900  950
//!  source      10   20   30   40   50   60   70   80   90  100   --
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Errors ─────────────────────────────────────────────────────────────

/// A numeric code that is not a step of the requested ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{code} is not a valid ramp step")]
pub struct UnknownStep {
    /// The rejected code.
    pub code: u16,
}

/// Failure to parse a step from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStepError {
    #[error("step key `{0}` is not a number")]
    NotANumber(String),
    #[error(transparent)]
    Unknown(#[from] UnknownStep),
}

// ── Source steps ───────────────────────────────────────────────────────

/// A step on the design-system ramp, lightest (`10`) to darkest (`100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum SourceStep {
    S10,
    S20,
    S30,
    S40,
    S50,
    S60,
    S70,
    S80,
    S90,
    S100,
}

impl SourceStep {
    /// Every source step in lightness order.
    pub const ALL: [Self; 10] = [
        Self::S10,
        Self::S20,
        Self::S30,
        Self::S40,
        Self::S50,
        Self::S60,
        Self::S70,
        Self::S80,
        Self::S90,
        Self::S100,
    ];

    /// The lightest boundary key.
    pub const LIGHTEST: Self = Self::S10;

    /// The darkest boundary key.
    pub const DARKEST: Self = Self::S100;

    /// Numeric code as written in palette data.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::S10 => 10,
            Self::S20 => 20,
            Self::S30 => 30,
            Self::S40 => 40,
            Self::S50 => 50,
            Self::S60 => 60,
            Self::S70 => 70,
            Self::S80 => 80,
            Self::S90 => 90,
            Self::S100 => 100,
        }
    }

    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            10 => Self::S10,
            20 => Self::S20,
            30 => Self::S30,
            40 => Self::S40,
            50 => Self::S50,
            60 => Self::S60,
            70 => Self::S70,
            80 => Self::S80,
            90 => Self::S90,
            100 => Self::S100,
            _ => return None,
        })
    }

    /// The framework step this source step lands on.
    #[must_use]
    pub const fn target_step(self) -> TargetStep {
        match self {
            Self::S10 => TargetStep::T50,
            Self::S20 => TargetStep::T100,
            Self::S30 => TargetStep::T200,
            Self::S40 => TargetStep::T300,
            Self::S50 => TargetStep::T400,
            Self::S60 => TargetStep::T500,
            Self::S70 => TargetStep::T600,
            Self::S80 => TargetStep::T700,
            Self::S90 => TargetStep::T800,
            Self::S100 => TargetStep::T900,
        }
    }
}

// ── Target steps ───────────────────────────────────────────────────────

/// A step on the framework ramp, lightest (`50`) to darkest (`950`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum TargetStep {
    T50,
    T100,
    T200,
    T300,
    T400,
    T500,
    T600,
    T700,
    T800,
    T900,
    T950,
}

impl TargetStep {
    /// Every target step in lightness order.
    pub const ALL: [Self; 11] = [
        Self::T50,
        Self::T100,
        Self::T200,
        Self::T300,
        Self::T400,
        Self::T500,
        Self::T600,
        Self::T700,
        Self::T800,
        Self::T900,
        Self::T950,
    ];

    pub const LIGHTEST: Self = Self::T50;

    /// The step with no source counterpart.
    pub const DARKEST: Self = Self::T950;

    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::T50 => 50,
            Self::T100 => 100,
            Self::T200 => 200,
            Self::T300 => 300,
            Self::T400 => 400,
            Self::T500 => 500,
            Self::T600 => 600,
            Self::T700 => 700,
            Self::T800 => 800,
            Self::T900 => 900,
            Self::T950 => 950,
        }
    }

    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            50 => Self::T50,
            100 => Self::T100,
            200 => Self::T200,
            300 => Self::T300,
            400 => Self::T400,
            500 => Self::T500,
            600 => Self::T600,
            700 => Self::T700,
            800 => Self::T800,
            900 => Self::T900,
            950 => Self::T950,
            _ => return None,
        })
    }

    /// The source step copied into this step, or `None` for `950`.
    #[must_use]
    pub const fn source_step(self) -> Option<SourceStep> {
        Some(match self {
            Self::T50 => SourceStep::S10,
            Self::T100 => SourceStep::S20,
            Self::T200 => SourceStep::S30,
            Self::T300 => SourceStep::S40,
            Self::T400 => SourceStep::S50,
            Self::T500 => SourceStep::S60,
            Self::T600 => SourceStep::S70,
            Self::T700 => SourceStep::S80,
            Self::T800 => SourceStep::S90,
            Self::T900 => SourceStep::S100,
            Self::T950 => return None,
        })
    }
}

/// Fixed step correspondence, lightest first.
pub const STEP_CORRESPONDENCE: [(TargetStep, SourceStep); 10] = [
    (TargetStep::T50, SourceStep::S10),
    (TargetStep::T100, SourceStep::S20),
    (TargetStep::T200, SourceStep::S30),
    (TargetStep::T300, SourceStep::S40),
    (TargetStep::T400, SourceStep::S50),
    (TargetStep::T500, SourceStep::S60),
    (TargetStep::T600, SourceStep::S70),
    (TargetStep::T700, SourceStep::S80),
    (TargetStep::T800, SourceStep::S90),
    (TargetStep::T900, SourceStep::S100),
];

// ── Conversions ────────────────────────────────────────────────────────

macro_rules! step_conversions {
    ($step:ty) => {
        impl From<$step> for u16 {
            fn from(step: $step) -> Self {
                step.code()
            }
        }

        impl TryFrom<u16> for $step {
            type Error = UnknownStep;

            fn try_from(code: u16) -> Result<Self, Self::Error> {
                Self::from_code(code).ok_or(UnknownStep { code })
            }
        }

        impl FromStr for $step {
            type Err = ParseStepError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let code: u16 = s
                    .trim()
                    .parse()
                    .map_err(|_| ParseStepError::NotANumber(s.to_string()))?;
                Ok(Self::try_from(code)?)
            }
        }

        impl fmt::Display for $step {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

step_conversions!(SourceStep);
step_conversions!(TargetStep);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correspondence_is_monotonic() {
        for pair in STEP_CORRESPONDENCE.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 < pair[1].1);
        }
    }

    #[test]
    fn correspondence_agrees_with_lookups() {
        for (target, source) in STEP_CORRESPONDENCE {
            assert_eq!(target.source_step(), Some(source));
            assert_eq!(source.target_step(), target);
        }
    }

    #[test]
    fn darkest_target_has_no_source() {
        assert_eq!(TargetStep::DARKEST.source_step(), None);
        assert_eq!(
            TargetStep::ALL
                .iter()
                .filter(|step| step.source_step().is_none())
                .count(),
            1
        );
    }

    #[test]
    fn every_source_step_is_covered_once() {
        let mut covered: Vec<SourceStep> = STEP_CORRESPONDENCE.iter().map(|(_, s)| *s).collect();
        covered.sort();
        covered.dedup();
        assert_eq!(covered, SourceStep::ALL.to_vec());
    }

    #[test]
    fn codes_round_trip() {
        for step in SourceStep::ALL {
            assert_eq!(SourceStep::from_code(step.code()), Some(step));
        }
        for step in TargetStep::ALL {
            assert_eq!(TargetStep::from_code(step.code()), Some(step));
        }
    }

    #[test]
    fn parse_rejects_foreign_codes() {
        assert_eq!("950".parse::<TargetStep>(), Ok(TargetStep::T950));
        assert_eq!(
            "950".parse::<SourceStep>(),
            Err(ParseStepError::Unknown(UnknownStep { code: 950 }))
        );
        assert!(matches!(
            "dark".parse::<SourceStep>(),
            Err(ParseStepError::NotANumber(_))
        ));
    }

    #[test]
    fn steps_serialize_as_numbers() {
        assert_eq!(serde_json::to_string(&TargetStep::T950).unwrap(), "950");
        let step: SourceStep = serde_json::from_str("60").unwrap();
        assert_eq!(step, SourceStep::S60);
        assert!(serde_json::from_str::<SourceStep>("65").is_err());
    }
}
