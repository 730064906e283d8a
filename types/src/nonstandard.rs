use enum_iterator::Sequence;
use strum::{AsRefStr, Display, EnumString};

use crate::bellatrix::primitives::Wei;

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Sequence,
    AsRefStr,
    Display,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Phase {
    Phase0,
    Altair,
    Bellatrix,
    Capella,
    Deneb,
}

impl Phase {
    /// Whether blocks of this phase carry an execution payload and thus have blinded forms.
    #[must_use]
    pub fn has_execution_payload(self) -> bool {
        self >= Self::Bellatrix
    }
}

/// A block of any phase tagged with what a consumer needs to know without inspecting it.
///
/// `payload_value` cannot be derived from an execution payload header, so it is always zero for
/// blinded blocks.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Generic<T> {
    pub value: T,
    pub is_blinded: bool,
    pub payload_value: Wei,
}

impl<T> Generic<T> {
    #[must_use]
    pub fn full(value: T) -> Self {
        Self {
            value,
            is_blinded: false,
            payload_value: Wei::zero(),
        }
    }

    #[must_use]
    pub fn blinded(value: T) -> Self {
        Self {
            value,
            is_blinded: true,
            payload_value: Wei::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr as _;

    use enum_iterator::all;
    use test_case::test_case;

    use super::*;

    #[test_case("phase0", Phase::Phase0)]
    #[test_case("Capella", Phase::Capella)]
    #[test_case("DENEB", Phase::Deneb)]
    fn phase_parses_case_insensitively(name: &str, expected: Phase) {
        assert_eq!(Phase::from_str(name), Ok(expected));
    }

    #[test]
    fn phases_are_ordered_chronologically() {
        assert_eq!(
            all::<Phase>().map(|phase| phase.to_string()).collect::<Vec<_>>(),
            ["phase0", "altair", "bellatrix", "capella", "deneb"],
        );
    }

    #[test]
    fn only_execution_phases_have_payloads() {
        assert!(!Phase::Altair.has_execution_payload());
        assert!(Phase::Bellatrix.has_execution_payload());
        assert!(Phase::Deneb.has_execution_payload());
    }

    #[test]
    fn blinded_envelope_has_zero_payload_value() {
        let generic = Generic::blinded(3_u8);

        assert!(generic.is_blinded);
        assert!(generic.payload_value.is_zero());
        assert_eq!(generic.value, 3);
    }
}
