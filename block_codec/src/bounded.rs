//! Length checks and element-wise conversion of lists.
//!
//! The length of a wire list is checked against its maximum before any element is converted.

use typenum::Unsigned;
use types::collections::ContiguousList;

use crate::{
    error::{required, DecodeError, FieldError, WithPath},
    nested::decode_required,
    traits::{Decode, Encode},
};

pub fn verify_max_length<N: Unsigned>(length: usize) -> Result<(), FieldError> {
    ContiguousList::<(), N>::validate_length(length).map_err(Into::into)
}

pub fn decode_list_with<W, T, N, E>(
    wire: &[W],
    mut decode_element: impl FnMut(&W) -> Result<T, E>,
) -> Result<ContiguousList<T, N>, DecodeError>
where
    N: Unsigned,
    Result<T, E>: WithPath<T, Error = DecodeError>,
{
    verify_max_length::<N>(wire.len())?;

    let elements = wire
        .iter()
        .enumerate()
        .map(|(index, element)| decode_element(element).at_index(index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ContiguousList::try_from(elements).map_err(FieldError::from)?)
}

/// Decodes a list of objects. A `null` element fails with [`FieldError::Nil`] at its index.
pub fn decode_list<T: Decode, N: Unsigned>(
    wire: &[Option<T::Wire>],
) -> Result<ContiguousList<T, N>, DecodeError> {
    decode_list_with(wire, |element| decode_required(element.as_ref()))
}

/// Like [`decode_list`], but a missing list is an error rather than an empty one.
pub fn decode_required_list<T: Decode, N: Unsigned>(
    wire: Option<&Vec<Option<T::Wire>>>,
) -> Result<ContiguousList<T, N>, DecodeError> {
    decode_list(required(wire)?)
}

pub fn encode_list<T: Encode, N>(list: &ContiguousList<T, N>) -> Vec<Option<T::Wire>> {
    list.iter().map(T::encode).map(Some).collect()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;
    use typenum::{U3, U4};
    use types::phase0::containers::Checkpoint;

    use crate::{phase0::containers as json, scalar::parse_decimal_u64};

    use super::*;

    #[test_case(0)]
    #[test_case(3)]
    fn lengths_up_to_maximum_pass(length: usize) {
        assert_eq!(verify_max_length::<U3>(length), Ok(()));
    }

    #[test]
    fn length_past_maximum_fails() {
        assert_eq!(
            verify_max_length::<U3>(4),
            Err(FieldError::ListTooLong {
                maximum: 3,
                actual: 4,
            }),
        );
    }

    #[test]
    fn too_long_list_fails_before_elements_are_converted() {
        let wire = ["not a number"; 4];
        let mut calls = 0;

        let result = decode_list_with::<_, _, U3, _>(&wire, |string| {
            calls += 1;
            parse_decimal_u64(string)
        });

        assert_eq!(
            result.map_err(|error| error.to_string()),
            Err("could not decode: expected list to have no more than 3 elements, found 4 elements"
                .to_owned()),
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn first_failing_element_is_reported_with_its_index() {
        let wire = ["1", "2", "x", "y"];

        let error = decode_list_with::<_, _, U4, _>(&wire, |string| {
            parse_decimal_u64(string)
        })
        .expect_err("third element is invalid");

        assert_eq!(
            error.to_string(),
            "could not decode [2]: invalid unsigned decimal integer",
        );
    }

    #[test]
    fn null_object_is_reported_with_its_index() {
        let wire = [None, Some(json::Checkpoint::default())];

        let error = decode_list::<Checkpoint, U4>(&wire).expect_err("first element is null");

        assert_eq!(error.to_string(), "could not decode [0]: nil value");
    }

    #[test]
    fn elements_keep_their_order() -> anyhow::Result<()> {
        let list = decode_list_with::<_, _, U3, _>(&["3", "1", "2"], |string| {
            parse_decimal_u64(string)
        })?;

        assert_eq!(list.as_ref(), [3, 1, 2]);

        Ok(())
    }
}
