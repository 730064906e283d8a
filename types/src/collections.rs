//! Bounded collections used in containers.
//!
//! Every collection carries its bound in the type. Construction is the only place the bound is
//! checked, so a value of one of these types always satisfies it.

use core::{
    fmt::{Debug, Formatter, Result as FmtResult},
    hash::Hash,
    marker::PhantomData,
};

use derivative::Derivative;
use derive_more::{AsRef, Deref};
use thiserror::Error;
use typenum::Unsigned;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum CollectionError {
    #[error("expected list to have no more than {maximum} elements, found {actual} elements")]
    ListTooLong { maximum: usize, actual: usize },
    #[error("expected vector to have {expected} elements, found {actual} elements")]
    VectorSizeMismatch { expected: usize, actual: usize },
}

#[derive(Deref, Derivative)]
#[derivative(
    Clone(bound = "T: Clone"),
    PartialEq(bound = "T: PartialEq"),
    Eq(bound = "T: Eq"),
    Hash(bound = "T: Hash"),
    Default(bound = ""),
    Debug(bound = "T: Debug", transparent = "true")
)]
pub struct ContiguousList<T, N> {
    #[deref]
    elements: Box<[T]>,
    #[derivative(Debug = "ignore")]
    phantom: PhantomData<N>,
}

impl<T, N> AsRef<[T]> for ContiguousList<T, N> {
    fn as_ref(&self) -> &[T] {
        self.elements.as_ref()
    }
}

impl<T, N: Unsigned> TryFrom<Vec<T>> for ContiguousList<T, N> {
    type Error = CollectionError;

    fn try_from(vec: Vec<T>) -> Result<Self, Self::Error> {
        Self::validate_length(vec.len())?;
        Ok(Self::new_unchecked(vec.into()))
    }
}

// This could be a `From` impl if feature `generic_const_exprs` were stable.
impl<T, N: Unsigned, const SIZE: usize> TryFrom<[T; SIZE]> for ContiguousList<T, N> {
    type Error = CollectionError;

    fn try_from(array: [T; SIZE]) -> Result<Self, Self::Error> {
        Self::try_from_iter(array)
    }
}

impl<T, N> IntoIterator for ContiguousList<T, N> {
    type Item = T;
    type IntoIter = <Vec<T> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        // `Box::into_iter` cannot be called like a method until Rust 2024.
        Box::into_iter(self.elements)
    }
}

impl<'list, T, N> IntoIterator for &'list ContiguousList<T, N> {
    type Item = &'list T;
    type IntoIter = <&'list [T] as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, N> ContiguousList<T, N> {
    pub fn try_from_iter(elements: impl IntoIterator<Item = T>) -> Result<Self, CollectionError>
    where
        N: Unsigned,
    {
        let elements = Box::from_iter(elements);
        Self::validate_length(elements.len())?;
        Ok(Self::new_unchecked(elements))
    }

    #[must_use]
    pub fn map<U>(self, function: impl FnMut(T) -> U) -> ContiguousList<U, N> {
        ContiguousList::new_unchecked(self.into_iter().map(function).collect())
    }

    pub const fn validate_length(actual: usize) -> Result<(), CollectionError>
    where
        N: Unsigned,
    {
        let maximum = N::USIZE;

        if actual > maximum {
            return Err(CollectionError::ListTooLong { maximum, actual });
        }

        Ok(())
    }

    fn new_unchecked(elements: Box<[T]>) -> Self {
        Self {
            elements,
            phantom: PhantomData,
        }
    }
}

#[derive(Deref, AsRef, Derivative)]
#[derivative(
    Clone(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = ""),
    Default(bound = "")
)]
pub struct ByteList<N> {
    #[deref(forward)]
    #[as_ref(forward)]
    bytes: ContiguousList<u8, N>,
}

impl<N> ByteList<N> {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl<N: Unsigned> TryFrom<Vec<u8>> for ByteList<N> {
    type Error = CollectionError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        ContiguousList::try_from(bytes).map(|bytes| Self { bytes })
    }
}

impl<N: Unsigned, const SIZE: usize> TryFrom<[u8; SIZE]> for ByteList<N> {
    type Error = CollectionError;

    fn try_from(array: [u8; SIZE]) -> Result<Self, Self::Error> {
        ContiguousList::try_from(array).map(|bytes| Self { bytes })
    }
}

// We never format byte collections for users, but a readable `Debug` impl helps in test failures.
impl<N> Debug for ByteList<N> {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        write_hex(formatter, self.as_bytes())
    }
}

#[derive(Deref, AsRef, Derivative)]
#[derivative(Clone(bound = ""), PartialEq(bound = ""), Eq(bound = ""), Hash(bound = ""))]
pub struct ByteVector<N> {
    #[deref(forward)]
    #[as_ref(forward)]
    bytes: Box<[u8]>,
    phantom: PhantomData<N>,
}

impl<N: Unsigned> Default for ByteVector<N> {
    fn default() -> Self {
        Self::new_unchecked(vec![0; N::USIZE].into())
    }
}

impl<N: Unsigned> TryFrom<Vec<u8>> for ByteVector<N> {
    type Error = CollectionError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        let expected = N::USIZE;
        let actual = bytes.len();

        if actual != expected {
            return Err(CollectionError::VectorSizeMismatch { expected, actual });
        }

        Ok(Self::new_unchecked(bytes.into()))
    }
}

impl<N: Unsigned, const SIZE: usize> TryFrom<[u8; SIZE]> for ByteVector<N> {
    type Error = CollectionError;

    fn try_from(array: [u8; SIZE]) -> Result<Self, Self::Error> {
        array.to_vec().try_into()
    }
}

impl<N> Debug for ByteVector<N> {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        write_hex(formatter, self.as_bytes())
    }
}

impl<N> ByteVector<N> {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn new_unchecked(bytes: Box<[u8]>) -> Self {
        Self {
            bytes,
            phantom: PhantomData,
        }
    }
}

fn write_hex(formatter: &mut Formatter, bytes: &[u8]) -> FmtResult {
    formatter.write_str("0x")?;

    for byte in bytes {
        write!(formatter, "{byte:02x}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use test_case::test_case;
    use typenum::{U0, U2, U3, U4};

    use super::*;

    #[test_case(0)]
    #[test_case(2)]
    #[test_case(3)]
    fn contiguous_list_accepts_lengths_up_to_maximum(length: usize) {
        let list = ContiguousList::<u64, U3>::try_from(vec![7; length]);
        assert_eq!(list.map(|list| list.len()), Ok(length));
    }

    #[test]
    fn contiguous_list_rejects_length_above_maximum() {
        assert_eq!(
            ContiguousList::<u64, U3>::try_from(vec![1, 2, 3, 4]),
            Err(CollectionError::ListTooLong {
                maximum: 3,
                actual: 4,
            }),
        );
    }

    #[test]
    fn contiguous_list_preserves_order() -> Result<(), CollectionError> {
        let list = ContiguousList::<u64, U4>::try_from([4, 3, 2, 1])?;
        assert_eq!(list.into_iter().collect::<Vec<_>>(), [4, 3, 2, 1]);
        Ok(())
    }

    #[test]
    fn empty_list_fits_zero_maximum() {
        assert!(ContiguousList::<u8, U0>::try_from(vec![]).is_ok());
    }

    #[test_case(vec![],        Err(CollectionError::VectorSizeMismatch { expected: 2, actual: 0 }))]
    #[test_case(vec![1],       Err(CollectionError::VectorSizeMismatch { expected: 2, actual: 1 }))]
    #[test_case(vec![1, 2, 3], Err(CollectionError::VectorSizeMismatch { expected: 2, actual: 3 }))]
    fn byte_vector_rejects_wrong_length(bytes: Vec<u8>, expected: Result<(), CollectionError>) {
        assert_eq!(ByteVector::<U2>::try_from(bytes).map(|_| ()), expected);
    }

    #[test]
    fn byte_vector_default_is_zeroed() {
        assert_eq!(ByteVector::<U4>::default().as_bytes(), [0; 4]);
    }

    #[test]
    fn byte_collections_format_as_hex() -> Result<(), CollectionError> {
        let list = ByteList::<U4>::try_from(hex!("ab01"))?;
        let vector = ByteVector::<U2>::try_from(hex!("00ff"))?;

        assert_eq!(format!("{list:?}"), "0xab01");
        assert_eq!(format!("{vector:?}"), "0x00ff");

        Ok(())
    }
}
