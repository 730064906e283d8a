use primitive_types::H384;

use crate::{collections::ByteVector, preset::Preset};

pub type Blob<P> = Box<ByteVector<<P as Preset>::BytesPerBlob>>;
pub type BlobIndex = u64;
pub type KzgCommitment = H384;
pub type KzgProof = H384;
