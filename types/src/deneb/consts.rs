use typenum::U32;

pub type BytesPerFieldElement = U32;
