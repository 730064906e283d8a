pub mod collections;
pub mod combined;
pub mod nonstandard;
pub mod preset;

pub mod phase0 {
    pub mod consts;
    pub mod containers;
    pub mod primitives;

    mod container_impls;
}

pub mod altair {
    pub mod consts;
    pub mod containers;
    pub mod primitives;

    mod container_impls;
}

pub mod bellatrix {
    pub mod containers;
    pub mod primitives;

    mod container_impls;
}

pub mod capella {
    pub mod containers;

    mod container_impls;
}

pub mod deneb {
    pub mod consts;
    pub mod containers;
    pub mod primitives;

    mod container_impls;
}
