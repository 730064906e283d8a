use typenum::U4;

pub type SyncCommitteeSubnetCount = U4;
