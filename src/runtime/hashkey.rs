use crate::runtime::object::{Object, ObjectType};


/// Identity of a hashable value inside a map.
/// Values of different types never share a key, even with equal bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    object_type: ObjectType,
    value: u64,
}

impl HashKey {
    pub fn new(object_type: ObjectType, value: u64) -> Self {
        HashKey { object_type, value }
    }

    pub fn object_type(&self) -> ObjectType { self.object_type }

    pub fn value(&self) -> u64 { self.value }
}

/// An entry of a map object, keeping the original key around for display
#[derive(Debug, Clone)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}


const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// 64-bit FNV-1a digest
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}
