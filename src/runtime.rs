pub mod object;
pub mod hashkey;
pub mod function;
pub mod environment;
pub mod errors;


pub use object::{Object, ObjectType, MapStore};
pub use hashkey::{HashKey, HashPair};
pub use function::Function;
pub use environment::{Environment, Env};
pub use errors::{RuntimeError, ErrorKind, ExecResult};


// Default Hasher

pub type DefaultBuildHasher = ahash::RandomState;
