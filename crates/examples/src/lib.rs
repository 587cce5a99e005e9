//! Application-side use of `option::O`: parsing account addresses and
//! keeping a small balance registry.

pub mod address;
pub use address::{Address, ADDRESS_LEN};

pub mod registry;
pub use registry::{Account, Registry};
