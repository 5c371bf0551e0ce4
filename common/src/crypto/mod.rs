mod address;

pub use address::{Address, AddressError, ADDRESS_LENGTH};
