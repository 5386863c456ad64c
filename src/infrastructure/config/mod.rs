//! Deploy configuration readers

mod samconfig;

pub use samconfig::TomlStackConfig;
