#[cfg(feature = "dev")]
pub(crate) mod debug;
pub mod vjoy;
