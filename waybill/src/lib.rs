#![doc = include_str!("../README.md")]

pub use waybill_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

#[cfg(feature = "jike")]
pub mod jike {
    //! Jike waybill aggregator support.
    pub use waybill_jike::*;
}

#[cfg(feature = "chaoneng")]
pub mod chaoneng {
    //! Chaoneng waybill aggregator support.
    pub use waybill_chaoneng::*;
}
