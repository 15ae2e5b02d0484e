//! Minecraft chat component data types.
//!
//! Enable the `ser` feature to get JSON (de)serialization of [`datatypes::Chat`] in the format
//! the client expects.

macro_rules! cfg_ser {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "ser")]
            $item
        )*
    };
}
pub(crate) use cfg_ser;

/// Data types used in chat components
pub mod datatypes;
