//! Configuration values nested inside steps.
//!
//! Configurations come in four families: inputs, outputs, windows and clocks.
//! Each family is an enum over its built-in kinds plus a `Custom` variant, so
//! a step can only hold a configuration of the family it expects while new
//! kinds can still be described without touching this crate.
//!
//! Every kind exposes its kind tag and its declared fields through the
//! [`Configuration`] trait. The encoder only ever talks to that trait.

use crate::error::FlowError;
use std::fmt;

/// Declares a configuration family enum, its `Configuration` impl and the
/// `From` conversions from each member kind.
macro_rules! config_family {
    ( $(#[$meta:meta])* $family:ident { $( $variant:ident($kind:ty) ),* $(,)? } ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $family {
            $( $variant($kind), )*
            Custom($crate::config::CustomConfig),
        }

        impl $crate::config::Configuration for $family {
            fn kind(&self) -> &str {
                match self {
                    $( Self::$variant(config) => config.kind(), )*
                    Self::Custom(config) => config.kind(),
                }
            }

            fn fields(&self) -> Vec<(&str, $crate::config::FieldValue)> {
                match self {
                    $( Self::$variant(config) => config.fields(), )*
                    Self::Custom(config) => config.fields(),
                }
            }

            fn check(&self) -> Result<(), $crate::error::FlowError> {
                match self {
                    $( Self::$variant(config) => config.check(), )*
                    Self::Custom(config) => config.check(),
                }
            }
        }

        $(
            impl From<$kind> for $family {
                fn from(config: $kind) -> Self {
                    Self::$variant(config)
                }
            }
        )*

        impl From<$crate::config::CustomConfig> for $family {
            fn from(config: $crate::config::CustomConfig) -> Self {
                Self::Custom(config)
            }
        }
    };
}

pub mod clock;
pub mod custom;
pub mod field;
pub mod input;
pub mod output;
pub mod window;

pub use clock::*;
pub use custom::*;
pub use field::*;
pub use input::*;
pub use output::*;
pub use window::*;

/// The contract every configuration kind fulfils for the encoder.
pub trait Configuration: fmt::Debug + Send + Sync {
    /// The exact kind tag, e.g. `"TumblingWindowConfig"`.
    fn kind(&self) -> &str;

    /// The declared fields, in declaration order. Ordering does not matter
    /// for the encoded document, which sorts keys.
    fn fields(&self) -> Vec<(&str, FieldValue)>;

    /// Checks that the configuration carries everything its kind requires.
    /// Built-in kinds are complete by construction.
    fn check(&self) -> Result<(), FlowError> {
        Ok(())
    }
}

/// Runs `check` and then verifies every behavior reachable from the fields.
pub(crate) fn validate(config: &dyn Configuration) -> Result<(), FlowError> {
    config.check()?;
    config
        .fields()
        .iter()
        .try_for_each(|(_, value)| value.validate())
}
