//! Behavior references.
//!
//! A step never carries the logic it will eventually run, only a stable name
//! for it. `Behavior` is that name, already classified as one of three shapes
//! when the reference is created:
//!
//! * a named function (`normalize`) encodes as its declared name,
//! * an anonymous function (a closure) encodes as `"<lambda>"`,
//! * a bound method (`OrderBook::update`) encodes as the method's own name.
//!
//! ```rust
//! use dataflow_canon::behavior;
//! use dataflow_canon::behavior::Behavior;
//!
//! fn normalize(x: f64) -> f64 { x / 100.0 }
//!
//! assert_eq!(Behavior::of(&normalize).name().unwrap(), "normalize");
//! assert_eq!(behavior!(|x: i32| x + 1).name().unwrap(), "<lambda>");
//! assert_eq!(behavior!(str::split::<char>).name().unwrap(), "split");
//!
//! let double = |x: i32| x * 2;
//! assert_eq!(behavior!(double).name().unwrap(), "<lambda>");
//! ```

mod classify;

use crate::error::FlowError;
use std::any::type_name;
use std::fmt;

/// Display name used for every anonymous function.
pub const LAMBDA_NAME: &str = "<lambda>";

/// A pre-classified reference to caller-supplied logic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// A free function, known by its declared name.
    Named(String),
    /// A closure or any other function without a name of its own.
    Anonymous,
    /// A method reached through a type, known by the method's unqualified name.
    Method(String),
    /// A descriptor that could not be classified. Naming it fails.
    Unclassified(String),
}

impl Behavior {
    pub fn named(name: impl Into<String>) -> Self {
        Behavior::Named(name.into())
    }

    pub fn anonymous() -> Self {
        Behavior::Anonymous
    }

    pub fn method(name: impl Into<String>) -> Self {
        Behavior::Method(name.into())
    }

    /// Classifies a Rust path such as `normalize`, `ops::normalize`,
    /// `OrderBook::update` or `<OrderBook as Update>::update`.
    pub fn from_path(path: &str) -> Self {
        classify::classify(path)
    }

    /// Classifies any value by its compiler-provided type name.
    ///
    /// Function items resolve to their path, closures to an anonymous
    /// reference. Function pointers and plain data have no usable name and
    /// come back as `Behavior::Unclassified`.
    pub fn of<F: ?Sized>(_behavior: &F) -> Self {
        classify::classify(type_name::<F>())
    }

    /// Returns the stable name this reference encodes to.
    ///
    /// Rules are checked in order: bound methods yield the method name,
    /// anonymous functions yield `"<lambda>"`, named functions yield their
    /// declared name.
    pub fn name(&self) -> Result<&str, FlowError> {
        match self {
            Behavior::Method(name) => Ok(name),
            Behavior::Anonymous => Ok(LAMBDA_NAME),
            Behavior::Named(name) => Ok(name),
            Behavior::Unclassified(descriptor) => Err(FlowError::unsupported(descriptor.as_str())),
        }
    }

    pub fn is_classified(&self) -> bool {
        !matches!(self, Behavior::Unclassified(_))
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Ok(name) => write!(f, "{}", name),
            Err(_) => write!(f, "<unsupported>"),
        }
    }
}

/// Builds a `Behavior` from a closure literal or any function value.
///
/// Closure literals (`|x| ..`, `move || ..`) become anonymous references
/// without being type-checked, so their parameters need no annotations.
/// Anything else is an expression handed to `Behavior::of`, which lets the
/// compiler's type name decide: `behavior!(normalize)` is named, a variable
/// holding a closure is anonymous. Generic functions need their type
/// arguments spelled out, as in `behavior!(str::split::<char>)`.
#[macro_export]
macro_rules! behavior {
    (move $($rest:tt)*) => {
        $crate::behavior::Behavior::Anonymous
    };
    (async $($rest:tt)*) => {
        $crate::behavior::Behavior::Anonymous
    };
    (|| $($rest:tt)*) => {
        $crate::behavior::Behavior::Anonymous
    };
    (| $($rest:tt)*) => {
        $crate::behavior::Behavior::Anonymous
    };
    ($behavior:expr) => {
        $crate::behavior::Behavior::of(&$behavior)
    };
}
