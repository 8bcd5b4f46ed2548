//! Rule selection and the recursive comparison engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::compare;
use crate::config::{CompareConfig, ConfigError};
use crate::observer::{Detail, Event, NoopObserver, Observer};
use crate::traits::{Capabilities, Comparable, DynComparable};

/// The comparison rule applied to a pair of operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Numeric,
    Sequence,
    Map,
    Tuple,
    UserEquatable,
    Incompatible,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Numeric => "numeric",
            Category::Sequence => "sequence",
            Category::Map => "map",
            Category::Tuple => "tuple",
            Category::UserEquatable => "user-equatable",
            Category::Incompatible => "incompatible",
        };
        f.write_str(name)
    }
}

/// Picks the rule for two operands. First match wins:
///
/// 1. both maps
/// 2. both plain sequences (not maps, not tuples)
/// 3. both numeric
/// 4. either a tuple
/// 5. identical, non-numeric types with their own equality
/// 6. anything else is incompatible
pub fn select(left: Capabilities, right: Capabilities, same_type: bool) -> Category {
    let plain_sequence = |caps: Capabilities| caps.sequence && !caps.map && !caps.tuple;

    if left.map && right.map {
        Category::Map
    } else if plain_sequence(left) && plain_sequence(right) {
        Category::Sequence
    } else if left.numeric && right.numeric {
        Category::Numeric
    } else if left.tuple || right.tuple {
        Category::Tuple
    } else if same_type && left.equatable && right.equatable && !left.numeric {
        Category::UserEquatable
    } else {
        Category::Incompatible
    }
}

/// True when both operands expose a type identity and it is the same type.
pub fn same_type(left: &dyn DynComparable, right: &dyn DynComparable) -> bool {
    match (left.as_any(), right.as_any()) {
        (Some(left), Some(right)) => left.type_id() == right.type_id(),
        _ => false,
    }
}

/// Configured comparison engine.
///
/// Holds the tolerance and depth bound and reports every rule it applies to
/// its [`Observer`]. The engine keeps no state between calls.
#[derive(Debug, Clone)]
pub struct Comparator<O = NoopObserver> {
    config: CompareConfig,
    observer: O,
}

impl Comparator<NoopObserver> {
    /// Builds an engine from a validated configuration.
    pub fn new(config: CompareConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::unchecked(config))
    }

    /// Skips validation. A negative or NaN tolerance then never matches.
    pub(crate) fn unchecked(config: CompareConfig) -> Self {
        Self {
            config,
            observer: NoopObserver,
        }
    }
}

impl Default for Comparator<NoopObserver> {
    fn default() -> Self {
        Self::unchecked(CompareConfig::default())
    }
}

impl<O: Observer> Comparator<O> {
    /// Replaces the observer, keeping the configuration.
    pub fn with_observer<P: Observer>(self, observer: P) -> Comparator<P> {
        Comparator {
            config: self.config,
            observer,
        }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    pub fn tolerance(&self) -> f64 {
        self.config.tolerance
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Compares two values of any supported types.
    pub fn compare<A: Comparable, B: Comparable>(&self, left: &A, right: &B) -> bool {
        self.compare_dyn(left, right)
    }

    /// Compares two type-erased values.
    pub fn compare_dyn(&self, left: &dyn DynComparable, right: &dyn DynComparable) -> bool {
        self.compare_at(left, right, 0)
    }

    /// Classifies, dispatches and reports one comparison at `depth`.
    /// Comparators call back into this for their children with `depth + 1`.
    pub(crate) fn compare_at(
        &self,
        left: &dyn DynComparable,
        right: &dyn DynComparable,
        depth: usize,
    ) -> bool {
        let category = select(
            left.capabilities(),
            right.capabilities(),
            same_type(left, right),
        );

        let (result, detail) = match self.config.max_depth {
            Some(limit) if depth > limit => (false, Detail::DepthLimit { limit }),
            _ => match category {
                Category::Map => compare::map::compare(self, left, right, depth),
                Category::Sequence => compare::sequence::compare(self, left, right, depth),
                Category::Numeric => compare::numeric::compare(self.tolerance(), left, right),
                Category::Tuple => compare::tuple::compare(self, left, right, depth),
                Category::UserEquatable => compare::user_equatable(left, right),
                Category::Incompatible => compare::incompatible(),
            },
        };

        self.observer.observe(&Event {
            category,
            depth,
            left: left.type_name(),
            right: right.type_name(),
            detail,
            result,
        });
        result
    }
}
