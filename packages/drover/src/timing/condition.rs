//! Described predicates polled by the [`Waiter`](super::Waiter).

use std::borrow::Cow;
use std::fmt;

use crate::threading::ExecutionError;

/// A repeatedly evaluated, human-described predicate.
///
/// The waiter takes conditions by value: once a wait concludes, `done` is
/// called and the condition is dropped together with everything it captured,
/// so a long-lived test never keeps observed components alive.
pub trait Condition {
    /// Evaluates the predicate.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the observed state failed; the wait stops
    /// and propagates it.
    fn test(&mut self) -> Result<bool, ExecutionError>;

    /// Describes what is being waited for.
    ///
    /// Only called after the wait has timed out, so implementations may do
    /// expensive work here (including owner-thread queries).
    fn description(&mut self) -> String;

    /// Releases whatever the condition holds. Called exactly once, on both
    /// outcomes.
    fn done(&mut self) {}
}

impl<C: Condition + ?Sized> Condition for Box<C> {
    fn test(&mut self) -> Result<bool, ExecutionError> { (**self).test() }

    fn description(&mut self) -> String { (**self).description() }

    fn done(&mut self) { (**self).done(); }
}

/// Text of a condition, fixed or computed on demand.
pub enum Description<'a> {
    /// Already known text.
    Text(Cow<'static, str>),
    /// Text produced only when a timeout needs it.
    Lazy(Box<dyn FnOnce() -> String + 'a>),
}

impl<'a> Description<'a> {
    /// Defers computing the text until a timeout occurs.
    pub fn lazy<F>(describe: F) -> Self
    where F: FnOnce() -> String + 'a {
        Self::Lazy(Box::new(describe))
    }

    fn resolve(self) -> String {
        match self {
            Self::Text(text) => text.into_owned(),
            Self::Lazy(describe) => describe(),
        }
    }
}

impl From<&'static str> for Description<'_> {
    fn from(text: &'static str) -> Self { Self::Text(Cow::Borrowed(text)) }
}

impl From<String> for Description<'_> {
    fn from(text: String) -> Self { Self::Text(Cow::Owned(text)) }
}

impl From<Cow<'static, str>> for Description<'_> {
    fn from(text: Cow<'static, str>) -> Self { Self::Text(text) }
}

impl fmt::Debug for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

type Predicate<'a> = Box<dyn FnMut() -> Result<bool, ExecutionError> + 'a>;

/// A [`Condition`] built from closures.
pub struct PredicateCondition<'a> {
    description: Option<Description<'a>>,
    predicate: Predicate<'a>,
    on_done: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> PredicateCondition<'a> {
    /// Creates a condition from a predicate that can fail.
    pub fn fallible<F>(description: impl Into<Description<'a>>, predicate: F) -> Self
    where F: FnMut() -> Result<bool, ExecutionError> + 'a {
        Self {
            description: Some(description.into()),
            predicate: Box::new(predicate),
            on_done: None,
        }
    }

    /// Runs `cleanup` once the wait concludes, whatever the outcome.
    #[must_use]
    pub fn on_done<F>(mut self, cleanup: F) -> Self
    where F: FnOnce() + 'a {
        self.on_done = Some(Box::new(cleanup));
        self
    }
}

impl Condition for PredicateCondition<'_> {
    fn test(&mut self) -> Result<bool, ExecutionError> { (self.predicate)() }

    fn description(&mut self) -> String {
        self.description.take().map_or_else(|| "condition".to_string(), Description::resolve)
    }

    fn done(&mut self) {
        if let Some(cleanup) = self.on_done.take() {
            cleanup();
        }
    }
}

impl fmt::Debug for PredicateCondition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateCondition")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Creates a condition from a plain boolean predicate.
///
/// Use [`Executor::condition`](crate::threading::Executor::condition) instead
/// when the predicate reads toolkit state.
pub fn condition<'a, F>(description: impl Into<Description<'a>>, mut predicate: F) -> PredicateCondition<'a>
where F: FnMut() -> bool + 'a {
    PredicateCondition::fallible(description, move || Ok(predicate()))
}
