/// Creates a [`Prop`] named after the given identifier.
///
/// **Note**: Panics if the identifier is a keyword of the standard lexicon, such as `and`.
///
/// [`Prop`]: crate::syntax::Prop
#[macro_export]
macro_rules! prop {
    ($p:ident) => {
        $crate::syntax::Prop::new(stringify!($p)).expect("invalid propositional symbol")
    };
}

/// Creates an atomic [`Formula`] over the propositional symbol named after the given
/// identifier.
///
/// [`Formula`]: crate::syntax::Formula
#[macro_export]
macro_rules! atom {
    ($p:ident) => {
        $crate::syntax::Formula::Atom($crate::prop!($p))
    };
}

/// Creates an [`Assignment`] from a list of `symbol => value` pairs.
///
/// **Example**:
/// ```rust
/// use wff::{assignment, prop};
///
/// let assignment = assignment! { p => true, q => false };
/// assert_eq!(Some(true), assignment.get(&prop!(p)));
/// assert_eq!(None, assignment.get(&prop!(r)));
/// ```
///
/// [`Assignment`]: crate::semantics::Assignment
#[macro_export]
macro_rules! assignment {
    ($($p:ident => $value:expr),* $(,)?) => {
        <$crate::semantics::Assignment as ::std::iter::FromIterator<(
            $crate::syntax::Prop,
            bool,
        )>>::from_iter(::std::vec![$(($crate::prop!($p), $value)),*])
    };
}
