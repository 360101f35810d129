//! Macros for declarative automaton construction.

/// Build an automaton from a literal description.
///
/// Expands to an [`AutomatonBuilder`](crate::builder::AutomatonBuilder)
/// chain and evaluates to `Result<Automaton<_, _>, BuildError>`.
///
/// # Example
///
/// ```
/// use dfakit::dfa;
///
/// let dfa = dfa! {
///     states: ["even", "odd"],
///     alphabet: ['a', 'b'],
///     start: "even",
///     accepting: ["odd"],
///     transitions: {
///         ("even", 'a') => "even",
///         ("even", 'b') => "odd",
///         ("odd", 'a') => "odd",
///         ("odd", 'b') => "even",
///     }
/// }
/// .unwrap();
///
/// assert_eq!(dfa.accepts("abab".chars()), Ok(false));
/// ```
#[macro_export]
macro_rules! dfa {
    (
        states: [$($state:expr),* $(,)?],
        alphabet: [$($symbol:expr),* $(,)?],
        start: $start:expr,
        accepting: [$($accept:expr),* $(,)?],
        transitions: {
            $(($from:expr, $on:expr) => $to:expr),* $(,)?
        } $(,)?
    ) => {
        $crate::builder::AutomatonBuilder::new()
            $(.state($state))*
            $(.symbol($symbol))*
            $(.transition($from, $on, $to))*
            .start($start)
            $(.accept($accept))*
            .build()
    };
}
