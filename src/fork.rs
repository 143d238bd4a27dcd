//! Fork-join entry point shared by the builders.
//!
//! With the `logs` feature, tasks go through `rayon_logs` so that a run can
//! be traced; otherwise through plain `rayon`.
#[cfg(feature = "logs")]
pub use rayon_logs::join;

#[cfg(not(feature = "logs"))]
pub use rayon::join;

/// Runs `a` and `b`, in parallel if `parallel` is set, and returns both
/// results once both are done.
///
/// # Example
/// ```
/// use divconq::fork::join_if;
///
/// let (a, b) = join_if(true, || 1 + 1, || "two");
/// assert_eq!((a, b), (2, "two"));
///
/// let (a, b) = join_if(false, || vec![1], || vec![2, 3]);
/// assert_eq!(a.len() + b.len(), 3);
/// ```
pub fn join_if<A, B, RA, RB>(parallel: bool, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if parallel {
        join(a, b)
    } else {
        (a(), b())
    }
}
