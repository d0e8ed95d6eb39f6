/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 64 * 1024;

/// Size of each stack segment allocated on the heap.
pub const STACK_SEGMENT: usize = 1024 * 1024;

/// Runs `f`, first moving to a fresh stack segment if less than
/// [`RED_ZONE`] bytes of stack remain.
///
/// Call it at the entry of every routine that recurses once per tree level.
///
/// ## Example
/// ```
/// use castellano::util::stack::guarded;
///
/// fn depth(n: u32) -> u32 {
///     guarded(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
/// }
///
/// assert_eq!(depth(100_000), 100_000);
/// ```
pub fn guarded<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, f)
}
