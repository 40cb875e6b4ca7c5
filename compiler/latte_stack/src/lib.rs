//! Stack growth for deep recursion.
//!
//! The evaluator recurses once per nested expression and once per user
//! function call, with no tail calls. Deeply recursive Latte programs would
//! otherwise exhaust the native stack, so every recursive evaluation step is
//! wrapped in [`ensure_sufficient_stack`], which moves onto a freshly
//! allocated segment when the remaining space runs low.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call; the evaluator bounds the call depth instead.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn eval(&mut self, id: ExprId, env: &Environment) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(id, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
