//! Functional Composition Toolkit
//!
//! `pipe!` / `compose!` for statically typed stage chains, homogeneous
//! `pipe_all` / `compose_all` fallbacks, and the `try_catch` family that
//! turns failures (including panics) into values.

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures_util::FutureExt;
use tracing::debug;

use crate::models::errors::{KitError, KitResult};

// ============================================
// PIPE / COMPOSE
// ============================================

/// Apply stages left to right: `pipe!(x, f, g)` is `g(f(x))`.
///
/// ```
/// use ruster_kit::pipe;
///
/// let out = pipe!(
///     vec![1, 2, 3, 4],
///     |v: Vec<i32>| v.into_iter().map(|x| x * 2).collect::<Vec<_>>(),
///     |v: Vec<i32>| v.into_iter().map(|x| x + 2).collect::<Vec<_>>()
/// );
/// assert_eq!(out, vec![4, 6, 8, 10]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $op:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!(($op)($value) $(, $rest)*)
    };
}

/// Build a closure applying stages right to left: `compose!(g, f)(x)` is
/// `g(f(x))`.
///
/// ```
/// use ruster_kit::compose;
///
/// let inc_then_double = compose!(|x: i32| x * 2, |x: i32| x + 1);
/// assert_eq!(inc_then_double(3), 8);
/// ```
#[macro_export]
macro_rules! compose {
    (@apply $value:expr; $op:expr) => {
        ($op)($value)
    };
    (@apply $value:expr; $op:expr, $($rest:expr),+) => {
        ($op)($crate::compose!(@apply $value; $($rest),+))
    };
    ($($op:expr),+ $(,)?) => {
        move |value| $crate::compose!(@apply value; $($op),+)
    };
}

/// Left-to-right application of any number of same-typed stages
pub fn pipe_all<T, I, F>(value: T, operations: I) -> T
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> T,
{
    operations.into_iter().fold(value, |acc, op| op(acc))
}

/// Right-to-left composition of any number of same-typed stages
pub fn compose_all<T, F>(operations: Vec<F>) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    move |value| operations.iter().rev().fold(value, |acc, op| op(acc))
}

// ============================================
// TRY / CATCH
// ============================================

/// Render a panic payload the way `std` prints it
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// Run `f`, turning both `Err` and panics into a [`KitError`].
///
/// A panic becomes an `ErrorCode::CallbackPanicked` error carrying the
/// panic message. The default panic hook still prints the panic.
pub fn try_catch<T, E, F>(f: F) -> KitResult<T>
where
    E: Into<KitError>,
    F: FnOnce() -> Result<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            let err = err.into();
            debug!("try_catch captured error: {}", err);
            Err(err)
        }
        Err(payload) => {
            let msg = panic_message(payload);
            debug!("try_catch captured panic: {}", msg);
            Err(KitError::panicked(msg))
        }
    }
}

/// `try_catch` returning `default` on any failure
pub fn try_catch_or<T, E, F>(f: F, default: T) -> T
where
    E: Into<KitError>,
    F: FnOnce() -> Result<T, E>,
{
    try_catch(f).unwrap_or(default)
}

/// Await `future`, turning `Err` and panics during polling into a [`KitError`]
pub async fn try_catch_async<T, E, Fut>(future: Fut) -> KitResult<T>
where
    E: Into<KitError>,
    Fut: Future<Output = Result<T, E>>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            let err = err.into();
            debug!("try_catch_async captured error: {}", err);
            Err(err)
        }
        Err(payload) => {
            let msg = panic_message(payload);
            debug!("try_catch_async captured panic: {}", msg);
            Err(KitError::panicked(msg))
        }
    }
}

/// `try_catch_async` resolving to `default` on any failure
pub async fn try_catch_async_or<T, E, Fut>(future: Fut, default: T) -> T
where
    E: Into<KitError>,
    Fut: Future<Output = Result<T, E>>,
{
    try_catch_async(future).await.unwrap_or(default)
}

// ============================================
// ASSERTIONS
// ============================================

/// Re-raise a captured error so it can be propagated with `?`
pub fn assert_error<T, E: Into<KitError>>(value: Result<T, E>) -> KitResult<T> {
    value.map_err(Into::into)
}

/// Unwrap a captured result.
///
/// # Panics
///
/// Panics with the error's `[CODE] message` form when `value` is an error.
pub fn assert_not_error<T>(value: KitResult<T>) -> T {
    match value {
        Ok(v) => v,
        Err(err) => panic!("{}", err),
    }
}
