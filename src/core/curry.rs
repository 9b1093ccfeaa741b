//! Curry with Placeholders
//!
//! A [`Curried`] function holds the argument slots collected so far. Slots
//! are either concrete values or [`Arg::Hole`], an explicit placeholder that
//! later calls fill left to right. Every call returns a fresh `Curried`, so
//! a partial application can be reused any number of times.
//!
//! ```
//! use ruster_kit::{curry, Arg};
//!
//! let sub = curry(2, |args: Vec<i32>| args[0] - args[1]);
//!
//! let minus_ten = sub.call([Arg::Hole, Arg::Val(10)]).into_partial().unwrap();
//! assert_eq!(minus_ten.call_values([15]).into_done(), Some(5));
//! ```

use std::fmt;
use std::sync::Arc;

/// One argument slot
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<T> {
    /// Open slot, filled by the next call
    Hole,
    Val(T),
}

impl<T> Arg<T> {
    pub fn is_hole(&self) -> bool {
        matches!(self, Arg::Hole)
    }

    fn into_value(self) -> Option<T> {
        match self {
            Arg::Hole => None,
            Arg::Val(v) => Some(v),
        }
    }
}

impl<T> From<T> for Arg<T> {
    fn from(value: T) -> Self {
        Arg::Val(value)
    }
}

/// Result of calling a curried function
pub enum Curry<T, R> {
    /// Not enough concrete arguments yet
    Partial(Curried<T, R>),
    /// The wrapped function ran
    Done(R),
}

impl<T, R> Curry<T, R> {
    pub fn into_done(self) -> Option<R> {
        match self {
            Curry::Done(r) => Some(r),
            Curry::Partial(_) => None,
        }
    }

    pub fn into_partial(self) -> Option<Curried<T, R>> {
        match self {
            Curry::Partial(c) => Some(c),
            Curry::Done(_) => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Curry::Done(_))
    }
}

/// A function of `arity` arguments with partially collected slots
pub struct Curried<T, R> {
    arity: usize,
    slots: Vec<Arg<T>>,
    f: Arc<dyn Fn(Vec<T>) -> R + Send + Sync>,
}

impl<T: Clone, R> Clone for Curried<T, R> {
    fn clone(&self) -> Self {
        Self {
            arity: self.arity,
            slots: self.slots.clone(),
            f: Arc::clone(&self.f),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Curried<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curried")
            .field("arity", &self.arity)
            .field("slots", &self.slots)
            .finish()
    }
}

/// Wrap `f`, which receives exactly the concrete arguments in slot order
pub fn curry<T, R, F>(arity: usize, f: F) -> Curried<T, R>
where
    F: Fn(Vec<T>) -> R + Send + Sync + 'static,
{
    Curried {
        arity,
        slots: Vec::new(),
        f: Arc::new(f),
    }
}

impl<T: Clone, R> Curried<T, R> {
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Concrete arguments collected so far
    pub fn collected(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_hole()).count()
    }

    /// Apply more arguments.
    ///
    /// New arguments fill open holes left to right, the rest are appended.
    /// Once the first `arity` slots are all concrete, the function runs with
    /// the concrete arguments in slot order; holes past `arity` are dropped.
    pub fn call<I>(&self, args: I) -> Curry<T, R>
    where
        I: IntoIterator<Item = Arg<T>>,
    {
        let mut slots = self.slots.clone();
        let mut incoming = args.into_iter();

        for slot in slots.iter_mut().filter(|slot| slot.is_hole()) {
            match incoming.next() {
                Some(arg) => *slot = arg,
                None => break,
            }
        }
        slots.extend(incoming);

        let ready = slots.len() >= self.arity && !slots[..self.arity].iter().any(Arg::is_hole);
        if ready {
            let values = slots.into_iter().filter_map(Arg::into_value).collect();
            Curry::Done((self.f)(values))
        } else {
            Curry::Partial(Curried {
                arity: self.arity,
                slots,
                f: Arc::clone(&self.f),
            })
        }
    }

    /// `call` with concrete values only
    pub fn call_values<I>(&self, args: I) -> Curry<T, R>
    where
        I: IntoIterator<Item = T>,
    {
        self.call(args.into_iter().map(Arg::Val))
    }
}

/// Typed two-argument curry: `curry2(f)(a)(b) == f(a, b)`
pub fn curry2<A, B, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> R>
where
    F: Fn(A, B) -> R + Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    R: 'static,
{
    move |a| -> Box<dyn Fn(B) -> R> {
        let f = f.clone();
        Box::new(move |b| f(a.clone(), b))
    }
}

/// Typed three-argument curry: `curry3(f)(a)(b)(c) == f(a, b, c)`
#[allow(clippy::type_complexity)]
pub fn curry3<A, B, C, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>>
where
    F: Fn(A, B, C) -> R + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    R: 'static,
{
    move |a| -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>> {
        let f = f.clone();
        Box::new(move |b| -> Box<dyn Fn(C) -> R> {
            let f = f.clone();
            let a = a.clone();
            Box::new(move |c| f(a.clone(), b.clone(), c))
        })
    }
}
