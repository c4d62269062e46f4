//! Small general-purpose utilities: sequence combinators, hash sets with
//! algebra, and chained errors with captured stacks.
//!
//! Three independent facilities, none of which depends on the others:
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐
//! │    seq.rs    │   │    set.rs    │   │     chain.rs     │
//! │ (map, filter,│   │ (Set<T> with │   │ (ChainError with │
//! │  find, ...)  │   │  set algebra)│   │  captured stacks)│
//! └──────────────┘   └──────────────┘   └──────────────────┘
//! ```
//!
//! | Module  | Purpose                                            |
//! |---------|----------------------------------------------------|
//! | `seq`   | Higher-order operations over ordered sequences     |
//! | `set`   | Mutable, unordered, duplicate-free collection      |
//! | `chain` | Error values with message, code, stack, and cause  |
//!
//! # Usage
//!
//! ```
//! use satchel::{chain, seq, wrap, Set};
//!
//! let evens = seq::filter(&[1, 2, 3, 4], |x| x % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let mut a = Set::from([1, 2, 3]);
//! a.union_with(&Set::from([2, 3, 4]));
//! assert_eq!(a.len(), 4);
//!
//! let inner = chain!("disk {} offline", 3);
//! let outer = wrap!(inner, "flush failed");
//! assert_eq!(satchel::message_only(&outer), "flush failed disk 3 offline");
//! ```
//!
//! # Concurrency
//!
//! Everything here is single-threaded by design: no internal locking, no
//! atomics. [`Set`] in particular is not safe for concurrent mutation;
//! wrap it in a mutex if it must be shared.

pub mod chain;
pub mod seq;
pub mod set;

// Re-exports for public API
pub use chain::{
    capture_stack, default_error, message_only, stack_trace, ChainError, DEFAULT_ERR_CODE,
};
pub use set::Set;
