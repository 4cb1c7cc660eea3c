//! Compile-time utilities with no runtime representation.
//!
//! - `type_list`: ordered type sequences ([`Nil`], [`Cons`], [`type_list!`](crate::type_list))
//! - `choose`: selecting one of two types by a `const bool`

pub mod choose;
pub mod type_list;

pub use choose::{Choose, ChooseType, Select};
pub use type_list::{Append, Cons, Nil, TypeList};
