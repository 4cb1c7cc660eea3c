//! Compile-time type lists.
//!
//! A type list is a cons-list of types: [`Nil`] is the empty list and
//! `Cons<H, T>` prepends `H` to the list `T`. Values are zero-sized; all the
//! information lives in the type. The [`type_list!`](crate::type_list) macro
//! spells a list in order:
//!
//! ```
//! use stratum::meta::TypeList;
//! use stratum::type_list;
//!
//! let list = <type_list![char, i32, i64]>::default();
//! assert_eq!(list.length(), 3);
//! assert_eq!(list.find_type::<i32>(), Some(1));
//! assert_eq!(list.find_type::<()>(), None);
//! ```
//!
//! Composition (`append`, `prepend`, `push_back`) produces a new list type;
//! lists are never mutated.

use core::any::{type_name, TypeId};
use core::fmt;
use core::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// The empty type list.
#[derive(Clone, Copy, Default)]
pub struct Nil;

/// The type list with head `H` and tail `T`.
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

impl Nil {
    /// Returns the empty list.
    pub const fn new() -> Self {
        Nil
    }
}

impl<H, T> Cons<H, T> {
    /// Returns the (zero-sized) list value.
    pub const fn new() -> Self {
        Cons(PhantomData)
    }
}

impl<H, T> Clone for Cons<H, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, T> Copy for Cons<H, T> {}

impl<H, T> Default for Cons<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl sealed::Sealed for Nil {}
impl<H, T> sealed::Sealed for Cons<H, T> {}

/// An ordered, compile-time sequence of types.
///
/// Implemented only by [`Nil`] and [`Cons`].
pub trait TypeList: sealed::Sealed + Copy + Default + 'static {
    /// Number of types in the list.
    const LEN: usize;

    #[doc(hidden)]
    fn position_from(id: TypeId, offset: usize) -> Option<usize>;

    #[doc(hidden)]
    fn collect_names(out: &mut Vec<&'static str>);

    /// Returns the number of types in the list.
    fn length(&self) -> usize {
        Self::LEN
    }

    /// Returns `true` for [`Nil`].
    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    /// Returns the zero-based position of the first `U` in the list.
    fn find_type<U: 'static>(&self) -> Option<usize> {
        Self::position_from(TypeId::of::<U>(), 0)
    }

    /// Returns the name of every type in the list, in order.
    fn type_names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(Self::LEN);
        Self::collect_names(&mut names);
        names
    }

    /// Concatenates `other` after this list.
    fn append<O: TypeList>(self, other: O) -> <Self as Append<O>>::Output
    where
        Self: Append<O>,
    {
        let _ = other;
        Default::default()
    }

    /// Inserts `U` at the front.
    fn prepend<U: 'static>(self) -> Cons<U, Self> {
        Cons::new()
    }

    /// Inserts `U` at the back.
    fn push_back<U: 'static>(self) -> <Self as Append<Cons<U, Nil>>>::Output
    where
        Self: Append<Cons<U, Nil>>,
    {
        Default::default()
    }
}

impl TypeList for Nil {
    const LEN: usize = 0;

    fn position_from(_id: TypeId, _offset: usize) -> Option<usize> {
        None
    }

    fn collect_names(_out: &mut Vec<&'static str>) {}
}

impl<H: 'static, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;

    fn position_from(id: TypeId, offset: usize) -> Option<usize> {
        if TypeId::of::<H>() == id {
            Some(offset)
        } else {
            T::position_from(id, offset + 1)
        }
    }

    fn collect_names(out: &mut Vec<&'static str>) {
        out.push(type_name::<H>());
        T::collect_names(out);
    }
}

/// Type-level concatenation of two lists.
pub trait Append<O: TypeList>: TypeList {
    /// `Self` followed by `O`.
    type Output: TypeList;
}

impl<O: TypeList> Append<O> for Nil {
    type Output = O;
}

impl<H: 'static, T: Append<O>, O: TypeList> Append<O> for Cons<H, T> {
    type Output = Cons<H, <T as Append<O>>::Output>;
}

/// Two lists are equal iff they name the same types in the same order.
impl<O: TypeList> PartialEq<O> for Nil {
    fn eq(&self, _other: &O) -> bool {
        TypeId::of::<Self>() == TypeId::of::<O>()
    }
}

impl Eq for Nil {}

impl<H: 'static, T: TypeList, O: TypeList> PartialEq<O> for Cons<H, T> {
    fn eq(&self, _other: &O) -> bool {
        TypeId::of::<Self>() == TypeId::of::<O>()
    }
}

impl<H: 'static, T: TypeList> Eq for Cons<H, T> {}

impl fmt::Debug for Nil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TypeList[]")
    }
}

impl<H: 'static, T: TypeList> fmt::Debug for Cons<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeList[{}]", self.type_names().join(", "))
    }
}

/// Names the [`TypeList`] type holding the given types in order.
///
/// `type_list![A, B]` is `Cons<A, Cons<B, Nil>>` and `type_list![]` is `Nil`.
#[macro_export]
macro_rules! type_list {
    () => { $crate::meta::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::meta::Cons<$head, $crate::type_list![$($tail),*]>
    };
}
