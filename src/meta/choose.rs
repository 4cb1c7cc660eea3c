//! Compile-time type selection.

/// Carries a `bool` into the type system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Select<const FLAG: bool>;

/// Picks `A` or `B` depending on the implementing [`Select`].
pub trait Choose<A, B> {
    /// The selected type.
    type Output;
}

impl<A, B> Choose<A, B> for Select<true> {
    type Output = A;
}

impl<A, B> Choose<A, B> for Select<false> {
    type Output = B;
}

/// `A` if `FLAG` is `true`, otherwise `B`.
///
/// ```
/// use stratum::meta::ChooseType;
///
/// let wide: ChooseType<true, u64, u8> = u64::MAX;
/// assert_eq!(wide, u64::MAX);
/// ```
pub type ChooseType<const FLAG: bool, A, B> = <Select<FLAG> as Choose<A, B>>::Output;
