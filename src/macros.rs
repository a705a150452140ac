/// Create a [`Vec`](crate::vec::Vec) from a list of elements, a repeated
/// element with a count, or nothing.
///
/// The storage configuration is taken from the expected type, so the same
/// macro builds heap, inline, and hybrid vectors.
#[macro_export]
macro_rules! pvec {
    () => (
        $crate::vec::Vec::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::vec::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::vec::Vec::from([$($x),+])
    );
}
