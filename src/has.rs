/// A value that exposes an absence state and extraction of its content.
/// Bounds the seams that would otherwise sniff "is this a container" at
/// runtime; `bind` and `join` accept any implementor, which is also what
/// keeps nested containers from double-wrapping.
pub trait Has<T> {
    fn has(&self) -> bool;
    fn get(self) -> Option<T>;
}

impl<T> Has<T> for Option<T> {
    #[inline]
    fn has(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn get(self) -> Option<T> {
        self
    }
}
