//! Monotonic time source

/// Millisecond clock that never goes backwards
///
/// The counter may wrap; consumers compare timestamps with wrapping
/// subtraction.
pub trait Monotonic {
    /// Milliseconds since an arbitrary epoch
    fn now_ms(&self) -> u32;
}

impl<T: Monotonic + ?Sized> Monotonic for &T {
    fn now_ms(&self) -> u32 {
        T::now_ms(self)
    }
}
