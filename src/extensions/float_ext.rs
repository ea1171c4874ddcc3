/// Integer rendering of measurements, dropping the fractional part.
pub trait Truncate {
    /// Returns the value truncated toward zero, NaN becomes 0.
    fn truncated(self) -> i64;
}

macro_rules! impl_truncate {
    ($($t:ty)*) => ($(
        impl Truncate for $t {
            fn truncated(self) -> i64 {
                self.trunc() as i64
            }
        }
    )*)
}

impl_truncate! { f32 f64 }
