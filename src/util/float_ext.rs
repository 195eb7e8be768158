pub trait FloatExt: Sized {
    /// `self == other`
    fn eq(self, other: Self) -> bool;

    /// `self != other`
    fn not_eq(self, other: Self) -> bool;

    /// Round to the nearest multiple of `precision`.
    ///
    /// A non-positive `precision` leaves the value as is.
    fn round_to_precision(self, precision: Self) -> Self;
}

macro_rules! impl_float_ext {
    ( $ty:ty ) => {
        impl FloatExt for $ty {
            fn eq(self, other: Self) -> bool {
                (self - other).abs() < <$ty>::EPSILON
            }

            fn not_eq(self, other: Self) -> bool {
                (self - other).abs() >= <$ty>::EPSILON
            }

            fn round_to_precision(self, precision: Self) -> Self {
                if precision <= 0.0 {
                    return self;
                }

                // Dividing by the integral step count keeps decimal steps
                // such as 0.1 exact where `round() * precision` would not
                let steps = precision.recip();

                (self * steps).round() / steps
            }
        }
    };
}

impl_float_ext!(f32);
impl_float_ext!(f64);
