#[cfg(feature = "approx")]
mod approx_methods {
    use crate::Array;

    impl<A> Array<A> {
        /// A test for equality that uses the elementwise absolute difference to compute the
        /// approximate equality of two arrays.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn abs_diff_eq(&self, other: &Array<A>, epsilon: A::Epsilon) -> bool
        where
            A: ::approx::AbsDiffEq,
            A::Epsilon: Clone,
        {
            <Self as ::approx::AbsDiffEq>::abs_diff_eq(self, other, epsilon)
        }

        /// A test for equality that uses an elementwise relative comparison if the values are far
        /// apart; and the absolute difference otherwise.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn relative_eq(&self, other: &Array<A>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
        where
            A: ::approx::RelativeEq,
            A::Epsilon: Clone,
        {
            <Self as ::approx::RelativeEq>::relative_eq(self, other, epsilon, max_relative)
        }
    }
}

#[cfg(feature = "approx")]
mod approx_traits {
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};

    use crate::Array;

    /// Arrays are approximately equal when they have the same shape and all
    /// pairs of elements are; faults are not compared.
    ///
    /// **Requires crate feature `"approx"`**
    impl<A> AbsDiffEq for Array<A>
    where
        A: AbsDiffEq,
        A::Epsilon: Clone,
    {
        type Epsilon = A::Epsilon;

        fn default_epsilon() -> A::Epsilon {
            A::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &Array<A>, epsilon: A::Epsilon) -> bool {
            self.shape() == other.shape()
                && self
                    .as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
        }
    }

    /// **Requires crate feature `"approx"`**
    impl<A> RelativeEq for Array<A>
    where
        A: RelativeEq,
        A::Epsilon: Clone,
    {
        fn default_max_relative() -> A::Epsilon {
            A::default_max_relative()
        }

        fn relative_eq(&self, other: &Array<A>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
            self.shape() == other.shape()
                && self
                    .as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
        }
    }

    /// **Requires crate feature `"approx"`**
    impl<A> UlpsEq for Array<A>
    where
        A: UlpsEq,
        A::Epsilon: Clone,
    {
        fn default_max_ulps() -> u32 {
            A::default_max_ulps()
        }

        fn ulps_eq(&self, other: &Array<A>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
            self.shape() == other.shape()
                && self
                    .as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
        }
    }

    #[cfg(test)]
    mod tests {
        use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_ulps_eq};

        use crate::Array;

        #[test]
        fn close_arrays() {
            let a = Array::from_vec(vec![1., 2.]);
            let b = Array::from_vec(vec![1. + 1e-12, 2.]);
            assert_abs_diff_eq!(a, b, epsilon = 1e-9);
            assert_relative_eq!(a, b, max_relative = 1e-9);
            assert_ulps_eq!(a, a.clone());
            assert!(a.abs_diff_eq(&b, 1e-9));
        }

        #[test]
        fn shapes_must_match() {
            let a = Array::<f64>::zeros([2, 2]);
            let b = Array::<f64>::zeros([4]);
            assert_abs_diff_ne!(a, b);
        }
    }
}
