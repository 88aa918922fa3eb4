//! Elementwise and scalar-broadcast arithmetic over [`Nutrients`].
//!
//! The operations are anchored on a nutrient-vector receiver and take either
//! another vector (elementwise on matching fields) or a plain number
//! (broadcast to every field) on the right-hand side, expressed as the
//! [`Operand`] union. All four operations route through a single internal
//! elementwise helper.

use crate::Nutrients;

/// Right-hand operand of a nutrient arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Another nutrient vector, combined field by field
    Vector(Nutrients),
    /// A scalar, applied to every field
    Scalar(f64),
}

impl From<Nutrients> for Operand {
    fn from(value: Nutrients) -> Self {
        Self::Vector(value)
    }
}

impl From<&Nutrients> for Operand {
    fn from(value: &Nutrients) -> Self {
        Self::Vector(*value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl Nutrients {
    /// Adds `rhs` elementwise, or broadcast if it is a scalar.
    #[must_use]
    pub fn add(&self, rhs: impl Into<Operand>) -> Nutrients {
        self.apply(rhs.into(), |a, b| a + b)
    }

    /// Subtracts `rhs` elementwise, or broadcast if it is a scalar.
    ///
    /// The result may carry negative fields (e.g. a meal minus a larger
    /// consumed portion); interpreting the sign is up to the caller.
    #[must_use]
    pub fn subtract(&self, rhs: impl Into<Operand>) -> Nutrients {
        self.apply(rhs.into(), |a, b| a - b)
    }

    /// Multiplies by `rhs` elementwise, or broadcast if it is a scalar.
    #[must_use]
    pub fn multiply(&self, rhs: impl Into<Operand>) -> Nutrients {
        self.apply(rhs.into(), |a, b| a * b)
    }

    /// Divides by `rhs` elementwise, or broadcast if it is a scalar.
    ///
    /// Division by zero follows `f64` semantics and produces infinite or NaN
    /// fields rather than an error.
    #[must_use]
    pub fn divide(&self, rhs: impl Into<Operand>) -> Nutrients {
        self.apply(rhs.into(), |a, b| a / b)
    }

    fn apply(&self, rhs: Operand, op: impl Fn(f64, f64) -> f64) -> Nutrients {
        let rhs = match rhs {
            Operand::Vector(v) => v,
            Operand::Scalar(s) => Nutrients::from_raw(s, s, s, s),
        };

        Nutrients::from_raw(
            op(self.fat(), rhs.fat()),
            op(self.carbs(), rhs.carbs()),
            op(self.protein(), rhs.protein()),
            op(self.fiber(), rhs.fiber()),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::Nutrients;

    fn n(fat: f64, carbs: f64, protein: f64, fiber: f64) -> Nutrients {
        Nutrients::new(fat, carbs, protein, fiber).unwrap()
    }

    #[test]
    fn test_add_vectors() {
        assert_eq!(
            n(1.0, 2.0, 3.0, 4.0).add(n(2.0, 4.0, 6.0, 8.0)),
            n(3.0, 6.0, 9.0, 12.0)
        );
        assert_eq!(
            Nutrients::default().add(Nutrients::default()),
            Nutrients::default()
        );
    }

    #[test]
    fn test_add_scalar_broadcast() {
        assert_eq!(n(1.0, 2.0, 3.0, 4.0).add(1.0), n(2.0, 3.0, 4.0, 5.0));
    }

    #[test]
    fn test_subtract_vectors() {
        assert_eq!(
            n(3.0, 6.0, 9.0, 12.0).subtract(n(1.0, 2.0, 3.0, 4.0)),
            n(2.0, 4.0, 6.0, 8.0)
        );
    }

    #[test]
    fn test_subtract_can_go_negative() {
        let deficit = n(0.0, 1.0, 0.0, 0.0).subtract(n(0.0, 3.0, 0.0, 0.0));
        assert_eq!(deficit.carbs(), -2.0);
    }

    #[test]
    fn test_multiply_vectors() {
        assert_eq!(
            n(1.0, 2.0, 3.0, 4.0).multiply(n(2.0, 4.0, 6.0, 8.0)),
            n(2.0, 8.0, 18.0, 32.0)
        );
    }

    #[test]
    fn test_multiply_scalar_broadcast() {
        assert_eq!(n(1.0, 2.0, 3.0, 4.0).multiply(3.0), n(3.0, 6.0, 9.0, 12.0));
    }

    #[test]
    fn test_multiply_commutes() {
        let a = n(1.0, 2.0, 3.0, 4.0);
        let b = n(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.multiply(b), b.multiply(a));
    }

    #[test]
    fn test_divide_vectors() {
        assert_eq!(
            n(2.0, 8.0, 18.0, 32.0).divide(n(2.0, 4.0, 6.0, 8.0)),
            n(1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_divide_scalar_broadcast() {
        assert_eq!(n(3.0, 6.0, 9.0, 12.0).divide(3.0), n(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_divide_by_zero_is_ieee() {
        let q = n(1.0, 0.0, 2.0, 0.0).divide(0.0);
        assert_eq!(q.fat(), f64::INFINITY);
        assert!(q.carbs().is_nan());

        let q = n(1.0, 1.0, 1.0, 1.0).divide(n(0.0, 1.0, 1.0, 1.0));
        assert_eq!(q.fat(), f64::INFINITY);
        assert_eq!(q.carbs(), 1.0);
    }

    #[test]
    fn test_operands_not_mutated() {
        let a = n(1.0, 2.0, 3.0, 4.0);
        let b = n(5.0, 6.0, 7.0, 8.0);
        let _ = a.add(&b);
        assert_eq!(a, n(1.0, 2.0, 3.0, 4.0));
        assert_eq!(b, n(5.0, 6.0, 7.0, 8.0));
    }

    mod properties {
        use super::n;
        use proptest::prelude::*;

        const MAX_GRAMS: f64 = 1_000.0;

        fn amount() -> impl Strategy<Value = f64> {
            0.0..MAX_GRAMS
        }

        fn approx_eq(a: f64, b: f64) -> bool {
            (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
        }

        proptest! {
            #[test]
            fn calories_match_formula(
                fat in amount(),
                carbs in amount(),
                protein in amount(),
                fiber in amount(),
            ) {
                let v = n(fat, carbs, protein, fiber);
                prop_assert_eq!(v.calories(), 9.0 * fat + 4.0 * carbs + 4.0 * protein);
            }

            #[test]
            fn add_then_subtract_round_trips(
                a_fat in amount(), a_carbs in amount(), a_protein in amount(), a_fiber in amount(),
                b_fat in amount(), b_carbs in amount(), b_protein in amount(), b_fiber in amount(),
            ) {
                let a = n(a_fat, a_carbs, a_protein, a_fiber);
                let b = n(b_fat, b_carbs, b_protein, b_fiber);
                let back = a.add(b).subtract(b);
                prop_assert!(approx_eq(back.fat(), a.fat()));
                prop_assert!(approx_eq(back.carbs(), a.carbs()));
                prop_assert!(approx_eq(back.protein(), a.protein()));
                prop_assert!(approx_eq(back.fiber(), a.fiber()));
            }

            #[test]
            fn scale_then_unscale_round_trips(
                fat in amount(), carbs in amount(), protein in amount(), fiber in amount(),
                k in 0.001..1_000.0f64,
            ) {
                let a = n(fat, carbs, protein, fiber);
                let back = a.multiply(k).divide(k);
                prop_assert!(approx_eq(back.fat(), a.fat()));
                prop_assert!(approx_eq(back.carbs(), a.carbs()));
                prop_assert!(approx_eq(back.protein(), a.protein()));
                prop_assert!(approx_eq(back.fiber(), a.fiber()));
            }

            #[test]
            fn scalar_broadcast_hits_every_field(
                fat in amount(), carbs in amount(), protein in amount(), fiber in amount(),
                k in 0.0..1_000.0f64,
            ) {
                let a = n(fat, carbs, protein, fiber);
                let scaled = a.multiply(k);
                prop_assert_eq!(scaled.fat(), fat * k);
                prop_assert_eq!(scaled.carbs(), carbs * k);
                prop_assert_eq!(scaled.protein(), protein * k);
                prop_assert_eq!(scaled.fiber(), fiber * k);
            }
        }
    }
}
