use std::cmp::Ordering;

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies 0 and 1 for types used in the closed unit interval `[0, 1]`.
///
/// Implement this trait for your type `T` if you want to use it with
/// `Constrained<T, UnitInterval>`. Implementations should ensure that
/// `zero() ≤ one()` under the type's `PartialOrd` so the interval is
/// well-formed.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker type enforcing that a value lies in the closed unit interval `0 ≤ x ≤ 1`.
///
/// Efficiencies and effectivenesses in the solver carry this bound: a fin
/// efficiency, surface efficiency, or exchanger effectiveness outside
/// `[0, 1]` is physically meaningless.
///
/// # Examples
///
/// ```
/// use immersion_models::support::constraint::{Constrained, UnitInterval};
///
/// let a = Constrained::<_, UnitInterval>::new(0.25).unwrap();
/// assert_eq!(a.into_inner(), 0.25);
///
/// let b = UnitInterval::new(1.0).unwrap();
/// assert_eq!(b.as_ref(), &1.0);
///
/// assert!(UnitInterval::new(-0.1).is_err());
/// assert!(UnitInterval::new(1.1).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs a [`Constrained<T, UnitInterval>`] if the value lies in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside the interval or not a number (`NaN`).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Less) => return Err(ConstraintError::BelowMinimum),
            None => return Err(ConstraintError::NotANumber),
            Some(Ordering::Greater | Ordering::Equal) => {}
        }
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Err(ConstraintError::AboveMaximum),
            None => Err(ConstraintError::NotANumber),
            Some(Ordering::Less | Ordering::Equal) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_included() {
        assert!(UnitInterval::new(0.0).is_ok());
        assert!(UnitInterval::new(1.0).is_ok());
    }

    #[test]
    fn out_of_bounds_rejected() {
        assert_eq!(
            UnitInterval::new(-0.01),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(UnitInterval::new(1.01), Err(ConstraintError::AboveMaximum));
    }

    #[test]
    fn ratios() {
        let eta = Ratio::new::<ratio>(0.73);
        assert!(UnitInterval::new(eta).is_ok());

        let eta = Ratio::new::<ratio>(1.5);
        assert!(UnitInterval::new(eta).is_err());
    }
}
