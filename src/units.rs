use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};

/// Millimetres, the unit every layout coordinate is expressed in. Coordinates have
/// their origin at the top-left corner of the page and grow to the right and down.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display("{_0}mm")]
#[serde(transparent)]
pub struct Mm(pub f32);

/// Points (1/72 inch), the native unit of PDF user space. Font sizes are always
/// given in points, as they would be in any word processor.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    Display,
    From,
    Into,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

const MM_PER_INCH: f32 = 25.4;
const PT_PER_INCH: f32 = 72.0;

impl Mm {
    pub const ZERO: Mm = Mm(0.0);

    /// The larger of two lengths
    pub fn max(self, other: Mm) -> Mm {
        Mm(self.0.max(other.0))
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Self {
        Mm(pt.0 * MM_PER_INCH / PT_PER_INCH)
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Self {
        Pt(mm.0 * PT_PER_INCH / MM_PER_INCH)
    }
}

impl std::ops::Mul<f32> for Mm {
    type Output = Mm;

    fn mul(self, rhs: f32) -> Mm {
        Mm(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Mm {
    type Output = Mm;

    fn div(self, rhs: f32) -> Mm {
        Mm(self.0 / rhs)
    }
}

impl std::ops::Neg for Mm {
    type Output = Mm;

    fn neg(self) -> Mm {
        Mm(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_width_round_trips_through_points() {
        let pt: Pt = Mm(210.0).into();
        assert!((pt.0 - 595.2756).abs() < 1e-3);
        let mm: Mm = pt.into();
        assert!((mm.0 - 210.0).abs() < 1e-3);
    }

    #[test]
    fn lengths_add_and_scale() {
        assert_eq!(Mm(2.0) + Mm(3.0), Mm(5.0));
        assert_eq!(Mm(5.0) - Mm(3.0), Mm(2.0));
        assert_eq!(Mm(2.5) * 2.0, Mm(5.0));
        assert_eq!(vec![Mm(1.0), Mm(2.0)].into_iter().sum::<Mm>(), Mm(3.0));
        assert_eq!(Mm(1.0).max(Mm(4.0)), Mm(4.0));
    }
}
