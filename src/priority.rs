use ordered_float::{NotNan, OrderedFloat};

/// Anything that carries a totally ordered priority. The heap compares items
/// only through this key.
pub trait Prioritized {
    type Priority: Ord;

    fn priority(&self) -> &Self::Priority;
}

/// A value tagged with a priority. The heap never looks at `value`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Entry<P, V> {
    pub priority: P,
    pub value: V,
}

impl<P, V> Entry<P, V> {
    #[inline]
    pub const fn new(priority: P, value: V) -> Self {
        Self { priority, value }
    }

    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<P: Ord, V> Prioritized for Entry<P, V> {
    type Priority = P;

    #[inline]
    fn priority(&self) -> &P {
        &self.priority
    }
}

impl<P: Ord, V> From<(P, V)> for Entry<P, V> {
    #[inline]
    fn from((priority, value): (P, V)) -> Self {
        Self::new(priority, value)
    }
}

macro_rules! self_prioritized {
    ($($t:ty),* $(,)?) => {
        $(
            impl Prioritized for $t {
                type Priority = $t;

                #[inline]
                fn priority(&self) -> &$t {
                    self
                }
            }
        )*
    };
}

// Floats only through `OrderedFloat`/`NotNan`; a bare `f64` has no total order.
self_prioritized!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    bool, char,
    OrderedFloat<f32>, OrderedFloat<f64>,
    NotNan<f32>, NotNan<f64>,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_exposes_its_priority() {
        let e = Entry::new(7u32, "seven");
        assert_eq!(*e.priority(), 7);
        assert_eq!(e.into_value(), "seven");
    }

    #[test]
    fn entry_from_tuple() {
        let e: Entry<i64, char> = (-3, 'x').into();
        assert_eq!(e, Entry::new(-3, 'x'));
    }

    #[test]
    fn floats_are_their_own_priority() {
        let a = OrderedFloat(1.5f64);
        let b = NotNan::new(-0.25f32).unwrap();
        assert_eq!(*a.priority(), OrderedFloat(1.5));
        assert_eq!(*b.priority(), b);
    }
}
