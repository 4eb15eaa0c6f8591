use num_traits::{Float, Num, Signed};


/// Nodes that sit on a plane
/// Used by the planar heuristics to estimate remaining distance
pub trait Coordinates {
    type Scalar: Copy;

    fn coordinates(&self) -> (Self::Scalar, Self::Scalar);
}

macro_rules! impl_coordinates_for_tuple {
    ($($t:ty),*) => {
        $(
            impl Coordinates for ($t, $t) {
                type Scalar = $t;

                fn coordinates(&self) -> ($t, $t) {
                    *self
                }
            }
        )*
    };
}

impl_coordinates_for_tuple!(i32, i64, isize);


/// Manhattan distance between two points
pub fn manhattan_distance<T>(a: (T, T), b: (T, T)) -> T
where
    T: Num + Copy + Signed,
    {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// Euclidean distance between two points
pub fn euclidean<T>(a: (T, T), b: (T, T)) -> T
where
    T: Float,
    {
    squared_euclidean(a, b).sqrt()
}

/// Squared Euclidean distance, skips the square root when only ordering matters
pub fn squared_euclidean<T>(a: (T, T), b: (T, T)) -> T
where
    T: Float,
    {
    (a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distances() {
        assert_eq!(manhattan_distance((0, 0), (3, -4)), 7);
        assert_eq!(euclidean((0.0, 0.0), (3.0, -4.0)), 5.0);
        assert_eq!(squared_euclidean((1.0, 1.0), (4.0, 5.0)), 25.0);
    }

    #[test]
    fn test_tuple_coordinates() {
        assert_eq!((2i64, -7i64).coordinates(), (2, -7));
    }
}
