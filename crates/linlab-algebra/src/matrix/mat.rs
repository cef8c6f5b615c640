//! Macro to define a matrix type.
//!
//! The generated types are thin `#[repr(transparent)]` newtypes over the corresponding `glam`
//! double precision matrix and delegate arithmetic to `glam`.
//!
//! `glam` stores matrices column-major, while matrices are usually typed in row-major order
//! (`[[a, b], [c, d]]`), so both constructors are provided and `entry` always takes
//! `(row, col)`.
//!
//! # Arguments
//!
//! * `name`        - The name of the matrix type.
//! * `glam_type`   - The underlying `glam` matrix type.
//! * `array`       - The column-major flat array type (e.g. `[f64; 4]` for 2x2).
//! * `rows`        - The nested row-major array type (e.g. `[[f64; 2]; 2]`).
//! * `vec_type`    - The public vector type used for columns and mat-vec mul.
//! * `glam_vec`    - The underlying `glam` vector type.
//! * `cols`        - The column parameters (e.g. `[x_axis, y_axis]`).
//!
macro_rules! define_matrix_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $glam_type:ty,
        $array:ty,
        $rows:ty,
        $vec_type:ty,
        $glam_vec:ty,
        [$($col:ident),+]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(pub $glam_type);

        impl $name {
            /// Create a new matrix from column vectors.
            #[inline]
            pub fn from_cols($($col: $vec_type),+) -> Self {
                Self(<$glam_type>::from_cols(
                    $(<$glam_vec>::from($col)),+
                ))
            }

            /// Create a new matrix from a column-major array.
            #[inline]
            pub fn from_cols_array(arr: &$array) -> Self {
                Self(<$glam_type>::from_cols_array(arr))
            }

            /// Create a new matrix from row-major nested arrays.
            #[inline]
            pub fn from_rows(rows: $rows) -> Self {
                Self(<$glam_type>::from_cols_array_2d(&rows).transpose())
            }

            /// Return the matrix as row-major nested arrays.
            #[inline]
            pub fn to_rows(&self) -> $rows {
                self.0.transpose().to_cols_array_2d()
            }

            /// Entry at `(row, col)`.
            ///
            /// # Panics
            ///
            /// Panics if `row` or `col` is out of bounds.
            #[inline]
            pub fn entry(&self, row: usize, col: usize) -> f64 {
                self.0.col(col)[row]
            }

            /// Row `index` as a vector.
            #[inline]
            pub fn row(&self, index: usize) -> $vec_type {
                <$vec_type>::from(self.0.row(index))
            }

            /// Column `index` as a vector.
            #[inline]
            pub fn col(&self, index: usize) -> $vec_type {
                <$vec_type>::from(self.0.col(index))
            }

            /// Multiply every entry by `scalar`.
            #[inline]
            pub fn scaled(&self, scalar: f64) -> Self {
                Self(self.0 * scalar)
            }

            /// Transpose the matrix.
            #[inline]
            pub fn transpose(&self) -> Self {
                Self(self.0.transpose())
            }

            /// Returns true if every entry is finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.0.is_finite()
            }

            /// Identity matrix.
            pub const IDENTITY: Self = Self(<$glam_type>::IDENTITY);

            /// Matrix with all entries set to zero.
            pub const ZERO: Self = Self(<$glam_type>::ZERO);
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl std::ops::Deref for $name {
            type Target = $glam_type;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        // Conversions to and from the underlying glam type.
        impl From<$glam_type> for $name {
            #[inline]
            fn from(m: $glam_type) -> Self {
                Self(m)
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(m: $name) -> Self {
                m.0
            }
        }

        // Conversions to and from row-major nested arrays.
        impl From<$rows> for $name {
            #[inline]
            fn from(rows: $rows) -> Self {
                Self::from_rows(rows)
            }
        }

        impl From<$name> for $rows {
            #[inline]
            fn from(m: $name) -> Self {
                m.to_rows()
            }
        }

        // Matrix-matrix multiplication.
        impl std::ops::Mul<$name> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                $name::from(self.0 * rhs.0)
            }
        }

        // Matrix-vector multiplication.
        impl std::ops::Mul<$vec_type> for $name {
            type Output = $vec_type;

            #[inline]
            fn mul(self, rhs: $vec_type) -> Self::Output {
                <$vec_type>::from(self.0 * <$glam_vec>::from(rhs))
            }
        }

        // Scalar multiplication.
        impl std::ops::Mul<f64> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: f64) -> Self::Output {
                $name::from(self.0 * rhs)
            }
        }

        impl std::ops::Sub<$name> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: $name) -> Self::Output {
                $name::from(self.0 - rhs.0)
            }
        }
    };
}
