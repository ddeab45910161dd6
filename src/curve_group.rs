//! Group operations over NIST P-256 used by the delegation and signing code.
//!
//! All scalar arithmetic happens in the P-256 scalar field, so every value that
//! enters a combination (x-coordinates, message hashes, weights) is reduced
//! modulo the group order `n` first. Scalar multiplication only depends on the
//! residue mod `n`, so this agrees with the unreduced integer formulation.
use p256::elliptic_curve::ops::Reduce;
use p256::elliptic_curve::point::AffineCoordinates;
use p256::{AffinePoint, FieldBytes, ProjectivePoint, Scalar, U256};

/// Public group element.
pub type Point = ProjectivePoint;

/// Computes `k·G`.
pub fn base_mul(k: &Scalar) -> Point {
    ProjectivePoint::GENERATOR * *k
}

/// Computes `k·P`.
pub fn mul(point: &Point, k: &Scalar) -> Point {
    *point * *k
}

/// Returns the affine x-coordinate of `point` as a scalar (`x mod n`).
///
/// The identity has no affine coordinates and maps to zero.
pub fn x_coordinate(point: &Point) -> Scalar {
    let affine = AffinePoint::from(*point);
    reduce_field_bytes(&affine.x())
}

/// Embeds a permission weight into the scalar field.
///
/// Weights are unsigned. Deployments that carried signed 64-bit weights never
/// produced verifiable credentials for negative values (the sign was dropped
/// on one side of the identity check), so only `w >= 0` needs porting and maps
/// to the same `u64`.
pub fn weight_scalar(weight: u64) -> Scalar {
    Scalar::from(weight)
}

/// Interprets 32 big-endian bytes as an integer and reduces it mod `n`.
pub fn reduce_field_bytes(bytes: &FieldBytes) -> Scalar {
    <Scalar as Reduce<U256>>::reduce_bytes(bytes)
}

/// Interprets an arbitrary-length big-endian integer and reduces it mod `n`.
///
/// Credentials produced without modular reduction carry `s` values wider than
/// 256 bits. Importing them through this function yields the scalar that
/// verifies identically.
pub fn scalar_from_be_bytes(bytes: &[u8]) -> Scalar {
    let radix = Scalar::from(256u64);
    bytes
        .iter()
        .fold(Scalar::ZERO, |acc, byte| acc * radix + Scalar::from(u64::from(*byte)))
}
