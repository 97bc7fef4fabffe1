//! Deterministic plan fingerprinting over the constraint sequence.

use super::{Constraint, OrderDirection, QueryPlan};
use sha2::{Digest, Sha256};

///
/// PlanFingerprint
///
/// Stable, deterministic fingerprint for query plans. Two plans carry the
/// same fingerprint iff their constraint sequences are element-wise equal,
/// so callers can key caches on it without holding the plan itself.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PlanFingerprint([u8; 32]);

impl PlanFingerprint {
    #[must_use]
    pub fn as_hex(&self) -> String {
        let mut out = String::with_capacity(64);
        for byte in self.0 {
            use std::fmt::Write as _;
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}

impl std::fmt::Display for PlanFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_hex())
    }
}

impl QueryPlan {
    /// Compute a stable fingerprint for this plan.
    #[must_use]
    pub fn fingerprint(&self) -> PlanFingerprint {
        let mut hasher = Sha256::new();
        hasher.update(b"contentq:planfp:v1");
        write_u32(&mut hasher, u32::try_from(self.constraints().len()).unwrap_or(u32::MAX));
        for constraint in self.constraints() {
            hash_constraint(&mut hasher, constraint);
        }
        let digest = hasher.finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        PlanFingerprint(out)
    }
}

fn hash_constraint(hasher: &mut Sha256, constraint: &Constraint) {
    match constraint {
        Constraint::FieldEq { field, value } => {
            write_tag(hasher, 0x01);
            write_str(hasher, field);
            write_str(hasher, value);
        }
        Constraint::FieldRange { field, op, value } => {
            write_tag(hasher, 0x02);
            write_str(hasher, field);
            write_tag(hasher, op.tag());
            write_str(hasher, value);
        }
        Constraint::OrderBy { field, direction } => {
            write_tag(hasher, 0x03);
            write_str(hasher, field);
            write_tag(
                hasher,
                match direction {
                    OrderDirection::Asc => 0x01,
                    OrderDirection::Desc => 0x02,
                },
            );
        }
        Constraint::Limit { count } => {
            write_tag(hasher, 0x04);
            write_u32(hasher, *count);
        }
    }
}

fn write_tag(hasher: &mut Sha256, tag: u8) {
    hasher.update([tag]);
}

fn write_u32(hasher: &mut Sha256, value: u32) {
    hasher.update(value.to_be_bytes());
}

fn write_str(hasher: &mut Sha256, value: &str) {
    write_u32(hasher, u32::try_from(value.len()).unwrap_or(u32::MAX));
    hasher.update(value.as_bytes());
}
