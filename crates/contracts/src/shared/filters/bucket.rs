//! Categorical buckets for Select filters derived from numeric measures
//!
//! A scale is an ascending list of inclusive upper bounds; the last bucket is
//! unbounded, so every non-negative value lands in exactly one bucket.

use serde::{Deserialize, Serialize};

/// One named range of a scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    /// Label matched against the Select value (e.g. "low")
    pub label: &'static str,
    /// Inclusive upper bound, `None` for the last (open) bucket
    pub upper: Option<f64>,
}

/// Ordered bucket definitions for one derived field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketScale {
    pub buckets: &'static [Bucket],
}

impl BucketScale {
    /// Map a measure onto its bucket label.
    ///
    /// Values below the first bound (including negatives) fall into the first
    /// bucket, infinities above every bound into the last one. NaN has no bucket.
    pub fn classify(&self, value: f64) -> Option<&'static str> {
        if value.is_nan() {
            return None;
        }
        self.buckets
            .iter()
            .find(|b| b.upper.map_or(true, |upper| value <= upper))
            .map(|b| b.label)
    }

    /// Labels in scale order
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.buckets.iter().map(|b| b.label)
    }

    /// Check bounds are strictly ascending and only the last bucket is open
    pub fn validate(&self) -> Result<(), String> {
        let Some((last, bounded)) = self.buckets.split_last() else {
            return Err("scale has no buckets".to_string());
        };
        if last.upper.is_some() {
            return Err(format!("last bucket '{}' must be unbounded", last.label));
        }

        let mut previous: Option<f64> = None;
        for bucket in bounded {
            let upper = bucket
                .upper
                .ok_or_else(|| format!("bucket '{}' must have an upper bound", bucket.label))?;
            if previous.is_some_and(|p| upper <= p) {
                return Err(format!("bucket '{}' bound is not ascending", bucket.label));
            }
            previous = Some(upper);
        }
        Ok(())
    }
}

/// Serializable view of a bucket, exposed to the UI with the owned field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketOwned {
    pub label: String,
    pub upper: Option<f64>,
}

impl From<&Bucket> for BucketOwned {
    fn from(b: &Bucket) -> Self {
        Self {
            label: b.label.to_string(),
            upper: b.upper,
        }
    }
}

/// Seat usage in percent: ≤25 low, 26–75 medium, 76–100 high, >100 over
pub static USAGE_SCALE: BucketScale = BucketScale {
    buckets: &[
        Bucket { label: "low", upper: Some(25.0) },
        Bucket { label: "medium", upper: Some(75.0) },
        Bucket { label: "high", upper: Some(100.0) },
        Bucket { label: "over", upper: None },
    ],
};

/// Monthly package price
pub static PRICE_SCALE: BucketScale = BucketScale {
    buckets: &[
        Bucket { label: "free", upper: Some(0.0) },
        Bucket { label: "low", upper: Some(50.0) },
        Bucket { label: "medium", upper: Some(150.0) },
        Bucket { label: "high", upper: Some(500.0) },
        Bucket { label: "premium", upper: None },
    ],
};

/// Lead score (0–100)
pub static LEAD_SCORE_SCALE: BucketScale = BucketScale {
    buckets: &[
        Bucket { label: "cold", upper: Some(39.0) },
        Bucket { label: "warm", upper: Some(69.0) },
        Bucket { label: "hot", upper: None },
    ],
};

/// Deal amount
pub static DEAL_VALUE_SCALE: BucketScale = BucketScale {
    buckets: &[
        Bucket { label: "small", upper: Some(1_000.0) },
        Bucket { label: "medium", upper: Some(10_000.0) },
        Bucket { label: "large", upper: Some(100_000.0) },
        Bucket { label: "enterprise", upper: None },
    ],
};

/// Seat usage in percent; a zero limit with seats in use counts as unbounded
pub fn usage_percentage(used: u32, limit: u32) -> f64 {
    match (used, limit) {
        (0, 0) => 0.0,
        (_, 0) => f64::INFINITY,
        (used, limit) => f64::from(used) / f64::from(limit) * 100.0,
    }
}
