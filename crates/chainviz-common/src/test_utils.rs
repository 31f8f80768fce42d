//! Test utilities and shared fixtures for the chainviz workspace.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for the unit and integration tests of the other crates.

use crate::types::{Data, SeriesColumns};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Sample payloads for chart option tests.
pub mod data_fixtures {
    use super::*;

    /// The smallest useful payload: one column `a`, three samples.
    pub fn minimal_data() -> Data {
        let mut data = SeriesColumns::new();
        data.insert("a".to_string(), vec![Some(1.0), Some(2.0), Some(3.0)]);
        Data::new("x", data, vec![Some(100), Some(200), Some(300)])
    }

    /// Daily block metrics as the backend aggregates them, with gaps.
    pub fn block_metrics_data(days: usize) -> Data {
        const DAY_MS: i64 = 86_400_000;
        const START_MS: i64 = 1_704_067_200_000; // 2024-01-01

        let time = (0..days)
            .map(|i| Some(START_MS + DAY_MS * i as i64))
            .collect();

        let column = |f: fn(usize) -> f64| -> Vec<Option<f64>> {
            (0..days)
                .map(|i| if i % 5 == 4 { None } else { Some(f(i)) })
                .collect()
        };

        let mut data = SeriesColumns::new();
        data.insert("total_eth".to_string(), column(|i| 1_000.0 + i as f64 * 12.5));
        data.insert("tx_count".to_string(), column(|i| (1_200_000 + i * 3_000) as f64));
        data.insert("fee_per_gas:mean".to_string(), column(|i| 20.0 + (i as f64).sin()));
        data.insert("fee_per_gas:median".to_string(), column(|i| 18.0 + (i as f64).cos()));

        Data::new("blocks", data, time)
    }

    /// A payload with no samples at all.
    pub fn empty_data() -> Data {
        let mut data = SeriesColumns::new();
        data.insert("a".to_string(), Vec::new());
        Data::new("empty", data, Vec::new())
    }
}

/// Property-based testing strategies using proptest.
#[cfg(any(test, feature = "proptest"))]
pub mod property_testing {
    use super::*;
    use proptest::collection::{btree_map, vec};
    use proptest::option;
    use proptest::prelude::*;

    /// Strategy for series names as the backend emits them.
    pub fn column_name_strategy() -> impl Strategy<Value = String> {
        r"[a-z_]{1,12}(:mean|:median)?".prop_map(|s| s.to_string())
    }

    /// Strategy for payloads whose columns all share the length of `time`.
    pub fn aligned_data_strategy() -> impl Strategy<Value = Data> {
        (0usize..24).prop_flat_map(|len| {
            (
                r"[a-z]{1,8}",
                btree_map(
                    column_name_strategy(),
                    vec(option::of(-1.0e9f64..1.0e9), len),
                    1..5,
                ),
                vec(option::of(0i64..4_102_444_800_000), len),
            )
                .prop_map(|(name, data, time)| Data::new(name, data, time))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_block_metrics_fixture_is_aligned() {
        let data = data_fixtures::block_metrics_data(10);
        assert_eq!(data.sample_count(), 10);
        assert!(data.misaligned_columns().is_empty());
        assert_eq!(data.data["tx_count"][4], None);
    }

    proptest! {
        #[test]
        fn test_property_aligned_data(data in property_testing::aligned_data_strategy()) {
            prop_assert!(data.misaligned_columns().is_empty());
            prop_assert!(!data.data.is_empty());
        }
    }
}
