mod cnb;

pub use cnb::{CnbRateSource, CnbRateSourceBuilder, DEFAULT_CNB_BASE_URL};
