//! Sampling parameters for generation requests.

use serde::{Deserialize, Serialize};

/// Inclusive temperature range accepted by the service.
pub const TEMPERATURE_RANGE: (f32, f32) = (0.0, 2.0);
/// Inclusive nucleus-sampling range.
pub const TOP_P_RANGE: (f32, f32) = (0.0, 1.0);

/// Optional sampling controls carried by a request.
///
/// Every field is optional: an unset field is omitted from the wire payload
/// so the service applies its own default, never a value this client
/// invented. Out-of-range values are rejected at build time.
///
/// # Examples
///
/// ```
/// use limner_core::SamplingParams;
///
/// let params = SamplingParams::builder()
///     .temperature(0.9)
///     .top_p(0.95)
///     .top_k(40)
///     .build()
///     .unwrap();
///
/// assert_eq!(*params.temperature(), Some(0.9));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default, build_fn(validate = "SamplingParamsBuilder::validate"))]
pub struct SamplingParams {
    /// Sampling temperature, 0.0 to 2.0
    #[builder(setter(strip_option))]
    temperature: Option<f32>,
    /// Nucleus sampling probability mass, 0.0 to 1.0
    #[builder(setter(strip_option))]
    top_p: Option<f32>,
    /// Candidate pool size, at least 1
    #[builder(setter(strip_option))]
    top_k: Option<u32>,
}

impl SamplingParams {
    /// Returns a builder for constructing validated SamplingParams.
    pub fn builder() -> SamplingParamsBuilder {
        SamplingParamsBuilder::default()
    }

    /// True when no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.top_p.is_none() && self.top_k.is_none()
    }
}

impl SamplingParamsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(Some(t)) = self.temperature {
            let (lo, hi) = TEMPERATURE_RANGE;
            if !(lo..=hi).contains(&t) {
                return Err(format!("temperature {t} outside [{lo}, {hi}]"));
            }
        }
        if let Some(Some(p)) = self.top_p {
            let (lo, hi) = TOP_P_RANGE;
            if !(lo..=hi).contains(&p) {
                return Err(format!("top_p {p} outside [{lo}, {hi}]"));
            }
        }
        if let Some(Some(k)) = self.top_k {
            if k == 0 {
                return Err("top_k must be at least 1".to_string());
            }
        }
        Ok(())
    }
}
