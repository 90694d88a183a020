//! Keyboard-adjustable numeric sliders with mirrored value labels.

/// A numeric range control.
///
/// The label shown next to the slider is always produced by
/// [`display_value`](Self::display_value) from the current value, so the
/// mirror is updated on the same frame as every adjustment. A slider starts
/// untouched; untouched sliders are omitted from the collected request so
/// the service applies its own default.
#[derive(Debug, Clone)]
pub struct Slider {
    name: &'static str,
    value: f32,
    min: f32,
    max: f32,
    step: f32,
    /// Decimal places in the mirrored label
    precision: usize,
    touched: bool,
}

impl Slider {
    /// Creates a slider over `[min, max]` positioned at `value`.
    pub fn new(
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
        step: f32,
        precision: usize,
    ) -> Self {
        Self {
            name,
            value,
            min,
            max,
            step,
            precision,
            touched: false,
        }
    }

    /// Control name shown as the widget title.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current position.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// True once the user has adjusted the slider.
    pub fn touched(&self) -> bool {
        self.touched
    }

    /// Moves the slider by `steps` increments, clamped to the range.
    pub fn adjust(&mut self, steps: i32) {
        let raw = self.value + self.step * steps as f32;
        // Snap to the step grid so repeated float additions cannot drift.
        let snapped = (raw / self.step).round() * self.step;
        self.value = snapped.clamp(self.min, self.max);
        self.touched = true;
    }

    /// Returns the slider to its initial, untouched state.
    pub fn reset(&mut self, value: f32) {
        self.value = value;
        self.touched = false;
    }

    /// Position as a fraction of the range, for gauge widgets.
    pub fn ratio(&self) -> f64 {
        f64::from((self.value - self.min) / (self.max - self.min))
    }

    /// The mirrored label text: the current value, formatted.
    pub fn display_value(&self) -> String {
        format!("{:.*}", self.precision, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temperature() -> Slider {
        Slider::new("temperature", 1.0, 0.0, 2.0, 0.1, 2)
    }

    #[test]
    fn label_mirrors_value_after_every_adjustment() {
        let mut slider = temperature();
        for _ in 0..7 {
            slider.adjust(-1);
            assert_eq!(slider.display_value(), format!("{:.2}", slider.value()));
        }
    }

    #[test]
    fn adjustment_is_clamped_to_the_range() {
        let mut slider = temperature();
        slider.adjust(100);
        assert_eq!(slider.value(), 2.0);
        slider.adjust(-100);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn repeated_steps_do_not_drift_off_grid() {
        let mut slider = temperature();
        for _ in 0..3 {
            slider.adjust(-1);
        }
        assert_eq!(slider.display_value(), "0.70");
    }

    #[test]
    fn untouched_until_adjusted_and_reset_clears_it() {
        let mut slider = temperature();
        assert!(!slider.touched());
        slider.adjust(1);
        assert!(slider.touched());
        slider.reset(1.0);
        assert!(!slider.touched());
    }
}
