//! Raw channel encodings to display values.
//!
//! Pure conversions only; no gamut checks and no conversion between models.

/// ACO 16-bit channel to 8-bit: `floor(raw / 256)`.
pub fn aco_rgb_channel(raw: u16) -> u8 {
    (raw >> 8) as u8
}

/// ASE float channel in `[0, 1]` to 8-bit: `round(raw * 255)`.
///
/// Out-of-range inputs saturate at the `u8` bounds.
pub fn ase_rgb_channel(raw: f32) -> u8 {
    (f64::from(raw) * 255.0).round() as u8
}

/// ASE CMYK component in `[0, 1]` to a percentage with one decimal.
pub fn ase_percent(raw: f32) -> f64 {
    round_to_tenth(f64::from(raw) * 100.0)
}

/// ASE LAB lightness in `[0, 1]` to `[0, 100]`, one decimal.
pub fn ase_lab_lightness(raw: f32) -> f64 {
    ase_percent(raw)
}

/// ASE LAB a/b axis, unscaled, one decimal.
pub fn ase_lab_axis(raw: f32) -> f64 {
    round_to_tenth(f64::from(raw))
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aco_channel_floors() {
        assert_eq!(aco_rgb_channel(0), 0);
        assert_eq!(aco_rgb_channel(255), 0);
        assert_eq!(aco_rgb_channel(256), 1);
        assert_eq!(aco_rgb_channel(32768), 128);
        assert_eq!(aco_rgb_channel(65280), 255);
        assert_eq!(aco_rgb_channel(u16::MAX), 255);
    }

    #[test]
    fn aco_channel_is_monotonic() {
        let mut previous = 0u8;
        for raw in 0..=u16::MAX {
            let channel = aco_rgb_channel(raw);
            assert!(channel >= previous);
            previous = channel;
        }
    }

    #[test]
    fn ase_channel_rounds() {
        assert_eq!(ase_rgb_channel(0.0), 0);
        assert_eq!(ase_rgb_channel(1.0), 255);
        assert_eq!(ase_rgb_channel(0.5), 128);
        assert_eq!(ase_rgb_channel(0.2), 51);
    }

    #[test]
    fn ase_channel_saturates() {
        assert_eq!(ase_rgb_channel(1.5), 255);
        assert_eq!(ase_rgb_channel(-0.5), 0);
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(ase_percent(0.5), 50.0);
        assert_eq!(ase_percent(0.123), 12.3);
        assert_eq!(ase_percent(1.0), 100.0);
    }

    #[test]
    fn lab_axes_are_unscaled() {
        assert_eq!(ase_lab_lightness(0.75), 75.0);
        assert_eq!(ase_lab_axis(20.5), 20.5);
        assert_eq!(ase_lab_axis(-10.04), -10.0);
    }
}
