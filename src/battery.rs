//! Battery voltage monitoring.
//!
//! The battery is sampled through a 1:2 resistor divider on a 12-bit ADC
//! channel. Readings are only taken after a dispatched press and are
//! purely diagnostic.

use crate::config::{ADC_FULL_SCALE, ADC_REFERENCE_VOLTS, CALIBRATION, DIVIDER_RATIO};
use crate::error::Error;

/// Source of raw battery samples (0..=4095).
#[allow(async_fn_in_trait)]
pub trait BatterySensor {
    async fn read_raw(&mut self) -> Result<u16, Error>;
}

/// Convert a raw 12-bit sample to battery volts.
///
/// Samples above full scale are clamped, so the result never exceeds the
/// full-scale battery voltage.
pub fn raw_to_volts(raw: u16) -> f32 {
    let raw = raw.min(ADC_FULL_SCALE);
    f32::from(raw) / f32::from(ADC_FULL_SCALE) * DIVIDER_RATIO * ADC_REFERENCE_VOLTS * CALIBRATION
}

/// Owns the battery sensor.
pub struct VoltageMonitor<S> {
    sensor: S,
}

impl<S: BatterySensor> VoltageMonitor<S> {
    pub fn new(sensor: S) -> Self {
        Self { sensor }
    }

    /// Take a fresh sample and convert it to volts.
    ///
    /// Returns `NaN` when the sensor fails.
    pub async fn read_voltage(&mut self) -> f32 {
        match self.sensor.read_raw().await {
            Ok(raw) => raw_to_volts(raw),
            Err(e) => {
                warn!("Battery: {}", e);
                f32::NAN
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSensor(Result<u16, Error>);

    impl BatterySensor for FixedSensor {
        async fn read_raw(&mut self) -> Result<u16, Error> {
            self.0
        }
    }

    /// Counts reads to prove nothing is cached.
    struct CountingSensor {
        reads: u16,
    }

    impl BatterySensor for CountingSensor {
        async fn read_raw(&mut self) -> Result<u16, Error> {
            self.reads += 1;
            Ok(self.reads * 1000)
        }
    }

    #[test]
    fn full_scale_is_about_7_26_volts() {
        let v = raw_to_volts(4095);
        assert!((v - 7.26).abs() < 1e-3, "got {v}");
    }

    #[test]
    fn zero_is_zero_volts() {
        assert_eq!(raw_to_volts(0), 0.0);
    }

    #[test]
    fn conversion_is_linear_and_monotonic() {
        let half = raw_to_volts(2048);
        assert!((half - 2048.0 / 4095.0 * 7.26).abs() < 1e-3);

        let mut last = raw_to_volts(0);
        for raw in (1..=4095).step_by(7) {
            let v = raw_to_volts(raw);
            assert!(v > last);
            last = v;
        }
    }

    #[test]
    fn over_range_is_clamped() {
        assert_eq!(raw_to_volts(u16::MAX), raw_to_volts(4095));
    }

    #[test]
    fn sensor_error_reads_as_nan() {
        let mut monitor = VoltageMonitor::new(FixedSensor(Err(Error::Sensor)));
        assert!(embassy_futures::block_on(monitor.read_voltage()).is_nan());
    }

    #[test]
    fn every_read_takes_a_fresh_sample() {
        let mut monitor = VoltageMonitor::new(CountingSensor { reads: 0 });
        let first = embassy_futures::block_on(monitor.read_voltage());
        let second = embassy_futures::block_on(monitor.read_voltage());
        assert!(second > first);
    }
}
