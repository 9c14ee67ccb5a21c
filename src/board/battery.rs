//! Battery sense on the SAADC.
//!
//! Single-ended on AIN5 with the default gain (1/6) and internal 0.6 V
//! reference, i.e. 0-3.6 V across 12 bits. The 1:2 divider in front of
//! the pin keeps a full Li-ion cell inside that range.

use embassy_nrf::saadc::{self, ChannelConfig, Config, Resolution, Saadc};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{with_timeout, Duration};
use irbridge::{BatterySensor, Error};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
});

/// A conversion normally completes in a few tens of µs.
const SAMPLE_TIMEOUT_MS: u64 = 10;

pub struct BatteryAdc {
    saadc: Saadc<'static, 1>,
}

impl BatteryAdc {
    /// Configure the ADC for 12-bit samples and run offset calibration.
    pub async fn new(saadc: peripherals::SAADC, pin: peripherals::P0_29) -> Self {
        let mut config = Config::default();
        config.resolution = Resolution::_12BIT;

        let channel = ChannelConfig::single_ended(pin);
        let saadc = Saadc::new(saadc, Irqs, config, [channel]);
        saadc.calibrate().await;

        Self { saadc }
    }
}

impl BatterySensor for BatteryAdc {
    async fn read_raw(&mut self) -> Result<u16, Error> {
        let mut buf = [0i16; 1];
        with_timeout(
            Duration::from_millis(SAMPLE_TIMEOUT_MS),
            self.saadc.sample(&mut buf),
        )
        .await
        .map_err(|_| Error::Sensor)?;

        // Offset error can push a grounded input slightly negative.
        Ok(u16::try_from(buf[0]).unwrap_or(0))
    }
}
