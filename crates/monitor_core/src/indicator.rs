//! Driver do LED indicador.
//!
//! | Modo        | Pino                                  |
//! |-------------|---------------------------------------|
//! | `HighAlert` | alto                                  |
//! | `LowAlert`  | alto, espera `flash_ms`, baixo        |
//! | `Normal`    | baixo                                 |
//! | `Off`       | sem mudança                           |
//!
//! Depois de aplicar o modo sempre pausa `cycle_delay_ms`, o que limita a
//! taxa de amostragem.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use tracing::debug;

use crate::config::MonitorConfig;
use crate::types::IndicatorMode;

pub struct Indicator<P, D> {
    pin: P,
    delay: D,
    flash_ms: u32,
    cycle_delay_ms: u32,
}

impl<P, D> Indicator<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Cria o driver e apaga o LED.
    pub fn new(mut pin: P, delay: D, config: &MonitorConfig) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Self {
            pin,
            delay,
            flash_ms: config.flash_ms,
            cycle_delay_ms: config.cycle_delay_ms,
        })
    }

    /// Aplica o modo ao pino e pausa o ciclo.
    pub fn apply(&mut self, mode: IndicatorMode) -> Result<(), P::Error> {
        debug!("LED ← {mode:?}");
        match mode {
            IndicatorMode::HighAlert => self.pin.set_high()?,
            IndicatorMode::LowAlert => {
                self.pin.set_high()?;
                self.delay.delay_ms(self.flash_ms);
                self.pin.set_low()?;
            }
            IndicatorMode::Normal => self.pin.set_low()?,
            IndicatorMode::Off => {}
        }
        self.delay.delay_ms(self.cycle_delay_ms);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{HwEvent::*, RecordingDelay, RecordingPin, hw_log};

    fn indicator(log: &crate::testing::HwLog) -> Indicator<RecordingPin, RecordingDelay> {
        let ind = Indicator::new(
            RecordingPin(log.clone()),
            RecordingDelay(log.clone()),
            &MonitorConfig::default(),
        )
        .unwrap();
        log.borrow_mut().clear();
        ind
    }

    #[test]
    fn starts_with_led_off() {
        let log = hw_log();
        Indicator::new(
            RecordingPin(log.clone()),
            RecordingDelay(log.clone()),
            &MonitorConfig::default(),
        )
        .unwrap();
        assert_eq!(*log.borrow(), vec![Low]);
    }

    #[test]
    fn high_alert_holds_led_on() {
        let log = hw_log();
        indicator(&log).apply(IndicatorMode::HighAlert).unwrap();
        assert_eq!(*log.borrow(), vec![High, DelayMs(1000)]);
    }

    #[test]
    fn low_alert_flashes_once() {
        let log = hw_log();
        indicator(&log).apply(IndicatorMode::LowAlert).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![High, DelayMs(1000), Low, DelayMs(1000)]
        );
    }

    #[test]
    fn normal_turns_led_off() {
        let log = hw_log();
        indicator(&log).apply(IndicatorMode::Normal).unwrap();
        assert_eq!(*log.borrow(), vec![Low, DelayMs(1000)]);
    }

    #[test]
    fn off_only_pauses() {
        let log = hw_log();
        indicator(&log).apply(IndicatorMode::Off).unwrap();
        assert_eq!(*log.borrow(), vec![DelayMs(1000)]);
    }

    #[test]
    fn durations_come_from_config() {
        let log = hw_log();
        let config = MonitorConfig {
            flash_ms: 200,
            cycle_delay_ms: 50,
            ..Default::default()
        };
        let mut ind =
            Indicator::new(RecordingPin(log.clone()), RecordingDelay(log.clone()), &config).unwrap();
        ind.apply(IndicatorMode::LowAlert).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![Low, High, DelayMs(200), Low, DelayMs(50)]
        );
    }
}
