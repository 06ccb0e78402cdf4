//! Hardware simulado para rodar o firmware no host.
//!
//! - [`SimulatedDht`] – DHT11 determinístico (senoide em torno da base)
//! - [`LoggedLed`] – pino de saída que registra o nível no log
//! - [`StdDelay`] – `DelayNs` sobre `std::thread::sleep`

use std::convert::Infallible;
use std::f32::consts::TAU;
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use monitor_core::config::SimulatorConfig;
use monitor_core::sensor::Humiture;
use tracing::{debug, info};

// ──────────────────────────────────────────────
// DHT11 simulado
// ──────────────────────────────────────────────

/// DHT11 simulado.
///
/// Temperatura e umidade oscilam em senoides defasadas de 90° com período de
/// `period_cycles` leituras. A cada `fail_every` leituras uma falha (`NaN`).
pub struct SimulatedDht {
    config: SimulatorConfig,
    cycle: u32,
    failing: bool,
}

impl SimulatedDht {
    pub fn new(config: SimulatorConfig) -> Self {
        Self {
            config,
            cycle: 0,
            failing: false,
        }
    }

    fn phase(&self) -> f32 {
        let period = self.config.period_cycles.max(1);
        TAU * (self.cycle % period) as f32 / period as f32
    }

    fn celsius(&self) -> f32 {
        self.config.base_temperature + self.config.temperature_swing * self.phase().sin()
    }
}

impl Humiture for SimulatedDht {
    // Cada ciclo do firmware começa pela umidade: é aqui que a simulação avança.
    fn read_humidity(&mut self) -> f32 {
        self.cycle = self.cycle.wrapping_add(1);
        self.failing = self.config.fail_every > 0 && self.cycle % self.config.fail_every == 0;
        if self.failing {
            debug!("DHT simulado: falha injetada no ciclo {}", self.cycle);
            return f32::NAN;
        }
        let humidity = self.config.base_humidity + self.config.humidity_swing * self.phase().cos();
        humidity.clamp(0.0, 100.0)
    }

    fn read_temperature(&mut self, fahrenheit: bool) -> f32 {
        if self.failing {
            return f32::NAN;
        }
        let celsius = self.celsius();
        if fahrenheit {
            celsius * 9.0 / 5.0 + 32.0
        } else {
            celsius
        }
    }
}

// ──────────────────────────────────────────────
// LED
// ──────────────────────────────────────────────

/// LED que só existe no log.
#[derive(Debug, Default)]
pub struct LoggedLed {
    lit: bool,
}

impl LoggedLed {
    fn set(&mut self, lit: bool) {
        if self.lit != lit {
            info!("LED {}", if lit { "aceso" } else { "apagado" });
        }
        self.lit = lit;
    }
}

impl ErrorType for LoggedLed {
    type Error = Infallible;
}

impl OutputPin for LoggedLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

// ──────────────────────────────────────────────
// Delay
// ──────────────────────────────────────────────

#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
