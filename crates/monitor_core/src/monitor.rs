//! Loop de monitoramento.
//!
//! Cada chamada a [`MonitorLoop::step`] é uma volta do loop do firmware:
//!
//! 1. Se chegou entrada na serial, interpreta um comando (ou o próximo valor
//!    de uma entrada de thresholds pendente). O resto do buffer é descartado.
//! 2. Se o monitoramento está ligado e nenhuma entrada está pendente, faz um
//!    ciclo de amostragem: lê o sensor, aciona o LED, imprime a leitura e
//!    reclassifica.
//!
//! Depois do comando `5` o loop fica parado para sempre: `step` não lê, não
//! escreve e não mexe no LED.

use std::io::Write;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use tracing::{debug, info, warn};

use crate::alerts::classify;
use crate::command::{Command, Entry};
use crate::config::{AppConfig, ThresholdConfig};
use crate::error::MonitorError;
use crate::indicator::Indicator;
use crate::protocol::{self, BANNER};
use crate::sensor::{self, Humiture};
use crate::types::{IndicatorMode, Quantity};

/// Todo o estado mutável do firmware num só lugar.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorState {
    pub thresholds: ThresholdConfig,
    pub monitoring: bool,
    pub mode: IndicatorMode,
    pub entry: Entry,
    pub halted: bool,
}

impl MonitorState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            thresholds: config.thresholds,
            monitoring: config.monitor.monitoring_on_start,
            mode: IndicatorMode::Off,
            entry: Entry::Idle,
            halted: false,
        }
    }
}

/// O que aconteceu numa volta do loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Houve ciclo de amostragem (o LED já pausou o ciclo).
    Sampled,
    /// Monitoramento desligado: nada a amostrar.
    Idle,
    /// Esperando o próximo valor de uma entrada de thresholds.
    AwaitingInput,
    /// Comando `5` recebido; nada mais acontece.
    Halted,
}

pub struct MonitorLoop<S, P, D> {
    state: MonitorState,
    sensor: S,
    indicator: Indicator<P, D>,
    lagged_indicator: bool,
}

impl<S, P, D> MonitorLoop<S, P, D>
where
    S: Humiture,
    P: OutputPin,
    D: DelayNs,
{
    /// Monta o loop. O LED é apagado aqui.
    pub fn new(sensor: S, pin: P, delay: D, config: &AppConfig) -> Result<Self, MonitorError> {
        let indicator = Indicator::new(pin, delay, &config.monitor).map_err(pin_error)?;
        Ok(Self {
            state: MonitorState::new(config),
            sensor,
            indicator,
            lagged_indicator: config.monitor.lagged_indicator,
        })
    }

    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    /// Imprime o menu de comandos.
    pub fn write_banner<W: Write>(&self, out: &mut W) -> Result<(), MonitorError> {
        for line in BANNER {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Uma volta do loop. `input` é tudo o que estava no buffer da serial.
    pub fn step<W: Write>(&mut self, input: Option<&str>, out: &mut W) -> Result<Step, MonitorError> {
        if self.state.halted {
            return Ok(Step::Halted);
        }

        if let Some(chunk) = input {
            self.handle_input(chunk, out)?;
            if self.state.halted {
                return Ok(Step::Halted);
            }
        }

        if self.state.entry.is_pending() {
            return Ok(Step::AwaitingInput);
        }
        if !self.state.monitoring {
            return Ok(Step::Idle);
        }

        self.sample(out)?;
        Ok(Step::Sampled)
    }

    // ──────────────────────────────────────────
    // Comandos
    // ──────────────────────────────────────────

    fn handle_input<W: Write>(&mut self, chunk: &str, out: &mut W) -> Result<(), MonitorError> {
        match self.state.entry {
            Entry::Idle => {
                let code = protocol::read_command_code(chunk);
                self.dispatch(Command::from_code(code), out)
            }
            Entry::AwaitingMin(quantity) => {
                let value = protocol::read_threshold_value(chunk);
                self.state.thresholds.set_min(quantity, value);
                self.state.entry = Entry::AwaitingMax(quantity);
                writeln!(out, "{}", protocol::max_prompt(quantity))?;
                Ok(())
            }
            Entry::AwaitingMax(quantity) => {
                let value = protocol::read_threshold_value(chunk);
                self.state.thresholds.set_max(quantity, value);
                self.state.entry = Entry::Idle;
                self.log_thresholds(quantity);
                writeln!(
                    out,
                    "{}",
                    protocol::threshold_set_line(quantity, &self.state.thresholds)
                )?;
                Ok(())
            }
        }
    }

    fn dispatch<W: Write>(&mut self, command: Command, out: &mut W) -> Result<(), MonitorError> {
        debug!("Comando: {command:?}");
        match command {
            Command::ToggleMonitoring => {
                self.state.monitoring = !self.state.monitoring;
                if self.state.monitoring {
                    info!("Monitoramento ligado");
                    writeln!(out, "{}", protocol::MSG_MONITORING_STARTED)?;
                } else {
                    info!("Monitoramento desligado");
                    writeln!(out, "{}", protocol::MSG_MONITORING_STOPPED)?;
                }
            }
            Command::SetThresholds(quantity) => {
                self.state.entry = Entry::AwaitingMin(quantity);
                writeln!(out, "{}", protocol::min_prompt(quantity))?;
            }
            Command::ShowThresholds => {
                for quantity in [Quantity::Temperature, Quantity::Humidity] {
                    writeln!(
                        out,
                        "{}",
                        protocol::current_threshold_line(quantity, &self.state.thresholds)
                    )?;
                }
            }
            Command::Exit => {
                self.state.halted = true;
                info!("Comando de saída recebido, loop parado");
                writeln!(out, "{}", protocol::MSG_EXITING)?;
            }
            Command::Invalid(code) => {
                debug!("Código de comando desconhecido: {code}");
                writeln!(out, "{}", protocol::MSG_INVALID_COMMAND)?;
            }
        }
        Ok(())
    }

    fn log_thresholds(&self, quantity: Quantity) {
        let (min, max) = self.state.thresholds.bounds(quantity);
        info!("Thresholds de {} → {min:.2}..{max:.2}", quantity.label());
        if self.state.thresholds.is_inverted(quantity) {
            warn!(
                "Thresholds de {} invertidos (min {min:.2} > max {max:.2}); o teste de máximo tem prioridade",
                quantity.label()
            );
        }
    }

    // ──────────────────────────────────────────
    // Amostragem
    // ──────────────────────────────────────────

    fn sample<W: Write>(&mut self, out: &mut W) -> Result<(), MonitorError> {
        let reading = sensor::acquire(&mut self.sensor);

        // Modo atrasado: o LED mostra a classificação do ciclo anterior.
        if self.lagged_indicator {
            self.indicator.apply(self.state.mode).map_err(pin_error)?;
        }

        // Estado e LED andam mesmo se a escrita na serial falhar; o erro de
        // escrita só é devolvido no fim do ciclo.
        let written = match reading.validate() {
            Ok(reading) => {
                let mode = classify(&reading, &self.state.thresholds);
                if mode != self.state.mode {
                    info!("Indicador: {:?} → {mode:?}", self.state.mode);
                }
                self.state.mode = mode;
                writeln!(out, "{}", protocol::format_reading(&reading))
            }
            Err(e) => {
                warn!("{e}");
                writeln!(out, "{}", protocol::MSG_SENSOR_FAILURE)
            }
        };

        if !self.lagged_indicator {
            self.indicator.apply(self.state.mode).map_err(pin_error)?;
        }
        written?;
        Ok(())
    }
}

fn pin_error<E: core::fmt::Debug>(e: E) -> MonitorError {
    MonitorError::Indicator(format!("{e:?}"))
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────
