//! Hardware falso para os testes: sensor roteirizado, pino e delay que
//! registram tudo num log compartilhado.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::sensor::Humiture;

/// Evento observado no hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwEvent {
    High,
    Low,
    DelayMs(u32),
}

pub type HwLog = Rc<RefCell<Vec<HwEvent>>>;

pub fn hw_log() -> HwLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct RecordingPin(pub HwLog);

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(HwEvent::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(HwEvent::High);
        Ok(())
    }
}

pub struct RecordingDelay(pub HwLog);

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().push(HwEvent::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().push(HwEvent::DelayMs(ms));
    }
}

/// Sensor que devolve leituras `(umidade, °C)` em sequência e repete a última.
pub struct ScriptedSensor {
    script: VecDeque<(f32, f32)>,
    current: (f32, f32),
    reads: usize,
}

impl ScriptedSensor {
    pub fn new(script: impl IntoIterator<Item = (f32, f32)>) -> Self {
        Self {
            script: script.into_iter().collect(),
            current: (f32::NAN, f32::NAN),
            reads: 0,
        }
    }

    /// Quantas leituras completas foram iniciadas.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl Humiture for ScriptedSensor {
    // A umidade é o primeiro componente lido em cada ciclo: avança o roteiro.
    fn read_humidity(&mut self) -> f32 {
        if let Some(next) = self.script.pop_front() {
            self.current = next;
        }
        self.reads += 1;
        self.current.0
    }

    fn read_temperature(&mut self, fahrenheit: bool) -> f32 {
        let celsius = self.current.1;
        if fahrenheit {
            celsius * 9.0 / 5.0 + 32.0
        } else {
            celsius
        }
    }
}
