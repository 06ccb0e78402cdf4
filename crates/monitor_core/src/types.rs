//! Tipos do monitor: leitura do sensor, modo do indicador e grandezas.

use crate::MonitorError;

// ──────────────────────────────────────────────
// Leitura do sensor
// ──────────────────────────────────────────────

/// Uma leitura do DHT11.
///
/// O driver sinaliza falha devolvendo `NaN` em qualquer componente, então a
/// leitura pode chegar aqui inválida. Use [`SensorReading::validate`] antes de
/// classificar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Umidade relativa (0–100%)
    pub humidity: f32,
    /// Temperatura (°C)
    pub temperature_c: f32,
    /// Temperatura (°F)
    pub temperature_f: f32,
}

impl SensorReading {
    /// Monta uma leitura a partir de °C, derivando °F.
    #[cfg(test)]
    pub(crate) fn from_celsius(humidity: f32, temperature_c: f32) -> Self {
        Self {
            humidity,
            temperature_c,
            temperature_f: temperature_c * 9.0 / 5.0 + 32.0,
        }
    }

    /// `true` se nenhum componente é `NaN`.
    pub fn is_valid(&self) -> bool {
        !(self.temperature_c.is_nan() || self.temperature_f.is_nan() || self.humidity.is_nan())
    }

    /// Retorna a própria leitura, ou [`MonitorError::SensorRead`] se inválida.
    pub fn validate(self) -> Result<Self, MonitorError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(MonitorError::SensorRead)
        }
    }
}

// ──────────────────────────────────────────────
// Indicador
// ──────────────────────────────────────────────

/// Classificação que dirige o LED.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndicatorMode {
    /// Estado inicial, antes da primeira classificação.
    #[default]
    Off,
    /// Acima do máximo: LED aceso.
    HighAlert,
    /// Abaixo do mínimo: LED pisca uma vez por ciclo.
    LowAlert,
    /// Dentro da faixa: LED apagado.
    Normal,
}

// ──────────────────────────────────────────────
// Grandezas configuráveis
// ──────────────────────────────────────────────

/// Qual par de thresholds um comando edita.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Temperature,
    Humidity,
}

impl Quantity {
    /// Nome usado nas mensagens da serial.
    pub fn label(self) -> &'static str {
        match self {
            Quantity::Temperature => "Temperature",
            Quantity::Humidity => "Humidity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Quantity::Temperature => "°C",
            Quantity::Humidity => "%",
        }
    }

    /// Sufixo dos prompts de entrada.
    pub(crate) fn prompt_unit(self) -> &'static str {
        match self {
            Quantity::Temperature => "(in Celsius)",
            Quantity::Humidity => "(in %)",
        }
    }
}
