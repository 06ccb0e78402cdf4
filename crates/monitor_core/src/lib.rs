//! # Monitor Core
//!
//! Lógica do monitor de temperatura e umidade: lê um DHT11, compara com os
//! thresholds, aciona um LED e aceita comandos numéricos pela serial.
//!
//! O hardware entra por traits: [`sensor::Humiture`] para o sensor e
//! `embedded-hal` (`OutputPin`, `DelayNs`) para o LED e os tempos.
//!
//! ## Módulos
//! - [`types`] – Leitura, modo do indicador, grandezas
//! - [`config`] – Configuração via TOML (thresholds iniciais, tempos, simulador)
//! - [`alerts`] – Classificação da leitura contra os thresholds
//! - [`protocol`] – Parser e mensagens do protocolo de texto da serial
//! - [`command`] – Comandos e máquina de estados da entrada de thresholds
//! - [`sensor`] – Fronteira com o driver do sensor
//! - [`indicator`] – Driver do LED
//! - [`monitor`] – O loop propriamente dito

pub mod alerts;
pub mod command;
pub mod config;
pub mod error;
pub mod indicator;
pub mod monitor;
pub mod protocol;
pub mod sensor;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports convenientes
pub use config::{AppConfig, ThresholdConfig};
pub use error::MonitorError;
pub use monitor::{MonitorLoop, MonitorState, Step};
pub use sensor::Humiture;
pub use types::{IndicatorMode, Quantity, SensorReading};
