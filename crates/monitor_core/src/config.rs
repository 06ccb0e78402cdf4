//! Configuração via TOML.
//!
//! Valores padrão: 15–30 °C, 30–70 % e monitoramento desligado. Todas as
//! seções aceitam arquivo parcial.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::types::Quantity;

/// Nome do arquivo padrão, ao lado do executável.
pub const DEFAULT_CONFIG_FILE: &str = "monitor.toml";

/// Erros ao salvar a configuração.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Erro de I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro de serialização: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Limites de temperatura (°C) e umidade (%).
///
/// Não há validação de `min < max`: o usuário pode inverter os limites pela
/// serial e a classificação continua valendo (o teste de máximo vence).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub min_temperature: f32,
    pub max_temperature: f32,
    pub min_humidity: f32,
    pub max_humidity: f32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            min_temperature: 15.0,
            max_temperature: 30.0,
            min_humidity: 30.0,
            max_humidity: 70.0,
        }
    }
}

impl ThresholdConfig {
    /// Retorna `(min, max)` da grandeza.
    pub fn bounds(&self, quantity: Quantity) -> (f32, f32) {
        match quantity {
            Quantity::Temperature => (self.min_temperature, self.max_temperature),
            Quantity::Humidity => (self.min_humidity, self.max_humidity),
        }
    }

    pub fn set_min(&mut self, quantity: Quantity, value: f32) {
        match quantity {
            Quantity::Temperature => self.min_temperature = value,
            Quantity::Humidity => self.min_humidity = value,
        }
    }

    pub fn set_max(&mut self, quantity: Quantity, value: f32) {
        match quantity {
            Quantity::Temperature => self.max_temperature = value,
            Quantity::Humidity => self.max_humidity = value,
        }
    }

    /// `true` quando o mínimo ficou acima do máximo.
    pub fn is_inverted(&self, quantity: Quantity) -> bool {
        let (min, max) = self.bounds(quantity);
        min > max
    }
}

/// Comportamento do loop e do LED.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Monitoramento já ligado ao iniciar
    pub monitoring_on_start: bool,
    /// Aplica o modo do ciclo anterior antes de classificar a leitura nova.
    /// `false` = classifica e depois aplica.
    pub lagged_indicator: bool,
    /// Duração da piscada em LowAlert (ms)
    pub flash_ms: u32,
    /// Pausa ao fim de cada ciclo de amostragem (ms)
    pub cycle_delay_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            monitoring_on_start: false,
            lagged_indicator: true,
            flash_ms: 1000,
            cycle_delay_ms: 1000,
        }
    }
}

/// Link serial (stdin/stdout no host).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    /// Espera máxima por entrada quando não há amostragem (ms)
    pub idle_poll_ms: u64,
    /// Encerra o processo após o comando 5 em vez de ficar parado para sempre
    pub exit_on_halt: bool,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            idle_poll_ms: 10,
            exit_on_halt: false,
        }
    }
}

/// Parâmetros do DHT11 simulado.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub base_temperature: f32,
    /// Amplitude da oscilação de temperatura (°C)
    pub temperature_swing: f32,
    pub base_humidity: f32,
    /// Amplitude da oscilação de umidade (%)
    pub humidity_swing: f32,
    /// Ciclos por período completo da oscilação
    pub period_cycles: u32,
    /// A cada N leituras, uma falha (0 = nunca)
    pub fail_every: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            base_temperature: 22.0,
            temperature_swing: 12.0,
            base_humidity: 50.0,
            humidity_swing: 25.0,
            period_cycles: 60,
            fail_every: 0,
        }
    }
}

/// Configuração raiz.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub thresholds: ThresholdConfig,
    pub monitor: MonitorConfig,
    pub serial: SerialConfig,
    pub simulator: SimulatorConfig,
}

impl AppConfig {
    /// Carrega configuração de um arquivo TOML.
    ///
    /// Arquivo ausente ou inválido cai nos valores padrão.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str::<AppConfig>(&content) {
                    Ok(config) => {
                        info!("Configuração carregada de {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        warn!("Erro ao parsear {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    warn!("Erro ao ler {}: {}", path.display(), e);
                }
            }
        }

        info!("Usando configuração padrão");
        AppConfig::default()
    }

    /// Salva configuração em arquivo TOML.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuração salva em {}", path.display());
        Ok(())
    }

    /// Retorna o caminho padrão do `monitor.toml`.
    pub fn default_path() -> PathBuf {
        let exe_dir = std::env::current_exe()
            .map(|p| p.parent().unwrap_or(Path::new(".")).to_path_buf())
            .unwrap_or_else(|_| PathBuf::from("."));
        exe_dir.join(DEFAULT_CONFIG_FILE)
    }

    /// Valida a configuração e retorna lista de erros.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.monitor.flash_ms == 0 {
            errors.push("flash_ms não pode ser 0".into());
        }
        if self.monitor.cycle_delay_ms == 0 {
            errors.push("cycle_delay_ms não pode ser 0".into());
        }
        if self.serial.idle_poll_ms == 0 {
            errors.push("idle_poll_ms não pode ser 0".into());
        }
        if self.simulator.period_cycles == 0 {
            errors.push("period_cycles do simulador não pode ser 0".into());
        }
        if !(0.0..=100.0).contains(&self.simulator.base_humidity) {
            errors.push(format!(
                "Umidade base do simulador inválida: {} (0–100)",
                self.simulator.base_humidity
            ));
        }

        errors
    }
}
