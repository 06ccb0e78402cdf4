//! Avaliação de thresholds.

use crate::config::ThresholdConfig;
use crate::types::{IndicatorMode, SensorReading};

/// Classifica uma leitura válida contra os thresholds.
///
/// O teste de máximo vem antes do de mínimo: com limites invertidos
/// (`min > max`) uma leitura que cai nos dois casos vira [`IndicatorMode::HighAlert`].
pub fn classify(reading: &SensorReading, thresholds: &ThresholdConfig) -> IndicatorMode {
    let temp = reading.temperature_c;
    let humi = reading.humidity;

    if temp > thresholds.max_temperature || humi > thresholds.max_humidity {
        IndicatorMode::HighAlert
    } else if temp < thresholds.min_temperature || humi < thresholds.min_humidity {
        IndicatorMode::LowAlert
    } else {
        IndicatorMode::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temp: f32, humi: f32) -> SensorReading {
        SensorReading::from_celsius(humi, temp)
    }

    #[test]
    fn temperature_above_max_is_high() {
        let t = ThresholdConfig::default();
        assert_eq!(classify(&reading(35.0, 50.0), &t), IndicatorMode::HighAlert);
    }

    #[test]
    fn temperature_below_min_is_low() {
        let t = ThresholdConfig::default();
        assert_eq!(classify(&reading(10.0, 50.0), &t), IndicatorMode::LowAlert);
    }

    #[test]
    fn in_range_is_normal() {
        let t = ThresholdConfig::default();
        assert_eq!(classify(&reading(20.0, 50.0), &t), IndicatorMode::Normal);
    }

    #[test]
    fn humidity_alone_triggers() {
        let t = ThresholdConfig::default();
        assert_eq!(classify(&reading(20.0, 85.0), &t), IndicatorMode::HighAlert);
        assert_eq!(classify(&reading(20.0, 10.0), &t), IndicatorMode::LowAlert);
    }

    #[test]
    fn high_wins_over_low() {
        // Temperatura baixa, umidade alta
        let t = ThresholdConfig::default();
        assert_eq!(classify(&reading(5.0, 90.0), &t), IndicatorMode::HighAlert);
    }

    #[test]
    fn bounds_are_exclusive() {
        let t = ThresholdConfig::default();
        assert_eq!(classify(&reading(30.0, 70.0), &t), IndicatorMode::Normal);
        assert_eq!(classify(&reading(15.0, 30.0), &t), IndicatorMode::Normal);
    }

    #[test]
    fn inverted_thresholds_short_circuit_on_max() {
        let t = ThresholdConfig {
            min_temperature: 30.0,
            max_temperature: 15.0,
            ..Default::default()
        };
        // 20 °C está acima do máximo e abaixo do mínimo ao mesmo tempo
        assert_eq!(classify(&reading(20.0, 50.0), &t), IndicatorMode::HighAlert);
    }
}
