//! Fronteira com o driver do sensor de temperatura/umidade.

use crate::types::SensorReading;

/// Driver de um sensor de temperatura e umidade (DHT11 e similares).
///
/// Segue a API dos drivers de DHT: cada chamada faz (ou reaproveita) uma
/// leitura e devolve `f32::NAN` em caso de falha, sem `Result`.
pub trait Humiture {
    /// Umidade relativa em %.
    fn read_humidity(&mut self) -> f32;

    /// Temperatura em °C, ou °F quando `fahrenheit` é `true`.
    fn read_temperature(&mut self, fahrenheit: bool) -> f32;
}

/// Lê os três componentes na ordem do firmware: umidade, °C, °F.
pub fn acquire<S: Humiture + ?Sized>(sensor: &mut S) -> SensorReading {
    let humidity = sensor.read_humidity();
    let temperature_c = sensor.read_temperature(false);
    let temperature_f = sensor.read_temperature(true);
    SensorReading {
        humidity,
        temperature_c,
        temperature_f,
    }
}
