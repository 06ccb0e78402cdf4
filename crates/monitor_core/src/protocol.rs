//! Protocolo de texto da serial.
//!
//! Comandos são inteiros; valores de threshold são floats. O parser segue as
//! regras do leitor de stream serial:
//!
//! ```text
//! "  2\n"        → 2      (lixo à esquerda é pulado)
//! "12abc"        → 12     (para no primeiro caractere que não continua o número)
//! "x -3.5 y"     → -3.5
//! "abc"          → erro   (o chamador trata como 0)
//! ```
//!
//! Mensagens enviadas ao usuário ficam todas aqui.

use tracing::warn;

use crate::config::ThresholdConfig;
use crate::types::{Quantity, SensorReading};

/// Menu impresso uma vez na inicialização.
pub const BANNER: &[&str] = &[
    "ESP32 Temperature and Humidity Monitoring",
    "Commands:",
    "1 - Start/Stop Monitoring",
    "2 - Set Custom Temperature Threshold",
    "3 - Set Custom Humidity Threshold",
    "4 - View Current Thresholds",
    "5 - Exit",
];

pub const MSG_MONITORING_STARTED: &str = "Monitoring started...";
pub const MSG_MONITORING_STOPPED: &str = "Monitoring stopped...";
pub const MSG_EXITING: &str = "Exiting...";
pub const MSG_INVALID_COMMAND: &str = "Invalid command. Please try again.";
pub const MSG_SENSOR_FAILURE: &str = "Failed to read from DHT11 sensor!";

/// Erros do parser numérico.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("Entrada sem número: {0:?}")]
    NotANumber(String),

    #[error("Número fora da faixa: {0:?}")]
    Overflow(String),
}

// ──────────────────────────────────────────────
// Parsing
// ──────────────────────────────────────────────

/// Extrai o primeiro inteiro do texto.
pub fn parse_int(input: &str) -> Result<i32, ProtocolError> {
    let token = leading_token(input, |c| c == '-' || c.is_ascii_digit(), false);
    if !token.bytes().any(|b| b.is_ascii_digit()) {
        return Err(ProtocolError::NotANumber(input.trim().to_string()));
    }
    token
        .parse()
        .map_err(|_| ProtocolError::Overflow(token.to_string()))
}

/// Extrai o primeiro float do texto (uma única parte fracionária).
pub fn parse_float(input: &str) -> Result<f32, ProtocolError> {
    let token = leading_token(input, |c| c == '-' || c == '.' || c.is_ascii_digit(), true);
    if !token.bytes().any(|b| b.is_ascii_digit()) {
        return Err(ProtocolError::NotANumber(input.trim().to_string()));
    }
    token
        .parse()
        .map_err(|_| ProtocolError::Overflow(token.to_string()))
}

/// Código de comando; entrada não numérica vira 0.
pub fn read_command_code(input: &str) -> i32 {
    parse_int(input).unwrap_or_else(|e| {
        warn!("{e}; usando 0");
        0
    })
}

/// Valor de threshold; entrada não numérica vira 0.0.
pub fn read_threshold_value(input: &str) -> f32 {
    parse_float(input).unwrap_or_else(|e| {
        warn!("{e}; usando 0.00");
        0.0
    })
}

/// Pula até o primeiro caractere aceito por `starts` e devolve o trecho que
/// forma o número: `-` opcional, dígitos e (se `fraction`) um único `.`.
fn leading_token(input: &str, starts: impl Fn(char) -> bool, fraction: bool) -> &str {
    let Some(begin) = input.find(starts) else {
        return "";
    };
    let rest = &input[begin..];

    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in rest.char_indices() {
        let accepted = match c {
            '-' => i == 0,
            '.' if fraction && !seen_dot => {
                seen_dot = true;
                true
            }
            c => c.is_ascii_digit(),
        };
        if !accepted {
            break;
        }
        end = i + c.len_utf8();
    }
    &rest[..end]
}

// ──────────────────────────────────────────────
// Formatação
// ──────────────────────────────────────────────

/// `Humidity: 50.00%  |  Temperature: 20.00°C  ~  68.00°F`
pub fn format_reading(reading: &SensorReading) -> String {
    format!(
        "Humidity: {:.2}%  |  Temperature: {:.2}°C  ~  {:.2}°F",
        reading.humidity, reading.temperature_c, reading.temperature_f
    )
}

/// `Minimum : 15.00\tMaximum : 30.00°C`
pub fn format_bounds(quantity: Quantity, thresholds: &ThresholdConfig) -> String {
    let (min, max) = thresholds.bounds(quantity);
    format!("Minimum : {min:.2}\tMaximum : {max:.2}{}", quantity.unit())
}

/// Eco após a entrada de um novo par de thresholds.
pub fn threshold_set_line(quantity: Quantity, thresholds: &ThresholdConfig) -> String {
    format!(
        "{} threshold set to: {}",
        quantity.label(),
        format_bounds(quantity, thresholds)
    )
}

/// Linha do comando 4.
pub fn current_threshold_line(quantity: Quantity, thresholds: &ThresholdConfig) -> String {
    format!(
        "Current {} Threshold: {}",
        quantity.label(),
        format_bounds(quantity, thresholds)
    )
}

pub fn min_prompt(quantity: Quantity) -> String {
    format!(
        "Enter the new Minimum {} threshold {}: ",
        quantity.label().to_lowercase(),
        quantity.prompt_unit()
    )
}

pub fn max_prompt(quantity: Quantity) -> String {
    format!(
        "Enter the new Maximum {} threshold {}: ",
        quantity.label().to_lowercase(),
        quantity.prompt_unit()
    )
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_skips_leading_noise() {
        assert_eq!(parse_int("  2\n"), Ok(2));
        assert_eq!(parse_int("cmd=4"), Ok(4));
        assert_eq!(parse_int("12abc"), Ok(12));
        assert_eq!(parse_int("x -3 y"), Ok(-3));
    }

    #[test]
    fn int_takes_only_first_token() {
        assert_eq!(parse_int("2 10 25\n"), Ok(2));
        assert_eq!(parse_int("1.9"), Ok(1));
    }

    #[test]
    fn int_without_digits_is_error() {
        assert!(matches!(parse_int("abc"), Err(ProtocolError::NotANumber(_))));
        assert!(matches!(parse_int("\n"), Err(ProtocolError::NotANumber(_))));
        assert!(matches!(parse_int("-x"), Err(ProtocolError::NotANumber(_))));
    }

    #[test]
    fn int_overflow_is_error() {
        assert!(matches!(
            parse_int("99999999999"),
            Err(ProtocolError::Overflow(_))
        ));
    }

    #[test]
    fn float_forms() {
        assert_eq!(parse_float("12.5\n"), Ok(12.5));
        assert_eq!(parse_float(".5"), Ok(0.5));
        assert_eq!(parse_float("-4"), Ok(-4.0));
        assert_eq!(parse_float("temp 21.25C"), Ok(21.25));
    }

    #[test]
    fn float_stops_at_second_dot() {
        assert_eq!(parse_float("1.2.3"), Ok(1.2));
    }

    #[test]
    fn float_without_digits_is_error() {
        assert!(matches!(parse_float("abc"), Err(ProtocolError::NotANumber(_))));
        assert!(matches!(parse_float("."), Err(ProtocolError::NotANumber(_))));
    }

    #[test]
    fn lenient_readers_fall_back_to_zero() {
        assert_eq!(read_command_code("hello"), 0);
        assert_eq!(read_threshold_value("hello"), 0.0);
        assert_eq!(read_command_code("3"), 3);
        // Estouro não dá a volta: vira 0, que é comando inválido
        assert_eq!(read_command_code("4294967297"), 0);
    }

    #[test]
    fn reading_line() {
        let r = SensorReading {
            humidity: 50.0,
            temperature_c: 20.0,
            temperature_f: 68.0,
        };
        assert_eq!(
            format_reading(&r),
            "Humidity: 50.00%  |  Temperature: 20.00°C  ~  68.00°F"
        );
    }

    #[test]
    fn threshold_lines() {
        let t = ThresholdConfig::default();
        assert_eq!(
            current_threshold_line(Quantity::Temperature, &t),
            "Current Temperature Threshold: Minimum : 15.00\tMaximum : 30.00°C"
        );
        assert_eq!(
            threshold_set_line(Quantity::Humidity, &t),
            "Humidity threshold set to: Minimum : 30.00\tMaximum : 70.00%"
        );
    }

    #[test]
    fn prompts() {
        assert_eq!(
            min_prompt(Quantity::Temperature),
            "Enter the new Minimum temperature threshold (in Celsius): "
        );
        assert_eq!(
            max_prompt(Quantity::Humidity),
            "Enter the new Maximum humidity threshold (in %): "
        );
    }
}
