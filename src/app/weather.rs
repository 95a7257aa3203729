use serde::Deserialize;

use fltk::app;

use super::error::{AppError, Result};
use super::messages::Message;

/// Vancouver, BC. The widget always reports conditions for this spot.
const LATITUDE: f64 = 49.2827;
const LONGITUDE: f64 = -123.1207;

const FORECAST_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";
const FETCH_TIMEOUT_SECS: u64 = 10;

/// Fallback glyph for WMO codes the table doesn't know.
const FALLBACK_GLYPH: &str = "\u{1f321}\u{fe0f}";

#[derive(Debug, Clone, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Clone, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    weather_code: i64,
}

/// Current conditions as shown in the status bar.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature_c: f64,
    pub weather_code: i64,
}

impl WeatherReport {
    pub fn glyph(&self) -> &'static str {
        glyph_for_code(self.weather_code)
    }

    /// Readout text, e.g. "⛈️ 21°C". Temperature is rounded to a whole degree.
    pub fn readout(&self) -> String {
        format!("{} {}\u{b0}C", self.glyph(), self.temperature_c.round() as i64)
    }
}

/// Map a WMO weather code to its emoji glyph.
pub fn glyph_for_code(code: i64) -> &'static str {
    match code {
        0 => "\u{2600}\u{fe0f}",
        1 => "\u{1f324}\u{fe0f}",
        2 => "\u{26c5}",
        3 => "\u{2601}\u{fe0f}",
        45 | 48 => "\u{1f32b}\u{fe0f}",
        51 | 53 | 55 => "\u{1f327}\u{fe0f}",
        61 | 63 | 65 => "\u{1f327}\u{fe0f}",
        71 | 73 | 75 | 77 => "\u{1f328}\u{fe0f}",
        80 | 81 | 82 => "\u{1f327}\u{fe0f}",
        85 | 86 => "\u{1f328}\u{fe0f}",
        95 | 96 | 99 => "\u{26c8}\u{fe0f}",
        _ => FALLBACK_GLYPH,
    }
}

fn request_url() -> String {
    format!(
        "{}?latitude={}&longitude={}&current=temperature_2m,weather_code",
        FORECAST_ENDPOINT, LATITUDE, LONGITUDE
    )
}

/// Parse a forecast body into a report. Split out from the network call so
/// the widget's input path is testable with a canned body.
fn report_from_json(body: &str) -> Result<WeatherReport> {
    let parsed: ForecastResponse = serde_json::from_str(body)?;
    Ok(WeatherReport {
        temperature_c: parsed.current.temperature_2m,
        weather_code: parsed.current.weather_code,
    })
}

/// Fetch current conditions once. Blocking; call from a worker thread.
pub fn fetch_current() -> Result<WeatherReport> {
    let response = minreq::get(request_url())
        .with_timeout(FETCH_TIMEOUT_SECS)
        .send()?;

    if !(200..300).contains(&response.status_code) {
        return Err(AppError::Weather(format!(
            "forecast service returned {}",
            response.status_code
        )));
    }

    report_from_json(response.as_str()?)
}

/// One-shot fetch on a background thread; the outcome comes back over the
/// app channel as `Message::WeatherFetched`. No retry.
pub fn spawn_fetch(sender: app::Sender<Message>) {
    std::thread::spawn(move || {
        let outcome = fetch_current().map_err(|e| e.to_string());
        sender.send(Message::WeatherFetched(outcome));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thunderstorm_glyph() {
        assert_eq!(glyph_for_code(95), "\u{26c8}\u{fe0f}");
        assert_eq!(glyph_for_code(96), "\u{26c8}\u{fe0f}");
        assert_eq!(glyph_for_code(99), "\u{26c8}\u{fe0f}");
    }

    #[test]
    fn test_unmapped_code_falls_back_to_thermometer() {
        assert_eq!(glyph_for_code(5), FALLBACK_GLYPH);
        assert_eq!(glyph_for_code(-1), FALLBACK_GLYPH);
        assert_eq!(glyph_for_code(100), FALLBACK_GLYPH);
    }

    #[test]
    fn test_clear_sky_glyph() {
        assert_eq!(glyph_for_code(0), "\u{2600}\u{fe0f}");
    }

    #[test]
    fn test_report_from_json() {
        let body = r#"{
            "latitude": 49.28,
            "longitude": -123.12,
            "current": { "time": "2025-06-01T12:00", "temperature_2m": 17.3, "weather_code": 61 }
        }"#;
        let report = report_from_json(body).unwrap();
        assert_eq!(report.temperature_c, 17.3);
        assert_eq!(report.weather_code, 61);
    }

    #[test]
    fn test_report_from_json_missing_current_is_an_error() {
        let body = r#"{ "latitude": 49.28 }"#;
        assert!(report_from_json(body).is_err());
    }

    #[test]
    fn test_readout_rounds_temperature() {
        let report = WeatherReport {
            temperature_c: 21.6,
            weather_code: 95,
        };
        assert_eq!(report.readout(), "\u{26c8}\u{fe0f} 22\u{b0}C");

        let report = WeatherReport {
            temperature_c: -3.4,
            weather_code: 71,
        };
        assert_eq!(report.readout(), "\u{1f328}\u{fe0f} -3\u{b0}C");
    }

    #[test]
    fn test_request_url_pins_location_and_fields() {
        let url = request_url();
        assert!(url.starts_with(FORECAST_ENDPOINT));
        assert!(url.contains("latitude=49.2827"));
        assert!(url.contains("longitude=-123.1207"));
        assert!(url.contains("current=temperature_2m,weather_code"));
    }
}
