//! Rendering of weather documents into reply lines.

use crate::{config::DisplayConfig, format, xml::XmlNode};

/// Prefix the provider puts in front of the observation time.
const UPDATED_PREFIX: &str = "Last Updated on ";

/// Sentinel the provider uses for heat index / wind chill when neither
/// applies to the current conditions.
const NOT_APPLICABLE: &str = "NA";

/// One `"; "`-joined line of current conditions, in fixed field order.
pub fn current_conditions(doc: &XmlNode, config: &DisplayConfig) -> String {
    let mut output = Vec::new();

    let mut temp = format::temperature(doc, "temp", config);
    if let Some(heat_index) = sensed_temperature(doc, "heat_index", config) {
        temp.push_str(&format!(" (Heat Index: {heat_index})"));
    }
    if let Some(wind_chill) = sensed_temperature(doc, "windchill", config) {
        temp.push_str(&format!(" (Wind Chill: {wind_chill})"));
    }
    output.push(format!("Temperature: {temp}"));

    output.push(format!("Humidity: {}", doc.text_or("relative_humidity", "N/A%")));
    output.push(format!("Pressure: {}", format::pressure(doc, config)));
    output.push(format!("Conditions: {}", doc.text_or("weather", "Unknown")));
    output.push(format!("Wind Direction: {}", doc.text_or("wind_dir", "None")));
    output.push(format!("Wind Speed: {}", format::wind_speed(doc, config)));

    let updated = doc.text_or("observation_time", "Unknown");
    let updated = updated.strip_prefix(UPDATED_PREFIX).unwrap_or(&updated);
    output.push(format!("Updated: {updated}"));

    output.join("; ")
}

/// Heat index / wind chill value, present only when the provider reports one
/// (the `<field>_string` element carries text other than "NA").
fn sensed_temperature(doc: &XmlNode, field: &str, config: &DisplayConfig) -> Option<String> {
    let marker = doc.find(&format!("{field}_string"))?;
    if marker.text.is_empty() || marker.text == NOT_APPLICABLE {
        return None;
    }
    Some(format::temperature(doc, field, config))
}

/// One `"; "`-joined line per forecast day, in document order, truncated to
/// `forecast_days` entries (0 = all). Empty when the forecast is disabled.
pub fn forecast(doc: &XmlNode, config: &DisplayConfig) -> Vec<String> {
    if !config.show_forecast {
        return Vec::new();
    }

    let mut output = Vec::new();
    let Some(simple) = doc.find("simpleforecast") else {
        return output;
    };

    for day in simple.find_all("forecastday") {
        if config.forecast_days != 0 && output.len() >= config.forecast_days as usize {
            break;
        }

        let line = [
            format!("Forecast for {}", day.text_or("weekday", "Unknown")),
            format!("Conditions: {}", day.text_or("conditions", "Unknown")),
            format!("High: {}", format::forecast_temperature(day, "high", config)),
            format!("Low: {}", format::forecast_temperature(day, "low", config)),
        ];
        output.push(line.join("; "));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both_units() -> DisplayConfig {
        DisplayConfig::default()
    }

    fn doc(xml: &str) -> XmlNode {
        XmlNode::parse(xml).expect("test document should parse")
    }

    fn sample_conditions() -> XmlNode {
        doc("<current_observation>\
             <observation_location><city>New York</city><full>New York, NY</full></observation_location>\
             <temp_f>72</temp_f><temp_c>22</temp_c>\
             <heat_index_string>NA</heat_index_string>\
             <windchill_string>NA</windchill_string>\
             <relative_humidity>45%</relative_humidity>\
             <pressure_mb>1013</pressure_mb><pressure_in>29.92</pressure_in>\
             <weather>Partly Cloudy</weather>\
             <wind_dir>NW</wind_dir><wind_mph>10</wind_mph>\
             <observation_time>Last Updated on June 5, 2:51 PM EDT</observation_time>\
             </current_observation>")
    }

    fn forecast_doc(days: &[&str]) -> XmlNode {
        let mut body = String::from("<forecast><simpleforecast>");
        for day in days {
            body.push_str(&format!(
                "<forecastday><weekday>{day}</weekday>\
                 <conditions>Clear</conditions>\
                 <high><fahrenheit>80</fahrenheit><celsius>27</celsius></high>\
                 <low><fahrenheit>60</fahrenheit><celsius>16</celsius></low>\
                 </forecastday>"
            ));
        }
        body.push_str("</simpleforecast></forecast>");
        doc(&body)
    }

    #[test]
    fn conditions_line_has_fixed_field_order() {
        let line = current_conditions(&sample_conditions(), &both_units());
        assert_eq!(
            line,
            "Temperature: 72\u{b0}F/22\u{b0}C; Humidity: 45%; \
             Pressure: 29.92in/101.3kPa; Conditions: Partly Cloudy; \
             Wind Direction: NW; Wind Speed: 10mph/16km/h; \
             Updated: June 5, 2:51 PM EDT"
        );
    }

    #[test]
    fn heat_index_and_wind_chill_append_when_reported() {
        let d = doc("<current_observation>\
             <temp_f>95</temp_f><temp_c>35</temp_c>\
             <heat_index_string>Feels hotter</heat_index_string>\
             <heat_index_f>105</heat_index_f><heat_index_c>41</heat_index_c>\
             <windchill_string>Feels colder</windchill_string>\
             <windchill_f>90</windchill_f><windchill_c>32</windchill_c>\
             </current_observation>");

        let line = current_conditions(&d, &both_units());
        assert!(line.starts_with(
            "Temperature: 95\u{b0}F/35\u{b0}C \
             (Heat Index: 105\u{b0}F/41\u{b0}C) \
             (Wind Chill: 90\u{b0}F/32\u{b0}C);"
        ));
    }

    #[test]
    fn na_sentinel_suppresses_heat_index_and_wind_chill() {
        let line = current_conditions(&sample_conditions(), &both_units());
        assert!(!line.contains("Heat Index"));
        assert!(!line.contains("Wind Chill"));
    }

    #[test]
    fn absent_sensed_markers_are_suppressed_too() {
        let d = doc("<current_observation><temp_f>50</temp_f><temp_c>10</temp_c></current_observation>");
        let line = current_conditions(&d, &both_units());
        assert!(!line.contains("Heat Index"));
        assert!(!line.contains("Wind Chill"));
    }

    #[test]
    fn updated_keeps_time_without_provider_prefix() {
        let d = doc("<current_observation>\
             <observation_time>June 5, 2:51 PM EDT</observation_time>\
             </current_observation>");
        let line = current_conditions(&d, &both_units());
        assert!(line.ends_with("Updated: June 5, 2:51 PM EDT"));
    }

    #[test]
    fn missing_fields_degrade_to_placeholders() {
        let d = doc("<current_observation></current_observation>");
        let line = current_conditions(&d, &both_units());

        assert!(line.contains("Humidity: N/A%"));
        assert!(line.contains("Conditions: Unknown"));
        assert!(line.contains("Wind Direction: None"));
        assert!(line.contains("Updated: Unknown"));
    }

    #[test]
    fn forecast_disabled_yields_no_lines() {
        let config = DisplayConfig { show_forecast: false, forecast_days: 3, ..both_units() };
        assert!(forecast(&forecast_doc(&["Monday", "Tuesday"]), &config).is_empty());
    }

    #[test]
    fn forecast_respects_day_limit_in_document_order() {
        let config = DisplayConfig { forecast_days: 2, ..both_units() };
        let lines = forecast(
            &forecast_doc(&["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]),
            &config,
        );

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Forecast for Monday;"));
        assert!(lines[1].starts_with("Forecast for Tuesday;"));
    }

    #[test]
    fn forecast_day_limit_zero_means_unlimited() {
        let lines = forecast(&forecast_doc(&["Mon", "Tue", "Wed"]), &both_units());
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn forecast_line_shape() {
        let lines = forecast(&forecast_doc(&["Monday"]), &both_units());
        assert_eq!(
            lines[0],
            "Forecast for Monday; Conditions: Clear; \
             High: 80\u{b0}F/27\u{b0}C; Low: 60\u{b0}F/16\u{b0}C"
        );
    }

    #[test]
    fn forecast_without_simpleforecast_section_is_empty() {
        let lines = forecast(&doc("<forecast></forecast>"), &both_units());
        assert!(lines.is_empty());
    }
}
