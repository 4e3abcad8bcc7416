use salesdash_core::model::{Parameter, ScenarioParameters};

use crate::error::{ApiError, ApiResult};

const MAX_NAME_LENGTH: usize = 200;
const MAX_CHAT_MESSAGE_LENGTH: usize = 4000;
const MAX_SWEEP_POINTS: usize = 200;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn validation_error(field: &str, message: impl Into<String>) -> ApiError {
    ApiError::ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

fn validate_name(field: &str, label: &str, name: &str) -> ApiResult<()> {
    if name.trim().is_empty() {
        return Err(validation_error(field, format!("{label} name cannot be empty")));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(validation_error(
            field,
            format!("{label} name cannot exceed {MAX_NAME_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Validate a scenario name
pub fn validate_scenario_name(name: &str) -> ApiResult<()> {
    validate_name("name", "Scenario", name)
}

/// Validate a preset name
pub fn validate_preset_name(name: &str) -> ApiResult<()> {
    validate_name("name", "Preset", name)
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> ApiResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(validation_error(
            field,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(())
}

/// Validate scenario parameters against the slider ranges
pub fn validate_scenario_params(params: &ScenarioParameters) -> ApiResult<()> {
    check_range("product_mix.kx", params.product_mix.kx, 0.0, 100.0)?;
    check_range("product_mix.dx", params.product_mix.dx, 0.0, 100.0)?;
    check_range("product_mix.ex", params.product_mix.ex, 0.0, 100.0)?;
    if params.product_mix.total() <= 0.0 {
        return Err(validation_error(
            "product_mix",
            "product-mix shares must sum to a positive value",
        ));
    }

    check_range("pricing.kx", params.pricing.kx, 800.0, 2000.0)?;
    check_range("pricing.dx", params.pricing.dx, 1200.0, 2500.0)?;
    check_range("pricing.ex", params.pricing.ex, 600.0, 1500.0)?;

    check_range("costs.materials", params.costs.materials, 300.0, 600.0)?;
    check_range("costs.labor", params.costs.labor, 250.0, 500.0)?;
    check_range("costs.overhead", params.costs.overhead, 150.0, 400.0)?;

    check_range("production.volume", params.production.volume, 100.0, 1000.0)?;
    check_range("production.efficiency", params.production.efficiency, 50.0, 100.0)?;

    check_range("market.growth", params.market.growth, -5.0, 15.0)?;
    check_range("market.competition", params.market.competition, 0.0, 10.0)?;

    Ok(())
}

/// Validate that every parameter respects its own declared range
pub fn validate_parameters(parameters: &[Parameter]) -> ApiResult<()> {
    for parameter in parameters {
        if !parameter.in_range() {
            return Err(validation_error(
                &parameter.name,
                format!(
                    "value {} outside [{}, {}]",
                    parameter.value, parameter.min, parameter.max
                ),
            ));
        }
    }
    Ok(())
}

/// Validate a preset's parameter bundle (must be non-empty and in range)
pub fn validate_preset_parameters(parameters: &[Parameter]) -> ApiResult<()> {
    if parameters.is_empty() {
        return Err(validation_error(
            "parameters",
            "Preset must contain at least one parameter",
        ));
    }
    validate_parameters(parameters)
}

/// Validate the swept value list
pub fn validate_sweep_values(values: &[f64]) -> ApiResult<()> {
    if values.is_empty() {
        return Err(validation_error("values", "Sweep values cannot be empty"));
    }
    if values.len() > MAX_SWEEP_POINTS {
        return Err(validation_error(
            "values",
            format!("Sweep cannot exceed {MAX_SWEEP_POINTS} points"),
        ));
    }
    if values.iter().any(|value| !value.is_finite()) {
        return Err(validation_error("values", "Sweep values must be finite"));
    }
    Ok(())
}

/// Validate a relayed chat message
pub fn validate_chat_message(message: &str) -> ApiResult<()> {
    if message.trim().is_empty() {
        return Err(ApiError::InvalidMessage);
    }
    if message.len() > MAX_CHAT_MESSAGE_LENGTH {
        return Err(validation_error(
            "message",
            format!("Message cannot exceed {MAX_CHAT_MESSAGE_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Validate a report period selection
pub fn validate_report_period(month: &str, year: &str) -> ApiResult<()> {
    if !MONTHS.contains(&month) {
        return Err(validation_error("month", "Unknown month name"));
    }
    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(validation_error("year", "Year must be a four-digit number"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesdash_core::model::default_parameters;

    #[test]
    fn test_validate_names() {
        assert!(validate_scenario_name("Growth Strategy").is_ok());
        assert!(validate_scenario_name("").is_err());
        assert!(validate_scenario_name("   ").is_err());
        assert!(validate_scenario_name(&"a".repeat(201)).is_err());
        assert!(validate_preset_name("High Efficiency").is_ok());
    }

    #[test]
    fn test_validate_scenario_params_ranges() {
        let mut params = ScenarioParameters::default();
        assert!(validate_scenario_params(&params).is_ok());

        params.production.efficiency = 45.0;
        assert!(validate_scenario_params(&params).is_err());
        params.production.efficiency = 85.0;

        params.market.growth = 20.0;
        assert!(validate_scenario_params(&params).is_err());
        params.market.growth = -5.0;
        assert!(validate_scenario_params(&params).is_ok());
    }

    #[test]
    fn test_validate_scenario_params_rejects_zero_mix() {
        let mut params = ScenarioParameters::default();
        params.product_mix.kx = 0.0;
        params.product_mix.dx = 0.0;
        params.product_mix.ex = 0.0;
        assert!(validate_scenario_params(&params).is_err());
    }

    #[test]
    fn test_validate_parameters_uses_declared_ranges() {
        let mut parameters = default_parameters();
        assert!(validate_parameters(&parameters).is_ok());

        parameters[0].value = 200.0; // bypass set() clamping
        assert!(validate_parameters(&parameters).is_err());

        assert!(validate_preset_parameters(&[]).is_err());
    }

    #[test]
    fn test_validate_sweep_values() {
        assert!(validate_sweep_values(&[70.0, 85.0, 100.0]).is_ok());
        assert!(validate_sweep_values(&[]).is_err());
        assert!(validate_sweep_values(&[f64::NAN]).is_err());
        assert!(validate_sweep_values(&vec![1.0; 201]).is_err());
    }

    #[test]
    fn test_validate_chat_message() {
        assert!(validate_chat_message("What drove February revenue?").is_ok());
        assert!(validate_chat_message("").is_err());
        assert!(validate_chat_message("  ").is_err());
        assert!(validate_chat_message(&"x".repeat(4001)).is_err());
    }

    #[test]
    fn test_validate_report_period() {
        assert!(validate_report_period("February", "2025").is_ok());
        assert!(validate_report_period("Febtober", "2025").is_err());
        assert!(validate_report_period("February", "25").is_err());
        assert!(validate_report_period("February", "twenty").is_err());
    }
}
