use crate::domain::RawCityFact;
use crate::error::{CityError, Result};

/// Upper bound on `baseRent`. Leaves headroom for the live adjustment while
/// keeping the published rent well inside `u32`.
pub const MAX_BASE_RENT: f64 = 1_000_000.0;

/// Rejects facts that would otherwise surface as NaN or garbage scores.
/// Positions in errors are 1-based, matching the ids handed out later.
pub fn validate_facts(facts: &[RawCityFact]) -> Result<()> {
    for (index, fact) in facts.iter().enumerate() {
        validate_fact(index + 1, fact)?;
    }
    Ok(())
}

fn validate_fact(position: usize, fact: &RawCityFact) -> Result<()> {
    let invalid = |reason: String| CityError::InvalidFact {
        position,
        name: fact.name.clone(),
        reason,
    };

    if fact.name.trim().is_empty() {
        return Err(invalid("name is empty".to_string()));
    }
    if !fact.base_rent.is_finite() || fact.base_rent <= 0.0 {
        return Err(invalid(format!(
            "baseRent must be a positive number, got {}",
            fact.base_rent
        )));
    }
    if fact.base_rent > MAX_BASE_RENT {
        return Err(invalid(format!(
            "baseRent must not exceed {MAX_BASE_RENT}, got {}",
            fact.base_rent
        )));
    }
    check_index(fact.safety_index, "safetyIndex").map_err(invalid)?;
    check_index(fact.expat_index, "expatIndex").map_err(invalid)?;

    Ok(())
}

fn check_index(value: f64, field: &str) -> std::result::Result<(), String> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{field} must be within 0..=100, got {value}"))
    }
}
