use std::{fs, path::Path};

use crate::{errors::EngineError, leaderboard::SpendBook, planner::Portfolio};

/// Writes the spend book to disk atomically by staging to a temporary file.
pub fn save_spend_book(book: &SpendBook, path: &Path) -> Result<(), EngineError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(book)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

pub fn load_spend_book(path: &Path) -> Result<SpendBook, EngineError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Writes the portfolio snapshot to disk atomically.
pub fn save_portfolio(portfolio: &Portfolio, path: &Path) -> Result<(), EngineError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(portfolio)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

pub fn load_portfolio(path: &Path) -> Result<Portfolio, EngineError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
