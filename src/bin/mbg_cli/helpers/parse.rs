// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors
// ABOUTME: clap value parsers for menu flags
// ABOUTME: Splits ID:GRAMS, NAME:GRAMS, and NAME:UNIT arguments

use mbg_menu_validator::models::MenuItem;

/// Food named in the composition table with a gram amount
#[derive(Debug, Clone, PartialEq)]
pub struct FoodPortion {
    pub name: String,
    pub gram: f64,
}

/// Household measure of a named food
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Serving {
    pub food_name: String,
    pub unit: String,
}

fn split_pair<'a>(raw: &'a str, expected: &str) -> Result<(&'a str, &'a str), String> {
    raw.rsplit_once(':')
        .map(|(left, right)| (left.trim(), right.trim()))
        .filter(|(left, right)| !left.is_empty() && !right.is_empty())
        .ok_or_else(|| format!("expected {expected}, got '{raw}'"))
}

/// Gram amount; range checks are left to the evaluator so they carry an error code
fn parse_gram(raw: &str) -> Result<f64, String> {
    raw.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| format!("'{raw}' is not a number of grams"))
}

/// Parse `ID:GRAMS`
pub fn parse_item(raw: &str) -> Result<MenuItem, String> {
    let (food_id, gram) = split_pair(raw, "ID:GRAMS")?;
    Ok(MenuItem::new(food_id, parse_gram(gram)?))
}

/// Parse `NAME:GRAMS`
pub fn parse_food(raw: &str) -> Result<FoodPortion, String> {
    let (name, gram) = split_pair(raw, "NAME:GRAMS")?;
    Ok(FoodPortion {
        name: name.to_owned(),
        gram: parse_gram(gram)?,
    })
}

/// Parse `NAME:UNIT`
pub fn parse_serving(raw: &str) -> Result<Serving, String> {
    let (food_name, unit) = split_pair(raw, "NAME:UNIT")?;
    Ok(Serving {
        food_name: food_name.to_owned(),
        unit: unit.to_owned(),
    })
}
