use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{Error, Result};

fn first_amount(text: &str, original: &str) -> Result<u32> {
    lazy_static! {
        static ref DIGITS: Regex = Regex::new(r"\d+").unwrap();
    }
    DIGITS
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| Error::SalaryFormat(original.to_owned()))
}

/// Turns a salary such as `$1,500 - $2,500` or `$3,000` into one number.
/// Ranges become the (floored) average of both bounds.
pub fn normalize_salary(salary: &str) -> Result<u32> {
    let cleaned = salary
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect::<String>();
    if !cleaned.contains('-') {
        return first_amount(&cleaned, salary);
    }
    let bounds = cleaned.split('-').collect::<Vec<_>>();
    match bounds.as_slice() {
        [min, max] => {
            let min = first_amount(min, salary)? as u64;
            let max = first_amount(max, salary)? as u64;
            Ok(((min + max) / 2) as u32)
        }
        _ => Err(Error::SalaryFormat(salary.to_owned())),
    }
}
