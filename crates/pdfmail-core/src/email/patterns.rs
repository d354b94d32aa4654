//! Regex patterns for address matching.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Local part, "@", domain labels, "." and an alphabetic TLD of 2+ letters
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();
}
