//! Pipe class code recognition and ordering

use crate::constants::{ASME_RATING_THRESHOLD, PIPE_CLASS_PATTERN};
use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::LazyLock;

static CLASS_CODE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(PIPE_CLASS_PATTERN).ok());

/// Whether `token` is a pipe class code such as `150JX00`
pub fn is_class_code(token: &str) -> bool {
    CLASS_CODE
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(token.trim()))
}

/// Text before the first `J`; empty when there is none or it leads the code
pub fn extract_rating_token(code: &str) -> &str {
    let code = code.trim();
    match code.find(['J', 'j']) {
        Some(index) if index > 0 => &code[..index],
        _ => "",
    }
}

/// Whether a rating token parses to a number of at least 150
pub fn is_high_rating(rating: &str) -> bool {
    rating
        .trim()
        .parse::<f64>()
        .is_ok_and(|value| value >= ASME_RATING_THRESHOLD)
}

/// Digit-aware, case-insensitive comparison ("2JZ02" before "10JZ02")
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                let ordering = compare_digit_runs(&l_run, &r_run);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                let ordering = l.to_lowercase().cmp(r.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

/// Compare digit runs by value without parsing, so long runs never overflow
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
        .then_with(|| a.len().cmp(&b.len()))
}

pub fn natural_sort(codes: &mut [String]) {
    codes.sort_by(|a, b| natural_cmp(a, b));
}

/// Split codes into high-rating (ASME) and other codes, each naturally sorted
pub fn partition<S: AsRef<str>>(codes: &[S]) -> (Vec<String>, Vec<String>) {
    let (mut high, mut other): (Vec<String>, Vec<String>) = codes
        .iter()
        .map(|code| code.as_ref().to_string())
        .partition(|code| is_high_rating(extract_rating_token(code)));
    natural_sort(&mut high);
    natural_sort(&mut other);
    (high, other)
}

/// Class codes grouped for display
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassGroups {
    /// Rating of 150 or more
    pub asme: Vec<String>,
    /// Any other rating token
    pub din: Vec<String>,
    /// Nothing before the `J`
    pub other: Vec<String>,
    /// ASME, then DIN, then other
    pub ordered: Vec<String>,
}

pub fn group_by_rating<S: AsRef<str>>(codes: &[S]) -> ClassGroups {
    let mut groups = ClassGroups::default();
    for code in codes {
        let code = code.as_ref().trim().to_string();
        if code.is_empty() {
            continue;
        }
        let rating = extract_rating_token(&code);
        if rating.is_empty() {
            groups.other.push(code);
        } else if is_high_rating(rating) {
            groups.asme.push(code);
        } else {
            groups.din.push(code);
        }
    }

    natural_sort(&mut groups.asme);
    natural_sort(&mut groups.din);
    natural_sort(&mut groups.other);
    groups.ordered = groups
        .asme
        .iter()
        .chain(&groups.din)
        .chain(&groups.other)
        .cloned()
        .collect();
    groups
}
