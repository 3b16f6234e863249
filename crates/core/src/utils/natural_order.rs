//! Natural ("human") string ordering for item codes.
//!
//! Runs of ASCII digits compare by numeric value, so `T-2` sorts before
//! `T-10`. Other characters compare case-insensitively, with punctuation
//! before digits before letters. Strings that are equal under those rules
//! are ordered lowercase-first, then by code point, which keeps the result
//! a total order: `natural_cmp(a, b) == Equal` only when `a == b`.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compares two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    primary_cmp(a, b).then_with(|| tie_break(a, b))
}

/// Sorts strings in place in natural order.
pub fn natural_sort<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}

fn primary_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                match cmp_numeric(&l_run, &r_run) {
                    Ordering::Equal => {}
                    ord => return ord,
                }
            }
            (Some(l), Some(r)) => {
                match char_key(l).cmp(&char_key(r)) {
                    Ordering::Equal => {}
                    ord => return ord,
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        run.push(c);
    }
    run
}

// Leading zeros are ignored here and settled by the tie-break.
fn cmp_numeric(l: &str, r: &str) -> Ordering {
    let l = l.trim_start_matches('0');
    let r = r.trim_start_matches('0');
    l.len().cmp(&r.len()).then_with(|| l.cmp(r))
}

fn char_key(c: char) -> (u8, char) {
    let class = if c.is_ascii_digit() {
        1
    } else if c.is_alphanumeric() {
        2
    } else {
        0
    };
    (class, c.to_lowercase().next().unwrap_or(c))
}

fn tie_break(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(|c| (c.is_uppercase(), c))
        .cmp(b.chars().map(|c| (c.is_uppercase(), c)))
}
