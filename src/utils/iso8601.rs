//! ISO-8601 instant parsing
//!
//! Accepts `YYYY-MM-DD`, optionally followed by `THH:MM[:SS[.fff]]`, optionally
//! followed by `Z` or a `±HH:MM` offset. Date-only strings resolve to midnight
//! and a missing offset means UTC.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use thiserror::Error;

/// Errors produced while parsing an ISO-8601 string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not match the supported grammar
    #[error("'{input}' is not a supported ISO-8601 instant: {reason}")]
    Grammar { input: String, reason: &'static str },

    /// The input is well formed but names a date or time that does not exist
    #[error("'{input}' does not name an existing instant: {reason}")]
    OutOfRange { input: String, reason: &'static str },
}

/// Parse an ISO-8601 string into a UTC instant
pub fn parse(input: &str) -> Result<DateTime<Utc>, ParseError> {
    let mut cursor = Cursor::new(input);

    let year = cursor.digits(4)?;
    cursor.expect(b'-', "expected '-' after year")?;
    let month = cursor.digits(2)?;
    cursor.expect(b'-', "expected '-' after month")?;
    let day = cursor.digits(2)?;

    let date = NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| cursor.out_of_range("calendar date does not exist"))?;

    let (mut hour, mut minute, mut second, mut millis) = (0, 0, 0, 0);
    if cursor.eat(b'T') || cursor.eat(b't') {
        hour = cursor.digits(2)?;
        cursor.expect(b':', "expected ':' after hour")?;
        minute = cursor.digits(2)?;
        if cursor.eat(b':') {
            second = cursor.digits(2)?;
            if cursor.eat(b'.') {
                millis = cursor.fraction_millis()?;
            }
        }
    }

    let time = date
        .and_hms_milli_opt(hour, minute, second, millis)
        .ok_or_else(|| cursor.out_of_range("time of day does not exist"))?;

    let offset_minutes = match cursor.next() {
        None => 0,
        Some(b'Z') | Some(b'z') => 0,
        Some(sign @ (b'+' | b'-')) => {
            let offset_hour = cursor.digits(2)?;
            cursor.expect(b':', "expected ':' inside offset")?;
            let offset_minute = cursor.digits(2)?;
            if offset_hour > 23 || offset_minute > 59 {
                return Err(cursor.out_of_range("offset out of range"));
            }
            let magnitude = (offset_hour * 60 + offset_minute) as i64;
            if sign == b'+' { magnitude } else { -magnitude }
        }
        Some(_) => return Err(cursor.grammar("unexpected character after time")),
    };

    if !cursor.is_done() {
        return Err(cursor.grammar("trailing characters"));
    }

    // Wall time is ahead of UTC by the offset, so UTC = local - offset
    Ok(time.and_utc() - Duration::minutes(offset_minutes))
}

struct Cursor<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn next(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.bytes.get(self.pos) == Some(&expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: u8, reason: &'static str) -> Result<(), ParseError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.grammar(reason))
        }
    }

    /// Read exactly `count` ASCII digits
    fn digits(&mut self, count: usize) -> Result<u32, ParseError> {
        let end = self.pos + count;
        let slice = self
            .bytes
            .get(self.pos..end)
            .filter(|s| s.iter().all(u8::is_ascii_digit))
            .ok_or_else(|| self.grammar("expected digits"))?;

        let value = slice
            .iter()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
        self.pos = end;
        Ok(value)
    }

    /// Read one or more fraction digits, keeping millisecond precision
    fn fraction_millis(&mut self) -> Result<u32, ParseError> {
        let start = self.pos;
        while self.bytes.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.grammar("expected digits after '.'"));
        }

        let mut millis = 0;
        for i in 0..3 {
            let digit = self
                .bytes
                .get(start + i)
                .filter(|b| b.is_ascii_digit())
                .map_or(0, |b| u32::from(b - b'0'));
            millis = millis * 10 + digit;
        }
        Ok(millis)
    }

    fn grammar(&self, reason: &'static str) -> ParseError {
        ParseError::Grammar {
            input: self.input.to_string(),
            reason,
        }
    }

    fn out_of_range(&self, reason: &'static str) -> ParseError {
        ParseError::OutOfRange {
            input: self.input.to_string(),
            reason,
        }
    }
}
