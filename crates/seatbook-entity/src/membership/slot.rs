//! Recurring daily time slots and the overlap predicate.
//!
//! A slot denotes the interval `[start, end)` repeating every day. When the
//! end time-of-day is earlier than the start, the slot crosses midnight and
//! occupies `[start, 24:00) ∪ [00:00, end)` instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use seatbook_core::{AppError, AppResult};

/// A recurring daily time window on a seat.
///
/// Invariant: `crosses_midnight` is true iff `(end_hour, end_minute)` is
/// lexicographically earlier than `(start_hour, start_minute)`. The
/// constructor derives the flag; it is never supplied by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Start hour, 0–23.
    pub start_hour: i16,
    /// Start minute, 0–59.
    pub start_minute: i16,
    /// End hour, 0–23.
    pub end_hour: i16,
    /// End minute, 0–59.
    pub end_minute: i16,
    /// Whether the slot spans across 00:00.
    pub crosses_midnight: bool,
}

impl TimeSlot {
    /// Build a slot from its components, validating ranges and deriving the
    /// midnight-crossing flag.
    pub fn new(
        start_hour: i16,
        start_minute: i16,
        end_hour: i16,
        end_minute: i16,
    ) -> AppResult<Self> {
        validate_time(start_hour, start_minute)?;
        validate_time(end_hour, end_minute)?;

        if (start_hour, start_minute) == (end_hour, end_minute) {
            return Err(AppError::validation(
                "Time slot must have a positive duration",
            ));
        }

        let crosses_midnight = (end_hour, end_minute) < (start_hour, start_minute);

        Ok(Self {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
            crosses_midnight,
        })
    }

    /// Parse a timing string of the form `"HH:MM - HH:MM"`.
    pub fn parse(timing: &str) -> AppResult<Self> {
        let (start, end) = timing.split_once(" - ").ok_or_else(|| {
            AppError::validation(format!(
                "Invalid timing '{timing}'. Expected \"HH:MM - HH:MM\""
            ))
        })?;

        let (sh, sm) = parse_hhmm(start.trim())?;
        let (eh, em) = parse_hhmm(end.trim())?;
        Self::new(sh, sm, eh, em)
    }

    /// Start of the slot in minutes since midnight.
    pub fn start_minutes(&self) -> i32 {
        i32::from(self.start_hour) * 60 + i32::from(self.start_minute)
    }

    /// End of the slot in minutes since midnight.
    pub fn end_minutes(&self) -> i32 {
        i32::from(self.end_hour) * 60 + i32::from(self.end_minute)
    }

    /// Whether two recurring daily slots share any minute of the day.
    ///
    /// The predicate is pure, total, and symmetric: which slot is "new" and
    /// which is "existing" never changes the answer.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        let (s1, e1) = (self.start_minutes(), self.end_minutes());
        let (s2, e2) = (other.start_minutes(), other.end_minutes());

        match (self.crosses_midnight, other.crosses_midnight) {
            // Plain interval overlap on [0, 1440).
            (false, false) => s1 < e2 && s2 < e1,

            // `self` occupies [s1, 1440) ∪ [0, e1). `other` = [s2, e2) with
            // s2 < e2 intersects the first part iff e2 > s1, and the second
            // part iff s2 < e1.
            (true, false) => e2 > s1 || s2 < e1,
            (false, true) => e1 > s2 || s1 < e2,

            // Two midnight-crossing slots both contain [0, min(e1, e2)),
            // which is non-empty, so they always intersect.
            (true, true) => true,
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02} - {:02}:{:02}",
            self.start_hour, self.start_minute, self.end_hour, self.end_minute
        )
    }
}

/// Validate an (hour, minute) pair.
fn validate_time(hour: i16, minute: i16) -> AppResult<()> {
    if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
        return Err(AppError::validation(format!(
            "Invalid time {hour:02}:{minute:02}. Hours must be 0-23, minutes 0-59"
        )));
    }
    Ok(())
}

/// Parse one `"HH:MM"` component.
fn parse_hhmm(text: &str) -> AppResult<(i16, i16)> {
    let (h, m) = text
        .split_once(':')
        .ok_or_else(|| AppError::validation(format!("Invalid time '{text}'. Use HH:MM format")))?;

    let hour: i16 = h
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid hour in '{text}'")))?;
    let minute: i16 = m
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid minute in '{text}'")))?;

    Ok((hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTES_PER_DAY: i32 = 24 * 60;

    fn slot(s: &str) -> TimeSlot {
        TimeSlot::parse(s).expect("valid slot")
    }

    #[test]
    fn test_parse_derives_crossing_flag() {
        assert!(!slot("09:00 - 12:00").crosses_midnight);
        assert!(slot("22:00 - 02:00").crosses_midnight);
        assert!(slot("23:30 - 23:00").crosses_midnight);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(TimeSlot::parse("9am to 5pm").is_err());
        assert!(TimeSlot::parse("25:00 - 26:00").is_err());
        assert!(TimeSlot::parse("09:61 - 10:00").is_err());
        assert!(TimeSlot::parse("09:00").is_err());
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(TimeSlot::new(9, 0, 9, 0).is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let s = slot("09:05 - 23:40");
        assert_eq!(s.to_string(), "09:05 - 23:40");
        assert_eq!(TimeSlot::parse(&s.to_string()).unwrap(), s);
    }

    #[test]
    fn test_self_overlap() {
        for timing in ["09:00 - 10:00", "00:00 - 23:59", "22:00 - 02:00"] {
            let s = slot(timing);
            assert!(s.overlaps(&s), "{timing} should overlap itself");
        }
    }

    #[test]
    fn test_adjacent_slots_do_not_overlap() {
        let a = slot("09:00 - 10:00");
        let b = slot("10:00 - 11:00");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_plain_overlap() {
        let a = slot("09:00 - 11:00");
        let b = slot("10:00 - 12:00");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_containment() {
        let outer = slot("08:00 - 20:00");
        let inner = slot("12:00 - 13:00");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_crossing_vs_early_morning() {
        // A spans 22:00→02:00; B starts at 01:00, inside A's tail.
        let a = slot("22:00 - 02:00");
        let b = slot("01:00 - 03:00");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_crossing_vs_midday() {
        let a = slot("22:00 - 02:00");
        let c = slot("10:00 - 18:00");
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_crossing_vs_late_evening() {
        let a = slot("22:00 - 02:00");
        let d = slot("21:00 - 23:00");
        assert!(a.overlaps(&d));
        assert!(d.overlaps(&a));
    }

    #[test]
    fn test_crossing_adjacency() {
        let a = slot("22:00 - 02:00");
        // Ends exactly where A begins, starts exactly where A ends.
        let b = slot("02:00 - 22:00");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_both_crossing_always_overlap() {
        let a = slot("22:00 - 02:00");
        let b = slot("23:00 - 01:00");
        let c = slot("20:00 - 04:00");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    // Exhaustive commutativity sweep over hour-aligned slots, including
    // midnight-crossing ones. Catches any asymmetry between the two
    // single-crossing branches.
    #[test]
    fn test_overlap_is_commutative() {
        let mut slots = Vec::new();
        for start in 0..24 {
            for end in 0..24 {
                if start != end {
                    slots.push(TimeSlot::new(start, 0, end, 0).unwrap());
                }
            }
        }
        for a in &slots {
            for b in &slots {
                assert_eq!(
                    a.overlaps(b),
                    b.overlaps(a),
                    "overlap({a}, {b}) disagrees with overlap({b}, {a})"
                );
            }
        }
    }

    // The single-crossing branch must agree with a brute-force minute-set
    // intersection of the two slots' daily occupancy.
    #[test]
    fn test_overlap_matches_minute_membership() {
        fn occupies(s: &TimeSlot, minute: i32) -> bool {
            let (start, end) = (s.start_minutes(), s.end_minutes());
            if s.crosses_midnight {
                minute >= start || minute < end
            } else {
                minute >= start && minute < end
            }
        }

        let cases = [
            ("22:00 - 02:00", "01:00 - 03:00"),
            ("22:00 - 02:00", "10:00 - 18:00"),
            ("22:00 - 02:00", "02:00 - 22:00"),
            ("23:00 - 01:00", "00:30 - 00:45"),
            ("09:00 - 17:00", "16:59 - 17:01"),
            ("18:00 - 06:00", "05:00 - 07:00"),
        ];

        for (x, y) in cases {
            let (a, b) = (slot(x), slot(y));
            let brute = (0..MINUTES_PER_DAY).any(|m| occupies(&a, m) && occupies(&b, m));
            assert_eq!(a.overlaps(&b), brute, "predicate diverges for {x} vs {y}");
            assert_eq!(b.overlaps(&a), brute, "predicate diverges for {y} vs {x}");
        }
    }
}
