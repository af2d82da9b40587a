//! Offered class-section model
//!
//! Sections carry parsed meeting days and times. Day strings use compact
//! registrar codes ("MW", "TR", "MWF"; `R` = Thursday, `U` = Sunday) and
//! times use "01:30PM-02:45PM"-style ranges, both as found in catalog
//! feeds. "TBA" in either field means the section has no fixed meeting.

use std::fmt;

/// Day of the week a section meets
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Weekday {
    /// Monday (code `M`)
    Monday,
    /// Tuesday (code `T`)
    Tuesday,
    /// Wednesday (code `W`)
    Wednesday,
    /// Thursday (code `R`)
    Thursday,
    /// Friday (code `F`)
    Friday,
    /// Saturday (code `S`)
    Saturday,
    /// Sunday (code `U`)
    Sunday,
}

impl Weekday {
    /// Single-letter registrar code for the day
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Monday => 'M',
            Self::Tuesday => 'T',
            Self::Wednesday => 'W',
            Self::Thursday => 'R',
            Self::Friday => 'F',
            Self::Saturday => 'S',
            Self::Sunday => 'U',
        }
    }

    /// Parse a compact day string (e.g., "MW", "TR", "MWF")
    ///
    /// "TBA" (or an empty string) yields an empty day set.
    ///
    /// # Returns
    /// `None` if the string contains a character that is not a day code
    #[must_use]
    pub fn parse_days(s: &str) -> Option<Vec<Self>> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("tba") {
            return Some(Vec::new());
        }

        let mut days = Vec::new();
        for c in trimmed.chars() {
            let day = match c.to_ascii_uppercase() {
                'M' => Self::Monday,
                'T' => Self::Tuesday,
                'W' => Self::Wednesday,
                'R' => Self::Thursday,
                'F' => Self::Friday,
                'S' => Self::Saturday,
                'U' => Self::Sunday,
                _ => return None,
            };
            if !days.contains(&day) {
                days.push(day);
            }
        }
        Some(days)
    }
}

/// Meeting time of a section: a fixed half-open interval, or TBA
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MeetingTime {
    /// No fixed meeting time announced
    Tba,
    /// Half-open `[start, end)` interval, minutes from midnight
    Interval {
        /// Start of the meeting, inclusive
        start: u16,
        /// End of the meeting, exclusive
        end: u16,
    },
}

impl MeetingTime {
    /// Parse a time-range string like "01:30PM-02:45PM"
    ///
    /// Trailing parentheticals ("TBA (Online)") are ignored. "TBA" or an
    /// empty string yields [`MeetingTime::Tba`]. Times without an AM/PM
    /// suffix are read as 24-hour clock.
    ///
    /// # Returns
    /// `None` if a non-TBA string cannot be parsed as a time range
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let cleaned = strip_parenthetical(s);
        if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("tba") {
            return Some(Self::Tba);
        }

        let (start_str, end_str) = cleaned.split_once('-')?;
        let start = parse_time_of_day(start_str)?;
        let end = parse_time_of_day(end_str)?;
        if start >= end {
            return None;
        }
        Some(Self::Interval { start, end })
    }

    /// Half-open interval overlap test: `a.start < b.end && b.start < a.end`
    ///
    /// TBA overlaps nothing.
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        match (self, other) {
            (
                Self::Interval { start: a0, end: a1 },
                Self::Interval { start: b0, end: b1 },
            ) => a0 < b1 && b0 < a1,
            _ => false,
        }
    }
}

impl fmt::Display for MeetingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tba => write!(f, "TBA"),
            Self::Interval { start, end } => {
                write!(
                    f,
                    "{}-{}",
                    format_time_of_day(*start),
                    format_time_of_day(*end)
                )
            }
        }
    }
}

/// Drop a trailing "(...)" annotation and surrounding whitespace
fn strip_parenthetical(s: &str) -> &str {
    s.find('(').map_or(s, |pos| &s[..pos]).trim()
}

/// Parse "01:30PM" / "7:30AM" / "13:30" into minutes from midnight
fn parse_time_of_day(s: &str) -> Option<u16> {
    let token = s.trim().to_ascii_uppercase();

    let (digits, meridiem) = if let Some(rest) = token.strip_suffix("AM") {
        (rest.trim().to_string(), Some(false))
    } else if let Some(rest) = token.strip_suffix("PM") {
        (rest.trim().to_string(), Some(true))
    } else {
        (token, None)
    };

    let (hh, mm) = digits.split_once(':')?;
    let hours: u16 = hh.parse().ok()?;
    let minutes: u16 = mm.parse().ok()?;
    if minutes >= 60 {
        return None;
    }

    let hours = match meridiem {
        Some(pm) => {
            if hours == 0 || hours > 12 {
                return None;
            }
            // 12AM is midnight, 12PM is noon
            (hours % 12) + if pm { 12 } else { 0 }
        }
        None => {
            if hours >= 24 {
                return None;
            }
            hours
        }
    };

    Some(hours * 60 + minutes)
}

/// Format minutes from midnight back to "01:30PM" style
fn format_time_of_day(minutes: u16) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    let meridiem = if hours < 12 { "AM" } else { "PM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hours:02}:{mins:02}{meridiem}")
}

/// An offered class section for a course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Course code this section belongs to (e.g., "CMPE 102")
    pub course: String,
    /// Section/registration number (e.g., "44801")
    pub section_id: String,
    /// Instructor of record
    pub professor: String,
    /// Term the section is offered in (e.g., "Spring 2022")
    pub semester: String,
    /// Meeting days; empty for TBA sections
    pub days: Vec<Weekday>,
    /// Meeting time interval, or TBA
    pub time: MeetingTime,
}

impl Section {
    /// Whether this section is TBA (no fixed meeting commitment)
    #[must_use]
    pub fn is_tba(&self) -> bool {
        self.days.is_empty() || self.time == MeetingTime::Tba
    }

    /// Conflict test between two sections
    ///
    /// Two sections conflict iff they share at least one meeting day AND
    /// their time intervals overlap. A TBA section conflicts with nothing;
    /// this models "no fixed commitment" and is a deliberate assumption,
    /// not a universal truth; stricter callers must pre-filter TBA
    /// sections themselves.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        if self.is_tba() || other.is_tba() {
            return false;
        }
        let share_day = self.days.iter().any(|d| other.days.contains(d));
        share_day && self.time.overlaps(other.time)
    }

    /// Display string for the day set (e.g., "MW"), "TBA" when empty
    #[must_use]
    pub fn days_label(&self) -> String {
        if self.days.is_empty() {
            "TBA".to_string()
        } else {
            self.days.iter().map(|d| d.code()).collect()
        }
    }
}
