//! Data models for `CourseCompass`

pub mod course;
pub mod major;
pub mod section;
pub mod term;

pub use course::Course;
pub use major::Major;
pub use section::{MeetingTime, Section, Weekday};
pub use term::{Season, Term, TermSequence};
