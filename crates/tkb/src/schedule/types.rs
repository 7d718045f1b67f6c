/// Types for timetable data
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weekday label (e.g. "Thứ 2") mapped to the sessions held that day.
pub type Schedule = BTreeMap<String, Vec<Session>>;

/// One scheduled class block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub time: String,    // "HH:MM-HH:MM"
    pub subject: String, // e.g. "Mạng máy tính"
    pub room: String,    // e.g. "A101", "Lab1"
    #[serde(flatten)]
    pub counterpart: Counterpart,
}

/// The other party of a session, depending on whose view the schedule is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Counterpart {
    /// Class being taught (teacher view)
    #[serde(rename = "class")]
    Class(String),
    /// Lecturer teaching the session (student view)
    #[serde(rename = "teacher")]
    Teacher(String),
}

impl Session {
    pub fn new(time: &str, subject: &str, room: &str, counterpart: Counterpart) -> Self {
        Self {
            time: time.to_string(),
            subject: subject.to_string(),
            room: room.to_string(),
            counterpart,
        }
    }
}

/// Both role schedules, keyed by the role's group name on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    #[serde(rename = "giangvien")]
    pub teacher: Schedule,
    #[serde(rename = "sinhvien")]
    pub student: Schedule,
}
