//! Static timetable data served by the API.

mod types;

pub use types::*;

use std::fs;
use std::path::Path;
use tracing::info;

use crate::auth::Role;
use crate::config::ConfigError;

impl Timetable {
    /// Returns the timetable compiled into the service.
    pub fn builtin() -> Self {
        use Counterpart::{Class, Teacher};

        let teacher = Schedule::from([
            (
                "Thứ 2".to_string(),
                vec![
                    Session::new("07:30-09:30", "Mạng máy tính", "A101", Class("CNTT01".into())),
                    Session::new("09:45-11:45", "An ninh mạng", "A102", Class("CNTT02".into())),
                ],
            ),
            (
                "Thứ 3".to_string(),
                vec![
                    Session::new("13:30-15:30", "Cloud Computing", "B201", Class("CNTT03".into())),
                    Session::new(
                        "15:45-17:45",
                        "Zero Trust Architecture",
                        "B202",
                        Class("CNTT04".into()),
                    ),
                ],
            ),
            (
                "Thứ 4".to_string(),
                vec![Session::new("07:30-09:30", "Kubernetes", "Lab1", Class("CNTT01".into()))],
            ),
            (
                "Thứ 5".to_string(),
                vec![Session::new("09:45-11:45", "DevSecOps", "Lab2", Class("CNTT02".into()))],
            ),
            (
                "Thứ 6".to_string(),
                vec![Session::new("13:30-15:30", "Đồ án tốt nghiệp", "A301", Class("All".into()))],
            ),
        ]);

        let student = Schedule::from([
            (
                "Thứ 2".to_string(),
                vec![
                    Session::new(
                        "07:30-09:30",
                        "Mạng máy tính",
                        "A101",
                        Teacher("ThS. Nguyễn Văn A".into()),
                    ),
                    Session::new(
                        "09:45-11:45",
                        "Lập trình Python",
                        "Lab1",
                        Teacher("ThS. Trần Thị B".into()),
                    ),
                ],
            ),
            (
                "Thứ 3".to_string(),
                vec![Session::new(
                    "13:30-15:30",
                    "Cơ sở dữ liệu",
                    "A201",
                    Teacher("TS. Lê Văn C".into()),
                )],
            ),
            (
                "Thứ 4".to_string(),
                vec![
                    Session::new(
                        "07:30-09:30",
                        "An ninh mạng",
                        "A102",
                        Teacher("ThS. Nguyễn Văn A".into()),
                    ),
                    Session::new(
                        "13:30-15:30",
                        "Thực hành Kubernetes",
                        "Lab2",
                        Teacher("KS. Phạm Văn D".into()),
                    ),
                ],
            ),
            (
                "Thứ 5".to_string(),
                vec![Session::new(
                    "09:45-11:45",
                    "Cloud Computing",
                    "B201",
                    Teacher("TS. Hoàng Văn E".into()),
                )],
            ),
            (
                "Thứ 6".to_string(),
                vec![Session::new("07:30-09:30", "Seminar", "A301", Teacher("All".into()))],
            ),
        ]);

        Self { teacher, student }
    }

    /// Loads a timetable from a JSON file shaped like
    /// `{"giangvien": {...}, "sinhvien": {...}}`.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON file
    ///
    /// # Returns
    /// * `Ok(Timetable)` - The parsed timetable
    /// * `Err` - If the file can't be read, parsed, or holds a session
    ///   with the wrong counterpart for its role
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ScheduleRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let timetable: Timetable =
            serde_json::from_str(&content).map_err(|e| ConfigError::ScheduleParse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        timetable.validate()?;

        info!(
            "Loaded timetable from {} ({} teacher sessions, {} student sessions)",
            path.display(),
            timetable.session_count(Role::Teacher),
            timetable.session_count(Role::Student)
        );

        Ok(timetable)
    }

    /// Checks that each role's sessions carry that role's counterpart kind.
    fn validate(&self) -> Result<(), ConfigError> {
        for role in [Role::Teacher, Role::Student] {
            for (day, sessions) in self.for_role(role) {
                let mismatched = sessions.iter().any(|s| {
                    !matches!(
                        (role, &s.counterpart),
                        (Role::Teacher, Counterpart::Class(_)) | (Role::Student, Counterpart::Teacher(_))
                    )
                });

                if mismatched {
                    return Err(ConfigError::MismatchedCounterpart {
                        role: role.as_str(),
                        day: day.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Returns the full schedule for a role.
    pub fn for_role(&self, role: Role) -> &Schedule {
        match role {
            Role::Teacher => &self.teacher,
            Role::Student => &self.student,
        }
    }

    /// Returns a role's sessions for one day. Unknown days yield an empty slice.
    pub fn sessions_on(&self, role: Role, day: &str) -> &[Session] {
        self.for_role(role)
            .get(day)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of sessions in a role's schedule.
    pub fn session_count(&self, role: Role) -> usize {
        self.for_role(role).values().map(Vec::len).sum()
    }
}

impl Default for Timetable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_weekdays() {
        let timetable = Timetable::builtin();
        let days = ["Thứ 2", "Thứ 3", "Thứ 4", "Thứ 5", "Thứ 6"];

        for role in [Role::Teacher, Role::Student] {
            let keys: Vec<_> = timetable.for_role(role).keys().map(String::as_str).collect();
            assert_eq!(keys, days);
        }
        assert_eq!(timetable.session_count(Role::Teacher), 7);
        assert_eq!(timetable.session_count(Role::Student), 8);
    }

    #[test]
    fn test_builtin_passes_validation() {
        assert!(Timetable::builtin().validate().is_ok());
    }

    #[test]
    fn test_sessions_on_unknown_day_is_empty() {
        let timetable = Timetable::builtin();
        assert!(timetable.sessions_on(Role::Student, "Thứ 7").is_empty());
        assert!(timetable.sessions_on(Role::Teacher, "").is_empty());
    }

    #[test]
    fn test_session_serializes_counterpart_inline() {
        let session = Session::new("07:30-09:30", "Kubernetes", "Lab1", Counterpart::Class("CNTT01".into()));
        assert_eq!(
            serde_json::to_value(&session).unwrap(),
            json!({
                "time": "07:30-09:30",
                "subject": "Kubernetes",
                "room": "Lab1",
                "class": "CNTT01"
            })
        );
    }

    #[test]
    fn test_timetable_parses_role_keys() {
        let raw = json!({
            "giangvien": {
                "Thứ 2": [{ "time": "07:30-09:30", "subject": "DevSecOps", "room": "Lab2", "class": "CNTT02" }]
            },
            "sinhvien": {
                "Thứ 3": [{ "time": "13:30-15:30", "subject": "Seminar", "room": "A301", "teacher": "All" }]
            }
        });

        let timetable: Timetable = serde_json::from_value(raw).unwrap();
        assert!(timetable.validate().is_ok());
        assert_eq!(
            timetable.sessions_on(Role::Student, "Thứ 3")[0].counterpart,
            Counterpart::Teacher("All".into())
        );
    }

    #[test]
    fn test_validate_rejects_wrong_counterpart() {
        let mut timetable = Timetable::builtin();
        timetable.teacher.insert(
            "Thứ 7".to_string(),
            vec![Session::new("07:30-09:30", "Seminar", "A301", Counterpart::Teacher("All".into()))],
        );

        assert!(matches!(
            timetable.validate(),
            Err(ConfigError::MismatchedCounterpart { role: "giangvien", .. })
        ));
    }

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tkb-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_file() {
        let path = write_temp(
            "good.json",
            &serde_json::to_string(&Timetable::builtin()).unwrap(),
        );

        let timetable = Timetable::load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(timetable, Timetable::builtin());
    }

    #[test]
    fn test_load_from_malformed_file() {
        let path = write_temp("malformed.json", r#"{"giangvien": {"Thứ 2": [{"time": "07:30-09:30"}]}"#);

        let err = Timetable::load_from_file(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, ConfigError::ScheduleParse { .. }));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Timetable::load_from_file(Path::new("/nonexistent/tkb.json")).unwrap_err();
        assert!(matches!(err, ConfigError::ScheduleRead { .. }));
    }
}
