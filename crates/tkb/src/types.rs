use crate::auth::RoleRules;
use crate::config::ServiceConfig;
use crate::schedule::Timetable;

/// State shared by all request handlers. Read-only once the server starts.
pub struct AppState {
    pub config: ServiceConfig,
    pub timetable: Timetable,
    pub role_rules: RoleRules,
}

impl AppState {
    pub fn new(config: ServiceConfig, timetable: Timetable) -> Self {
        Self {
            config,
            timetable,
            role_rules: RoleRules::default(),
        }
    }

    /// Builds state from `config`, loading the timetable file if one is set.
    pub fn load(config: ServiceConfig) -> Result<Self, crate::config::ConfigError> {
        let timetable = match &config.schedule_file {
            Some(path) => Timetable::load_from_file(path)?,
            None => Timetable::builtin(),
        };

        Ok(Self::new(config, timetable))
    }
}
