//! Activity configuration: loading, parsing and validation
pub mod activity;

pub use activity::{Activity, ActivityError, ActivityRecord, Weight};

use log::debug;
use serde::Deserialize;
use serde_json::error::Category;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("config does not match the expected shape: {0}")]
    Schema(#[source] serde_json::Error),

    #[error("activity '{name}' is invalid: {source}")]
    Activity {
        name: String,
        #[source]
        source: ActivityError,
    },

    #[error("there should be at least one activity")]
    NoActivities,

    #[error("activities should have unique names, '{0}' is repeated")]
    DuplicateName(String),

    #[error("total weight_ratio should be < 1, got {0}")]
    TotalWeightRatio(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    activities: Vec<ActivityRecord>,
}

///
/// A validated, non-empty list of uniquely named activities whose fixed
/// ratios leave some probability over for the multiplier activities.
///
#[derive(Debug, Clone)]
pub struct Configuration {
    activities: Vec<Activity>,
}

impl Configuration {
    pub fn new(activities: Vec<Activity>) -> Result<Configuration, ConfigError> {
        if activities.is_empty() {
            return Err(ConfigError::NoActivities);
        }

        let mut names = HashSet::new();
        for activity in activities.iter() {
            if !names.insert(activity.name()) {
                return Err(ConfigError::DuplicateName(activity.name().to_string()));
            }
        }

        let total = total_weight_ratio(&activities);
        if total >= 1.0 {
            return Err(ConfigError::TotalWeightRatio(total));
        }

        Ok(Configuration { activities })
    }

    pub fn from_records(records: Vec<ActivityRecord>) -> Result<Configuration, ConfigError> {
        let activities = records
            .into_iter()
            .map(|record| {
                let name = record.name.clone();
                Activity::try_from(record).map_err(|source| ConfigError::Activity { name, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Configuration::new(activities)
    }

    pub fn from_json(json: &str) -> Result<Configuration, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json).map_err(|err| match err.classify() {
            Category::Syntax | Category::Eof => ConfigError::Syntax(err),
            Category::Data | Category::Io => ConfigError::Schema(err),
        })?;
        Configuration::from_records(file.activities)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Configuration, LoadError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Configuration::from_json(&contents)?;
        debug!(
            "Loaded {} activities from {}",
            config.activities.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }
}

/// Sum of the weight_ratio of every activity that has one.
pub fn total_weight_ratio<'a, I>(activities: I) -> f64
where
    I: IntoIterator<Item = &'a Activity>,
{
    activities
        .into_iter()
        .filter_map(|activity| activity.weight_ratio())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(name: &str, ratio: f64) -> Activity {
        Activity::new(name, None, Some(ratio)).unwrap()
    }

    #[test]
    fn test_empty_activities() {
        assert!(matches!(
            Configuration::new(vec![]),
            Err(ConfigError::NoActivities)
        ));
    }

    #[test]
    fn test_duplicate_activities() {
        let records = vec![
            ActivityRecord::new("a"),
            ActivityRecord::new("a").with_weight_mult(2.0),
        ];
        match Configuration::from_records(records) {
            Err(ConfigError::DuplicateName(name)) => assert_eq!(name, "a"),
            other => panic!("Expected duplicate name error, got {:?}", other),
        }
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let config = Configuration::new(vec![
            Activity::with_default_weight("a"),
            Activity::with_default_weight("A"),
        ])
        .unwrap();
        assert_eq!(config.activities().len(), 2);
    }

    #[test]
    fn test_total_weight_ratio_must_be_below_one() {
        let result = Configuration::new(vec![
            ratio("a", 0.5),
            ratio("b", 0.5),
            Activity::with_default_weight("c"),
        ]);
        assert!(matches!(result, Err(ConfigError::TotalWeightRatio(_))));
    }

    #[test]
    fn test_total_weight_ratio_ignores_multipliers() {
        let activities = vec![
            ratio("a", 0.4),
            Activity::with_default_weight("b"),
            ratio("c", 0.1),
            Activity::new("d", Some(3.0), None).unwrap(),
        ];
        assert!((total_weight_ratio(&activities) - 0.5).abs() < 1e-12);
        assert_eq!(total_weight_ratio(&activities[1..2]), 0.0);
    }

    #[test]
    fn test_activity_error_is_wrapped() {
        let records = vec![ActivityRecord::new("a").with_weight_ratio(1.5)];
        match Configuration::from_records(records) {
            Err(ConfigError::Activity { name, source }) => {
                assert_eq!(name, "a");
                assert!(matches!(source, ActivityError::InvalidWeightRatio(_)));
            }
            other => panic!("Expected activity error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_syntax_error() {
        let result = Configuration::from_json(r#"{"activities": [{"name": "a"}"#);
        assert!(matches!(result, Err(ConfigError::Syntax(_))));
    }

    #[test]
    fn test_from_json_unknown_top_level_field() {
        let result = Configuration::from_json(r#"{"activities": [{"name": "a"}], "extra": 1}"#);
        assert!(matches!(result, Err(ConfigError::Schema(_))));
    }

    #[test]
    fn test_from_json_bad_field_type() {
        let result = Configuration::from_json(r#"{"activities": [{"name": null}]}"#);
        assert!(matches!(result, Err(ConfigError::Schema(_))));
    }

    #[test]
    fn test_from_json_valid() {
        let config = Configuration::from_json(
            r#"{"activities": [{"name": "a", "weight_ratio": 0.3}, {"name": "b"}]}"#,
        )
        .unwrap();
        let names: Vec<&str> = config.activities().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
