use crate::domain::model::{FilterMode, Practitioner, QueryState};
use crate::domain::ports::{CatalogSource, DEFAULT_WINDOW_SIZE};
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const SAMPLE_CATALOG: &str = include_str!("../../data/sample_catalog.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub directory: DirectorySection,
    pub query: Option<QueryConfig>,
    #[serde(default)]
    pub practitioners: Vec<Practitioner>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorySection {
    pub name: String,
    pub window_size: Option<usize>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// 啟動時的查詢狀態
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    pub search: Option<String>,
    pub category: Option<String>,
    pub mode: Option<String>,
    pub place: Option<String>,
}

impl DirectoryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Reading catalog from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 內建的示範目錄
    pub fn sample() -> Result<Self> {
        Self::from_toml_str(SAMPLE_CATALOG)
    }

    /// 替換環境變數 (例如 ${CLINIC_NAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;

        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 轉換為初始查詢狀態
    pub fn initial_query(&self) -> Result<QueryState> {
        let Some(query) = &self.query else {
            return Ok(QueryState::default());
        };

        let filter_mode = match &query.mode {
            Some(mode) => mode.parse::<FilterMode>().map_err(|_| {
                DirectoryError::InvalidConfigValueError {
                    field: "query.mode".to_string(),
                    value: mode.clone(),
                    reason: "Unknown filter mode. Valid modes: all, availability, place, experience"
                        .to_string(),
                }
            })?,
            None => FilterMode::default(),
        };

        Ok(QueryState {
            search_text: query.search.clone().unwrap_or_default(),
            selected_category: query.category.clone().filter(|c| !c.is_empty()),
            filter_mode,
            place_selection: query.place.clone().filter(|p| !p.is_empty()),
        })
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("directory.name", &self.directory.name)?;

        if let Some(window_size) = self.directory.window_size {
            validation::validate_positive_number("directory.window_size", window_size, 1)?;
        }

        for (index, practitioner) in self.practitioners.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("practitioners[{}].name", index),
                &practitioner.name,
            )?;
            if let Some(years) = practitioner.experience_years {
                validation::validate_experience_years(
                    &format!("practitioners[{}].experience_years", index),
                    years,
                )?;
            }
        }

        self.initial_query()?;

        // 以下只警告，不阻擋啟動
        for duplicate in validation::find_duplicates(&self.directory.categories) {
            tracing::warn!("⚠️ Category '{}' is listed more than once", duplicate);
        }

        for practitioner in &self.practitioners {
            if !self.directory.categories.contains(&practitioner.specialty) {
                tracing::warn!(
                    "⚠️ {} has specialty '{}' which is not a known category",
                    practitioner.name,
                    practitioner.specialty
                );
            }
        }

        Ok(())
    }
}

impl CatalogSource for DirectoryConfig {
    fn practitioners(&self) -> &[Practitioner] {
        &self.practitioners
    }

    fn categories(&self) -> &[String] {
        &self.directory.categories
    }

    fn window_size(&self) -> usize {
        self.directory.window_size.unwrap_or(DEFAULT_WINDOW_SIZE)
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
