use crate::app::stores::HairstyleStore;
use crate::core::catalog::require_haircolor;
use crate::core::color::{parse_hex, rgb_to_hex, target_from_rgb};
use crate::core::formula::generate_diy_formula;
use crate::domain::model::{FormulaRecord, Rgb, TargetColor, UserHairData};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use crate::utils::validation::validate_level;
use chrono::Utc;
use uuid::Uuid;

/// 目標顏色的來源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    Hex(String),
    Rgb(Rgb),
    Catalog(u32),
}

/// 解析目標顏色、計算配方並記錄歷史
pub struct FormulaAdvisor<S: Storage, C: ConfigProvider> {
    history: HairstyleStore<S>,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FormulaAdvisor<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let history = HairstyleStore::with_history_limit(storage, config.history_limit());
        Self { history, config }
    }

    pub fn history_store(&self) -> &HairstyleStore<S> {
        &self.history
    }

    /// 返回正規化後的 `#rrggbb` 與目標屬性
    pub fn resolve_target(&self, source: &TargetSpec) -> Result<(String, TargetColor)> {
        let rgb = match source {
            TargetSpec::Hex(input) => parse_hex(input)?,
            TargetSpec::Rgb(rgb) => *rgb,
            TargetSpec::Catalog(id) => {
                let color = require_haircolor(*id)?;
                tracing::debug!("Catalog color {} -> {} {}", id, color.name, color.color);
                parse_hex(&color.color)?
            }
        };

        Ok((rgb_to_hex(rgb.r, rgb.g, rgb.b), target_from_rgb(rgb)))
    }

    pub async fn analyze(&self, hair: UserHairData, source: &TargetSpec) -> Result<FormulaRecord> {
        validate_level("base_level", hair.base_level)?;
        let (target_hex, target) = self.resolve_target(source)?;

        let delay = self.config.analysis_delay();
        if !delay.is_zero() {
            tracing::info!("🔬 Analyzing hair data for {:?}...", delay);
            tokio::time::sleep(delay).await;
        }

        let result = generate_diy_formula(&hair, &target);
        let record = FormulaRecord {
            id: Uuid::new_v4().to_string(),
            target_hex,
            hair,
            target,
            result,
            created_at: Utc::now(),
        };

        tracing::info!(
            "🎨 Formula ready for {} (level {}, {})",
            record.target_hex,
            target.target_level,
            target.target_reflect
        );

        if self.config.record_history() {
            self.history.add_to_history(record.clone()).await?;
        }

        Ok(record)
    }
}
