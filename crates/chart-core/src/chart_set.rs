// File: crates/chart-core/src/chart_set.rs
// Summary: The three bucketed series a balance dashboard holds, and selection
// of the one to draw. The selected mode is always passed in by the caller.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::bucket::BucketMode;
use crate::chart::{ChartRenderer, ChartSpec};
use crate::series::Series;
use crate::surface::SurfaceHost;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSet {
    pub hourly: Series,
    pub daily: Series,
    pub monthly: Series,
}

impl ChartSet {
    pub fn new(hourly: Series, daily: Series, monthly: Series) -> Self {
        Self { hourly, daily, monthly }
    }

    /// Parse the three JSON arrays. A part that is `null` or blank is an empty
    /// series for that mode only. If any part is malformed the error is logged
    /// and all three come back empty.
    pub fn from_json_parts(hourly: &str, daily: &str, monthly: &str) -> Self {
        let parsed = (|| -> crate::error::Result<Self> {
            Ok(Self {
                hourly: parse_part(hourly)?,
                daily: parse_part(daily)?,
                monthly: parse_part(monthly)?,
            })
        })();
        parsed.unwrap_or_else(|e| {
            error!(error = %e, "chart data could not be parsed; clearing all series");
            Self::default()
        })
    }

    pub fn series(&self, mode: BucketMode) -> &Series {
        match mode {
            BucketMode::Hourly => &self.hourly,
            BucketMode::Daily => &self.daily,
            BucketMode::Monthly => &self.monthly,
        }
    }

    /// Replace one mode's series, e.g. after a refresh.
    pub fn set_series(&mut self, mode: BucketMode, series: Series) {
        match mode {
            BucketMode::Hourly => self.hourly = series,
            BucketMode::Daily => self.daily = series,
            BucketMode::Monthly => self.monthly = series,
        }
    }

    /// Render request for `mode` using its default surface id and title.
    pub fn spec_for(&self, mode: BucketMode) -> ChartSpec {
        ChartSpec::new(mode.default_target(), self.series(mode).clone(), mode.default_title(), mode)
    }

    /// Draw only the chart for `mode`.
    pub fn draw<H: SurfaceHost + ?Sized>(&self, host: &mut H, renderer: &ChartRenderer, mode: BucketMode) {
        renderer.render_spec(host, &self.spec_for(mode));
    }
}

fn parse_part(json: &str) -> crate::error::Result<Series> {
    match json.trim() {
        "" | "null" => Ok(Series::default()),
        s => Series::from_json(s),
    }
}
