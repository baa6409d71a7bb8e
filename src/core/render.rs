//! Renderer module
//!
//! Renders the RunSummary as human text or JSON

use colored::Colorize;

use crate::core::model::RunSummary;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub color: bool,
    /// Report the replaced count (replace mode only)
    pub show_replaced: bool,
}

/// Renderer for run summaries
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, summary: &RunSummary) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(summary),
            OutputFormat::Json => self.render_json(summary),
        }
    }

    fn render_json(&self, summary: &RunSummary) -> String {
        serde_json::to_string(summary).unwrap_or_else(|_| "{}".to_string())
    }

    fn render_text(&self, summary: &RunSummary) -> String {
        let paint = |text: String, style: fn(String) -> colored::ColoredString| {
            if self.config.color {
                style(text).to_string()
            } else {
                text
            }
        };

        let mut lines = vec![
            paint("=== Summary ===".to_string(), |s| s.bold()),
            format!("Total files considered: {}", summary.total),
            paint(format!("Files updated: {}", summary.updated), |s| s.green()),
            paint(format!("Files skipped: {}", summary.skipped), |s| s.yellow()),
        ];

        if self.config.show_replaced {
            lines.push(format!("Markers replaced: {}", summary.replaced));
        }

        if summary.dry_run {
            lines.push(paint(
                "Dry run mode was ON (no files were actually modified).".to_string(),
                |s| s.cyan(),
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(format: OutputFormat, show_replaced: bool) -> Renderer {
        Renderer::with_config(RenderConfig {
            format,
            color: false,
            show_replaced,
        })
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_text_summary() {
        let summary = RunSummary {
            total: 4,
            updated: 3,
            skipped: 1,
            replaced: 0,
            dry_run: false,
        };
        let out = plain(OutputFormat::Text, false).render(&summary);
        assert!(out.starts_with("=== Summary ==="));
        assert!(out.contains("Total files considered: 4"));
        assert!(out.contains("Files updated: 3"));
        assert!(out.contains("Files skipped: 1"));
        assert!(!out.contains("Markers replaced"));
        assert!(!out.contains("Dry run"));
    }

    #[test]
    fn test_render_text_replace_and_dry_run() {
        let summary = RunSummary {
            total: 2,
            updated: 2,
            skipped: 0,
            replaced: 1,
            dry_run: true,
        };
        let out = plain(OutputFormat::Text, true).render(&summary);
        assert!(out.contains("Markers replaced: 1"));
        assert!(out.contains("Dry run mode was ON"));
    }

    #[test]
    fn test_render_json_summary() {
        let summary = RunSummary {
            total: 1,
            updated: 1,
            ..Default::default()
        };
        let out = plain(OutputFormat::Json, false).render(&summary);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["updated"], 1);
        assert_eq!(value["dry_run"], false);
    }
}
