//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use wz_sdk::{CodeData, Correspondence, WzCode};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of codes.
    pub fn format_codes(&self, codes: &[WzCode<'_>]) -> Result<String> {
        let data: Vec<CodeData> = codes.iter().map(WzCode::to_data).collect();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&data)?),
            OutputFormat::Table => Ok(self.format_codes_table(&data)),
            OutputFormat::Quiet => Ok(Self::quiet(data.iter().map(|d| d.code.as_str()))),
        }
    }

    /// Format a single code.
    ///
    /// JSON output is an object rather than a one-element array.
    pub fn format_code(&self, code: &WzCode<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&code.to_data())?),
            _ => self.format_codes(&[*code]),
        }
    }

    /// Format the correspondences of `code`.
    pub fn format_correspondences(
        &self,
        code: &str,
        correspondences: &[Correspondence],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = correspondences
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "code": c.code(),
                            "title": c.title(),
                            "match": c.match_kind(),
                            "partial": c.is_partial(),
                            "version": c.version().as_str(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Table => Ok(self.format_correspondences_table(code, correspondences)),
            OutputFormat::Quiet => Ok(Self::quiet(correspondences.iter().map(|c| c.code()))),
        }
    }

    fn format_codes_table(&self, codes: &[CodeData]) -> String {
        if codes.is_empty() {
            return self.colorize("No codes found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Code", "Title", "Level", "Version"]);

        for code in codes {
            builder.push_record([
                code.code.clone(),
                code.title.clone(),
                code.level.to_string(),
                code.version.clone(),
            ]);
        }

        Self::render(builder)
    }

    fn format_correspondences_table(&self, code: &str, correspondences: &[Correspondence]) -> String {
        if correspondences.is_empty() {
            return self.colorize(&format!("No correspondences found for {}.", code), "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Code", "Title", "Match", "Version"]);

        for corr in correspondences {
            let kind = if corr.is_partial() {
                self.colorize(corr.match_kind(), "yellow")
            } else {
                self.colorize(corr.match_kind(), "green")
            };
            builder.push_record([
                corr.code().to_string(),
                corr.title().to_string(),
                kind,
                corr.version().to_string(),
            ]);
        }

        Self::render(builder)
    }

    fn render(builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn quiet<'a>(codes: impl Iterator<Item = &'a str>) -> String {
        codes.collect::<Vec<_>>().join("\n")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wz_domain::{Concordance, ConcordanceRow, Edition, Entry};
    use wz_sdk::Wz;
    use wz_store::MemorySource;

    fn registry() -> Wz {
        let entries = vec![
            Entry::new("A", "Land- und Forstwirtschaft, Fischerei", 1).with_children(["01"]),
            Entry::new("01", "Landwirtschaft, Jagd", 2).with_parent("A"),
        ];
        let source = MemorySource::new()
            .with_entries(Edition::Wz2008, entries.clone())
            .with_entries(Edition::Wz2025, entries)
            .with_concordance(
                Concordance::new(Edition::Wz2025)
                    .with_row(ConcordanceRow::new("01", "01", true, "Landwirtschaft, Jagd")),
            );
        Wz::new("2025", &source).unwrap()
    }

    #[test]
    fn test_table_format() {
        let wz = registry();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_codes(&wz.get_top_level_codes()).unwrap();
        assert!(output.contains("Title"));
        assert!(output.contains("Land- und Forstwirtschaft, Fischerei"));
        assert!(output.contains("2025"));
    }

    #[test]
    fn test_json_format() {
        let wz = registry();
        let formatter = Formatter::new(OutputFormat::Json, false);

        let list: serde_json::Value =
            serde_json::from_str(&formatter.format_codes(&[wz.get("01").unwrap()]).unwrap()).unwrap();
        assert_eq!(list[0]["code"], "01");
        assert_eq!(list[0]["level"], 2);

        let single: serde_json::Value =
            serde_json::from_str(&formatter.format_code(&wz.get("A").unwrap()).unwrap()).unwrap();
        assert_eq!(single["code"], "A");
        assert_eq!(single["version"], "2025");
    }

    #[test]
    fn test_quiet_format() {
        let wz = registry();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let codes: Vec<_> = wz.iter().collect();
        assert_eq!(formatter.format_codes(&codes).unwrap(), "01\nA");
    }

    #[test]
    fn test_empty_codes() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_codes(&[]).unwrap();
        assert_eq!(output, "No codes found.");
    }

    #[test]
    fn test_correspondences_formats() {
        let wz = registry();
        let correspondences = wz.get_correspondences("01");

        let table = Formatter::new(OutputFormat::Table, false)
            .format_correspondences("01", correspondences)
            .unwrap();
        assert!(table.contains("partial"));
        assert!(table.contains("2008"));

        let json: serde_json::Value = serde_json::from_str(
            &Formatter::new(OutputFormat::Json, false)
                .format_correspondences("01", correspondences)
                .unwrap(),
        )
        .unwrap();
        assert_eq!(json[0]["match"], "partial");
        assert_eq!(json[0]["partial"], true);
    }

    #[test]
    fn test_empty_correspondences() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_correspondences("A", &[]).unwrap();
        assert!(output.contains("No correspondences found for A"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.info("test"), "ℹ test");
    }
}
