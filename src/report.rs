//! Reporting of the search results.
//!
//! The search itself never writes anything; this module consumes the enumerator,
//! prints progress, counts the planes through the origin and renders the report.

use std::io::Write;
use serde::{Serialize, Deserialize};
use strum::Display;
use clap::ValueEnum;

use crate::search::{
    CoplanarityCheck,
    Enumerator,
    Plane,
    SearchStats,
};

/// Separator printed after each plane in the text report.
const PLANE_SEPARATOR: &str = "---------------";

/// Report process error type.
#[derive(Debug)]
pub enum ReportError {
    /// IO error.
    IoError(crate::io::IoError),
    /// Serde JSON error.
    SerdeJsonError(serde_json::Error),
    /// Serde YAML error.
    SerdeYamlError(serde_yaml::Error),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::IoError(error) => write!(f, "IO Error:\n{}", error),
            ReportError::SerdeJsonError(error) => write!(f, "JSON Serialization Error:\n{}", error),
            ReportError::SerdeYamlError(error) => write!(f, "YAML Serialization Error:\n{}", error),
            ReportError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<crate::io::IoError> for ReportError {
    fn from(error: crate::io::IoError) -> Self {
        ReportError::IoError(error)
    }
}
impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        ReportError::SerdeJsonError(error)
    }
}
impl From<serde_yaml::Error> for ReportError {
    fn from(error: serde_yaml::Error) -> Self {
        ReportError::SerdeYamlError(error)
    }
}
impl From<String> for ReportError {
    fn from(error: String) -> Self {
        ReportError::StringOnly(error)
    }
}

/// Result type for the `report` module.
pub type ProcResult<T> = std::result::Result<T, ReportError>;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReportFormat {
    /// Plane listing: count, one point per line, dashed separators, origin count.
    #[default]
    Text,
    /// JSON report.
    Json,
    /// YAML report.
    Yaml,
}
impl ReportFormat {
    /// Accepted output file extensions (empty means any).
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ReportFormat::Text => &[],
            ReportFormat::Json => &[".json"],
            ReportFormat::Yaml => &[".yaml", ".yml"],
        }
    }
}

/// Search report.
/// Holds every plane found plus the totals.
#[derive(Debug, Serialize)]
pub struct Report<const D: usize> {
    /// Number of planes found.
    pub total: usize,
    /// Number of planes containing the origin.
    pub through_origin: usize,
    /// Whether the search stopped at the plane limit.
    pub truncated: bool,
    /// Search counters.
    pub stats: SearchStats,
    /// The planes, in the order they were found.
    pub planes: Vec<Plane<D>>,
}
impl<const D: usize> Report<D> {
    /// Drain the enumerator into a report.
    /// Stops after `limit` planes if given.
    pub fn collect<C: CoplanarityCheck>(search: &mut Enumerator<'_, D, C>, limit: Option<usize>, progress: bool) -> Self {
        let mut planes = Vec::<Plane<D>>::new();
        let mut stderr = std::io::stderr();

        for plane in search.by_ref() {
            if progress {
                // Progress is cosmetic, a failed write is not worth stopping for
                let _ = write!(stderr, ".");
                let _ = stderr.flush();
            }
            planes.push(plane);
            if limit.is_some_and(|limit| planes.len() >= limit) {
                break;
            }
        }
        if progress {
            let _ = writeln!(stderr);
        }

        let truncated = limit.is_some_and(|limit| planes.len() >= limit);
        Report::from_planes(planes, search.stats(), truncated)
    }

    /// Build a report from already collected planes.
    pub fn from_planes(planes: Vec<Plane<D>>, stats: SearchStats, truncated: bool) -> Self {
        let through_origin = planes.iter().filter(|plane| plane.contains_origin()).count();
        Report{
            total: planes.len(),
            through_origin,
            truncated,
            stats,
            planes,
        }
    }

    /// Render the plain text listing.
    pub fn to_text(&self) -> String {
        let mut text = format!("{}\n", self.total);
        for plane in self.planes.iter() {
            for point in plane.points.iter() {
                text.push_str(&format!("{}\n", point));
            }
            text.push_str(PLANE_SEPARATOR);
            text.push('\n');
        }
        text.push_str(&format!("Planes through origin: {}\n", self.through_origin));
        text
    }

    /// Render the report in a given format.
    pub fn render(&self, format: ReportFormat) -> ProcResult<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)? + "\n"),
            ReportFormat::Yaml => Ok(serde_yaml::to_string(self)?),
        }
    }

    /// Write the report to a file, or to stdout if no path is given.
    pub fn save(&self, format: ReportFormat, output_path: Option<&str>) -> ProcResult<()> {
        let rendered = self.render(format)?;
        match output_path {
            Some(output_path) => {
                eprintln!("Saving report to {}...", output_path);
                crate::io::write_to_file(output_path, &rendered)?;
            },
            None => {
                let mut stdout = std::io::stdout().lock();
                if let Err(error) = stdout.write_all(rendered.as_bytes()).and_then(|_| stdout.flush()) {
                    return Err(ReportError::IoError(crate::io::IoError::stream("stdout", error)));
                }
            },
        }
        Ok(())
    }
}
