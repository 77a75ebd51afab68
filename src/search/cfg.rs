use crate::args;
use crate::report::ReportFormat;
use crate::search::MethodEnum;
use serde::{Serialize, Deserialize};

/// Search config file contents.
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchCfg {
    /// Stop after this many planes.
    #[serde(default)]
    pub limit: Option<usize>,

    /// Output path for the report (stdout if missing).
    #[serde(default, alias = "output", alias = "out", alias = "o")]
    pub output_path: Option<String>,

    /// Report format.
    #[serde(default)]
    pub format: ReportFormat,

    /// Print a progress dot to stderr for each plane found.
    #[serde(default = "SearchCfg::default_progress")]
    pub progress: bool,

    /// Exact check method and its parameters.
    #[serde(default)]
    pub method: MethodEnum,
}
impl SearchCfg {
    pub fn default_progress() -> bool {
        true
    }
}
impl Default for SearchCfg {
    fn default() -> Self {
        SearchCfg{
            limit: None,
            output_path: None,
            format: ReportFormat::default(),
            progress: SearchCfg::default_progress(),
            method: MethodEnum::default(),
        }
    }
}

/// Search target struct.
/// A validated config, with command line overrides applied.
#[derive(Debug)]
pub struct SearchTarget {
    /// Exact check method.
    pub method: MethodEnum,
    /// Stop after this many planes.
    pub limit: Option<usize>,
    /// Output path for the report.
    pub output_path: Option<String>,
    /// Report format.
    pub format: ReportFormat,
    /// Progress dots on stderr.
    pub progress: bool,
}
impl SearchTarget {
    /// Construct a search target from the `run` command line.
    /// Flags given on the command line replace the config file values.
    pub fn from_run_args(run_args: &args::RunArgs) -> args::ProcResult<Self> {
        let mut search_cfg = match &run_args.cfg_path {
            Some(cfg_path) => {
                eprintln!("Loading search config file: {}...", cfg_path);
                crate::io::read_cfg_file(cfg_path)?
            },
            None => SearchCfg::default(),
        };

        if let Some(method_name) = &run_args.method {
            search_cfg.method = MethodEnum::from_name(method_name)?;
        }
        if run_args.limit.is_some() {
            search_cfg.limit = run_args.limit;
        }
        if run_args.output_path.is_some() {
            search_cfg.output_path = run_args.output_path.clone();
        }
        if let Some(format) = run_args.format {
            search_cfg.format = format;
        }
        if run_args.quiet {
            search_cfg.progress = false;
        }

        SearchTarget::from_cfg(search_cfg)
    }

    /// Validate a config.
    pub fn from_cfg(search_cfg: SearchCfg) -> args::ProcResult<Self> {
        if search_cfg.limit == Some(0) {
            args::err_str("Plane limit must be at least 1")?;
        }

        if let Some(output_path) = search_cfg.output_path.as_ref() {
            let extensions = search_cfg.format.extensions();
            if !extensions.is_empty() && !extensions.iter().any(|ext| output_path.ends_with(ext)) {
                args::err_str(&format!("Output path for {} reports must end with one of {:?}", search_cfg.format, extensions))?;
            }
        }

        Ok(SearchTarget{
            method: search_cfg.method,
            limit: search_cfg.limit,
            output_path: search_cfg.output_path,
            format: search_cfg.format,
            progress: search_cfg.progress,
        })
    }
}
