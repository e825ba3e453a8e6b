//! Transform command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use caseswitch_core::{Mode, Settings, MAX_TEXT_LENGTH};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Arguments for the transform command
#[derive(Debug, Args)]
pub struct TransformArgs {
    /// Transformation mode (e.g. titleCase, kebabCase, slug)
    #[arg(short, long)]
    pub mode: String,

    /// Input files or patterns (supports glob); stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Text to transform instead of reading files or stdin
    #[arg(short, long)]
    pub text: Option<String>,

    /// Locale tag for casing and title-case word lists (overrides config)
    #[arg(short, long, env = "CASESWITCH_LOCALE")]
    pub locale: Option<String>,

    /// Acronym to keep uppercase (repeatable, added to config acronyms)
    #[arg(short, long = "acronym", value_name = "WORD")]
    pub acronyms: Vec<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// One piece of text to transform and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText {
    /// File path, `<text>` or `<stdin>`
    pub source: String,
    /// The text itself
    pub text: String,
}

impl TransformArgs {
    /// Execute the transform command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let mode: Mode = self.mode.parse()?;
        let settings = self.effective_settings(config.settings);
        log::info!("Transforming with {} (locale {})", mode, settings.locale);

        let inputs = self.read_inputs()?;
        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = self.create_formatter(format, config.output.pretty_json)?;

        let mut failures = Vec::new();
        for input in &inputs {
            let result = settings.transform(&input.text, mode);

            if result.truncated {
                log::warn!(
                    "{}: input truncated to {} characters",
                    input.source,
                    MAX_TEXT_LENGTH
                );
            }
            if let Some(error) = &result.error {
                log::error!("{}: {}", input.source, error);
                failures.push(format!("{}: {}", input.source, error));
            }

            formatter.format_result(&input.source, &result)?;
        }

        formatter.finish()?;
        log::info!("Transformed {} input(s)", inputs.len());

        if failures.is_empty() {
            Ok(())
        } else {
            Err(CliError::TransformFailed(failures.join("; ")).into())
        }
    }

    /// Apply command-line overrides on top of the configured settings
    pub fn effective_settings(&self, mut settings: Settings) -> Settings {
        if let Some(locale) = &self.locale {
            settings.locale = locale.clone();
        }
        settings.acronyms.extend(self.acronyms.iter().cloned());
        settings
    }

    /// Collect the texts to transform: `--text`, else files, else stdin
    pub fn read_inputs(&self) -> Result<Vec<InputText>> {
        if let Some(text) = &self.text {
            return Ok(vec![InputText {
                source: "<text>".to_string(),
                text: text.clone(),
            }]);
        }

        if self.input.is_empty() {
            log::debug!("Reading from stdin");
            return Ok(vec![InputText {
                source: "<stdin>".to_string(),
                text: FileReader::read_from(io::stdin().lock())?,
            }]);
        }

        resolve_patterns(&self.input)?
            .into_iter()
            .map(|path| -> Result<InputText> {
                Ok(InputText {
                    source: path.display().to_string(),
                    text: FileReader::read_text(&path)?,
                })
            })
            .collect()
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let formatter: Box<dyn OutputFormatter> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                let writer = BufWriter::new(file);
                match format {
                    OutputFormat::Text => Box::new(TextFormatter::new(writer)),
                    OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
                }
            }
            None => match format {
                OutputFormat::Text => Box::new(TextFormatter::stdout()),
                OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout(), pretty_json)),
            },
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }

        Ok(())
    }
}
