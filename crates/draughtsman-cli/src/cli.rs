//! Command-line interface for the draughtsman utility
//!
//! Provides a CLI to convert pre-parsed requirement documents into UML class
//! diagram descriptions, and to score extraction runs against a ground truth.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use draughtsman::core::logging::init_logging;
use draughtsman::core::{JsonDocParser, StaticSenseInventory};
use draughtsman::emit::{DiagramGraph, DotWriter};
use draughtsman::eval::evaluate_classes;
use draughtsman::extract::{ClassModel, ExtractionEngine};

/// Draughtsman - Extract UML class models from parsed requirement text
#[derive(Parser)]
#[command(name = "draughtsman")]
#[command(about = "A Rust utility to extract UML class diagrams from parsed requirement text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a class diagram from a parsed requirement document
    Extract {
        /// Input file containing the parsed document as JSON (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the diagram description (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = FormatChoice::Dot)]
        format: FormatChoice,

        /// Word-sense lexicon for the ontology filter (JSON map of word to
        /// sense tags); without it every candidate word passes
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },

    /// Score an extracted model against ground-truth class names
    Evaluate {
        /// Extracted model JSON, as produced by `extract --format json`
        /// (use - for stdin)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Comma-separated ground-truth class names
        #[arg(short, long)]
        truth: String,

        /// Show the report in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Supported output formats for the extract command
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum FormatChoice {
    /// Graphviz DOT source
    #[default]
    Dot,
    /// The class model as JSON
    Json,
}

/// Main CLI application
pub struct DraughtsmanApp;

impl DraughtsmanApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Initialize logging with CLI flags (environment variables take precedence)
        let log_level_str = std::env::var("DRAUGHTSMAN_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("DRAUGHTSMAN_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Draughtsman v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Extract {
                input,
                output,
                format,
                lexicon,
            } => self.extract_command(input, output, format, lexicon, cli.verbose),
            Commands::Evaluate { model, truth, json } => {
                self.evaluate_command(model, &truth, json)
            }
        }
    }

    /// Handle the extract command
    fn extract_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        format: FormatChoice,
        lexicon: Option<PathBuf>,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let inventory = match lexicon {
            Some(path) => {
                let text = fs::read_to_string(&path).with_context(|| {
                    format!("Failed to read lexicon file '{}'", path.display())
                })?;
                StaticSenseInventory::from_json(&text)
                    .map_err(|e| anyhow!("Failed to load lexicon '{}': {}", path.display(), e))?
            }
            None => StaticSenseInventory::new(),
        };

        let mut engine = ExtractionEngine::new(Box::new(JsonDocParser::new()), Box::new(inventory));
        let model = engine.process(&content)?;

        if verbose {
            eprintln!(
                "Extracted {} classes and {} relationships",
                model.classes.len(),
                model.relationships.len()
            );
        }

        let rendered = match format {
            FormatChoice::Dot => {
                let graph = DiagramGraph::from_model(&model);
                DotWriter::new().write(&graph)
            }
            FormatChoice::Json => serde_json::to_string_pretty(&model)?,
        };

        self.write_output(output, &rendered)
    }

    /// Handle the evaluate command
    fn evaluate_command(&self, model: Option<PathBuf>, truth: &str, json: bool) -> Result<()> {
        let content = self.read_input(model)?;
        let model: ClassModel =
            serde_json::from_str(&content).context("Failed to parse model JSON")?;

        let expected: Vec<&str> = truth.split(',').map(str::trim).collect();
        let detected: Vec<&str> = model.class_names().collect();
        let report = evaluate_classes(expected, detected);

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("F1-Score: {:.2}", report.f1);
            println!(
                "Precision: {:.2} | Recall: {:.2}",
                report.precision, report.recall
            );
            println!(
                "TP: {} | FP: {} | FN: {}",
                report.true_positives, report.false_positives, report.false_negatives
            );
        }

        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) => {
                if path.to_string_lossy() == "-" {
                    let mut content = String::new();
                    io::stdin().read_to_string(&mut content)?;
                    Ok(content)
                } else {
                    fs::read_to_string(&path).map_err(|e| {
                        anyhow!("Failed to read input file '{}': {}", path.display(), e)
                    })
                }
            }
            None => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let stdout_content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) => {
                if path.to_string_lossy() == "-" {
                    print!("{}", stdout_content);
                    io::stdout().flush()?;
                } else {
                    fs::write(&path, content).map_err(|e| {
                        anyhow!("Failed to write output file '{}': {}", path.display(), e)
                    })?;
                }
            }
            None => {
                print!("{}", stdout_content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}

impl Default for DraughtsmanApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn parsed_doc_json() -> &'static str {
        // "The Administrator manages the System."
        r#"{
            "sentences": [{
                "tokens": [
                    {"text": "Administrator", "lemma": "administrator", "pos": "NOUN",
                     "tag": "NN", "dep": "nsubj", "head": 1, "children": []},
                    {"text": "manages", "lemma": "manage", "pos": "VERB",
                     "tag": "VBZ", "dep": "ROOT", "head": 1, "children": [0, 2]},
                    {"text": "System", "lemma": "system", "pos": "NOUN",
                     "tag": "NN", "dep": "dobj", "head": 1, "children": []}
                ]
            }]
        }"#
    }

    #[test]
    fn test_cli_parsing_extract_command() {
        let args = vec![
            "draughtsman",
            "extract",
            "--input",
            "doc.json",
            "--output",
            "model.dot",
            "--format",
            "dot",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Extract {
                input,
                output,
                format,
                lexicon,
            } => {
                assert_eq!(input.unwrap().to_string_lossy(), "doc.json");
                assert_eq!(output.unwrap().to_string_lossy(), "model.dot");
                assert_eq!(format, FormatChoice::Dot);
                assert!(lexicon.is_none());
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_cli_parsing_json_format() {
        let args = vec!["draughtsman", "extract", "--format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Extract { format, .. } => assert_eq!(format, FormatChoice::Json),
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_cli_parsing_evaluate_command() {
        let args = vec![
            "draughtsman",
            "evaluate",
            "--model",
            "model.json",
            "--truth",
            "BankSystem, Account",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Evaluate { model, truth, json } => {
                assert_eq!(model.unwrap().to_string_lossy(), "model.json");
                assert_eq!(truth, "BankSystem, Account");
                assert!(!json);
            }
            _ => panic!("Expected Evaluate command"),
        }
    }

    #[test]
    fn test_verbose_flag() {
        let args = vec!["draughtsman", "--verbose", "extract"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_read_input_from_file() {
        let app = DraughtsmanApp::new();

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("doc.json");
        fs::write(&file_path, parsed_doc_json()).unwrap();

        let content = app.read_input(Some(file_path)).unwrap();
        assert_eq!(content, parsed_doc_json());
    }

    #[test]
    fn test_write_output_to_file() {
        let app = DraughtsmanApp::new();
        let output = "digraph model {}";

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("out.dot");

        app.write_output(Some(file_path.clone()), output).unwrap();

        let read_content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(read_content, output);
    }

    #[test]
    fn test_extract_command_writes_dot() {
        let app = DraughtsmanApp::new();

        let dir = tempdir().unwrap();
        let input_path = dir.path().join("doc.json");
        let output_path = dir.path().join("out.dot");
        fs::write(&input_path, parsed_doc_json()).unwrap();

        app.extract_command(
            Some(input_path),
            Some(output_path.clone()),
            FormatChoice::Dot,
            None,
            false,
        )
        .unwrap();

        let dot = fs::read_to_string(&output_path).unwrap();
        assert!(dot.contains("digraph"));
        assert!(dot.contains("Administrator"));
        assert!(dot.contains("arrowhead=vee"));
    }

    #[test]
    fn test_extract_command_writes_model_json() {
        let app = DraughtsmanApp::new();

        let dir = tempdir().unwrap();
        let input_path = dir.path().join("doc.json");
        let output_path = dir.path().join("model.json");
        fs::write(&input_path, parsed_doc_json()).unwrap();

        app.extract_command(
            Some(input_path),
            Some(output_path.clone()),
            FormatChoice::Json,
            None,
            false,
        )
        .unwrap();

        let model: ClassModel =
            serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
        assert!(model.classes.contains_key("Administrator"));
        assert!(model.classes.contains_key("System"));
        assert_eq!(model.relationships.len(), 1);
    }

    #[test]
    fn test_extract_command_applies_lexicon() {
        let app = DraughtsmanApp::new();

        let dir = tempdir().unwrap();
        let input_path = dir.path().join("doc.json");
        let lexicon_path = dir.path().join("lexicon.json");
        let output_path = dir.path().join("model.json");
        fs::write(&input_path, parsed_doc_json()).unwrap();
        // "system" has no noun sense: the filter must reject it
        fs::write(&lexicon_path, r#"{"system": ["verb"]}"#).unwrap();

        app.extract_command(
            Some(input_path),
            Some(output_path.clone()),
            FormatChoice::Json,
            Some(lexicon_path),
            false,
        )
        .unwrap();

        let model: ClassModel =
            serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
        assert!(model.classes.contains_key("Administrator"));
        assert!(!model.classes.contains_key("System"));
    }

    #[test]
    fn test_extract_command_rejects_bad_input() {
        let app = DraughtsmanApp::new();

        let dir = tempdir().unwrap();
        let input_path = dir.path().join("doc.json");
        fs::write(&input_path, "not a parsed document").unwrap();

        let result = app.extract_command(Some(input_path), None, FormatChoice::Dot, None, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_evaluate_command_reads_model() {
        let app = DraughtsmanApp::new();

        let dir = tempdir().unwrap();
        let model_path = dir.path().join("model.json");
        let model = r#"{
            "classes": {"Administrator": {"attributes": [], "methods": ["manage"]}},
            "relationships": []
        }"#;
        fs::write(&model_path, model).unwrap();

        let result = app.evaluate_command(Some(model_path), "Administrator, Account", false);
        assert!(result.is_ok());
    }
}
