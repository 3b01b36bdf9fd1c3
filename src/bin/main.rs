//! SchemaForge CLI - Compile schema designs to SQL
//!
//! Usage:
//!   schemaforge compile <design.json> [--dialect <dialect>] [--inheritance <kind>]
//!   schemaforge normalize <design.json> [--inheritance <kind>]
//!   schemaforge validate <design.json>
//!   schemaforge types <dialect>
//!
//! Examples:
//!   schemaforge compile shop.json --dialect postgres
//!   schemaforge compile zoo.json -i class-table -o verbose
//!   schemaforge types tsql

use clap::{Parser, Subcommand, ValueEnum};
use schemaforge::compile::{compile, CompileOutput};
use schemaforge::config::{OutputFormat, Settings};
use schemaforge::dto::load_design;
use schemaforge::mir::normalize;
use schemaforge::model::InheritanceKind;
use schemaforge::sql::Dialect;
use schemaforge::validation::validate_design;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schemaforge")]
#[command(about = "SchemaForge - Compile entity-relationship designs to multi-dialect SQL")]
#[command(version)]
struct Cli {
    /// Log normalization and emission details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a design to CREATE TABLE statements
    Compile {
        /// Path to the design .json file
        file: PathBuf,

        /// SQL dialect to generate (defaults to the config file, then sqlite)
        #[arg(short, long)]
        dialect: Option<DialectArg>,

        /// Inheritance mapping, overriding the design's own
        #[arg(short, long)]
        inheritance: Option<InheritanceArg>,

        /// Output format
        #[arg(short, long)]
        output: Option<OutputArg>,
    },

    /// Print the normalized design as JSON
    Normalize {
        /// Path to the design .json file
        file: PathBuf,

        /// Inheritance mapping, overriding the design's own
        #[arg(short, long)]
        inheritance: Option<InheritanceArg>,
    },

    /// Check a design for structural problems
    Validate {
        /// Path to the design .json file
        file: PathBuf,
    },

    /// List the data type templates of a dialect
    Types {
        dialect: DialectArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DialectArg {
    Sqlite,
    Postgres,
    Mysql,
    Tsql,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Sqlite => Dialect::Sqlite,
            DialectArg::Postgres => Dialect::Postgres,
            DialectArg::Mysql => Dialect::MySql,
            DialectArg::Tsql => Dialect::TSql,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum InheritanceArg {
    SingleTable,
    ClassTable,
    ConcreteTable,
}

impl From<InheritanceArg> for InheritanceKind {
    fn from(arg: InheritanceArg) -> Self {
        match arg {
            InheritanceArg::SingleTable => InheritanceKind::SingleTable,
            InheritanceArg::ClassTable => InheritanceKind::ClassTable,
            InheritanceArg::ConcreteTable => InheritanceKind::ConcreteTable,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputArg {
    /// Output SQL only
    Sql,
    /// Output SQL with comments
    Verbose,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Sql => OutputFormat::Sql,
            OutputArg::Verbose => OutputFormat::Verbose,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Compile {
            file,
            dialect,
            inheritance,
            output,
        } => cmd_compile(&settings, file, dialect, inheritance, output),
        Commands::Normalize { file, inheritance } => cmd_normalize(&settings, file, inheritance),
        Commands::Validate { file } => cmd_validate(file),
        Commands::Types { dialect } => cmd_types(dialect.into()),
    }
}

/// Install the log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "schemaforge=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_compile(
    settings: &Settings,
    file: PathBuf,
    dialect: Option<DialectArg>,
    inheritance: Option<InheritanceArg>,
    output: Option<OutputArg>,
) -> ExitCode {
    let mut options = match settings.compile_options() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(dialect) = dialect {
        options = options.with_dialect(dialect.into());
    }
    if let Some(kind) = inheritance {
        options = options.with_inheritance(kind.into());
    }
    let format = output.map_or(settings.output.format, OutputFormat::from);

    let design = match load_design(&file) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let compiled = match compile(&design, &options) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Compilation error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let script = render_script(&compiled, &file, format, &settings.output.statement_separator);

    let directory = match settings.output.resolved_directory() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match directory {
        Some(dir) => write_script(&dir, &file, compiled.dialect, &script),
        None => {
            println!("{}", script);
            ExitCode::SUCCESS
        }
    }
}

fn render_script(
    compiled: &CompileOutput,
    file: &Path,
    format: OutputFormat,
    separator: &str,
) -> String {
    match format {
        OutputFormat::Sql => compiled.to_script(separator),
        OutputFormat::Verbose => format!(
            "-- SchemaForge Compiled SQL\n-- Source: {}\n-- Dialect: {}\n-- Inheritance: {}\n\n{}",
            file.display(),
            compiled.dialect,
            compiled.mir.inheritance_kind,
            compiled.to_annotated_script(separator)
        ),
    }
}

fn write_script(dir: &Path, file: &Path, dialect: Dialect, script: &str) -> ExitCode {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "design".to_string());
    let target = dir.join(format!("{}.{}.sql", stem, dialect));

    if let Err(e) = fs::create_dir_all(dir).and_then(|_| fs::write(&target, script)) {
        eprintln!("Error writing '{}': {}", target.display(), e);
        return ExitCode::FAILURE;
    }

    println!("Wrote {}", target.display());
    ExitCode::SUCCESS
}

fn cmd_normalize(settings: &Settings, file: PathBuf, inheritance: Option<InheritanceArg>) -> ExitCode {
    let mut design = match load_design(&file) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let configured = match settings.compile.inheritance() {
        Ok(k) => k,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(kind) = inheritance.map(InheritanceKind::from).or(configured) {
        design.inheritance_kind = kind;
    }

    let mir = match normalize(&design) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Normalization error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match mir.to_json_pretty() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_validate(file: PathBuf) -> ExitCode {
    let design = match load_design(&file) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let issues = validate_design(&design);
    if issues.is_empty() {
        println!(
            "OK: {} is valid ({} tables, {} columns, {} relations)",
            file.display(),
            design.tables.len(),
            design.columns.len(),
            design.relations.len()
        );
        return ExitCode::SUCCESS;
    }

    eprintln!("Validation errors in {}:", file.display());
    for issue in &issues {
        eprintln!("  {}", issue);
    }
    ExitCode::FAILURE
}

fn cmd_types(dialect: Dialect) -> ExitCode {
    println!("Data types for {}:", dialect);
    for template in dialect.type_templates() {
        println!("  {}", template);
    }
    ExitCode::SUCCESS
}
