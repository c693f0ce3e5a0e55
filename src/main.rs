use anyhow::Context;
use clap::Parser;
use prisma_dbml::{Document, GeneratorConfig, generate_dbml};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prisma-dbml")]
#[command(about = "Render a Prisma DMMF document as DBML", long_about = None)]
struct Cli {
    /// DMMF JSON document
    input: PathBuf,

    /// Output file, or directory to write schema.dbml into (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use database names (@@map / @map) for tables
    #[arg(long)]
    map_to_db_schema: bool,

    /// Leave relation fields out of table blocks
    #[arg(long)]
    no_relation_fields: bool,

    /// Do not synthesize join tables for implicit many-to-many relations
    #[arg(long)]
    no_many_to_many: bool,

    #[arg(long)]
    project_name: Option<String>,

    #[arg(long)]
    database_type: Option<String>,

    #[arg(long)]
    project_note: Option<String>,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            many_to_many: !self.no_many_to_many,
            map_to_db_schema: self.map_to_db_schema,
            include_relation_fields: !self.no_relation_fields,
            project_name: self.project_name.clone(),
            project_database_type: self.database_type.clone(),
            project_note: self.project_note.clone(),
            ..GeneratorConfig::default()
        }
    }
}

fn init_logger() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| eprintln!("Error initializing the global logger: {err}"))
        .ok();
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let cli = Cli::parse();

    let input = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let document = Document::from_json(&input)?;
    let config = cli.config();
    let dbml = generate_dbml(&document.datamodel, &config)?;

    match &cli.output {
        Some(output) => {
            let path = if output.is_dir() {
                output.join(&config.output_name)
            } else {
                output.clone()
            };
            fs::write(&path, format!("{}\n", dbml))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote dbml");
        }
        None => println!("{}", dbml),
    }

    Ok(())
}
