use crate::artifact::{download_filename, ArtifactStore};
use crate::config::{AlphabetPolicy, BenchConfig, CodeEncoding, Method, DEFAULT_ZSTD_LEVEL};
use crate::error::BenchError;
use crate::harness::{self, Comparison};
use crate::report::{self, StatsReport};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = "LZW vs Zstandard compression benchmark")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TuningArgs {
    /// Byte layout used to size LZW output [bincode, fixed, varint]
    #[arg(long, default_value = "bincode")]
    encoding: CodeEncoding,

    /// Handling of symbols above U+00FF [strict, extend]
    #[arg(long, default_value = "strict")]
    alphabet: AlphabetPolicy,

    /// Zstandard compression level
    #[arg(long, default_value_t = DEFAULT_ZSTD_LEVEL, allow_negative_numbers = true)]
    level: i32,
}

#[derive(Subcommand)]
enum Commands {
    /// Compresses a text file with one method and reports on it
    Compress {
        /// Input text file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file (default: input name with the method's extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Compression method [lzw, reference]
        #[arg(short, long, default_value = "lzw")]
        method: Method,

        #[command(flatten)]
        tuning: TuningArgs,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Runs both methods over one or more text files and compares them
    Compare {
        /// Input text files
        #[arg(required = true, value_name = "FILE")]
        inputs: Vec<PathBuf>,

        /// Directory receiving the compressed artifacts
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Write the comparison as CSV to this file
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,

        /// Number of files processed at once (default: all available cores)
        #[arg(short, long)]
        threads: Option<usize>,

        #[command(flatten)]
        tuning: TuningArgs,
    },
}

impl TuningArgs {
    fn config(&self) -> BenchConfig {
        BenchConfig::default()
            .with_encoding(self.encoding)
            .with_alphabet(self.alphabet)
            .with_level(self.level)
    }
}

pub fn run() -> Result<(), BenchError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Compress { input, output, method, tuning, json } => {
            let config = tuning.config();
            config.validate()?;

            let output = resolve_output(input, output.as_deref(), *method)?;
            info!("Compressing {} with {}", input.display(), method);
            let raw = fs::read(input)?;
            let text = crate::decode_input(&raw)?;
            let (stats, compressed) = harness::measure(text, *method, &config)?;

            fs::write(&output, &compressed)?;
            let filename = output.file_name().map(|n| n.to_string_lossy().into_owned());

            if *json {
                let report = StatsReport::new(&stats, filename);
                let rendered = serde_json::to_string_pretty(&report)
                    .map_err(|e| BenchError::Serialization(e.to_string()))?;
                println!("{}", rendered);
            } else {
                println!("Compression successful!");
                println!("  Method:           {}", stats.method);
                println!("  Original Size:    {} bytes", stats.original_size);
                println!("  Compressed Size:  {} bytes", stats.compressed_size);
                println!("  Space Saved:      {} bytes", stats.space_saved());
                println!("  Ratio:            {}", stats.ratio_display());
                println!("  Elapsed Time:     {}", stats.time_display());
                println!("  Written to:       {}", output.display());
            }
        }
        Commands::Compare { inputs, out_dir, csv, threads, tuning } => {
            let config = tuning.config().with_threads(threads.unwrap_or_else(num_cpus::get));
            config.validate()?;

            let _ = rayon::ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .build_global();

            let results = inputs
                .par_iter()
                .map(|path| compare_file(path, &config).map(|c| (path, c)))
                .collect::<Result<Vec<_>, BenchError>>()?;

            for (path, comparison) in &results {
                println!("{}", path.display());
                print!("{}", report::render_table(comparison.iter().map(|(_, m)| &m.stats)));
                println!("  Best: {}", comparison.best().label());
                println!();
            }

            if let Some(csv_path) = csv {
                fs::write(csv_path, report::comparison_csv(results.iter().map(|(_, c)| c)))?;
                info!("Wrote comparison CSV to {}", csv_path.display());
            }

            if let Some(dir) = out_dir {
                fs::create_dir_all(dir)?;
                export_artifacts(dir, &results)?;
            }
        }
    }

    Ok(())
}

fn compare_file(path: &Path, config: &BenchConfig) -> Result<Comparison, BenchError> {
    info!("Comparing methods on {}", path.display());
    let raw = fs::read(path)?;
    let text = crate::decode_input(&raw)?;
    harness::compare(text, config)
}

/// Output path for `compress`: the explicit one, or the input's download name
/// next to it. Never the input itself.
fn resolve_output(input: &Path, output: Option<&Path>, method: Method) -> Result<PathBuf, BenchError> {
    let resolved = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let name = input.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            input.with_file_name(download_filename(&name, method))
        }
    };
    if resolved == input {
        return Err(BenchError::Config(format!(
            "output {} would overwrite the input; pass -o explicitly",
            resolved.display()
        )));
    }
    Ok(resolved)
}

/// Route every artifact through a store keyed by input path, then hand each
/// one out exactly once into `dir`.
fn export_artifacts(dir: &Path, results: &[(&PathBuf, Comparison)]) -> Result<(), BenchError> {
    let mut store = ArtifactStore::new();
    for (path, comparison) in results {
        let session = path.display().to_string();
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        for (method, measurement) in comparison.iter() {
            store.store(&session, method, &name, &measurement.compressed)?;
        }
    }

    for (path, _) in results {
        let session = path.display().to_string();
        for method in Method::ALL {
            let download = store.take(&session, method)?;
            let target = dir.join(&download.filename);
            if target.exists() {
                warn!("Overwriting {}", target.display());
            }
            fs::write(&target, &download.data)?;
            println!("Wrote {} ({} bytes)", target.display(), download.data.len());
        }
    }

    Ok(())
}
