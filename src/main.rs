use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use augment_studio::config::{ClientConfig, ConfigError, parse_locale};
use augment_studio::controller::{Confirm, Controller, DeleteOutcome, FlowError, UploadInput};
use augment_studio::messages::Messages;
use augment_studio::net::api::{ApiError, HttpAugmentApi};
use augment_studio::net::types::UploadFile;
use augment_studio::state::session::Tab;
use augment_studio::util::files::{default_archive_name, preview_file_name, upload_name};
use augment_studio::view::catalog::render_catalog;
use augment_studio::view::{Action, text};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

type Studio = Controller<HttpAugmentApi>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("client setup failed: {0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Flow(#[from] FlowError),
    #[error("cannot read {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

#[derive(Parser, Debug)]
#[command(name = "augment-studio", about = "Upload, augment, and download image datasets")]
struct Cli {
    #[arg(long, env = "AUGMENT_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "AUGMENT_LOCALE", help = "vi or en")]
    locale: Option<String>,

    #[arg(short, long, help = "Log requests at debug level")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available augmentations.
    Catalog,
    /// Upload images and labels as a new task.
    Upload(UploadArgs),
    /// Render one sample per selected augmentation.
    Preview(PreviewArgs),
    /// Apply augmentations to every image of a task.
    Apply(ApplyArgs),
    /// Show tasks and their augmentation runs.
    History,
    /// Apply another augmentation set to an existing task.
    Reaugment {
        task_id: String,
        #[arg(long = "augment", required = true)]
        augmentations: Vec<String>,
    },
    /// Delete a task and its outputs.
    Delete {
        task_id: String,
        #[arg(long, short, help = "Skip the confirmation prompt")]
        yes: bool,
    },
    /// Save the archive of one augmentation run.
    Download {
        output_id: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct UploadArgs {
    #[arg(long, num_args = 1.., required = true)]
    images: Vec<PathBuf>,

    #[arg(long, num_args = 1..)]
    labels: Vec<PathBuf>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long, default_value = "yolo", help = "yolo or voc")]
    label_format: String,

    #[arg(long = "augment", help = "Augmentation id to select after upload")]
    augmentations: Vec<String>,

    #[arg(long, default_value_t = false)]
    preview: bool,

    #[arg(long, default_value_t = false)]
    apply: bool,

    #[arg(long, requires = "apply", help = "Save the applied archive to this path")]
    download: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[arg(long)]
    task: String,

    #[arg(long = "augment", required = true)]
    augmentations: Vec<String>,

    #[arg(long, help = "Directory to save preview images into")]
    save_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ApplyArgs {
    #[arg(long)]
    task: String,

    #[arg(long = "augment", required = true)]
    augmentations: Vec<String>,

    #[arg(long)]
    download: Option<PathBuf>,
}

/// Reads a yes/no answer from stdin unless `--yes` was given.
struct StdinConfirm {
    assume_yes: bool,
}

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{prompt} [y/N] ");
        let _ = io::stdout().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "c" | "có")
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }
    if cli.locale.is_some() {
        config = config.with_locale(parse_locale(cli.locale.as_deref())?);
    }
    tracing::debug!(base_url = %config.base_url, locale = %config.locale, "client configured");

    let api = HttpAugmentApi::new(&config)?;
    let mut studio = Controller::new(api, Messages::new(config.locale));
    let result = run(&mut studio, cli.command).await;

    for notice in &studio.session().notices {
        println!("{}", text::render_notice(notice));
    }
    result
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "augment_studio=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

async fn run(studio: &mut Studio, command: Command) -> Result<(), CliError> {
    match command {
        Command::Catalog => {
            studio.load_catalog().await?;
            print_catalog(studio);
        }
        Command::Upload(args) => run_upload(studio, args).await?,
        Command::Preview(args) => {
            studio.load_catalog().await?;
            studio.target_task(args.task);
            select(studio, &args.augmentations)?;
            studio.preview().await?;
            print_preview(studio);
            if let Some(dir) = args.save_dir {
                save_previews(studio, &dir).await?;
            }
        }
        Command::Apply(args) => {
            studio.load_catalog().await?;
            studio.target_task(args.task);
            select(studio, &args.augmentations)?;
            apply_and_save(studio, args.download).await?;
        }
        Command::History => {
            studio.activate_tab(Tab::History).await?;
            print_history(studio);
        }
        Command::Reaugment { task_id, augmentations } => {
            let decline = |_: &str| false;
            studio.load_catalog().await?;
            studio.dispatch(Action::OpenReaugment(task_id), &decline).await?;
            for id in augmentations {
                studio.dispatch(Action::ToggleReaugmentAugmentation(id), &decline).await?;
            }
            if let Some(modal) = studio.view().modal {
                print!("{}", text::render_modal(&modal));
            }
            studio.dispatch(Action::ConfirmReaugment, &decline).await?;
            print_history(studio);
        }
        Command::Delete { task_id, yes } => {
            let confirm = StdinConfirm { assume_yes: yes };
            if studio.delete_task(&task_id, &confirm).await? == DeleteOutcome::Deleted {
                print_history(studio);
            }
        }
        Command::Download { output_id, out } => save_download(studio, &output_id, out).await?,
    }
    Ok(())
}

async fn run_upload(studio: &mut Studio, args: UploadArgs) -> Result<(), CliError> {
    let input = UploadInput {
        task_name: args.name,
        label_format: args.label_format,
        images: read_files(&args.images)?,
        labels: read_files(&args.labels)?,
    };
    if !args.augmentations.is_empty() {
        studio.load_catalog().await?;
    }
    studio.upload(input).await?;
    if args.augmentations.is_empty() {
        return Ok(());
    }

    select(studio, &args.augmentations)?;
    print_catalog(studio);
    if args.preview {
        studio.preview().await?;
        print_preview(studio);
    }
    if args.apply {
        apply_and_save(studio, args.download).await?;
    }
    Ok(())
}

async fn apply_and_save(studio: &mut Studio, download: Option<PathBuf>) -> Result<(), CliError> {
    let response = studio.apply().await?;
    if let Some(results) = studio.view().upload.results {
        print!("{}", text::render_results(&results));
    }
    if let Some(path) = download {
        save_download(studio, &response.output_id, Some(path)).await?;
    }
    Ok(())
}

fn select(studio: &mut Studio, ids: &[String]) -> Result<(), CliError> {
    for id in ids {
        studio.select_augmentation(id)?;
    }
    Ok(())
}

fn read_files(paths: &[PathBuf]) -> Result<Vec<UploadFile>, CliError> {
    paths
        .iter()
        .map(|path| {
            let bytes = fs::read(path).map_err(|source| CliError::ReadInput { path: path.clone(), source })?;
            Ok(UploadFile::new(upload_name(path), bytes))
        })
        .collect()
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    fs::write(path, bytes).map_err(|source| CliError::WriteOutput { path: path.to_path_buf(), source })
}

async fn save_download(studio: &mut Studio, output_id: &str, out: Option<PathBuf>) -> Result<(), CliError> {
    let bytes = studio.download(output_id).await?;
    let path = out.unwrap_or_else(|| PathBuf::from(default_archive_name(output_id)));
    write_file(&path, &bytes)?;
    println!("{}", studio.messages().saved_to(&path.display().to_string()));
    Ok(())
}

async fn save_previews(studio: &Studio, dir: &Path) -> Result<(), CliError> {
    let Some(preview) = studio.session().preview.clone() else {
        return Ok(());
    };
    fs::create_dir_all(dir).map_err(|source| CliError::WriteOutput { path: dir.to_path_buf(), source })?;
    let paths = std::iter::once(preview.original_image.as_str())
        .chain(preview.augmented_images.iter().map(|aug| aug.image_path.as_str()));
    for image_path in paths {
        let bytes = studio.preview_image(image_path).await?;
        let target = dir.join(preview_file_name(image_path));
        write_file(&target, &bytes)?;
        println!("{}", studio.messages().saved_to(&target.display().to_string()));
    }
    Ok(())
}

fn print_catalog(studio: &Studio) {
    let session = studio.session();
    let catalog = render_catalog(&session.catalog, &session.selection, Action::ToggleAugmentation);
    print!("{}", text::render_catalog(&catalog));
}

fn print_preview(studio: &Studio) {
    if let Some(preview) = studio.view().upload.preview {
        print!("{}", text::render_preview(&preview));
    }
}

fn print_history(studio: &Studio) {
    print!("{}", text::render_history(&studio.view().history));
}
