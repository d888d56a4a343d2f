use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use notebook_store::{JsonStorage, Note};
use notebook_summarizer::{Summarizer, SummarizerConfig, DEFAULT_MAX_SENTENCES};
use serde_json::json;
use std::io;
use std::path::PathBuf;

mod render;

use render::{render_notes, render_ranking, render_summary, NO_CONTENT, NO_MATCHES};

/// Separator placed between note bodies before summarizing.
const NOTE_SEPARATOR: &str = "\n\n";

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "notebooklm")]
#[command(about = "Lightweight note taking and summarization")]
#[command(
    long_about = "Lightweight note taking and summarization.\n\n\
                  Notes are stored locally in JSON (default: ~/.notebooklm/notes.json)."
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to storage file (default: $NOTEBOOKLM_STORAGE, $NOTEBOOKLM_HOME/notes.json
    /// or ~/.notebooklm/notes.json)
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: log only errors
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    Add(AddArgs),

    /// List all notes
    List(ListArgs),

    /// Search notes by title, content or tag
    Search(SearchArgs),

    /// Summarize notes
    Summarize(SummarizeArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Title of the note
    pub title: String,

    /// Content of the note
    pub content: String,

    /// Optional tags
    #[arg(long, num_args = 0.., value_name = "TAG")]
    pub tags: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (case-insensitive substring)
    pub query: String,

    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Only summarize notes matching this query
    #[arg(long)]
    pub query: Option<String>,

    /// Maximum sentences in summary
    #[arg(long, default_value_t = DEFAULT_MAX_SENTENCES as i64, allow_negative_numbers = true)]
    pub sentences: i64,

    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Also print every sentence with its score, best first
    #[arg(long)]
    pub scores: bool,
}

impl Cli {
    fn json_output(&self) -> bool {
        match &self.command {
            Commands::Add(_) => false,
            Commands::List(args) => args.json,
            Commands::Search(args) => args.json,
            Commands::Summarize(args) => args.json,
        }
    }

    fn open_storage(&self) -> Result<JsonStorage> {
        let storage = match &self.storage {
            Some(path) => JsonStorage::new(path),
            None => JsonStorage::from_default_location()
                .context("Failed to resolve default storage location")?,
        };
        log::debug!("Using storage {}", storage.path().display());
        Ok(storage)
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet || cli.json_output() {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let output = run(&cli)?;
    if !output.is_empty() {
        print_stdout(&output)?;
    }
    Ok(())
}

/// Execute `cli` and return what should be written to stdout.
pub fn run(cli: &Cli) -> Result<String> {
    let storage = cli.open_storage()?;
    match &cli.command {
        Commands::Add(args) => run_add(&storage, args),
        Commands::List(args) => run_list(&storage, args),
        Commands::Search(args) => run_search(&storage, args),
        Commands::Summarize(args) => run_summarize(&storage, args),
    }
}

fn run_add(storage: &JsonStorage, args: &AddArgs) -> Result<String> {
    let note = storage
        .add_note(args.title.as_str(), args.content.as_str(), args.tags.clone())
        .with_context(|| format!("Failed to add note '{}'", args.title))?;
    Ok(format!("Added note '{}'", note.title))
}

fn notes_json(notes: &[Note]) -> Result<String> {
    serde_json::to_string_pretty(&json!({ "notes": notes })).context("Failed to encode notes")
}

fn run_list(storage: &JsonStorage, args: &ListArgs) -> Result<String> {
    let notes = storage.all_notes().context("Failed to load notes")?;
    if args.json {
        return notes_json(&notes);
    }
    Ok(render_notes(&notes))
}

fn run_search(storage: &JsonStorage, args: &SearchArgs) -> Result<String> {
    let notes = storage
        .search(&args.query)
        .with_context(|| format!("Failed to search notes for '{}'", args.query))?;
    if args.json {
        return notes_json(&notes);
    }
    if notes.is_empty() {
        return Ok(NO_MATCHES.to_string());
    }
    Ok(render_notes(&notes))
}

fn run_summarize(storage: &JsonStorage, args: &SummarizeArgs) -> Result<String> {
    let notes = match &args.query {
        Some(query) => storage.search(query),
        None => storage.all_notes(),
    }
    .context("Failed to load notes")?;

    let text = notes
        .iter()
        .map(|note| note.content.as_str())
        .collect::<Vec<_>>()
        .join(NOTE_SEPARATOR);
    log::debug!("Summarizing {} notes ({} bytes)", notes.len(), text.len());

    let summarizer = Summarizer::new(SummarizerConfig::from_signed(args.sentences));
    let sentences = summarizer.summarize(&text);
    let ranked = if args.scores {
        summarizer.rank(&text)
    } else {
        Vec::new()
    };

    if args.json {
        let mut body = json!({ "sentences": sentences });
        if args.scores {
            body["ranking"] = json!(ranked);
        }
        return serde_json::to_string_pretty(&body).context("Failed to encode summary");
    }

    if sentences.is_empty() {
        return Ok(NO_CONTENT.to_string());
    }
    let mut out = render_summary(&sentences);
    if args.scores {
        out.push('\n');
        out.push_str(&render_ranking(&ranked));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("notebooklm").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn test_parses_add_with_tags() {
        let cli = parse(&["add", "Title", "Content", "--tags", "one", "two"]);
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.title, "Title");
                assert_eq!(args.content, "Content");
                assert_eq!(args.tags, vec!["one", "two"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parses_summarize_options() {
        let cli = parse(&["summarize", "--sentences", "1"]);
        match cli.command {
            Commands::Summarize(args) => {
                assert_eq!(args.sentences, 1);
                assert!(args.query.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = parse(&["summarize"]);
        match cli.command {
            Commands::Summarize(args) => assert_eq!(args.sentences, 3),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_storage_after_subcommand() {
        let cli = parse(&["list", "--storage", "/tmp/notes.json"]);
        assert_eq!(cli.storage, Some(PathBuf::from("/tmp/notes.json")));
    }

    #[test]
    fn test_negative_sentence_count_is_accepted() {
        let cli = parse(&["summarize", "--sentences", "-1"]);
        match cli.command {
            Commands::Summarize(args) => assert_eq!(args.sentences, -1),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["notebooklm"]).is_err());
    }

    #[test]
    fn test_run_end_to_end() {
        let tmp = TempDir::new().unwrap();
        let storage = tmp.path().join("notes.json");
        let storage = storage.to_str().unwrap();

        let out = run(&parse(&[
            "--storage",
            storage,
            "add",
            "Python",
            "Python is a programming language. It is popular for scripting.",
        ]))
        .unwrap();
        assert_eq!(out, "Added note 'Python'");

        run(&parse(&[
            "--storage",
            storage,
            "add",
            "Data",
            "It also powers many data tools.",
            "--tags",
            "py",
        ]))
        .unwrap();

        let out = run(&parse(&["--storage", storage, "summarize", "--sentences", "2"])).unwrap();
        assert_eq!(
            out,
            "Summary:\n- Python is a programming language.\n- It also powers many data tools."
        );

        let out = run(&parse(&["--storage", storage, "search", "nope"])).unwrap();
        assert_eq!(out, NO_MATCHES);

        let out = run(&parse(&["--storage", storage, "search", "PY"])).unwrap();
        assert_eq!(
            out,
            "- Python\n  Python is a programming language. It is popular for scripting.\n\
             - Data [tags: py]\n  It also powers many data tools."
        );
    }

    #[test]
    fn test_summarize_empty_store() {
        let tmp = TempDir::new().unwrap();
        let storage = tmp.path().join("notes.json");
        let out = run(&parse(&["--storage", storage.to_str().unwrap(), "summarize"])).unwrap();
        assert_eq!(out, NO_CONTENT);

        let out = run(&parse(&["--storage", storage.to_str().unwrap(), "list"])).unwrap();
        assert!(out.is_empty());
    }
}
