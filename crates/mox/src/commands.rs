use std::io::{self, Read as _, Write as _};

use anyhow::{Context as _, bail};
use camino::{Utf8Path, Utf8PathBuf};
use mox_db::{Diagnostic, check_file, formatted};
use mox_errors::Renderer;
use mox_fmt::FormatOptions;
use mox_inputs::{File, Settings};
use salsa::DatabaseImpl;

const STDIN: &str = "<stdin>";

pub(crate) fn format_options(
    indent: Option<String>,
    config: Option<&Utf8Path>,
) -> anyhow::Result<FormatOptions> {
    if let Some(indent) = indent {
        return Ok(FormatOptions { indent });
    }

    let Some(config) = config else {
        return Ok(FormatOptions::default());
    };

    let text = std::fs::read_to_string(config)
        .with_context(|| format!("failed to read config `{config}`"))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config `{config}`"))
}

pub(crate) fn fmt(
    path: Option<Utf8PathBuf>,
    options: &FormatOptions,
    tree: bool,
) -> anyhow::Result<()> {
    let db = DatabaseImpl::default();
    let file = read(&db, path)?;
    let mut stdout = io::stdout().lock();

    if tree {
        let parse = mox_db::parse(&db, file).clone();
        let mut nodes = parse.into_result().map_err(|error| report(&db, file, &error))?;
        mox_fmt::normalize(&mut nodes);
        write!(stdout, "{}", mox_syntax::Render(&nodes))?;
        return Ok(stdout.flush()?);
    }

    let settings = Settings::new(&db, options.clone());
    match formatted(&db, settings, file) {
        Ok(text) => {
            stdout.write_all(text.as_bytes())?;
            Ok(stdout.flush()?)
        }
        Err(error) => Err(report(&db, file, error)),
    }
}

pub(crate) fn check(paths: Vec<Utf8PathBuf>) -> anyhow::Result<()> {
    let db = DatabaseImpl::default();
    let renderer = Renderer::styled();

    let paths = if paths.is_empty() { vec![None] } else { paths.into_iter().map(Some).collect() };
    let mut failed = 0;

    for path in paths {
        let file = read(&db, path)?;
        let diagnostics = check_file::accumulated::<Diagnostic>(&db, file);

        for diagnostic in &diagnostics {
            eprintln!("{}", diagnostic.render(&renderer, file.path(&db).as_str(), file.text(&db)));
        }

        if !diagnostics.is_empty() {
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} file(s) failed to parse");
    }
    Ok(())
}

pub(crate) fn tokens(path: Option<Utf8PathBuf>, skip_trivia: bool) -> anyhow::Result<()> {
    let db = DatabaseImpl::default();
    let file = read(&db, path)?;
    let text = file.text(&db);
    let mut stdout = io::stdout().lock();

    for token in mox_tokenizer::Tokenizer::new(text) {
        let token = token.map_err(|error| report(&db, file, &error))?;
        if skip_trivia && token.kind.is_trivia() {
            continue;
        }
        writeln!(stdout, "{:?}@{:?} {:?}", token.kind, token.range, token.text(text))?;
    }

    Ok(stdout.flush()?)
}

pub(crate) fn tree(path: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let db = DatabaseImpl::default();
    let file = read(&db, path)?;
    let parse = mox_db::parse(&db, file);

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", mox_syntax::debug_tree(parse.nodes()))?;
    stdout.flush()?;

    match parse.error() {
        Some(error) => Err(report(&db, file, error)),
        None => Ok(()),
    }
}

fn read(db: &DatabaseImpl, path: Option<Utf8PathBuf>) -> anyhow::Result<File> {
    let (path, text) = match path {
        Some(path) if path != "-" => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read `{path}`"))?;
            (path, text)
        }
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("failed to read standard input")?;
            (Utf8PathBuf::from(STDIN), text)
        }
    };

    tracing::debug!(%path, len = text.len(), "read input");
    Ok(File::new(db, path, text))
}

/// Prints the rendered diagnostic for `error` and turns it into the exit error.
fn report(db: &DatabaseImpl, file: File, error: &mox_errors::Error) -> anyhow::Error {
    let diagnostic = Diagnostic::from_error(error, file.text(db));
    eprintln!("{}", diagnostic.render(&Renderer::styled(), file.path(db).as_str(), file.text(db)));
    anyhow::anyhow!("{}: {error:#}", file.path(db))
}
