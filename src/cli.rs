// src/cli.rs
use std::{
    env,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use color_eyre::eyre::{Result, WrapErr, bail, eyre};

use crate::{
    config::{
        options::{AppOptions, ExportFormat},
        state::SessionState,
    },
    export::{write_results, write_to_path},
    filter::ResultSet,
    images::{self, ImageOrigin, ImageResolver, Resolved},
    phone::{HEADERS, PhoneRecord, card_lines},
    store::{self, Dataset},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Cards,
    Table,
    Export(ExportFormat),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub query: Option<String>,
    pub mode: OutputMode,
    pub out: Option<PathBuf>,
    pub include_headers: bool,
    pub options: AppOptions,
    pub help: bool,
}

impl Params {
    pub fn new(options: AppOptions) -> Self {
        Self {
            query: None,
            mode: OutputMode::Cards,
            out: None,
            include_headers: true,
            options,
            help: false,
        }
    }
}

pub fn run() -> Result<()> {
    let params = parse_args(env::args().skip(1), AppOptions::from_env())?;
    if params.help {
        print!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    let ds = store::init(&params.options.dataset_path)
        .wrap_err("could not load the phone dataset")?;
    let resolver = images::init(&params.options.images);

    match &params.query {
        Some(q) => {
            let mut session = SessionState::default();
            session.submit(q, ds);
            let mut out = io::stdout().lock();
            if !session.show_results {
                writeln!(out, "Nothing to search for.")?;
            }
            render(&mut out, &session, &params, resolver)?;
            out.flush()?;
        }
        None => interactive(ds, &params, resolver)?,
    }
    Ok(())
}

pub fn parse_args<I>(args: I, options: AppOptions) -> Result<Params>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::new(options);
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-q" | "--query" => params.query = Some(args.next().ok_or_else(|| eyre!("Missing value for --query"))?),
            "-d" | "--data" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --data"))?;
                params.options.dataset_path = PathBuf::from(v);
            }
            "-f" | "--format" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --format"))?;
                params.mode = match v.to_ascii_lowercase().as_str() {
                    "cards" => OutputMode::Cards,
                    "table" => OutputMode::Table,
                    other => match ExportFormat::parse(other) {
                        Some(fmt) => OutputMode::Export(fmt),
                        None => bail!("Unknown format: {}", other),
                    },
                };
            }
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| eyre!("Missing output path"))?;
                params.out = Some(PathBuf::from(v));
            }
            "--no-headers" => params.include_headers = false,
            "--offline" => params.options.images.lookup_enabled = false,
            "-h" | "--help" => params.help = true,
            _ => bail!("Unknown arg: {}", a),
        }
    }

    // A file target implies a tabular export; pick the format from its extension.
    if let Some(out) = &params.out {
        if !matches!(params.mode, OutputMode::Export(_)) {
            params.mode = OutputMode::Export(format_for_path(out));
        }
    }

    Ok(params)
}

fn format_for_path(p: &Path) -> ExportFormat {
    p.extension()
        .and_then(|e| e.to_str())
        .and_then(ExportFormat::parse)
        .unwrap_or(ExportFormat::Csv)
}

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Clear,
    Search(&'a str),
}

fn classify(line: &str) -> Command<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim().to_ascii_lowercase().as_str() {
        "quit" | "exit" | ":q" => Command::Quit,
        "clear" => Command::Clear,
        _ => Command::Search(line),
    }
}

fn interactive(ds: &'static Dataset, params: &Params, resolver: &ImageResolver) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut session = SessionState::default();

    let origin = ds.source().map_or_else(|| s!("memory"), |p| p.display().to_string());
    writeln!(out, "{} phone(s) loaded from {origin}.", ds.len())?;
    writeln!(out, "Try \"phone under ₹14000 with 16GB RAM\"; 'clear' resets, 'quit' leaves.")?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match classify(&line) {
            Command::Quit => break,
            Command::Clear => {
                session.reset();
                writeln!(out, "Search cleared.")?;
            }
            Command::Search(q) => {
                session.submit(q, ds);
                if session.show_results {
                    render(&mut out, &session, params, resolver)?;
                } else {
                    writeln!(out, "Search cleared.")?;
                }
            }
        }
    }
    Ok(())
}

fn render<W: Write>(
    w: &mut W,
    session: &SessionState<'_>,
    params: &Params,
    resolver: &ImageResolver,
) -> Result<()> {
    let Some(results) = session.results.as_ref().filter(|_| session.show_results) else {
        return Ok(());
    };

    if let OutputMode::Export(fmt) = params.mode {
        match &params.out {
            Some(path) => {
                write_to_path(path, results, fmt, params.include_headers)
                    .wrap_err_with(|| format!("could not write {}", path.display()))?;
                eprintln!("Wrote {} row(s) to {}", results.len(), path.display());
            }
            None => write_results(&mut *w, results, fmt, params.include_headers)?,
        }
        return Ok(());
    }

    writeln!(w, "Results for your query: {}", session.query)?;
    writeln!(w, "Filters: {}", session.constraints)?;
    if results.is_empty() {
        writeln!(w, "No phones found matching your query.")?;
        return Ok(());
    }
    writeln!(w, "Found {} phone(s) matching your query!", results.len())?;
    writeln!(w)?;

    match params.mode {
        OutputMode::Table => write_table(w, results)?,
        _ => {
            for phone in results.iter() {
                let image = resolver.resolve(&phone.display_name(), phone.image_url.as_deref());
                if let Some(warn) = &image.warning {
                    eprintln!("warning: {warn}");
                }
                write_card(w, phone, &image)?;
            }
        }
    }
    Ok(())
}

pub fn write_card<W: Write>(w: &mut W, phone: &PhoneRecord, image: &Resolved) -> io::Result<()> {
    let name = phone.display_name();
    let rule = "─".repeat(40usize.saturating_sub(name.chars().count() + 4));
    writeln!(w, "── {name} {rule}")?;

    let image_note = match image.origin {
        ImageOrigin::Placeholder => " (placeholder)",
        _ => "",
    };
    writeln!(w, "  {:<10} {}{}", "Image:", image.url, image_note)?;
    for (label, value) in card_lines(phone) {
        writeln!(w, "  {:<10} {}", join!(label, ":"), value)?;
    }
    writeln!(w)
}

pub fn write_table<W: Write>(w: &mut W, results: &ResultSet<'_>) -> io::Result<()> {
    let rows: Vec<Vec<String>> = results.iter().map(|p| p.table_cells()).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    writeln!(w, "{}", pad_row(HEADERS.iter().copied(), &widths))?;
    writeln!(w, "{}", widths.iter().map(|&wd| "-".repeat(wd)).collect::<Vec<_>>().join("  "))?;
    for row in &rows {
        writeln!(w, "{}", pad_row(row.iter().map(String::as_str), &widths))?;
    }
    Ok(())
}

fn pad_row<'s>(cells: impl Iterator<Item = &'s str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(c, &wd)| format!("{c:<wd$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
