use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use detailrow::{AllowAll, CellPool, DetailScreen, RowData, parse_screen_definition};

#[derive(Debug, Parser)]
#[command(
    name = "detailrow",
    version,
    about = "Preview detail-row screens for field-data records in the terminal"
)]
struct Cli {
    /// Screen definition spec: file path, inline payload, or "-" for stdin
    #[arg(short = 's', long = "screen", value_name = "SPEC")]
    screen: String,

    /// Row data spec: file path, inline payload, or "-" for stdin
    #[arg(short = 'r', long = "row", value_name = "SPEC")]
    row: String,

    /// Mark the rows this user could edit
    #[arg(long = "edit-markers")]
    edit_markers: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.screen == "-" && cli.row == "-" {
        return Err(eyre!(
            "cannot read screen definition and row data from stdin simultaneously; \
             provide inline content or files"
        ));
    }

    let definition = load_document(&cli.screen, "screen definition")?;
    let row_document = load_document(&cli.row, "row data")?;

    let configs = parse_screen_definition(&definition).map_err(Report::msg)?;
    let row = RowData::from_value(row_document);

    let mut screen = DetailScreen::build(&configs, &AllowAll);
    let mut pool = CellPool::new();
    let cells = screen.prepare_all(&row, &mut pool);

    let label_width = cells
        .iter()
        .map(|cell| cell.title_width())
        .max()
        .unwrap_or(0);
    for (index, cell) in cells.iter().enumerate() {
        let marker = if cli.edit_markers && screen.is_editable(index) {
            "* "
        } else {
            "  "
        };
        println!("{marker}{}", cell.summary(label_width));
    }

    Ok(())
}

/// Resolve an input spec the way the library's documents arrive in practice:
/// an existing file path, a raw inline payload, or "-" for stdin.
fn load_document(spec: &str, what: &str) -> Result<Value> {
    let raw = if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err_with(|| format!("failed to read {what} from stdin"))?;
        buffer
    } else if Path::new(spec).exists() {
        fs::read_to_string(spec).wrap_err_with(|| format!("failed to read {what} file {spec}"))?
    } else {
        spec.to_string()
    };
    serde_json::from_str(&raw).wrap_err_with(|| format!("{what} is not valid JSON"))
}
