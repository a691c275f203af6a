// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use datepicker::calendar::{dates, DayCell};
use datepicker::config;
use datepicker::i18n::{self, format};
use datepicker::picker::DatePicker;

const HELP: &str = "\
datepicker - print a month of the picker as text

USAGE:
  datepicker [OPTIONS]

OPTIONS:
  --lang LANG        Locale of the labels (sv, en-US, de, fr)
  --start YYYY-MM-DD First selectable date
  --end YYYY-MM-DD   Last selectable date
  --month YYYY-MM    Month to display
  --select YYYY-MM-DD Date to select
  --config PATH      Settings file (default: platform config dir)
  -h, --help         Print this help
";

struct Args {
    lang: Option<String>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    month: Option<NaiveDate>,
    select: Option<NaiveDate>,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        start: args.opt_value_from_fn("--start", dates::parse_date)?,
        end: args.opt_value_from_fn("--end", dates::parse_date)?,
        month: args.opt_value_from_fn("--month", dates::parse_month)?,
        select: args.opt_value_from_fn("--select", dates::parse_date)?,
        config: args.opt_value_from_os_str("--config", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }
    Ok(Some(parsed))
}

fn run(args: Args) -> datepicker::error::Result<()> {
    let settings = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };

    let mut overrides = settings.overrides();
    overrides.start = args.start.or(overrides.start);
    overrides.end = args.end.or(overrides.end);
    overrides.locale.language = args
        .lang
        .or(overrides.locale.language)
        .or_else(i18n::detect_system_language);

    let mut picker = DatePicker::initialize(&overrides)?
        .on_change(|selected| println!("Selected {selected}"));
    if picker.locale_fell_back() {
        eprintln!(
            "No catalog for the requested language, using '{}'",
            picker.options().locale.calendar.language()
        );
    }

    if let Some(month) = args.month {
        let reachable = picker
            .options()
            .range()
            .is_ok_and(|range| range.contains_month(month));
        if reachable {
            picker.set_display_date(month);
        } else {
            eprintln!("{} is outside the selectable range", month.format("%Y-%m"));
        }
    }

    if let Some(date) = args.select {
        if !picker.select_day(date) {
            eprintln!("{date} is outside the selectable range");
        }
    }

    print!("{}", render(&picker));
    Ok(())
}

fn render(picker: &DatePicker) -> String {
    let (controls, header, grid) = (picker.controls(), picker.header(), picker.grid());
    let locale = &picker.options().locale;
    let mut out = String::new();

    let previous = if controls.previous_enabled { "<" } else { " " };
    let next = if controls.next_enabled { ">" } else { " " };
    out.push_str(&format!(
        "{previous} {}  {} {}  {next}\n",
        controls.previous_month_label,
        format::month_name(grid.month, locale),
        controls.selected_year,
    ));
    out.push_str(&format!("  {}\n\n", controls.next_month_label));

    let titles: Vec<String> = header
        .labels()
        .iter()
        .map(|label| format!("{:>5}", truncate(label, 5)))
        .collect();
    if !titles.is_empty() {
        out.push_str(&titles.concat());
        out.push('\n');
    }

    let shows_week_number = picker.options().shows_week_number();
    for week in &grid.weeks {
        if shows_week_number {
            out.push_str(&format!("{:>5}", week.week_number));
        }
        for cell in &week.days {
            out.push_str(&render_cell(cell));
        }
        out.push('\n');
    }
    out
}

fn render_cell(cell: &DayCell) -> String {
    let label = format::day_number_label(cell.date);
    let text = if cell.is_active_day {
        format!("[{label}]")
    } else if cell.is_current_day {
        format!("{label}*")
    } else if !cell.is_selectable {
        format!("({label})")
    } else if !cell.in_display_month {
        format!("{label}.")
    } else {
        label
    };
    format!("{text:>5}")
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
