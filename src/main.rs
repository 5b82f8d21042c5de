use folio::{
    cli::Cli,
    config::Config,
    logging,
    pager::Pager,
    session::Session,
    settings::{MAX_LINES_PER_PAGE, MIN_LINES_PER_PAGE, Settings},
    ui::reader::Reader,
};

use clap::Parser;
use eyre::{Result, eyre};
use std::io::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.debug);

    let mut config = load_config(&cli);
    if let Some(page_size) = cli.page_size {
        if !Settings::valid_lines_per_page(page_size) {
            return Err(eyre!(
                "page size {page_size} is out of range ({MIN_LINES_PER_PAGE}-{MAX_LINES_PER_PAGE})"
            ));
        }
        config.settings.lines_per_page = page_size;
    }

    if cli.dump {
        dump_page(&cli, &config.settings)
    } else {
        let mut reader = Reader::new(config, &cli.file)?;
        reader.run()
    }
}

fn load_config(cli: &Cli) -> Config {
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path.clone()),
        None => Config::new(),
    };
    match loaded {
        Ok(config) => config,
        Err(err) => {
            logging::warn(format!(
                "could not load configuration: {err}; starting with default settings"
            ));
            Config::with_settings(Settings::default())
        }
    }
}

fn dump_page(cli: &Cli, settings: &Settings) -> Result<()> {
    let pager = Pager::new(settings.decode_policy);
    let mut session = Session::open(&cli.file, pager, settings.lines_per_page)?;

    let page_number = cli.page.unwrap_or(1);
    if page_number < 1 {
        return Err(eyre!("page numbers start at 1"));
    }
    let landed = session.go_to_page_number(page_number)?;
    logging::info(format!(
        "page {}/{} of {} ({:.2} MB, {} lines)",
        landed + 1,
        session.total_pages(),
        session.document().display_name(),
        session.document().size_mb(),
        session.line_count()
    ));

    let mut stdout = std::io::stdout().lock();
    for line in session.page_lines() {
        stdout.write_all(line.as_bytes())?;
    }
    Ok(())
}
