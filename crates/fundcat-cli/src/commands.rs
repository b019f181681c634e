use std::io;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use fundcat_cli::browse::{CatalogBrowser, catalog_session};
use fundcat_cli::render::domains_table;
use fundcat_cli::settings::Settings;
use fundcat_model::{CatalogDomain, FundingSource};
use fundcat_source::{HttpSource, PageSource, StaticSource};

use crate::cli::{BrowseArgs, QueryArgs, ViewArgs};

type Browser = CatalogBrowser<Box<dyn PageSource<FundingSource>>>;

pub fn run_domains() -> Result<()> {
    let table = domains_table().context("build catalog presets")?;
    println!("{table}");
    Ok(())
}

pub fn run_query(args: &QueryArgs, settings: &Settings) -> Result<()> {
    let mut browser = open_browser(&args.view, settings)?;
    let span = info_span!("query", catalog = %browser.session().domain().kind);
    let _guard = span.enter();

    browser.open();
    for _ in 1..args.pages.max(1) {
        if !browser.load_more() {
            break;
        }
    }
    print!("{}", browser.render());
    Ok(())
}

pub fn run_browse(args: &BrowseArgs, settings: &Settings) -> Result<()> {
    let mut browser = open_browser(&args.view, settings)?;
    let span = info_span!("browse", catalog = %browser.session().domain().kind);
    let _guard = span.enter();

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    browser.run(stdin, &mut stdout)
}

fn open_browser(view: &ViewArgs, settings: &Settings) -> Result<Browser> {
    let kind = view.catalog.unwrap_or(settings.catalog.default_domain);
    let page_size = view
        .page_size
        .unwrap_or_else(|| settings.catalog.page_size())
        .max(1);
    let session = catalog_session(kind, &view.query, page_size)?;
    let source = page_source(settings, session.domain(), view.offline)?;
    Ok(CatalogBrowser::new(session, source))
}

fn page_source(
    settings: &Settings,
    domain: &CatalogDomain,
    offline: bool,
) -> Result<Box<dyn PageSource<FundingSource>>> {
    if offline || settings.source.offline {
        info!(catalog = %domain.kind, "serving bundled listings");
        let source = StaticSource::bundled(domain.kind).context("load bundled listings")?;
        return Ok(Box::new(source));
    }
    let base = &settings.source.api_base_url;
    info!(catalog = %domain.kind, %base, "serving listings from the catalog API");
    let source = HttpSource::new(base, domain, settings.source.timeout())
        .with_context(|| format!("configure catalog API at {base}"))?;
    Ok(Box::new(source))
}
