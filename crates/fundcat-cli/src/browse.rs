//! Interactive catalog view driven by typed commands.
//!
//! Each line plays one presentational role: a dropdown toggle, the apply
//! button, the search box, a chip's remove button, the load-more control, or
//! browser navigation. Fetches run synchronously against a [`PageSource`].

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};

use fundcat_filter::{CatalogSession, MemoryLocation, PageRequest};
use fundcat_model::{CatalogKind, FundingSource, ModelError, QueryRecord};
use fundcat_source::{PageSource, placeholder};

use crate::render;

pub const HELP: &str = "\
Commands:
  open <category>            open or close a filter dropdown
  toggle <category> <value>  check or uncheck an option (not applied yet)
  apply                      apply checked options
  discard                    drop options that were not applied
  search <text>              type into the search box
  submit                     apply the search box
  remove <category> <value>  remove an active filter
  clear                      remove every filter, keep search
  clear-search               remove the search
  reset                      remove filters and search
  more                       load the next page
  esc | click                close the open dropdown
  nav <query>                navigate to another URL query
  back                       return to the previous URL query
  show                       print the current view
  help                       print this help
  quit                       leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Open(String),
    Toggle { category: String, value: String },
    Apply,
    Discard,
    Search(String),
    Submit,
    Remove { category: String, value: String },
    Clear,
    ClearSearch,
    Reset,
    More,
    Escape,
    Click,
    Navigate(String),
    Back,
    Show,
    Help,
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        let command = match verb {
            "open" if !rest.is_empty() => Self::Open(rest.to_string()),
            "toggle" => {
                let (category, value) = category_and_value(rest)
                    .context("usage: toggle <category> <value>")?;
                Self::Toggle { category, value }
            }
            "remove" => {
                let (category, value) = category_and_value(rest)
                    .context("usage: remove <category> <value>")?;
                Self::Remove { category, value }
            }
            "apply" => Self::Apply,
            "discard" => Self::Discard,
            "search" => Self::Search(rest.to_string()),
            "submit" => Self::Submit,
            "clear" => Self::Clear,
            "clear-search" => Self::ClearSearch,
            "reset" => Self::Reset,
            "more" => Self::More,
            "esc" => Self::Escape,
            "click" => Self::Click,
            "nav" => Self::Navigate(rest.to_string()),
            "back" => Self::Back,
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "open" => bail!("usage: open <category>"),
            other => bail!("unknown command `{other}`, type `help`"),
        };
        Ok(command)
    }
}

fn category_and_value(rest: &str) -> Option<(String, String)> {
    let (category, value) = rest.split_once(' ')?;
    let value = value.trim();
    (!value.is_empty()).then(|| (category.to_string(), value.to_string()))
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A catalog session for `kind` hydrated from `query`, with the bundled
/// placeholder as its first-page fallback.
pub fn catalog_session(
    kind: CatalogKind,
    query: &str,
    page_size: u32,
) -> Result<CatalogSession<FundingSource, MemoryLocation>> {
    let domain = kind.domain()?;
    let location = MemoryLocation::new(domain.path.clone()).with_query(QueryRecord::parse(query));
    let fallback = placeholder(kind).context("load placeholder listings")?;
    Ok(CatalogSession::new(domain, location, page_size).with_placeholder(fallback))
}

pub struct CatalogBrowser<S> {
    session: CatalogSession<FundingSource, MemoryLocation>,
    source: S,
}

impl<S: PageSource<FundingSource>> CatalogBrowser<S> {
    pub fn new(session: CatalogSession<FundingSource, MemoryLocation>, source: S) -> Self {
        Self { session, source }
    }

    pub fn session(&self) -> &CatalogSession<FundingSource, MemoryLocation> {
        &self.session
    }

    /// Hydrate from the location and load the first page.
    pub fn open(&mut self) {
        let request = self.session.mount();
        self.fetch(&request);
    }

    /// Load the next page. Returns `false` when there was nothing to load.
    pub fn load_more(&mut self) -> bool {
        match self.session.load_more() {
            Some(request) => {
                self.fetch(&request);
                true
            }
            None => false,
        }
    }

    pub fn render(&self) -> String {
        render::view(&self.session)
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        self.open();
        write!(out, "{}", self.render())?;
        writeln!(out, "Type `help` for commands.")?;

        for line in input.lines() {
            let line = line.context("read command")?;
            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<BrowseCommand>() {
                Ok(command) => command,
                Err(error) => {
                    writeln!(out, "error: {error:#}")?;
                    continue;
                }
            };
            if self.execute(command, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Run one command, writing its feedback to `out`.
    ///
    /// Invalid categories and values are reported to `out`; only write
    /// failures are returned as errors.
    pub fn execute(&mut self, command: BrowseCommand, out: &mut impl Write) -> Result<Flow> {
        debug!(?command, "browse command");
        match command {
            BrowseCommand::Open(name) => self.open_dropdown(&name, out)?,
            BrowseCommand::Toggle { category, value } => {
                match self.session.toggle_option(&category, &value) {
                    Ok(selected) => {
                        if let Some(menu) = self.open_menu() {
                            write!(out, "{menu}")?;
                        } else {
                            let state = if selected { "checked" } else { "unchecked" };
                            writeln!(out, "{value} {state}. Type `apply` to use it.")?;
                        }
                    }
                    Err(error) => writeln!(out, "error: {error}")?,
                }
            }
            BrowseCommand::Apply => {
                let request = self.session.apply_staged();
                self.commit(request, out)?;
            }
            BrowseCommand::Discard => {
                self.session.discard_staged();
                writeln!(out, "Unapplied options dropped.")?;
            }
            BrowseCommand::Search(text) => {
                self.session.set_search_text(text);
                writeln!(
                    out,
                    "Search box: {:?}. Type `submit` to search.",
                    self.session.search_text()
                )?;
            }
            BrowseCommand::Submit => {
                let request = self.session.commit_search();
                self.commit_checked(request, out)?;
            }
            BrowseCommand::Remove { category, value } => {
                let request = self.session.remove_value(&category, &value);
                self.commit_checked(request, out)?;
            }
            BrowseCommand::Clear => {
                let request = self.session.clear_filters();
                self.commit(request, out)?;
            }
            BrowseCommand::ClearSearch => {
                let request = self.session.clear_search();
                self.commit(request, out)?;
            }
            BrowseCommand::Reset => {
                let request = self.session.reset_all();
                self.commit(request, out)?;
            }
            BrowseCommand::More => {
                if self.load_more() {
                    write!(out, "{}", self.render())?;
                } else {
                    writeln!(out, "Nothing more to load.")?;
                }
            }
            BrowseCommand::Escape => {
                self.session.dropdowns_mut().escape();
            }
            BrowseCommand::Click => {
                self.session.dropdowns_mut().outside_pointer_down();
            }
            BrowseCommand::Navigate(query) => {
                self.session
                    .location_mut()
                    .navigate(QueryRecord::parse(&query));
                let request = self.session.location_changed();
                self.fetch(&request);
                write!(out, "{}", self.render())?;
            }
            BrowseCommand::Back => {
                if self.session.location_mut().back() {
                    let request = self.session.location_changed();
                    self.fetch(&request);
                    write!(out, "{}", self.render())?;
                } else {
                    writeln!(out, "Nothing to go back to.")?;
                }
            }
            BrowseCommand::Show => write!(out, "{}", self.render())?,
            BrowseCommand::Help => writeln!(out, "{HELP}")?,
            BrowseCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn open_dropdown(&mut self, name: &str, out: &mut impl Write) -> Result<()> {
        let category = match self.session.domain().schema.require(name) {
            Ok(category) if category.is_search() => {
                writeln!(out, "error: `{name}` has no options, use `search <text>`")?;
                return Ok(());
            }
            Ok(category) => category.clone(),
            Err(error) => {
                writeln!(out, "error: {error}")?;
                return Ok(());
            }
        };
        self.session.dropdowns_mut().toggle(&category.name);
        match self.open_menu() {
            Some(menu) => write!(out, "{menu}")?,
            None => writeln!(out, "{} closed.", category.label)?,
        }
        Ok(())
    }

    fn open_menu(&self) -> Option<String> {
        let name = self.session.dropdowns().open_name()?;
        let category = self.session.domain().schema.get(name)?;
        Some(render::dropdown_menu(category, self.session.staged()))
    }

    fn commit_checked(
        &mut self,
        request: std::result::Result<Option<PageRequest>, ModelError>,
        out: &mut impl Write,
    ) -> Result<()> {
        match request {
            Ok(request) => self.commit(request, out),
            Err(error) => {
                writeln!(out, "error: {error}")?;
                Ok(())
            }
        }
    }

    fn commit(&mut self, request: Option<PageRequest>, out: &mut impl Write) -> Result<()> {
        match request {
            Some(request) => {
                self.fetch(&request);
                write!(out, "{}", self.render())?;
            }
            None => writeln!(out, "Filters unchanged.")?,
        }
        Ok(())
    }

    fn fetch(&mut self, request: &PageRequest) {
        let span = info_span!("fetch", token = %request.token, page = request.page);
        let _guard = span.enter();
        let result = self.source.fetch_page(request);
        self.session.resolve(request.token, result);
    }
}
