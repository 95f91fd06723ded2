//! Application context for the Budget CLI.
//!
//! Bundles CLI arguments with the loaded config and the resolved UI
//! context so handlers take a single parameter.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use budget_core::{Clock, Kind, SystemClock};

use crate::cli::Cli;
use crate::config::BudgetConfig;
use crate::ui::UiContext;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: BudgetConfig,
    ui: UiContext,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments and config.
    pub fn new(cli: &'a Cli, config: BudgetConfig) -> Self {
        let ui = UiContext::detect(cli).with_currency_symbol(config.ui.currency_symbol.clone());
        Self { cli, config, ui }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Whether missing input may be prompted for.
    pub fn interactive(&self) -> bool {
        self.ui.interactive
    }

    pub fn default_kind(&self) -> Kind {
        self.config.ui.default_kind.into()
    }

    /// Row cap applied to list/search when none is given.
    pub fn list_limit(&self) -> Option<usize> {
        self.config.list_limit()
    }

    /// Clock stamping new entries in the configured timezone.
    pub fn clock(&self) -> anyhow::Result<ZonedClock> {
        Ok(ZonedClock::new(self.config.timezone()?))
    }
}

/// Calendar day in a fixed zone, or the system's local zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZonedClock {
    tz: Option<Tz>,
}

impl ZonedClock {
    pub fn new(tz: Option<Tz>) -> Self {
        Self { tz }
    }
}

impl Clock for ZonedClock {
    fn today(&self) -> NaiveDate {
        match self.tz {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => SystemClock.today(),
        }
    }
}
