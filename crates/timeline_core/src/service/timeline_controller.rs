//! Timeline session controller.
//!
//! # Responsibility
//! - Bootstrap a session: mount check, payload load, first render and layout.
//! - Hold all session state (categories, sections, active set, query).
//! - Turn observed host events into synchronous filter/layout recomputes.
//!
//! # Invariants
//! - Missing mount points abort bootstrap before anything touches the host.
//! - A failed load shows the fallback message and yields no controller, so
//!   legend and search stay inert.
//! - Every filter change is followed by a full layout pass.

use crate::config::{ConfigError, TimelineConfig};
use crate::filter::active_set::{ActiveCategorySet, DoubleClickOutcome};
use crate::filter::query::SearchQuery;
use crate::filter::visibility::{apply_filter, FilterSummary};
use crate::host::{MountPoint, TimelineHost};
use crate::layout::masonry::{layout_timeline, LayoutParams, TimelineLayout};
use crate::legend::{build_legend, sync_legend, LegendEntry};
use crate::model::category::CategoryMap;
use crate::render::{build_sections, EraSection};
use crate::source::loader::{load_payload, DataSource, LoadError};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// UI event observed by the host and forwarded to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineEvent {
    LegendClick(String),
    LegendDoubleClick(String),
    /// Raw search-box text; normalized by the controller.
    SearchInput(String),
    Resize,
    WindowLoad,
    /// One of the delayed re-layouts from [`RelayoutSchedule`] fired.
    RelayoutTimer,
}

impl TimelineEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::LegendClick(_) => "legend_click",
            Self::LegendDoubleClick(_) => "legend_double_click",
            Self::SearchInput(_) => "search_input",
            Self::Resize => "resize",
            Self::WindowLoad => "window_load",
            Self::RelayoutTimer => "relayout_timer",
        }
    }
}

/// Layout triggers a host should subscribe after a successful bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayoutSchedule {
    pub on_resize: bool,
    pub on_window_load: bool,
    /// One-shot delays after bootstrap, each followed by `RelayoutTimer`.
    pub delays: Vec<Duration>,
}

/// Fatal bootstrap errors. Nothing was rendered when these are returned.
#[derive(Debug)]
pub enum BootstrapError {
    MissingMountPoints(Vec<MountPoint>),
    Config(ConfigError),
}

impl Display for BootstrapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMountPoints(missing) => {
                let names = missing
                    .iter()
                    .map(|mount| mount.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "timeline mount points are missing: {names}")
            }
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingMountPoints(_) => None,
            Self::Config(err) => Some(err),
        }
    }
}

impl From<ConfigError> for BootstrapError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Non-fatal bootstrap result.
#[derive(Debug)]
pub enum BootstrapOutcome<H: TimelineHost> {
    Ready(TimelineController<H>),
    /// The payload could not be loaded; the host shows the fallback message.
    Fallback { host: H, error: LoadError },
}

/// Single owner of one timeline session.
#[derive(Debug)]
pub struct TimelineController<H: TimelineHost> {
    host: H,
    config: TimelineConfig,
    params: LayoutParams,
    categories: CategoryMap,
    sections: Vec<EraSection>,
    active: ActiveCategorySet,
    query: SearchQuery,
    legend: Vec<LegendEntry>,
    last_layout: TimelineLayout,
}

impl<H: TimelineHost> TimelineController<H> {
    /// Starts a session on `host` with the payload from `source`.
    ///
    /// # Errors
    /// - `BootstrapError::Config` when `config` fails validation.
    /// - `BootstrapError::MissingMountPoints` when the host lacks a mount point.
    ///
    /// Load failures are not errors here; they return
    /// `BootstrapOutcome::Fallback` after the fallback message is shown.
    pub fn bootstrap(
        mut host: H,
        source: &dyn DataSource,
        config: TimelineConfig,
    ) -> Result<BootstrapOutcome<H>, BootstrapError> {
        config.validate()?;

        let missing = MountPoint::ALL
            .into_iter()
            .filter(|mount| !host.has_mount_point(*mount))
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            error!(
                "event=timeline_bootstrap module=controller status=error reason=missing_mount_points count={}",
                missing.len()
            );
            return Err(BootstrapError::MissingMountPoints(missing));
        }

        let payload = match load_payload(source) {
            Ok(payload) => payload,
            Err(error) => {
                error!(
                    "event=timeline_bootstrap module=controller status=fallback error={}",
                    error
                );
                host.show_fallback(&config.fallback_message);
                return Ok(BootstrapOutcome::Fallback { host, error });
            }
        };

        let categories = payload.categories.clone();
        let active = ActiveCategorySet::all(categories.keys().cloned());
        let legend = build_legend(&categories, &active);
        let sections = build_sections(&payload);
        let params = config.layout_params();

        host.render_legend(&legend);
        host.render_sections(&sections);
        let last_layout = layout_timeline(&sections, host.viewport_width(), &params, &host);
        host.apply_layout(&last_layout);

        let item_count = sections.iter().map(|section| section.items.len()).sum::<usize>();
        info!(
            "event=timeline_bootstrap module=controller status=ok categories={} eras={} items={} mode={:?}",
            categories.len(),
            sections.len(),
            item_count,
            last_layout.mode
        );

        Ok(BootstrapOutcome::Ready(Self {
            host,
            config,
            params,
            categories,
            sections,
            active,
            query: SearchQuery::default(),
            legend,
            last_layout,
        }))
    }

    /// Layout triggers the host should wire up after bootstrap.
    pub fn relayout_schedule(&self) -> RelayoutSchedule {
        RelayoutSchedule {
            on_resize: true,
            on_window_load: true,
            delays: self.config.relayout_delays(),
        }
    }

    /// Handles one observed UI event synchronously.
    pub fn handle(&mut self, event: TimelineEvent) {
        debug!(
            "event=timeline_event module=controller kind={}",
            event.name()
        );
        match event {
            TimelineEvent::LegendClick(key) => self.legend_click(&key),
            TimelineEvent::LegendDoubleClick(key) => self.legend_double_click(&key),
            TimelineEvent::SearchInput(text) => self.search(&text),
            TimelineEvent::Resize | TimelineEvent::WindowLoad | TimelineEvent::RelayoutTimer => {
                // Why: these only change measured sizes, never which events match,
                // so refiltering would redo work with an identical result.
                self.relayout();
            }
        }
    }

    /// Single legend click: flips one category, then refilters.
    pub fn legend_click(&mut self, key: &str) {
        let Some(now_active) = self.active.toggle(key) else {
            warn!(
                "event=legend_click module=controller status=ignored reason=unknown_category"
            );
            return;
        };

        if let Some(entry) = self.legend.iter_mut().find(|entry| entry.key == key) {
            entry.inactive = !now_active;
            self.host.update_legend_entry(entry);
        }
        self.refilter();
    }

    /// Legend double click: solo the category, or restore all from solo.
    pub fn legend_double_click(&mut self, key: &str) {
        let Some(outcome) = self.active.solo_or_restore(key) else {
            warn!(
                "event=legend_double_click module=controller status=ignored reason=unknown_category"
            );
            return;
        };

        debug!(
            "event=legend_double_click module=controller status=ok restored={}",
            outcome == DoubleClickOutcome::Restored
        );
        sync_legend(&mut self.legend, &self.active);
        for entry in &self.legend {
            self.host.update_legend_entry(entry);
        }
        self.refilter();
    }

    /// Search input: normalizes the text, then refilters.
    pub fn search(&mut self, raw: &str) {
        self.query = SearchQuery::from_input(raw);
        self.refilter();
    }

    /// Recomputes visibility for every item, then lays out.
    pub fn refilter(&mut self) -> FilterSummary {
        let summary = apply_filter(&mut self.sections, &self.active, &self.query);
        debug!(
            "event=timeline_filter module=controller visible={} hidden={}",
            summary.visible, summary.hidden
        );
        self.relayout();
        summary
    }

    /// Recomputes layout for every section from scratch.
    pub fn relayout(&mut self) -> &TimelineLayout {
        self.last_layout = layout_timeline(
            &self.sections,
            self.host.viewport_width(),
            &self.params,
            &self.host,
        );
        self.host.apply_layout(&self.last_layout);
        &self.last_layout
    }

    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    pub fn active_categories(&self) -> &ActiveCategorySet {
        &self.active
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    pub fn sections(&self) -> &[EraSection] {
        &self.sections
    }

    pub fn visible_event_count(&self) -> usize {
        self.sections.iter().map(EraSection::visible_count).sum()
    }

    pub fn last_layout(&self) -> &TimelineLayout {
        &self.last_layout
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}
