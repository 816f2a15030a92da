//! Event handling and user feedback

use console::style;
use pokerep_events::{AppEvent, CatalogEvent, GeneralEvent, ReportEvent};
use tracing::{debug, error, info, warn};

/// Event handler rendering progress and notices to the terminal
///
/// Transient notices (create/delete outcomes) print as they arrive;
/// catalog and refresh failures are remembered as a banner until the next
/// success of the same kind.
pub struct EventHandler {
    /// Suppress human-readable notices (JSON mode)
    quiet: bool,
    catalog_banner: Option<String>,
    refresh_banner: Option<String>,
}

impl EventHandler {
    /// Create new event handler
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            catalog_banner: None,
            refresh_banner: None,
        }
    }

    /// Handle incoming event
    pub fn handle_event(&mut self, event: &AppEvent) {
        self.log_event(event);
        if self.quiet {
            return;
        }

        match event {
            AppEvent::Catalog(catalog) => match catalog {
                CatalogEvent::Started { .. } => {}
                CatalogEvent::Loaded { count } => {
                    self.catalog_banner = None;
                    self.show_status(&format!("Loaded {count} categories"));
                }
                CatalogEvent::Failed { failure } => {
                    self.catalog_banner = Some(failure.message.clone());
                    self.show_banner(&failure.message);
                }
            },
            AppEvent::Report(report) => self.handle_report_event(report),
            AppEvent::General(general) => match general {
                GeneralEvent::Warning { message, .. } => {
                    eprintln!("{} {message}", style("warning:").yellow());
                }
                GeneralEvent::Error { message, .. } => {
                    eprintln!("{} {message}", style("error:").red());
                }
                _ => {}
            },
        }
    }

    fn handle_report_event(&mut self, event: &ReportEvent) {
        match event {
            ReportEvent::RefreshStarted | ReportEvent::DownloadRequested { .. } => {}
            ReportEvent::RefreshCompleted { total } => {
                self.refresh_banner = None;
                self.show_status(&format!("{total} reports"));
            }
            ReportEvent::RefreshFailed { failure } => {
                self.refresh_banner = Some(failure.message.clone());
                self.show_banner(&failure.message);
            }
            ReportEvent::CreateStarted { category, quantity } => {
                self.show_status(&format!("Creating report: {quantity} x {category}..."));
            }
            ReportEvent::CreateCompleted { id, category } => {
                self.show_status(&format!("Report {id} for type {category} is ready"));
            }
            ReportEvent::CreateFailed { failure } => {
                eprintln!("{} {}", style("error:").red(), failure.message);
            }
            ReportEvent::DeleteStarted { id } => {
                self.show_status(&format!("Deleting report {id}..."));
            }
            ReportEvent::Deleted { id } => {
                self.show_status(&format!("Report {id} deleted"));
            }
            ReportEvent::BlobDeletionFailed { id, message } => {
                eprintln!(
                    "{} blob deletion for report {id} failed: {message}",
                    style("warning:").yellow()
                );
            }
            ReportEvent::DeleteResponseMalformed { id } => {
                eprintln!(
                    "{} could not confirm deletion of report {id}",
                    style("error:").red()
                );
            }
            ReportEvent::DeleteFailed { id, failure } => {
                eprintln!(
                    "{} delete of report {id} failed: {}",
                    style("error:").red(),
                    failure.message
                );
            }
        }
    }

    /// Route an event into the tracing infrastructure with a sensible level
    fn log_event(&self, event: &AppEvent) {
        match event {
            AppEvent::General(GeneralEvent::DebugLog { message }) => debug!("{message}"),
            AppEvent::General(GeneralEvent::Warning { message, .. }) => warn!("{message}"),
            AppEvent::General(GeneralEvent::Error { message, .. }) => error!("{message}"),
            AppEvent::Catalog(CatalogEvent::Failed { failure })
            | AppEvent::Report(
                ReportEvent::RefreshFailed { failure } | ReportEvent::CreateFailed { failure },
            ) => {
                warn!(
                    code = failure.code.as_deref(),
                    retryable = failure.retryable,
                    "{}",
                    failure.message
                );
            }
            AppEvent::Report(ReportEvent::DeleteFailed { id, failure }) => {
                warn!(id = %id, "{}", failure.message);
            }
            other => debug!(event = ?other, "event"),
        }
    }

    fn show_status(&self, message: &str) {
        eprintln!("{} {message}", style("→").dim());
    }

    fn show_banner(&self, message: &str) {
        eprintln!("{} {message}", style("error:").red().bold());
    }

    /// Last persistent catalog failure, if any
    #[allow(dead_code)]
    pub fn catalog_banner(&self) -> Option<&str> {
        self.catalog_banner.as_deref()
    }

    /// Last persistent refresh failure, if any
    #[allow(dead_code)]
    pub fn refresh_banner(&self) -> Option<&str> {
        self.refresh_banner.as_deref()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerep_events::FailureContext;

    #[test]
    fn banner_persists_until_next_success() {
        let mut handler = EventHandler::new(true);
        handler.handle_event(&AppEvent::Report(ReportEvent::RefreshFailed {
            failure: FailureContext::new(None::<String>, "backend down", None::<String>, true),
        }));
        assert_eq!(handler.refresh_banner(), Some("backend down"));

        handler.handle_event(&AppEvent::Report(ReportEvent::RefreshCompleted { total: 2 }));
        assert!(handler.refresh_banner().is_none());
    }
}
