//! Portfolio repository contract and in-memory implementation.

use crate::data::shipped_portfolio;
use crate::model::portfolio::{PortfolioData, PortfolioValidationError};
use log::{info, warn};

/// Read-only source of the portfolio snapshot.
pub trait PortfolioRepository {
    fn portfolio(&self) -> &PortfolioData;
}

/// Repository holding one immutable snapshot in memory.
///
/// Built once at startup and passed by reference; there is no global instance.
#[derive(Debug, Clone)]
pub struct StaticPortfolioRepository {
    data: PortfolioData,
}

impl StaticPortfolioRepository {
    /// Creates a repository over the compiled-in dataset.
    pub fn shipped() -> Self {
        let data = shipped_portfolio();
        if let Err(err) = data.validate() {
            warn!("event=portfolio_load module=repo status=invalid source=shipped error={err}");
        }
        log_loaded("shipped", &data);
        Self { data }
    }

    /// Creates a repository over caller-supplied data after validation.
    ///
    /// # Errors
    /// - Returns the first `PortfolioValidationError` found in `data`.
    pub fn try_new(data: PortfolioData) -> Result<Self, PortfolioValidationError> {
        if let Err(err) = data.validate() {
            warn!("event=portfolio_load module=repo status=rejected source=custom error={err}");
            return Err(err);
        }
        log_loaded("custom", &data);
        Ok(Self { data })
    }

    /// Consumes the repository and returns the held snapshot.
    pub fn into_inner(self) -> PortfolioData {
        self.data
    }
}

impl Default for StaticPortfolioRepository {
    fn default() -> Self {
        Self::shipped()
    }
}

impl PortfolioRepository for StaticPortfolioRepository {
    fn portfolio(&self) -> &PortfolioData {
        &self.data
    }
}

impl<R: PortfolioRepository + ?Sized> PortfolioRepository for &R {
    fn portfolio(&self) -> &PortfolioData {
        (**self).portfolio()
    }
}

fn log_loaded(source: &str, data: &PortfolioData) {
    info!(
        "event=portfolio_load module=repo status=ok source={} skills={} projects={} contributions={} links={}",
        source,
        data.skills.len(),
        data.projects.len(),
        data.professional_contributions.len(),
        data.external_links.len()
    );
}
