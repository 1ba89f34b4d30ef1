//! # App
//!
//! Wires every tab to the same catalog, notification sink, profile
//! presenter and connection counter. Collaborators are passed in; nothing
//! is ambient.

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::{Catalog, ConnectionCounter, Notifier, ProfilePresenter};
use deck::SwipeConfig;
use pipeline::JobBoard;
use tracing::info;

use crate::feed::FeedSession;
use crate::insights::InsightsSession;
use crate::nearby::NearbySession;
use crate::network::NetworkSession;

/// Seed used for feed like counts unless the caller picks one
pub const DEFAULT_FEED_SEED: u64 = 42;

/// Collaborators shared by every tab
#[derive(Clone)]
pub struct Collaborators {
    pub notifier: Arc<dyn Notifier>,
    pub presenter: Arc<dyn ProfilePresenter>,
    pub connections: ConnectionCounter,
}

/// All tabs of the application over one catalog
pub struct App {
    catalog: Arc<Catalog>,
    connections: ConnectionCounter,
    pub network: NetworkSession,
    pub jobs: JobBoard,
    pub feed: FeedSession,
    pub nearby: NearbySession,
    pub insights: InsightsSession,
}

impl App {
    /// Build every tab.
    ///
    /// Must be called inside a tokio runtime (the network tab schedules
    /// settle timers on it).
    pub fn new(
        catalog: Arc<Catalog>,
        config: SwipeConfig,
        collaborators: Collaborators,
        feed_seed: u64,
    ) -> Result<Self> {
        config.validate().context("Invalid swipe configuration")?;
        catalog.validate().context("Invalid catalog")?;

        let Collaborators {
            notifier,
            presenter,
            connections,
        } = collaborators;

        let network = NetworkSession::new(
            catalog.profiles().to_vec(),
            config,
            notifier.clone(),
            presenter,
            connections.clone(),
        );
        let jobs = JobBoard::new(catalog.jobs().to_vec(), notifier.clone());
        let feed = FeedSession::new(&catalog, feed_seed);
        let nearby = NearbySession::new(
            catalog.nearby().to_vec(),
            notifier,
            connections.clone(),
        );
        let insights = InsightsSession::new(catalog.clone(), connections.clone());

        let (profiles, job_count, posts, nearby_count) = catalog.counts();
        info!(
            "App ready: {} profiles, {} jobs, {} posts, {} nearby",
            profiles, job_count, posts, nearby_count
        );

        Ok(Self {
            catalog,
            connections,
            network,
            jobs,
            feed,
            nearby,
            insights,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Connections made from any tab
    pub fn connections(&self) -> u64 {
        self.connections.get()
    }
}
